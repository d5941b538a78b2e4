//! Traffic dashboard app
//!
//! One eframe app for both the browser and native windows. The deck is built
//! once before the app starts; frames only repaint it.

mod header;
mod map;
mod sidebar;

use eframe::egui;

use crate::core::Deck;
use crate::page::Page;
use crate::theme::{colors, dashboard_visuals};

#[cfg(any(feature = "native", all(target_arch = "wasm32", feature = "wasm")))]
use crate::error::{Error, Result};

/// Id of the `<canvas>` the web build mounts on.
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub const CANVAS_ID: &str = "canvas";

pub struct DashboardApp {
    pub(crate) page: Page,
    pub(crate) deck: Deck,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, page: Page, deck: Deck) -> Self {
        cc.egui_ctx.set_visuals(dashboard_visuals());
        Self::from_parts(page, deck)
    }

    pub(crate) fn from_parts(page: Page, deck: Deck) -> Self {
        Self { page, deck }
    }

    /// Draw one frame. Returns the rect of the content column.
    pub(crate) fn show(&self, ctx: &egui::Context) -> egui::Rect {
        // Sidebar must be shown before CentralPanel
        self.render_sidebar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(colors::BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                let available = ui.available_width();
                let width = self.page.content_width(available);
                let margin = ((available - width) / 2.0).max(0.0);

                ui.horizontal_top(|ui| {
                    ui.add_space(margin);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        self.render_header(ui);
                        self.render_map(ui);
                    })
                    .response
                    .rect
                })
                .inner
            })
            .inner
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

/// Open the dashboard in a native window. Blocks until the window closes.
#[cfg(feature = "native")]
pub fn run_native(page: Page, deck: Deck) -> Result<()> {
    let title = page.config().title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.as_str())
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, page, deck)))),
    )
    .map_err(|e| Error::gui(e.to_string()))
}

/// Mount the dashboard on the page's canvas.
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub async fn start_web(page: Page, deck: Deck) -> Result<()> {
    use wasm_bindgen::JsCast;

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CANVAS_ID))
        .ok_or_else(|| Error::gui("no canvas element"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| Error::gui("not a canvas element"))?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, page, deck)))),
        )
        .await
        .map_err(|e| Error::gui(format!("{e:?}")))
}
