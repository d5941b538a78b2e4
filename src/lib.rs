//! Traffic Grid - live traffic map dashboard
//!
//! Scatters synthetic traffic markers around a configured map center and
//! shows them on a map widget:
//! - `core`: point generation, camera view, Web Mercator math, map description
//! - `page`: one-time page configuration and static shell text
//! - `app`: the eframe dashboard (browser and native)

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod page;

#[cfg(feature = "gui")]
pub mod app;
#[cfg(feature = "gui")]
mod theme;

pub use error::{Error, Result};

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
use wasm_bindgen::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
#[wasm_bindgen(start)]
pub fn main() {
    use tracing::error;

    logging::init_logging();

    let settings = web_settings();
    let page = crate::page::Page::configure(&settings);
    page.apply_to_document();

    let mut rng = crate::core::render_rng(settings.seed);
    let deck = match crate::core::Deck::traffic_grid(&settings, &mut rng) {
        Ok(deck) => deck,
        Err(e) => {
            error!(error = %e, "Failed to build traffic grid");
            return;
        }
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = crate::app::start_web(page, deck).await {
            error!(error = %e, "Failed to start dashboard");
        }
    });
}

/// Settings for the browser build: defaults, or a JSON override placed at
/// `window.__traffic_grid_settings` by the hosting page.
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
fn web_settings() -> config::Settings {
    let overrides = js_sys::eval("window.__traffic_grid_settings")
        .ok()
        .and_then(|v| v.as_string());

    match overrides {
        Some(json) => config::Settings::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring invalid settings override");
            config::Settings::default()
        }),
        None => config::Settings::default(),
    }
}
