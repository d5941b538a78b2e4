//! Page configuration and static shell content
//!
//! `Page::configure` must run once at startup, before anything is rendered.
//! The dashboard only accepts a configured `Page`, so that order is enforced
//! by construction rather than by import order.

use tracing::info;

use crate::config::{PageLayout, Settings};

/// Width of the content column in `Centered` layout, in points.
pub const CENTERED_MAX_WIDTH: f32 = 736.0;

pub const SIDEBAR_HEADER: &str = "🎮 Controls";
pub const STATUS_LABEL: &str = "Status:";
pub const STATUS_INITIALIZING: &str = "Initializing...";
pub const MAP_HEADING: &str = "🗺 Live Traffic Grid";

/// Page-level settings applied before the first render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub layout: PageLayout,
}

/// Static text of the page shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageShell {
    pub sidebar_header: &'static str,
    pub status_label: &'static str,
    pub status_value: &'static str,
    pub title: String,
    pub map_heading: &'static str,
}

/// A configured page. Obtainable only through [`Page::configure`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    config: PageConfig,
    shell: PageShell,
}

impl Page {
    pub fn configure(settings: &Settings) -> Self {
        let config = PageConfig {
            title: settings.app_title.clone(),
            layout: settings.app_layout,
        };
        let shell = PageShell {
            sidebar_header: SIDEBAR_HEADER,
            status_label: STATUS_LABEL,
            status_value: STATUS_INITIALIZING,
            title: format!("🚦 {}", settings.app_title),
            map_heading: MAP_HEADING,
        };

        info!(title = %config.title, layout = ?config.layout, "Page configured");
        Self { config, shell }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn shell(&self) -> &PageShell {
        &self.shell
    }

    /// Content width for a given available width.
    pub fn content_width(&self, available: f32) -> f32 {
        match self.config.layout {
            PageLayout::Wide => available,
            PageLayout::Centered => available.min(CENTERED_MAX_WIDTH),
        }
    }

    /// Set the browser tab title.
    #[cfg(all(target_arch = "wasm32", feature = "wasm"))]
    pub fn apply_to_document(&self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&self.config.title);
        }
    }
}
