//! Dark dashboard theme with a muted map canvas

use egui::Color32;

use crate::core::Rgba;

pub mod colors {
    use super::Color32;

    // === Backgrounds ===
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(14, 17, 23);        // #0E1117 - page
    pub const BG_SIDEBAR: Color32 = Color32::from_rgb(38, 39, 48);        // #262730 - sidebar
    pub const BG_MAP: Color32 = Color32::from_rgb(24, 28, 36);            // #181C24 - map canvas

    // === Text ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(250, 250, 250);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(170, 170, 180);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(100, 100, 110);

    // === Lines & Borders ===
    pub const BORDER: Color32 = Color32::from_rgb(49, 51, 63);
    pub const CROSSHAIR: Color32 = Color32::from_rgb(70, 76, 92);
}

/// Map a layer color onto egui.
pub fn layer_color(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), color.a())
}

pub fn dashboard_visuals() -> egui::Visuals {
    use colors::*;

    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = BG_PRIMARY;
    visuals.window_fill = BG_PRIMARY;
    visuals.extreme_bg_color = BG_MAP;
    visuals.faint_bg_color = BG_SIDEBAR;

    visuals.override_text_color = Some(TEXT_PRIMARY);

    visuals.widgets.noninteractive.bg_fill = BG_PRIMARY;
    visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);

    visuals.window_shadow = egui::Shadow::NONE;
    visuals.popup_shadow = egui::Shadow::NONE;

    visuals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::POINT_COLOR;

    #[test]
    fn test_layer_color_keeps_alpha() {
        let color = layer_color(POINT_COLOR);
        assert_eq!(color.a(), 160);
        assert_eq!(color, Color32::from_rgba_unmultiplied(200, 30, 0, 160));
    }
}
