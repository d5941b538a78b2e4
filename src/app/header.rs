//! Page title and separator

use eframe::egui;
use crate::theme::colors;
use super::DashboardApp;

impl DashboardApp {
    pub(crate) fn render_header(&self, ui: &mut egui::Ui) {
        let shell = self.page.shell();

        ui.label(
            egui::RichText::new(&shell.title)
                .size(32.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.separator();
        ui.add_space(8.0);
    }
}
