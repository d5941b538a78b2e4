//! Controls sidebar with the dashboard status

use eframe::egui;
use crate::theme::colors;
use super::DashboardApp;

impl DashboardApp {
    pub(crate) fn render_sidebar(&self, ctx: &egui::Context) {
        let shell = self.page.shell();

        egui::SidePanel::left("sidebar")
            .default_width(260.0)
            .min_width(200.0)
            .resizable(true)
            .frame(egui::Frame::new().fill(colors::BG_SIDEBAR).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(shell.sidebar_header).size(22.0).strong());
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(shell.status_label).color(colors::TEXT_SECONDARY));
                    ui.label(egui::RichText::new(shell.status_value).strong());
                });
            });
    }
}
