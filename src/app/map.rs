//! Map widget: the deck's scatter layers drawn in Web Mercator space

use eframe::egui;
use egui_plot::{HLine, MarkerShape, Plot, PlotPoints, Points, VLine};
use crate::theme::{colors, layer_color};
use super::DashboardApp;

/// Smallest map height, used when the window is very short.
const MIN_MAP_HEIGHT: f32 = 320.0;
/// Room kept under the map for the caption line.
const CAPTION_HEIGHT: f32 = 24.0;
/// Markers never shrink below this, whatever the zoom.
const MIN_MARKER_RADIUS: f32 = 1.5;

impl DashboardApp {
    pub(crate) fn render_map(&self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new(self.page.shell().map_heading)
                .size(20.0)
                .strong(),
        );
        ui.add_space(4.0);

        let view = self.deck.initial_view_state;
        let projection = view.projection();
        let [cx, cy] = projection.project(view.center());

        let width = ui.available_width();
        let height = (ui.available_height() - CAPTION_HEIGHT).max(MIN_MAP_HEIGHT);
        let [min, max] = view.visible_bounds(width as f64, height as f64);

        // One plot unit is one screen point, so the mercator grid is not stretched
        Plot::new("traffic_map")
            .width(width)
            .height(height)
            .data_aspect(1.0)
            .set_margin_fraction(egui::Vec2::ZERO)
            .show_axes(false)
            .show_grid(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .include_x(min[0])
            .include_x(max[0])
            .include_y(min[1])
            .include_y(max[1])
            .label_formatter(move |_name, value| {
                let p = projection.unproject([value.x, value.y]);
                format!("lat {:.5}\nlon {:.5}", p.lat, p.lon)
            })
            .show(ui, |plot_ui| {
                plot_ui.hline(HLine::new(cy).color(colors::CROSSHAIR).width(1.0));
                plot_ui.vline(VLine::new(cx).color(colors::CROSSHAIR).width(1.0));

                for layer in &self.deck.layers {
                    let radius = (view.meters_to_points(layer.get_radius) as f32).max(MIN_MARKER_RADIUS);
                    let points: PlotPoints = layer
                        .positions()
                        .map(|position| projection.project_position(position))
                        .collect();

                    plot_ui.points(
                        Points::new(points)
                            .name(&layer.id)
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(radius)
                            .color(layer_color(layer.get_color)),
                    );
                }
            });

        ui.label(
            egui::RichText::new(format!(
                "{:.4}, {:.4} / zoom {:.1} / pitch {:.0}° / {} points",
                view.latitude,
                view.longitude,
                view.zoom,
                view.pitch,
                self.deck.point_count(),
            ))
            .color(colors::TEXT_MUTED)
            .small(),
        );
    }
}
