//! Camera view handed to the map renderer

use serde::Serialize;

use super::points::Point;
use super::projection::WebMercator;
use crate::config::Settings;

/// Camera tilt in degrees; the dashboard always opens tilted.
pub const DEFAULT_PITCH: f64 = 50.0;

/// Camera parameters: center, zoom, pitch and bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl ViewState {
    pub fn new(latitude: f64, longitude: f64, zoom: f64) -> Self {
        Self {
            latitude,
            longitude,
            zoom,
            pitch: DEFAULT_PITCH,
            bearing: 0.0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.map_center_lat,
            settings.map_center_lon,
            settings.initial_zoom,
        )
    }

    pub fn center(&self) -> Point {
        Point::new(self.latitude, self.longitude)
    }

    pub fn projection(&self) -> WebMercator {
        WebMercator::new(self.zoom)
    }

    /// World-point rectangle `[min, max]` seen by a `width` x `height` viewport.
    pub fn visible_bounds(&self, width: f64, height: f64) -> [[f64; 2]; 2] {
        let [cx, cy] = self.projection().project(self.center());
        let (hw, hh) = (width / 2.0, height / 2.0);
        [[cx - hw, cy - hh], [cx + hw, cy + hh]]
    }

    /// Screen size of a ground distance at the camera center.
    pub fn meters_to_points(&self, meters: f64) -> f64 {
        meters / self.projection().meters_per_point(self.latitude)
    }
}
