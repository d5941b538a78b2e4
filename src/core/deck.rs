//! Map description consumed by the renderer
//!
//! A `Deck` is everything the map widget needs for one render: a scatterplot
//! layer with its data table and styling, plus the initial camera. Its JSON
//! form follows deck.gl's JSON conventions, so the same value can drive a
//! browser-side deck.gl map.

use rand::Rng;
use serde::ser::Serializer;
use serde::Serialize;
use tracing::info;

use super::points::{Point, PointGenerator};
use super::view::ViewState;
use crate::config::Settings;
use crate::error::Result;

/// Marker color: translucent red.
pub const POINT_COLOR: Rgba = Rgba([200, 30, 0, 160]);

/// Marker radius in meters.
pub const POINT_RADIUS_M: f64 = 200.0;

pub const TRAFFIC_LAYER_ID: &str = "traffic-points";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LayerKind {
    #[default]
    #[serde(rename = "ScatterplotLayer")]
    Scatterplot,
}

/// RGBA color, unpremultiplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    pub fn r(&self) -> u8 {
        self.0[0]
    }
    pub fn g(&self) -> u8 {
        self.0[1]
    }
    pub fn b(&self) -> u8 {
        self.0[2]
    }
    pub fn a(&self) -> u8 {
        self.0[3]
    }
}

/// Position accessor: rows resolve to `[lon, lat]`.
///
/// Serializes as a deck.gl expression, `"@@=[lon, lat]"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PositionAccessor;

impl PositionAccessor {
    pub const EXPRESSION: &'static str = "[lon, lat]";

    pub fn expression(&self) -> &'static str {
        Self::EXPRESSION
    }

    /// Resolve a row to `[lon, lat]`, the order named by [`Self::EXPRESSION`].
    pub fn position(&self, point: &Point) -> [f64; 2] {
        [point.lon, point.lat]
    }
}

impl Serialize for PositionAccessor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("@@={}", self.expression()))
    }
}

/// Colored dots at fixed ground radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterplotLayer {
    #[serde(rename = "@@type")]
    pub kind: LayerKind,
    pub id: String,
    pub data: Vec<Point>,
    pub get_position: PositionAccessor,
    pub get_color: Rgba,
    pub get_radius: f64,
}

impl ScatterplotLayer {
    pub fn traffic(data: Vec<Point>) -> Self {
        Self {
            kind: LayerKind::Scatterplot,
            id: TRAFFIC_LAYER_ID.to_string(),
            data,
            get_position: PositionAccessor,
            get_color: POINT_COLOR,
            get_radius: POINT_RADIUS_M,
        }
    }

    pub fn positions(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.data.iter().map(|p| self.get_position.position(p))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub layers: Vec<ScatterplotLayer>,
    pub initial_view_state: ViewState,
}

impl Deck {
    /// One render pass: sample fresh points and describe the traffic map.
    pub fn traffic_grid<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Result<Self> {
        settings.validate()?;

        let view = ViewState::from_settings(settings);
        let generator = PointGenerator::new(view.center(), settings.point_spread)?;
        let points = generator.generate(rng, settings.point_count);

        info!(
            points = points.len(),
            zoom = view.zoom,
            pitch = view.pitch,
            "Traffic grid built"
        );

        Ok(Self {
            layers: vec![ScatterplotLayer::traffic(points)],
            initial_view_state: view,
        })
    }

    pub fn point_count(&self) -> usize {
        self.layers.iter().map(|l| l.data.len()).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
