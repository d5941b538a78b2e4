//! Platform-agnostic core - shared between the dashboard and the headless CLI

pub mod deck;
pub mod points;
pub mod projection;
pub mod view;

pub use deck::{
    Deck, LayerKind, PositionAccessor, Rgba, ScatterplotLayer, POINT_COLOR, POINT_RADIUS_M,
};
pub use points::{render_rng, Point, PointGenerator};
pub use projection::WebMercator;
pub use view::{ViewState, DEFAULT_PITCH};
