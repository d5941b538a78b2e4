//! Web Mercator projection at a fixed zoom level
//!
//! World coordinates are in screen points: at zoom `z` the whole world is
//! `512 * 2^z` points wide, matching deck.gl's viewport convention. The y axis
//! points north so projected values can be fed directly into a plot.

use std::f64::consts::PI;

use super::points::Point;

/// World size in points at zoom 0.
pub const TILE_SIZE: f64 = 512.0;

/// Mercator cuts off the poles at this latitude.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Equatorial circumference of the WGS84 ellipsoid, in meters.
pub const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebMercator {
    zoom: f64,
}

impl WebMercator {
    pub fn new(zoom: f64) -> Self {
        Self { zoom }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Width and height of the projected world.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * self.zoom.exp2()
    }

    /// Project to world points, origin at the south-west corner.
    pub fn project(&self, point: Point) -> [f64; 2] {
        let size = self.world_size();
        let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (point.lon + 180.0) / 360.0 * size;
        let y = (0.5 + (PI / 4.0 + lat / 2.0).tan().ln() / (2.0 * PI)) * size;
        [x, y]
    }

    /// Project a `[lon, lat]` layer position.
    pub fn project_position(&self, [lon, lat]: [f64; 2]) -> [f64; 2] {
        self.project(Point::new(lat, lon))
    }

    pub fn unproject(&self, xy: [f64; 2]) -> Point {
        let size = self.world_size();
        let lon = xy[0] / size * 360.0 - 180.0;
        let merc = (xy[1] / size - 0.5) * 2.0 * PI;
        let lat = (2.0 * merc.exp().atan() - PI / 2.0).to_degrees();
        Point::new(lat, lon)
    }

    /// Ground distance covered by one screen point at `lat`.
    pub fn meters_per_point(&self, lat: f64) -> f64 {
        EARTH_CIRCUMFERENCE * lat.to_radians().cos() / self.world_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_origin_projects_to_world_center() {
        let proj = WebMercator::new(0.0);
        let [x, y] = proj.project(Point::new(0.0, 0.0));
        assert!((x - 256.0).abs() < EPS);
        assert!((y - 256.0).abs() < EPS);
    }

    #[test]
    fn test_north_is_up() {
        let proj = WebMercator::new(3.0);
        let south = proj.project(Point::new(10.0, 0.0));
        let north = proj.project(Point::new(20.0, 0.0));
        assert!(north[1] > south[1]);
    }

    #[test]
    fn test_project_unproject() {
        let proj = WebMercator::new(11.0);
        let p = Point::new(40.7128, -74.006);
        let back = proj.unproject(proj.project(p));
        assert!((back.lat - p.lat).abs() < 1e-9);
        assert!((back.lon - p.lon).abs() < 1e-9);
    }

    #[test]
    fn test_project_position_takes_lon_first() {
        let proj = WebMercator::new(5.0);
        let p = Point::new(-33.86, 151.21);
        assert_eq!(proj.project_position([p.lon, p.lat]), proj.project(p));
    }

    #[test]
    fn test_poles_are_clamped() {
        let proj = WebMercator::new(0.0);
        let [_, y] = proj.project(Point::new(90.0, 0.0));
        assert!(y.is_finite());
        assert!((y - proj.world_size()).abs() < 1e-6);
    }

    #[test]
    fn test_meters_per_point_halves_per_zoom() {
        let a = WebMercator::new(10.0).meters_per_point(40.0);
        let b = WebMercator::new(11.0).meters_per_point(40.0);
        assert!((a / b - 2.0).abs() < EPS);
    }

    #[test]
    fn test_meters_per_point_at_equator() {
        let m = WebMercator::new(0.0).meters_per_point(0.0);
        assert!((m - EARTH_CIRCUMFERENCE / TILE_SIZE).abs() < 1e-6);
    }
}
