//! Synthetic traffic markers scattered around the map center

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// A (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Samples points as `center + Normal(0, spread)` on each axis independently.
#[derive(Debug, Clone, Copy)]
pub struct PointGenerator {
    center: Point,
    offset: Normal<f64>,
}

impl PointGenerator {
    /// Fails if `spread` is negative or not finite.
    pub fn new(center: Point, spread: f64) -> Result<Self> {
        // Normal::new accepts a negative std_dev, so check the sign here
        if !spread.is_finite() || spread < 0.0 {
            return Err(Error::InvalidSpread { spread });
        }
        let offset = Normal::new(0.0, spread).map_err(|_| Error::InvalidSpread { spread })?;
        Ok(Self { center, offset })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn spread(&self) -> f64 {
        self.offset.std_dev()
    }

    /// Draw `count` points. Latitude is sampled before longitude for each point.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Point> {
        let points: Vec<Point> = (0..count)
            .map(|_| {
                let lat = self.center.lat + self.offset.sample(rng);
                let lon = self.center.lon + self.offset.sample(rng);
                Point::new(lat, lon)
            })
            .collect();

        debug!(
            count = points.len(),
            center_lat = self.center.lat,
            center_lon = self.center.lon,
            spread = self.spread(),
            "Generated points"
        );
        points
    }
}

/// RNG for a render pass: seeded when a seed is given, entropy otherwise.
pub fn render_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
