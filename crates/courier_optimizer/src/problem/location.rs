use geo::{Distance, HaversineMeasure};

use crate::problem::kmh::Kmh;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A named coordinate. Geo stores points as (x, y) = (lon, lat).
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    point: geo::Point,
}

impl Location {
    pub fn from_lat_lon(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            point: geo::Point::new(lon, lat),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// Great-circle distance in meters.
    pub fn haversine_distance(&self, to: &Location) -> f64 {
        let haversine = HaversineMeasure::new(EARTH_RADIUS_METERS);

        haversine.distance(self.point, to.point)
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}

/// Minutes to travel between two locations at a constant speed. A
/// non-positive speed makes every destination unreachable (infinite time)
/// rather than an error, so pruning treats those edges as always dominated.
pub fn travel_minutes(from: &Location, to: &Location, speed: Kmh) -> f64 {
    if !speed.is_positive() {
        return f64::INFINITY;
    }

    let distance_km = from.haversine_distance(to) / 1000.0;
    (distance_km / speed.value()) * 60.0
}
