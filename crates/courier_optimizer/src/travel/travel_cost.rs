use crate::problem::location::Location;

/// Travel time oracle. The planner only ever sees this trait, so the
/// haversine model can be swapped for a precomputed matrix or a road
/// network without touching the search.
pub trait TravelCost {
    /// Minutes from `from` to `to`. Never negative; `f64::INFINITY` marks
    /// an unreachable destination.
    fn time_minutes(&self, from: &Location, to: &Location) -> f64;
}

/// Constant-time model for tests: every leg takes the same number of
/// minutes regardless of geometry.
#[cfg(test)]
pub struct FixedTravel(pub f64);

#[cfg(test)]
impl TravelCost for FixedTravel {
    fn time_minutes(&self, _from: &Location, _to: &Location) -> f64 {
        self.0
    }
}
