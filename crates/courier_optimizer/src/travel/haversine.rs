use crate::problem::{
    kmh::Kmh,
    location::{Location, travel_minutes},
};
use crate::travel::travel_cost::TravelCost;

/// Great-circle travel at a fixed average speed.
pub struct HaversineTravel {
    speed: Kmh,
}

impl HaversineTravel {
    pub fn new(speed: Kmh) -> Self {
        Self { speed }
    }
}

impl TravelCost for HaversineTravel {
    fn time_minutes(&self, from: &Location, to: &Location) -> f64 {
        travel_minutes(from, to, self.speed)
    }
}
