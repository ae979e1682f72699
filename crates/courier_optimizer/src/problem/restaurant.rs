use crate::problem::location::Location;

/// A pickup point. `prep_time_min` is the absolute time from route start
/// (t = 0) before which no order from this restaurant can be picked up; it
/// is shared by every order placed at the restaurant.
#[derive(Debug, Clone)]
pub struct Restaurant {
    id: String,
    location: Location,
    prep_time_min: f64,
}

impl Restaurant {
    pub fn new(id: impl Into<String>, location: Location, prep_time_min: f64) -> Self {
        Self {
            id: id.into(),
            location,
            prep_time_min,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn prep_time_min(&self) -> f64 {
        self.prep_time_min
    }
}
