use crate::define_index_newtype;
use crate::problem::location::Location;

define_index_newtype!(OrderIdx, Order);

/// An order compiled against its restaurant and consumer: the pickup and
/// drop-off endpoints plus the absolute ready time inherited from the
/// restaurant.
#[derive(Debug, Clone)]
pub struct Order {
    id: String,
    restaurant_id: String,
    consumer_id: String,
    pickup: Location,
    dropoff: Location,
    ready_time_min: f64,
}

impl Order {
    pub fn new(
        id: impl Into<String>,
        restaurant_id: impl Into<String>,
        consumer_id: impl Into<String>,
        pickup: Location,
        dropoff: Location,
        ready_time_min: f64,
    ) -> Self {
        Self {
            id: id.into(),
            restaurant_id: restaurant_id.into(),
            consumer_id: consumer_id.into(),
            pickup,
            dropoff,
            ready_time_min,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    pub fn consumer_id(&self) -> &str {
        &self.consumer_id
    }

    pub fn pickup(&self) -> &Location {
        &self.pickup
    }

    pub fn dropoff(&self) -> &Location {
        &self.dropoff
    }

    pub fn ready_time_min(&self) -> f64 {
        self.ready_time_min
    }
}
