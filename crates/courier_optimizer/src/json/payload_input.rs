use serde::Deserialize;

use crate::problem::{
    consumer::Consumer,
    delivery_problem::{DeliveryProblem, DeliveryProblemBuilder, ProblemError},
    kmh::Kmh,
    location::Location,
    restaurant::Restaurant,
};

pub const DEFAULT_SPEED_KMPH: f64 = 20.0;

/// The wire form of a routing request. The nested inputs reject unknown
/// fields; the top level tolerates them so future payload keys do not break
/// older readers.
#[derive(Deserialize)]
pub struct PayloadInput {
    pub courier_start: LocationInput,
    pub restaurants: Vec<RestaurantInput>,
    pub consumers: Vec<ConsumerInput>,
    pub orders: Vec<OrderInput>,
    pub avg_speed_kmph: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationInput {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestaurantInput {
    pub id: String,
    pub location: LocationInput,
    pub prep_time_min: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsumerInput {
    pub id: String,
    pub location: LocationInput,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderInput {
    pub id: String,
    pub restaurant_id: String,
    pub consumer_id: String,
}

impl LocationInput {
    fn into_location(self) -> Location {
        Location::from_lat_lon(self.name, self.lat, self.lon)
    }
}

impl PayloadInput {
    /// The payload's average speed, falling back to 20 km/h.
    pub fn speed(&self) -> Kmh {
        Kmh::new(self.avg_speed_kmph.unwrap_or(DEFAULT_SPEED_KMPH))
    }

    pub fn build_problem(self) -> Result<DeliveryProblem, ProblemError> {
        let mut builder = DeliveryProblemBuilder::default();

        builder.set_courier_start(self.courier_start.into_location());

        for restaurant in self.restaurants {
            builder.add_restaurant(Restaurant::new(
                restaurant.id,
                restaurant.location.into_location(),
                restaurant.prep_time_min,
            ));
        }

        for consumer in self.consumers {
            builder.add_consumer(Consumer::new(consumer.id, consumer.location.into_location()));
        }

        for order in self.orders {
            builder.add_order(order.id, order.restaurant_id, order.consumer_id);
        }

        builder.build()
    }
}
