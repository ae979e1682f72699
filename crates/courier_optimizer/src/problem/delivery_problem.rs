use fxhash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::problem::{
    consumer::Consumer,
    location::Location,
    order::{Order, OrderIdx},
    restaurant::Restaurant,
};

#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("courier start location is missing")]
    MissingCourierStart,

    #[error("duplicate restaurant id: {0}")]
    DuplicateRestaurant(String),

    #[error("duplicate consumer id: {0}")]
    DuplicateConsumer(String),

    #[error("duplicate order id: {0}")]
    DuplicateOrder(String),

    #[error("order {order_id} references unknown restaurant {restaurant_id}")]
    UnknownRestaurant {
        order_id: String,
        restaurant_id: String,
    },

    #[error("order {order_id} references unknown consumer {consumer_id}")]
    UnknownConsumer { order_id: String, consumer_id: String },
}

/// The validated routing instance. Orders keep their input order; the
/// planner's tie-breaking depends on it.
pub struct DeliveryProblem {
    courier_start: Location,
    orders: Vec<Order>,
}

impl DeliveryProblem {
    pub fn courier_start(&self) -> &Location {
        &self.courier_start
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, index: OrderIdx) -> &Order {
        &self.orders[index]
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

struct OrderLink {
    id: String,
    restaurant_id: String,
    consumer_id: String,
}

#[derive(Default)]
pub struct DeliveryProblemBuilder {
    courier_start: Option<Location>,
    restaurants: Vec<Restaurant>,
    consumers: Vec<Consumer>,
    order_links: Vec<OrderLink>,
}

impl DeliveryProblemBuilder {
    pub fn set_courier_start(&mut self, location: Location) {
        self.courier_start = Some(location);
    }

    pub fn add_restaurant(&mut self, restaurant: Restaurant) {
        self.restaurants.push(restaurant);
    }

    pub fn add_consumer(&mut self, consumer: Consumer) {
        self.consumers.push(consumer);
    }

    pub fn add_order(
        &mut self,
        id: impl Into<String>,
        restaurant_id: impl Into<String>,
        consumer_id: impl Into<String>,
    ) {
        self.order_links.push(OrderLink {
            id: id.into(),
            restaurant_id: restaurant_id.into(),
            consumer_id: consumer_id.into(),
        });
    }

    /// Resolves every order against its restaurant and consumer. All
    /// validation happens here, before any search runs.
    pub fn build(self) -> Result<DeliveryProblem, ProblemError> {
        let courier_start = self
            .courier_start
            .ok_or(ProblemError::MissingCourierStart)?;

        let mut restaurants: FxHashMap<&str, &Restaurant> = FxHashMap::default();
        for restaurant in &self.restaurants {
            if restaurants.insert(restaurant.id(), restaurant).is_some() {
                return Err(ProblemError::DuplicateRestaurant(restaurant.id().to_owned()));
            }
        }

        let mut consumers: FxHashMap<&str, &Consumer> = FxHashMap::default();
        for consumer in &self.consumers {
            if consumers.insert(consumer.id(), consumer).is_some() {
                return Err(ProblemError::DuplicateConsumer(consumer.id().to_owned()));
            }
        }

        let mut seen_orders: FxHashSet<&str> = FxHashSet::default();
        let mut orders = Vec::with_capacity(self.order_links.len());

        for link in &self.order_links {
            if !seen_orders.insert(&link.id) {
                return Err(ProblemError::DuplicateOrder(link.id.clone()));
            }

            let restaurant = restaurants.get(link.restaurant_id.as_str()).ok_or_else(|| {
                ProblemError::UnknownRestaurant {
                    order_id: link.id.clone(),
                    restaurant_id: link.restaurant_id.clone(),
                }
            })?;

            let consumer = consumers.get(link.consumer_id.as_str()).ok_or_else(|| {
                ProblemError::UnknownConsumer {
                    order_id: link.id.clone(),
                    consumer_id: link.consumer_id.clone(),
                }
            })?;

            orders.push(Order::new(
                link.id.clone(),
                link.restaurant_id.clone(),
                link.consumer_id.clone(),
                restaurant.location().clone(),
                consumer.location().clone(),
                restaurant.prep_time_min(),
            ));
        }

        Ok(DeliveryProblem {
            courier_start,
            orders,
        })
    }
}
