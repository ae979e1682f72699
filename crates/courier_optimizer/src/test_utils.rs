use crate::problem::{
    consumer::Consumer,
    delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
    location::Location,
    restaurant::Restaurant,
};

/// Two-order instance around Koramangala, Bangalore. Matches the worked
/// example used across the planner tests.
pub fn bangalore_problem() -> DeliveryProblem {
    let mut builder = DeliveryProblemBuilder::default();
    builder.set_courier_start(Location::from_lat_lon("Start", 12.935, 77.61));
    builder.add_restaurant(Restaurant::new(
        "R1",
        Location::from_lat_lon("R1", 12.94, 77.62),
        12.0,
    ));
    builder.add_restaurant(Restaurant::new(
        "R2",
        Location::from_lat_lon("R2", 12.93, 77.60),
        8.0,
    ));
    builder.add_consumer(Consumer::new("C1", Location::from_lat_lon("C1", 12.945, 77.625)));
    builder.add_consumer(Consumer::new("C2", Location::from_lat_lon("C2", 12.925, 77.605)));
    builder.add_order("O1", "R1", "C1");
    builder.add_order("O2", "R2", "C2");

    builder.build().unwrap()
}

/// Builds a problem from `(pickup_lat, pickup_lon, ready_min, drop_lat,
/// drop_lon)` tuples, one order per stop pair. The courier always starts at
/// the same fixed point.
pub fn problem_from_stops(stops: &[(f64, f64, f64, f64, f64)]) -> DeliveryProblem {
    let mut builder = DeliveryProblemBuilder::default();
    builder.set_courier_start(Location::from_lat_lon("Start", 12.935, 77.61));

    for (i, (pick_lat, pick_lon, ready, drop_lat, drop_lon)) in stops.iter().enumerate() {
        let restaurant_id = format!("R{}", i + 1);
        let consumer_id = format!("C{}", i + 1);

        builder.add_restaurant(Restaurant::new(
            restaurant_id.clone(),
            Location::from_lat_lon(restaurant_id.clone(), *pick_lat, *pick_lon),
            *ready,
        ));
        builder.add_consumer(Consumer::new(
            consumer_id.clone(),
            Location::from_lat_lon(consumer_id.clone(), *drop_lat, *drop_lon),
        ));
        builder.add_order(format!("O{}", i + 1), restaurant_id, consumer_id);
    }

    builder.build().unwrap()
}
