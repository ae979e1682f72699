pub mod consumer;
pub mod delivery_problem;
pub mod kmh;
pub mod location;
pub mod order;
pub mod restaurant;
