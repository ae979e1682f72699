pub mod payload_input;
pub mod plan_output;
