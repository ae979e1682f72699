pub mod json;
pub mod planner;
pub mod problem;
pub mod selector;
pub mod travel;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
