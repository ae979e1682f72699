pub mod command;
pub mod error;
pub mod plan;
pub mod search;
