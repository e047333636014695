//! Domain entities exposed by the service layer.

pub mod client;
pub mod task;
pub mod types;
