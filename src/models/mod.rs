//! Database models shared across the repository.

pub mod client;
pub mod config;
pub mod task;
