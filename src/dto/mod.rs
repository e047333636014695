//! DTO modules that shape the JSON API payloads.

pub mod client;
pub mod task;
