//! Data models shared across database access and API handlers.

pub mod user;
pub mod vehicle;
