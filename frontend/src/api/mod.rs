mod auth;
pub mod client;
pub mod types;
mod vehicles;

pub use client::*;
pub use types::*;
