pub mod auth;
pub mod user;
pub mod vehicle;

pub use vehicle::{VehicleRepository, VehicleRepositoryTrait};
