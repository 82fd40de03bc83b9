mod id;

pub use id::{UserId, VehicleId};
