pub mod users;
pub mod vehicles;

pub use users::*;
pub use vehicles::*;
