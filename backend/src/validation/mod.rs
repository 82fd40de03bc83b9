//! Request payload validation.
//!
//! Payload structs derive `Validate`; shared field rules live in [`rules`].

pub mod rules;

pub use validator::Validate;
