pub mod auth;
pub mod toast;
