pub mod form;

pub use form::AuthForm;
