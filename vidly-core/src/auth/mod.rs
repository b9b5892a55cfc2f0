//! Account form validation

pub mod login;

pub use login::{Account, FieldErrors, LoginField, LoginForm};
