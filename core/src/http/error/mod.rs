//! Error types.

mod auth_error;
mod bad_request;

pub use auth_error::AuthError;
pub use bad_request::BadRequestError;
