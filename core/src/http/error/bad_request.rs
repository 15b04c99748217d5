//! Request-shape errors reported by the header API key strategy.

use derive_more::{Display, Error};

/// A malformed authentication request: the API key header is missing, or it
/// does not carry the required prefix.
///
/// These never reach the verification callback. The strategy reports them as
/// a failure, not as an error.
///
/// # Example
/// ```
/// use actix_header_apikey_core::http::error::BadRequestError;
///
/// let err = BadRequestError::new("test message");
/// assert_eq!(err.name(), "BadRequestError");
/// assert_eq!(err.message(), "test message");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{message}")]
pub struct BadRequestError {
    message: String,
}

impl BadRequestError {
    /// Discriminator shared by every `BadRequestError`.
    pub const NAME: &'static str = "BadRequestError";

    /// Creates an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        BadRequestError {
            message: message.into(),
        }
    }

    /// The configured header is absent or empty.
    pub fn missing_api_key() -> Self {
        Self::new("Missing API Key")
    }

    /// The header value does not start with the required prefix.
    pub fn invalid_prefix(header_name: &str, required_prefix: &str) -> Self {
        Self::new(format!(
            "Invalid API Key prefix, {} header should start with \"{}\"",
            header_name, required_prefix
        ))
    }

    /// Returns the error name, always `"BadRequestError"`.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
