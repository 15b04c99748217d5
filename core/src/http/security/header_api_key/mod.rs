//! Header API Key Authentication for Actix Web.
//!
//! # Overview
//!
//! Clients send a pre-shared key in a request header. The strategy reads it,
//! hands it to a verification callback supplied by the application, and turns
//! the callback's answer into an [`AuthResult`](crate::http::security::AuthResult).
//! How keys are stored and checked is entirely up to the callback.
//!
//! # Header Layout
//!
//! - **Default**: `X-API-Key: your-api-key`
//! - **Custom header**: any header name, matched case-insensitively
//! - **Prefixed value**: `Authorization: Api-Key your-api-key`, where the
//!   literal prefix `"Api-Key "` is required and stripped
//!
//! # Usage
//!
//! ## Basic Setup
//!
//! ```ignore
//! use actix_header_apikey_core::http::security::header_api_key::{HeaderApiKeyStrategy, Verified};
//!
//! let strategy = HeaderApiKeyStrategy::new(|key, verified: Verified<String, String>, _req| {
//!     if key == "sk_live_abc123" {
//!         verified.success("billing-service".into(), None);
//!     } else {
//!         verified.reject(Some("unknown API key".into()));
//!     }
//! });
//! ```
//!
//! ## With Custom Header and Prefix
//!
//! ```ignore
//! let strategy = HeaderApiKeyStrategy::new(verify)
//!     .header_spec(HeaderKeySpec::header("Authorization").prefix("Api-Key "))
//!     .pass_request_to_callback(true);
//! ```
//!
//! ## Asynchronous Verification
//!
//! The completion handle can be moved into a spawned task and completed once
//! the lookup finishes:
//!
//! ```ignore
//! let strategy = HeaderApiKeyStrategy::new(move |key, verified, _req| {
//!     let pool = pool.clone();
//!     actix_web::rt::spawn(async move {
//!         match pool.find_owner(&key).await {
//!             Ok(owner) => verified.done(Ok(owner), None),
//!             Err(e) => verified.error(e),
//!         }
//!     });
//! });
//! ```
//!
//! # Example with Middleware
//!
//! ```ignore
//! use actix_header_apikey_core::http::security::middleware::StrategyTransform;
//!
//! App::new()
//!     .wrap(StrategyTransform::new(strategy.clone()))
//!     .service(my_api_endpoint)
//! ```

mod authenticator;
mod config;
mod error;
mod key;
mod verified;

pub use authenticator::{HeaderApiKeyStrategy, VerifyFn};
pub use config::{HeaderKeySpec, DEFAULT_HEADER};
pub use error::StrategyError;
pub use key::extract_api_key;
pub use verified::{VerificationOutcome, Verified};
