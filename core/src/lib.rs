//! # Actix Header API Key
//!
//! API key authentication strategy for Actix Web: the key is read from a
//! configurable request header, optionally behind a required prefix, and
//! verified by a caller-supplied callback.
//!
//! The main functionality is available through the `http` module:
//!
//! - [`http::security`] - Strategy, outcome types, middleware and extractors
//! - [`http::error`] - Error types

pub mod http;
