//! Security module providing header API key authentication.
//!
//! # Module Structure
//!
//! - `config` - Core trait (AuthenticationStrategy)
//! - `outcome` - Authentication results and the three outcome channels
//! - `header_api_key` - Header API key strategy (HeaderApiKeyStrategy, HeaderKeySpec)
//! - `middleware` - Authentication middleware (StrategyTransform)
//! - `extractor` - Actix Web extractors (Authenticated, OptionalAuthenticated)
//! - `manager` - Factory methods (AuthenticationManager)

// Re-exports for convenience
pub use config::AuthenticationStrategy;
pub use extractor::{Authenticated, OptionalAuthenticated};
pub use header_api_key::{
    extract_api_key, HeaderApiKeyStrategy, HeaderKeySpec, StrategyError, VerificationOutcome,
    Verified,
};
pub use manager::AuthenticationManager;
pub use middleware::{Authentication, StrategyTransform};
pub use outcome::{AuthCallbacks, AuthResult, Failure, VerifyError};

// Internal modules (private implementation details)
mod config;
mod extractor;

// Public modules
pub mod header_api_key;
pub mod manager;
pub mod middleware;
pub mod outcome;
