//! Header API key strategy error types.

use derive_more::{Display, Error};

/// Errors raised by the strategy itself rather than by the verifier.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum StrategyError {
    /// The verification callback dropped its completion handle without
    /// reporting an outcome.
    #[display("verification callback finished without reporting an outcome")]
    VerificationAbandoned,
}
