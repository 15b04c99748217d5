//! Core strategy trait.

use actix_web::dev::ServiceRequest;
use futures_util::future::LocalBoxFuture;

use crate::http::security::outcome::AuthResult;

/// A pluggable authentication mechanism.
///
/// Hosts (such as [`StrategyTransform`](crate::http::security::middleware::StrategyTransform))
/// depend only on this trait, so strategies can be swapped or combined
/// without touching the pipeline.
///
/// # Implementation Note
/// `authenticate` inspects the request synchronously and returns a future for
/// the part of the attempt that may complete later (e.g. a database lookup).
/// The future does not borrow the request.
pub trait AuthenticationStrategy {
    /// The principal produced on success.
    type User;
    /// Diagnostic payload attached to successes and rejections.
    type Info;

    /// Stable identifier of the strategy, used in logs.
    fn name(&self) -> &str;

    /// Runs one authentication attempt against the request.
    fn authenticate(
        &self,
        req: &ServiceRequest,
    ) -> LocalBoxFuture<'static, AuthResult<Self::User, Self::Info>>;
}
