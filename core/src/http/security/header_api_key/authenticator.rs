//! Header API key strategy implementation.

use std::fmt;
use std::future::ready;
use std::sync::Arc;

use actix_web::dev::ServiceRequest;
use actix_web::HttpRequest;
use futures_util::future::LocalBoxFuture;

use super::config::HeaderKeySpec;
use super::error::StrategyError;
use super::key::extract_api_key;
use super::verified::{VerificationOutcome, Verified};
use crate::http::security::config::AuthenticationStrategy;
use crate::http::security::outcome::{AuthResult, Failure};

/// Signature of the verification callback.
///
/// Receives the extracted key, the completion handle, and the request when
/// [`HeaderApiKeyStrategy::pass_request_to_callback`] is enabled.
pub type VerifyFn<U, I> = dyn Fn(String, Verified<U, I>, Option<&HttpRequest>) + Send + Sync;

/// Strategy that authenticates requests by an API key carried in a header.
///
/// The key is read according to the configured [`HeaderKeySpec`] and handed
/// to the verification callback, whose outcome becomes the [`AuthResult`]:
///
/// | Callback reports | Result |
/// |------------------|--------|
/// | an error | `Error(cause)` |
/// | no user | `Failure(Rejected(info))` |
/// | a user | `Success(user, info)` |
///
/// A missing header or a wrong prefix fails the attempt with a
/// [`BadRequestError`](crate::http::error::BadRequestError) before the
/// callback is reached.
///
/// # Example
///
/// ```ignore
/// use actix_header_apikey_core::http::security::header_api_key::{
///     HeaderApiKeyStrategy, HeaderKeySpec, Verified,
/// };
///
/// let strategy = HeaderApiKeyStrategy::new(|key, verified: Verified<String, String>, _req| {
///         match lookup(&key) {
///             Some(owner) => verified.success(owner, None),
///             None => verified.reject(Some("unknown key".into())),
///         }
///     })
///     .header_spec(HeaderKeySpec::header("Authorization").prefix("Api-Key "));
/// ```
pub struct HeaderApiKeyStrategy<U, I> {
    spec: HeaderKeySpec,
    pass_request_to_callback: bool,
    verify: Arc<VerifyFn<U, I>>,
}

impl<U, I> HeaderApiKeyStrategy<U, I> {
    /// Identifier reported by [`AuthenticationStrategy::name`].
    pub const NAME: &'static str = "headerapikey";

    /// Creates a strategy reading `x-api-key` with the given verifier.
    pub fn new<F>(verify: F) -> Self
    where
        F: Fn(String, Verified<U, I>, Option<&HttpRequest>) + Send + Sync + 'static,
    {
        Self::with_shared_verifier(Arc::new(verify))
    }

    /// Creates a strategy around an already shared verifier.
    pub fn with_shared_verifier(verify: Arc<VerifyFn<U, I>>) -> Self {
        Self {
            spec: HeaderKeySpec::default(),
            pass_request_to_callback: false,
            verify,
        }
    }

    /// Sets where the key is read from.
    pub fn header_spec(mut self, spec: HeaderKeySpec) -> Self {
        self.spec = spec;
        self
    }

    /// Sets whether the verifier receives the request. Defaults to `false`.
    pub fn pass_request_to_callback(mut self, pass: bool) -> Self {
        self.pass_request_to_callback = pass;
        self
    }

    /// Returns the header configuration.
    pub fn get_header_spec(&self) -> &HeaderKeySpec {
        &self.spec
    }

    /// Returns whether the verifier receives the request.
    pub fn should_pass_request(&self) -> bool {
        self.pass_request_to_callback
    }

    /// Runs one attempt against a bare `HttpRequest`.
    pub fn authenticate_request(&self, req: &HttpRequest) -> LocalBoxFuture<'static, AuthResult<U, I>>
    where
        U: 'static,
        I: 'static,
    {
        let api_key = match extract_api_key(req.headers(), &self.spec) {
            Ok(key) => key,
            Err(err) => {
                tracing::debug!(
                    strategy = Self::NAME,
                    header = self.spec.get_header_name(),
                    reason = %err,
                    "API key extraction failed"
                );
                return Box::pin(ready(AuthResult::failure(Failure::BadRequest(err))));
            }
        };

        let (verified, pending) = Verified::channel();
        let request = if self.pass_request_to_callback {
            Some(req)
        } else {
            None
        };
        (self.verify)(api_key, verified, request);

        Box::pin(async move {
            let outcome = match pending.await {
                Ok(outcome) => outcome,
                Err(_) => {
                    tracing::warn!(
                        strategy = Self::NAME,
                        "verifier dropped its completion handle"
                    );
                    VerificationOutcome::Error(Box::new(StrategyError::VerificationAbandoned))
                }
            };
            match &outcome {
                VerificationOutcome::Error(cause) => {
                    tracing::warn!(strategy = Self::NAME, error = %cause, "API key verification errored");
                }
                VerificationOutcome::NoUser(_) => {
                    tracing::debug!(strategy = Self::NAME, "API key rejected");
                }
                VerificationOutcome::Verified(..) => {
                    tracing::debug!(strategy = Self::NAME, "API key verified");
                }
            }
            AuthResult::from(outcome)
        })
    }
}

impl<U: 'static, I: 'static> AuthenticationStrategy for HeaderApiKeyStrategy<U, I> {
    type User = U;
    type Info = I;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn authenticate(&self, req: &ServiceRequest) -> LocalBoxFuture<'static, AuthResult<U, I>> {
        self.authenticate_request(req.request())
    }
}

impl<U, I> Clone for HeaderApiKeyStrategy<U, I> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            pass_request_to_callback: self.pass_request_to_callback,
            verify: Arc::clone(&self.verify),
        }
    }
}

impl<U, I> fmt::Debug for HeaderApiKeyStrategy<U, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderApiKeyStrategy")
            .field("spec", &self.spec)
            .field("pass_request_to_callback", &self.pass_request_to_callback)
            .finish_non_exhaustive()
    }
}
