//! Authentication outcomes.
//!
//! Every authentication attempt ends in exactly one [`AuthResult`]. Hosts that
//! prefer the three-channel style (`success` / `fail` / `error`) implement
//! [`AuthCallbacks`] and call [`AuthResult::report`].

use std::fmt;

use actix_web::http::StatusCode;

use crate::http::error::BadRequestError;

/// Opaque cause of a verification error.
pub type VerifyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Why an authentication attempt failed.
#[derive(Debug)]
pub enum Failure<I> {
    /// The request did not carry a usable credential.
    BadRequest(BadRequestError),
    /// The verifier found no user. Carries whatever info it supplied.
    Rejected(Option<I>),
}

impl<I> Failure<I> {
    /// Returns the extraction error, if that is why the attempt failed.
    pub fn as_bad_request(&self) -> Option<&BadRequestError> {
        match self {
            Failure::BadRequest(err) => Some(err),
            Failure::Rejected(_) => None,
        }
    }

    /// Returns the verifier's rejection info, if any.
    pub fn rejection_info(&self) -> Option<&I> {
        match self {
            Failure::BadRequest(_) => None,
            Failure::Rejected(info) => info.as_ref(),
        }
    }
}

impl<I: fmt::Display> fmt::Display for Failure<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::BadRequest(err) => write!(f, "{}", err),
            Failure::Rejected(Some(info)) => write!(f, "{}", info),
            Failure::Rejected(None) => f.write_str("Unauthorized"),
        }
    }
}

/// The result of one authentication attempt.
#[derive(Debug)]
pub enum AuthResult<U, I> {
    /// The credential was verified.
    Success { user: U, info: Option<I> },
    /// The credential was missing, malformed or rejected.
    ///
    /// `status` is the challenge status; `None` lets the host pick its default.
    Failure {
        reason: Failure<I>,
        status: Option<StatusCode>,
    },
    /// Verification itself went wrong.
    Error(VerifyError),
}

impl<U, I> AuthResult<U, I> {
    pub fn success(user: U, info: Option<I>) -> Self {
        AuthResult::Success { user, info }
    }

    pub fn failure(reason: Failure<I>) -> Self {
        AuthResult::Failure {
            reason,
            status: None,
        }
    }

    pub fn error(cause: impl Into<VerifyError>) -> Self {
        AuthResult::Error(cause.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AuthResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, AuthResult::Failure { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AuthResult::Error(_))
    }

    /// Dispatches this result to exactly one of the handler's channels.
    pub fn report<H>(self, handler: &mut H)
    where
        H: AuthCallbacks<U, I> + ?Sized,
    {
        match self {
            AuthResult::Success { user, info } => handler.success(user, info),
            AuthResult::Failure { reason, status } => handler.fail(reason, status),
            AuthResult::Error(cause) => handler.error(cause),
        }
    }
}

/// The three outcome channels of an authentication pipeline.
pub trait AuthCallbacks<U, I> {
    fn success(&mut self, user: U, info: Option<I>);

    fn fail(&mut self, reason: Failure<I>, status: Option<StatusCode>);

    fn error(&mut self, cause: VerifyError);
}
