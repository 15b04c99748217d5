//! Completion handle handed to the verification callback.

use futures::channel::oneshot;

use crate::http::security::outcome::{AuthResult, Failure, VerifyError};

/// What the verification callback concluded about a key.
#[derive(Debug)]
pub enum VerificationOutcome<U, I> {
    /// Verification could not be carried out.
    Error(VerifyError),
    /// The key is not associated with any user.
    NoUser(Option<I>),
    /// The key belongs to `user`.
    Verified(U, Option<I>),
}

impl<U, I> VerificationOutcome<U, I> {
    /// Builds an outcome from the `(err, user, info)` triple.
    ///
    /// An error wins over everything else; otherwise the presence of a user
    /// decides between success and rejection.
    pub fn from_parts(result: Result<Option<U>, VerifyError>, info: Option<I>) -> Self {
        match result {
            Err(cause) => VerificationOutcome::Error(cause),
            Ok(None) => VerificationOutcome::NoUser(info),
            Ok(Some(user)) => VerificationOutcome::Verified(user, info),
        }
    }
}

impl<U, I> From<VerificationOutcome<U, I>> for AuthResult<U, I> {
    fn from(outcome: VerificationOutcome<U, I>) -> Self {
        match outcome {
            VerificationOutcome::Error(cause) => AuthResult::Error(cause),
            VerificationOutcome::NoUser(info) => AuthResult::failure(Failure::Rejected(info)),
            VerificationOutcome::Verified(user, info) => AuthResult::success(user, info),
        }
    }
}

/// One-shot completion handle for a verification attempt.
///
/// Every method consumes the handle, so an attempt is completed at most once.
/// It may be completed on the spot or moved elsewhere (another task or thread)
/// and completed later.
///
/// # Example
///
/// ```ignore
/// let strategy = HeaderApiKeyStrategy::new(|key, verified: Verified<String, String>, _req| {
///     if key == "sk_live_abc123" {
///         verified.success("service-a".to_string(), None);
///     } else {
///         verified.reject(Some("unknown key".to_string()));
///     }
/// });
/// ```
#[derive(Debug)]
pub struct Verified<U, I> {
    tx: oneshot::Sender<VerificationOutcome<U, I>>,
}

/// Receiving side of a [`Verified`] handle.
pub(crate) type PendingVerification<U, I> = oneshot::Receiver<VerificationOutcome<U, I>>;

impl<U, I> Verified<U, I> {
    pub(crate) fn channel() -> (Self, PendingVerification<U, I>) {
        let (tx, rx) = oneshot::channel();
        (Verified { tx }, rx)
    }

    /// Reports an outcome.
    pub fn complete(self, outcome: VerificationOutcome<U, I>) {
        // The attempt may have been dropped by the host already.
        let _ = self.tx.send(outcome);
    }

    /// Reports in the `(err, user, info)` form.
    pub fn done(self, result: Result<Option<U>, VerifyError>, info: Option<I>) {
        self.complete(VerificationOutcome::from_parts(result, info));
    }

    /// Reports that verification failed with `cause`.
    pub fn error(self, cause: impl Into<VerifyError>) {
        self.complete(VerificationOutcome::Error(cause.into()));
    }

    /// Reports that no user matches the key.
    pub fn reject(self, info: Option<I>) {
        self.complete(VerificationOutcome::NoUser(info));
    }

    /// Reports that the key belongs to `user`.
    pub fn success(self, user: U, info: Option<I>) {
        self.complete(VerificationOutcome::Verified(user, info));
    }

    /// Returns `true` if nobody is waiting for this outcome anymore.
    pub fn is_canceled(&self) -> bool {
        self.tx.is_canceled()
    }
}
