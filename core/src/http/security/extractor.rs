//! Extractors for accessing the authenticated principal in handlers.
//!
//! Both extractors read the [`Authentication`] that
//! [`StrategyTransform`](crate::http::security::middleware::StrategyTransform)
//! stores in request extensions. The type parameters must match the
//! strategy's `User` and `Info` types.

use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::http::error::AuthError;
use crate::http::security::middleware::Authentication;

/// Extractor for the authenticated user.
///
/// # Usage
/// ```ignore
/// use actix_header_apikey_core::http::security::Authenticated;
///
/// async fn handler(client: Authenticated<ApiClient, String>) -> impl Responder {
///     format!("Hello, {}!", client.name)
/// }
/// ```
///
/// # Errors
/// Returns `401 Unauthorized` if the request is not authenticated.
#[derive(Debug, Clone)]
pub struct Authenticated<U, I>(Authentication<U, I>);

impl<U, I> Authenticated<U, I> {
    /// Returns the info the verifier attached to the success.
    pub fn info(&self) -> Option<&I> {
        self.0.get_info()
    }

    /// Returns the inner Authentication.
    pub fn into_inner(self) -> Authentication<U, I> {
        self.0
    }
}

impl<U, I> Deref for Authenticated<U, I> {
    type Target = U;

    fn deref(&self) -> &Self::Target {
        self.0.get_user()
    }
}

impl<U: Clone + 'static, I: Clone + 'static> FromRequest for Authenticated<U, I> {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Authentication<U, I>>().cloned() {
            Some(auth) => ready(Ok(Authenticated(auth))),
            None => ready(Err(AuthError::Unauthorized)),
        }
    }
}

/// Optional extractor for the authenticated user.
///
/// Returns `None` if not authenticated instead of an error, which suits
/// routes let through with `permit_path`.
#[derive(Debug, Clone)]
pub struct OptionalAuthenticated<U, I>(Option<Authentication<U, I>>);

impl<U, I> OptionalAuthenticated<U, I> {
    /// Returns the user, if any.
    pub fn user(&self) -> Option<&U> {
        self.0.as_ref().map(Authentication::get_user)
    }

    /// Returns the inner Option<Authentication>.
    pub fn into_inner(self) -> Option<Authentication<U, I>> {
        self.0
    }

    /// Returns true if a user is present.
    pub fn is_authenticated(&self) -> bool {
        self.0.is_some()
    }
}

impl<U: Clone + 'static, I: Clone + 'static> FromRequest for OptionalAuthenticated<U, I> {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let auth = req.extensions().get::<Authentication<U, I>>().cloned();
        ready(Ok(OptionalAuthenticated(auth)))
    }
}
