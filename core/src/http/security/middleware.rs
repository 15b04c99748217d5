//! Authentication middleware for Actix Web.
//!
//! Runs an [`AuthenticationStrategy`] in front of the wrapped service and
//! turns its [`AuthResult`] into a response:
//!
//! | Result | Response |
//! |--------|----------|
//! | `Success` | request forwarded, [`Authentication`] stored in extensions |
//! | `Failure` | failure status (default `401`) with a JSON body |
//! | `Error` | `500 Internal Server Error` |

use std::fmt;
use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::{ok, LocalBoxFuture, Ready};

use crate::http::security::config::AuthenticationStrategy;
use crate::http::security::outcome::{AuthResult, Failure};

/// The principal stored in request extensions after a successful attempt.
#[derive(Debug, Clone)]
pub struct Authentication<U, I> {
    user: U,
    info: Option<I>,
}

impl<U, I> Authentication<U, I> {
    pub fn new(user: U, info: Option<I>) -> Self {
        Authentication { user, info }
    }

    /// Returns the authenticated user.
    pub fn get_user(&self) -> &U {
        &self.user
    }

    /// Returns the info the verifier attached to the success.
    pub fn get_info(&self) -> Option<&I> {
        self.info.as_ref()
    }

    pub fn into_parts(self) -> (U, Option<I>) {
        (self.user, self.info)
    }
}

/// Authentication middleware factory.
///
/// # Example
/// ```ignore
/// App::new().wrap(
///     StrategyTransform::new(strategy)
///         .permit_path("/public")
/// )
/// ```
pub struct StrategyTransform<S> {
    strategy: S,
    permitted: Vec<String>,
}

impl<S> StrategyTransform<S> {
    pub fn new(strategy: S) -> Self {
        StrategyTransform {
            strategy,
            permitted: Vec::new(),
        }
    }

    /// Lets requests for `prefix` and everything below it through
    /// unauthenticated. Matching stops at segment boundaries, so
    /// `"/public"` covers `/public` and `/public/info` but not `/publicity`.
    pub fn permit_path(mut self, prefix: impl Into<String>) -> Self {
        self.permitted.push(prefix.into());
        self
    }
}

impl<Svc, B, S> Transform<Svc, ServiceRequest> for StrategyTransform<S>
where
    Svc: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    Svc::Future: 'static,
    B: 'static,
    S: AuthenticationStrategy + Clone + 'static,
    S::User: 'static,
    S::Info: fmt::Display + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = StrategyService<S, Svc>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: Svc) -> Self::Future {
        ok(StrategyService {
            strategy: self.strategy.clone(),
            permitted: Rc::new(self.permitted.clone()),
            service: Rc::new(service),
        })
    }
}

/// Authentication middleware service.
pub struct StrategyService<S, Svc> {
    strategy: S,
    permitted: Rc<Vec<String>>,
    service: Rc<Svc>,
}

impl<S, Svc> StrategyService<S, Svc> {
    fn is_permitted(&self, path: &str) -> bool {
        self.permitted.iter().any(|prefix| {
            let prefix = prefix.trim_end_matches('/');
            match path.strip_prefix(prefix) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            }
        })
    }
}

impl<S, Svc, B> Service<ServiceRequest> for StrategyService<S, Svc>
where
    Svc: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    Svc::Future: 'static,
    B: 'static,
    S: AuthenticationStrategy,
    S::User: 'static,
    S::Info: fmt::Display + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        if self.is_permitted(req.path()) {
            return Box::pin(async move {
                let res = service.call(req).await?;
                Ok(res.map_into_left_body())
            });
        }

        let strategy = self.strategy.name().to_string();
        let attempt = self.strategy.authenticate(&req);

        Box::pin(async move {
            match attempt.await {
                AuthResult::Success { user, info } => {
                    req.extensions_mut().insert(Authentication::new(user, info));
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                AuthResult::Failure { reason, status } => {
                    let status = status.unwrap_or(StatusCode::UNAUTHORIZED);
                    tracing::debug!(
                        strategy = %strategy,
                        path = req.path(),
                        status = status.as_u16(),
                        "authentication failed"
                    );
                    let response = failure_response(&reason, status);
                    Ok(req.into_response(response).map_into_right_body())
                }
                AuthResult::Error(cause) => {
                    tracing::error!(
                        strategy = %strategy,
                        path = req.path(),
                        error = %cause,
                        "authentication errored"
                    );
                    let err = actix_web::error::ErrorInternalServerError(cause);
                    Ok(req.error_response(err).map_into_right_body())
                }
            }
        })
    }
}

fn failure_response<I: fmt::Display>(reason: &Failure<I>, status: StatusCode) -> HttpResponse {
    let status_reason = status.canonical_reason().unwrap_or("Error");
    let (error, message) = match reason {
        Failure::BadRequest(err) => (err.name(), err.message().to_string()),
        Failure::Rejected(Some(info)) => (status_reason, info.to_string()),
        Failure::Rejected(None) => (status_reason, status_reason.to_string()),
    };
    let body = serde_json::json!({
        "error": error,
        "message": message,
    });

    HttpResponse::build(status).json(body)
}
