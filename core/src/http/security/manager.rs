use actix_web::HttpRequest;

use crate::http::security::header_api_key::{HeaderApiKeyStrategy, Verified};

pub struct AuthenticationManager {}

impl AuthenticationManager {
    pub fn header_api_key<U, I, F>(verify: F) -> HeaderApiKeyStrategy<U, I>
    where
        F: Fn(String, Verified<U, I>, Option<&HttpRequest>) + Send + Sync + 'static,
    {
        HeaderApiKeyStrategy::new(verify)
    }
}
