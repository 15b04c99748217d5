//! In-memory API key table for the demo server.

use std::collections::HashMap;

use actix_web::HttpRequest;
use lazy_static::lazy_static;
use serde::Serialize;

use actix_header_apikey_core::http::security::header_api_key::{
    HeaderApiKeyStrategy, HeaderKeySpec, Verified,
};

/// A client identified by its API key.
#[derive(Debug, Clone, Serialize)]
pub struct ApiClient {
    pub name: String,
    pub scopes: Vec<String>,
}

/// Strategy type used by the demo server.
pub type DemoStrategy = HeaderApiKeyStrategy<ApiClient, String>;

lazy_static! {
    static ref API_KEYS: HashMap<&'static str, ApiClient> = {
        let mut keys = HashMap::new();
        keys.insert(
            "sk_live_abc123",
            ApiClient {
                name: "billing-service".to_string(),
                scopes: vec!["api:read".to_string()],
            },
        );
        keys.insert(
            "sk_live_admin_key",
            ApiClient {
                name: "ops-console".to_string(),
                scopes: vec!["api:read".to_string(), "api:write".to_string()],
            },
        );
        keys
    };
}

/// Key whose lookup always fails, to show the error path.
pub const BROKEN_KEY: &str = "sk_broken";

fn verify(key: String, verified: Verified<ApiClient, String>, req: Option<&HttpRequest>) {
    if key == BROKEN_KEY {
        verified.error("key store unavailable");
        return;
    }

    let via = req
        .and_then(|r| r.peer_addr())
        .map(|addr| format!("verified for {}", addr.ip()));

    match API_KEYS.get(key.as_str()) {
        Some(client) => verified.success(client.clone(), via),
        None => verified.reject(Some("unknown API key".to_string())),
    }
}

/// Builds the demo strategy: `Authorization: Api-Key <key>`.
pub fn strategy() -> DemoStrategy {
    HeaderApiKeyStrategy::new(verify)
        .header_spec(HeaderKeySpec::header("Authorization").prefix("Api-Key "))
        .pass_request_to_callback(true)
}
