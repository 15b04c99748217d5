//! API key extraction from request headers.

use actix_web::http::header::HeaderMap;

use super::config::HeaderKeySpec;
use crate::http::error::BadRequestError;

/// Reads the API key described by `spec` out of `headers`.
///
/// Fails with "Missing API Key" only when the header is absent or empty.
/// Other values are decoded as UTF-8, with invalid bytes replaced by
/// U+FFFD. When a prefix is required, the decoded value must start with it;
/// only that leading occurrence is stripped.
///
/// # Example
///
/// ```
/// use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
/// use actix_header_apikey_core::http::security::header_api_key::{extract_api_key, HeaderKeySpec};
///
/// let mut headers = HeaderMap::new();
/// headers.insert(
///     HeaderName::from_static("authorization"),
///     HeaderValue::from_static("Api-Key topSecretApiKey"),
/// );
///
/// let spec = HeaderKeySpec::header("Authorization").prefix("Api-Key ");
/// assert_eq!(extract_api_key(&headers, &spec).unwrap(), "topSecretApiKey");
/// ```
pub fn extract_api_key(headers: &HeaderMap, spec: &HeaderKeySpec) -> Result<String, BadRequestError> {
    let bytes = headers
        .get(spec.get_header_name())
        .map(|value| value.as_bytes())
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(BadRequestError::missing_api_key)?;
    let raw = String::from_utf8_lossy(bytes);

    if !spec.has_prefix() {
        return Ok(raw.into_owned());
    }

    raw.strip_prefix(spec.get_required_prefix())
        .map(String::from)
        .ok_or_else(|| {
            BadRequestError::invalid_prefix(spec.get_header_name(), spec.get_required_prefix())
        })
}
