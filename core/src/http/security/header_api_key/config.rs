//! Header API key configuration.

/// Header consulted when none is configured.
pub const DEFAULT_HEADER: &str = "x-api-key";

/// Where the API key lives in the request and what it must start with.
///
/// The header name is lowercased on construction; the prefix is kept as given
/// and matched literally and case-sensitively.
///
/// # Example
///
/// ```
/// use actix_header_apikey_core::http::security::header_api_key::HeaderKeySpec;
///
/// let spec = HeaderKeySpec::header("Authorization").prefix("Api-Key ");
/// assert_eq!(spec.get_header_name(), "authorization");
/// assert_eq!(spec.get_required_prefix(), "Api-Key ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderKeySpec {
    header_name: String,
    required_prefix: String,
}

impl Default for HeaderKeySpec {
    fn default() -> Self {
        Self {
            header_name: DEFAULT_HEADER.to_string(),
            required_prefix: String::new(),
        }
    }
}

impl HeaderKeySpec {
    /// Creates a spec reading `x-api-key` with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a spec reading the given header with no prefix.
    pub fn header(name: impl AsRef<str>) -> Self {
        Self {
            header_name: name.as_ref().to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Creates a spec from optional parts, falling back to the defaults for
    /// anything omitted.
    pub fn from_options(header_name: Option<&str>, required_prefix: Option<&str>) -> Self {
        let spec = match header_name {
            Some(name) => Self::header(name),
            None => Self::default(),
        };
        match required_prefix {
            Some(prefix) => spec.prefix(prefix),
            None => spec,
        }
    }

    /// Sets the literal prefix the header value must start with.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.required_prefix = prefix.into();
        self
    }

    /// Returns the lowercased header name.
    pub fn get_header_name(&self) -> &str {
        &self.header_name
    }

    /// Returns the required prefix (empty when none).
    pub fn get_required_prefix(&self) -> &str {
        &self.required_prefix
    }

    /// Returns whether a prefix is required.
    pub fn has_prefix(&self) -> bool {
        !self.required_prefix.is_empty()
    }
}
