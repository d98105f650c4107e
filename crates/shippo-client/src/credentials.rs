//! Per-caller credentials.

use std::fmt;

/// Origin used when the caller does not override the base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.goshippo.com";

/// API key plus an optional base-URL override, scoped to a single caller.
///
/// Credentials are supplied per call and owned by the calling context. They are never
/// persisted, cached or shared across callers.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: None,
        }
    }

    /// Build credentials from optional parts (e.g. values read from request metadata).
    #[must_use]
    pub fn from_parts(api_key: Option<String>, base_url: Option<String>) -> Self {
        Self { api_key, base_url }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The API key, if one is present and not blank.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// The base-URL override, if one is present and not blank.
    #[must_use]
    pub fn base_url_override(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    /// Effective base URL: the override if present, else [`DEFAULT_BASE_URL`].
    ///
    /// Trailing slashes are trimmed so paths can be appended directly.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url_override()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// `self` if it carries a key, otherwise a copy of `fallback`.
    ///
    /// The key and the base URL always travel together. A source that supplies only a base
    /// URL never redirects a key that came from somewhere else.
    #[must_use]
    pub fn or(self, fallback: &Credentials) -> Credentials {
        if self.api_key().is_some() {
            self
        } else {
            fallback.clone()
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key().map(|_| "***REDACTED***"))
            .field("base_url", &self.base_url())
            .finish()
    }
}
