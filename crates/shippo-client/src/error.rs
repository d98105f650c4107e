//! Error taxonomy for remote calls.

use thiserror::Error;

/// Retry hint used when a 429 response carries no usable `Retry-After` header.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

const AUTH_MISSING_KEY: &str = "Shippo API key is required";
const AUTH_REJECTED: &str = "Authentication failed: invalid or unauthorized Shippo API key";

/// Failure of a single client operation.
///
/// The first three variants are the closed taxonomy of remote outcomes; callers must be able
/// to tell them apart because they carry different recovery semantics (re-authenticate,
/// back off and retry, surface to the user).
#[derive(Debug, Error)]
pub enum ShippoError {
    /// Missing API key, or the remote answered 401/403. Never retryable.
    #[error("{message}")]
    Authentication { message: String },

    /// The remote answered 429.
    #[error("Rate limit exceeded. Retry after {retry_after_seconds} seconds.")]
    RateLimit { retry_after_seconds: u64 },

    /// Any other non-2xx answer.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced an HTTP response (connect, TLS, IO).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A 2xx response whose body is not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Stable tag for each [`ShippoError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    RateLimit,
    Api,
    Transport,
    Decode,
}

impl ErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Authentication => "authentication",
            ErrorKind::RateLimit => "rate_limit",
            ErrorKind::Api => "api",
            ErrorKind::Transport => "transport",
            ErrorKind::Decode => "decode",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShippoError>;

impl ShippoError {
    pub(crate) fn missing_api_key() -> Self {
        Self::Authentication {
            message: AUTH_MISSING_KEY.to_string(),
        }
    }

    pub(crate) fn rejected_credentials() -> Self {
        Self::Authentication {
            message: AUTH_REJECTED.to_string(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShippoError::Authentication { .. } => ErrorKind::Authentication,
            ShippoError::RateLimit { .. } => ErrorKind::RateLimit,
            ShippoError::Api { .. } => ErrorKind::Api,
            ShippoError::Transport(_) => ErrorKind::Transport,
            ShippoError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// HTTP status that produced this error, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ShippoError::Api { status, .. } => Some(*status),
            ShippoError::RateLimit { .. } => Some(429),
            _ => None,
        }
    }

    #[must_use]
    pub fn retry_after_seconds(&self) -> Option<u64> {
        match self {
            ShippoError::RateLimit {
                retry_after_seconds,
            } => Some(*retry_after_seconds),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShippoError::Api { status: 404, .. })
    }

    /// Whether a caller may reasonably retry.
    ///
    /// Rate limits are retryable after the hint elapses; API errors only for 5xx.
    /// This layer itself never retries.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            ShippoError::RateLimit { .. } => true,
            ShippoError::Api { status, .. } => (500..600).contains(status),
            ShippoError::Authentication { .. }
            | ShippoError::Transport(_)
            | ShippoError::Decode(_) => false,
        }
    }
}

impl From<reqwest::Error> for ShippoError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(sanitize_reqwest_error(&value))
    }
}

/// Render a transport error without the query string of the request URL.
#[must_use]
pub fn sanitize_reqwest_error(e: &reqwest::Error) -> String {
    let mut msg = e.to_string();
    if let Some(u) = e.url() {
        let mut redacted = u.clone();
        let _ = redacted.set_username("");
        let _ = redacted.set_password(None);
        redacted.set_query(None);
        redacted.set_fragment(None);
        msg = msg.replace(u.as_str(), redacted.as_str());
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, ShippoError};

    #[test]
    fn retryability_follows_status_class() {
        let server = ShippoError::Api {
            status: 503,
            message: "down".into(),
        };
        let client = ShippoError::Api {
            status: 422,
            message: "bad".into(),
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
        assert!(
            ShippoError::RateLimit {
                retry_after_seconds: 5
            }
            .is_retryable()
        );
        assert!(!ShippoError::missing_api_key().is_retryable());
    }

    #[test]
    fn kind_and_status_accessors() {
        let e = ShippoError::RateLimit {
            retry_after_seconds: 120,
        };
        assert_eq!(e.kind(), ErrorKind::RateLimit);
        assert_eq!(e.kind().as_str(), "rate_limit");
        assert_eq!(e.status(), Some(429));
        assert_eq!(e.retry_after_seconds(), Some(120));

        let e = ShippoError::rejected_credentials();
        assert_eq!(e.kind(), ErrorKind::Authentication);
        assert_eq!(e.status(), None);
    }

    #[test]
    fn not_found_only_matches_api_404() {
        assert!(
            ShippoError::Api {
                status: 404,
                message: "gone".into()
            }
            .is_not_found()
        );
        assert!(
            !ShippoError::Api {
                status: 500,
                message: "boom".into()
            }
            .is_not_found()
        );
    }
}
