//! The single HTTP request primitive behind every client operation.

use crate::credentials::Credentials;
use crate::error::{DEFAULT_RETRY_AFTER_SECS, Result, ShippoError};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;
use url::Url;

const AUTH_SCHEME: &str = "ShippoToken";
const JSON_MIME: &str = "application/json";

/// Method, body and extra headers for one request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Caller headers; they win over the computed auth/content-type headers on collision.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn post(body: Option<Value>) -> Self {
        Self {
            method: Method::POST,
            body,
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn put(body: Value) -> Self {
        Self {
            method: Method::PUT,
            body: Some(body),
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            body: None,
            headers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Client bound to one caller's [`Credentials`].
///
/// Cloning is cheap. The underlying `reqwest::Client` may be shared between callers (it
/// only pools connections); credentials are never shared.
#[derive(Clone)]
pub struct ShippoClient {
    http: Client,
    credentials: Credentials,
}

impl ShippoClient {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_http_client(Client::new(), credentials)
    }

    #[must_use]
    pub fn with_http_client(http: Client, credentials: Credentials) -> Self {
        Self { http, credentials }
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.credentials.base_url()
    }

    /// Issue one request against `base_url + path` and classify the outcome.
    ///
    /// `path` must already contain its query string. Returns `Ok(None)` for 204 responses.
    ///
    /// # Errors
    ///
    /// - [`ShippoError::Authentication`] if no API key is configured (before any I/O), or the
    ///   remote answered 401/403
    /// - [`ShippoError::RateLimit`] on 429
    /// - [`ShippoError::Api`] on any other non-2xx status
    /// - [`ShippoError::Transport`] / [`ShippoError::Decode`] for transport or body failures
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<T>> {
        let api_key = self
            .credentials
            .api_key()
            .ok_or_else(ShippoError::missing_api_key)?;

        let url = build_url(self.credentials.base_url(), path)?;
        let headers = merge_headers(api_key, &options.headers)?;

        let mut request = self
            .http
            .request(options.method.clone(), url)
            .headers(headers);
        if let Some(body) = &options.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ShippoError::Decode(format!("request body: {e}")))?;
            request = request.body(bytes);
        }

        let started = Instant::now();
        let response = request.send().await?;
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        debug!(
            method = %options.method,
            path = %path.split('?').next().unwrap_or(path),
            status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "shippo request"
        );

        classify_response(status, retry_after.as_deref(), &body)
    }
}

fn build_url(base_url: &str, path: &str) -> Result<Url> {
    let url = if path.starts_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    };
    Url::parse(&url).map_err(|e| ShippoError::Transport(format!("Invalid URL '{url}': {e}")))
}

fn merge_headers(api_key: &str, extra: &[(String, String)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let auth = HeaderValue::from_str(&format!("{AUTH_SCHEME} {api_key}"))
        .map_err(|_| ShippoError::missing_api_key())?;
    headers.insert(AUTHORIZATION, auth);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            ShippoError::Transport(format!("Invalid request header name '{name}'"))
        })?;
        let value = HeaderValue::from_str(value).map_err(|_| {
            ShippoError::Transport(format!("Invalid value for request header '{name}'"))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Map a raw HTTP outcome onto the result of an operation.
///
/// Priority: 429, then 401/403, then any other non-2xx, then 204 (or an empty 2xx body),
/// then JSON decode.
pub(crate) fn classify_response<T: DeserializeOwned>(
    status: u16,
    retry_after: Option<&str>,
    body: &[u8],
) -> Result<Option<T>> {
    if status == 429 {
        return Err(ShippoError::RateLimit {
            retry_after_seconds: parse_retry_after(retry_after),
        });
    }

    if status == 401 || status == 403 {
        return Err(ShippoError::rejected_credentials());
    }

    if !(200..300).contains(&status) {
        return Err(ShippoError::Api {
            status,
            message: extract_error_message(status, body),
        });
    }

    if status == 204 || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| ShippoError::Decode(e.to_string()))
}

/// Leading-digit integer parse of a `Retry-After` value, defaulting when absent or
/// non-numeric.
fn parse_retry_after(value: Option<&str>) -> u64 {
    let Some(v) = value else {
        return DEFAULT_RETRY_AFTER_SECS;
    };
    let digits: String = v
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn extract_error_message(status: u16, body: &[u8]) -> String {
    let fallback = || format!("API error: {status}");
    let Ok(Value::Object(obj)) = serde_json::from_slice::<Value>(body) else {
        return fallback();
    };

    ["detail", "message", "error"]
        .iter()
        .filter_map(|k| obj.get(*k))
        .find_map(|v| match v {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        })
        .unwrap_or_else(fallback)
}

#[cfg(test)]
mod tests {
    use super::{classify_response, merge_headers, parse_retry_after};
    use crate::error::ShippoError;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use serde_json::{Value, json};

    fn classify(status: u16, retry_after: Option<&str>, body: &str) -> Result<Option<Value>, ShippoError> {
        classify_response::<Value>(status, retry_after, body.as_bytes())
    }

    #[test]
    fn no_content_skips_json_parse() {
        let out = classify(204, None, "this is not json").expect("204 ok");
        assert_eq!(out, None);
    }

    #[test]
    fn empty_success_body_is_no_content() {
        assert_eq!(classify(200, None, "").expect("200 ok"), None);
    }

    #[test]
    fn success_decodes_json() {
        let out = classify(200, None, r#"{"object_id":"addr_1"}"#).expect("200 ok");
        assert_eq!(out, Some(json!({"object_id": "addr_1"})));
    }

    #[test]
    fn rate_limit_uses_retry_after_or_default() {
        for (header, expected) in [
            (Some("120"), 120),
            (Some("NaN"), 60),
            (None, 60),
            (Some(""), 60),
            (Some("15s"), 15),
        ] {
            match classify(429, header, "{}") {
                Err(ShippoError::RateLimit {
                    retry_after_seconds,
                }) => assert_eq!(retry_after_seconds, expected, "header {header:?}"),
                other => panic!("expected rate limit, got {other:?}"),
            }
        }
        assert_eq!(parse_retry_after(Some(" 7 ")), 7);
    }

    #[test]
    fn auth_statuses_ignore_body() {
        for status in [401, 403] {
            let err = classify(status, None, r#"{"detail":"secret internal detail"}"#)
                .expect_err("auth error");
            match err {
                ShippoError::Authentication { message } => {
                    assert!(!message.contains("secret internal detail"));
                }
                other => panic!("expected authentication error, got {other:?}"),
            }
        }
    }

    #[test]
    fn api_error_message_precedence() {
        let cases = [
            (r#"{"detail":"d","message":"m","error":"e"}"#, "d"),
            (r#"{"message":"m","error":"e"}"#, "m"),
            (r#"{"error":"e"}"#, "e"),
            (r#"{"other":"x"}"#, "API error: 400"),
            ("<html>bad gateway</html>", "API error: 400"),
            ("", "API error: 400"),
            (r#"{"detail":null,"message":"m"}"#, "m"),
        ];
        for (body, expected) in cases {
            match classify(400, None, body) {
                Err(ShippoError::Api { status, message }) => {
                    assert_eq!(status, 400);
                    assert_eq!(message, expected, "body {body}");
                }
                other => panic!("expected api error, got {other:?}"),
            }
        }
    }

    #[test]
    fn api_error_stringifies_structured_detail() {
        match classify(422, None, r#"{"detail":{"zip":["invalid"]}}"#) {
            Err(ShippoError::Api { status, message }) => {
                assert_eq!(status, 422);
                assert_eq!(message, r#"{"zip":["invalid"]}"#);
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_success_body_is_decode_error() {
        assert!(matches!(
            classify(200, None, "not json"),
            Err(ShippoError::Decode(_))
        ));
    }

    #[test]
    fn caller_headers_override_computed_ones() {
        let headers = merge_headers(
            "shippo_test_key",
            &[
                ("authorization".to_string(), "Bearer override".to_string()),
                ("x-trace".to_string(), "t-1".to_string()),
            ],
        )
        .expect("headers");
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer override");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(headers.get("x-trace").unwrap(), "t-1");

        let defaults = merge_headers("shippo_test_key", &[]).expect("headers");
        assert_eq!(
            defaults.get(AUTHORIZATION).unwrap(),
            "ShippoToken shippo_test_key"
        );
    }
}
