//! Per-call credential resolution.
//!
//! Sources in precedence order: HTTP request headers, then the request's `_meta`, then the
//! process-wide fallback (stdio only). The first source that carries an API key supplies the
//! whole credential set, base URL included.

use axum::http::HeaderMap;
use axum::http::request::Parts;
use rmcp::model::JsonObject;
use shippo_client::Credentials;

pub const API_KEY_HEADER: &str = "x-shippo-api-key";
pub const BASE_URL_HEADER: &str = "x-shippo-base-url";
pub const META_API_KEY: &str = "shippoApiKey";
pub const META_BASE_URL: &str = "shippoBaseUrl";

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let v = headers.get(name).and_then(|h| h.to_str().ok())?.trim();
    (!v.is_empty()).then(|| v.to_string())
}

fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    if let Some(v) = header_value(headers, API_KEY_HEADER) {
        return Some(v);
    }

    let authz = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())?;
    let token = authz
        .strip_prefix("Bearer ")
        .or_else(|| authz.strip_prefix("ShippoToken "))
        .map(str::trim)?;
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[must_use]
pub fn from_headers(headers: &HeaderMap) -> Credentials {
    Credentials::from_parts(
        extract_api_key(headers),
        header_value(headers, BASE_URL_HEADER),
    )
}

#[must_use]
pub fn from_meta(meta: &JsonObject) -> Credentials {
    let field = |name: &str| meta.get(name).and_then(|v| v.as_str()).map(str::to_string);
    Credentials::from_parts(field(META_API_KEY), field(META_BASE_URL))
}

/// Pick the highest-precedence source that carries a key.
#[must_use]
pub fn resolve(parts: Option<&Parts>, metas: &[&JsonObject], fallback: &Credentials) -> Credentials {
    let mut creds = parts.map(|p| from_headers(&p.headers)).unwrap_or_default();
    for meta in metas {
        creds = creds.or(&from_meta(meta));
    }
    creds.or(fallback)
}

#[cfg(test)]
mod tests {
    use super::{from_headers, resolve};
    use axum::http::{HeaderMap, HeaderValue, Request};
    use rmcp::model::JsonObject;
    use serde_json::json;
    use shippo_client::Credentials;

    fn meta(v: serde_json::Value) -> JsonObject {
        v.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn dedicated_header_beats_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert("x-shippo-api-key", HeaderValue::from_static("hdr_key"));
        headers.insert("authorization", HeaderValue::from_static("Bearer bearer_key"));
        assert_eq!(from_headers(&headers).api_key(), Some("hdr_key"));
    }

    #[test]
    fn authorization_accepts_both_schemes() {
        for (value, expected) in [
            ("Bearer abc", Some("abc")),
            ("ShippoToken xyz", Some("xyz")),
            ("Basic Zm9v", None),
            ("Bearer   ", None),
        ] {
            let mut headers = HeaderMap::new();
            headers.insert("authorization", HeaderValue::from_static(value));
            assert_eq!(from_headers(&headers).api_key(), expected, "{value}");
        }
    }

    #[test]
    fn headers_then_meta_then_fallback() {
        let (parts, ()) = Request::builder()
            .header("x-shippo-api-key", "hdr_key")
            .body(())
            .expect("request")
            .into_parts();
        let m = meta(json!({"shippoApiKey": "meta_key", "shippoBaseUrl": "http://meta.local"}));
        let fallback = Credentials::new("env_key").with_base_url("http://env.local");

        let creds = resolve(Some(&parts), &[&m], &fallback);
        assert_eq!(creds.api_key(), Some("hdr_key"));
        assert_eq!(creds.base_url(), "https://api.goshippo.com");

        let creds = resolve(None, &[&m], &fallback);
        assert_eq!(creds.api_key(), Some("meta_key"));
        assert_eq!(creds.base_url(), "http://meta.local");

        let creds = resolve(None, &[], &fallback);
        assert_eq!(creds.api_key(), Some("env_key"));
        assert_eq!(creds.base_url(), "http://env.local");
    }

    #[test]
    fn base_url_header_alone_never_carries_the_fallback_key() {
        let (parts, ()) = Request::builder()
            .header("x-shippo-base-url", "http://elsewhere.test")
            .body(())
            .expect("request")
            .into_parts();
        let fallback = Credentials::new("operator_key");

        let creds = resolve(Some(&parts), &[], &fallback);
        assert_eq!(creds.api_key(), Some("operator_key"));
        assert_eq!(creds.base_url(), "https://api.goshippo.com");

        let m = meta(json!({"shippoBaseUrl": "http://elsewhere.test"}));
        let creds = resolve(None, &[&m], &fallback);
        assert_eq!(creds.base_url(), "https://api.goshippo.com");

        let creds = resolve(Some(&parts), &[], &Credentials::default());
        assert_eq!(creds.api_key(), None);
    }

    #[test]
    fn blank_values_fall_through() {
        let m = meta(json!({"shippoApiKey": "  ", "shippoBaseUrl": 7}));
        let creds = resolve(None, &[&m], &Credentials::new("env_key"));
        assert_eq!(creds.api_key(), Some("env_key"));
        assert_eq!(creds.base_url(), "https://api.goshippo.com");
    }

    #[test]
    fn nothing_anywhere_means_no_key() {
        let creds = resolve(None, &[], &Credentials::default());
        assert_eq!(creds.api_key(), None);
    }
}
