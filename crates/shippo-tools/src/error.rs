//! Tool-layer failures and the error envelope they are reported in.

use serde::Serialize;
use serde_json::{Value, json};
use shippo_client::{ErrorKind, ShippoError};
use thiserror::Error;

/// One problem with a tool call's arguments, reported under `details.violations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Violation {
    UnknownParameter {
        parameter: String,
        #[serde(rename = "didYouMean", skip_serializing_if = "Vec::is_empty")]
        did_you_mean: Vec<String>,
    },
    MissingParameter {
        parameter: String,
    },
    /// Wrong type, value outside an enum, or out of bounds.
    InvalidValue { field: String, message: String },
    /// Passed the schema but did not decode into the tool's input type.
    Malformed { message: String },
}

#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments did not match the tool's input schema. No request was sent.
    #[error("{message}")]
    Validation {
        message: String,
        violations: Vec<Violation>,
    },

    #[error("Unknown tool: {name}")]
    UnknownTool {
        name: String,
        suggestions: Vec<String>,
    },

    #[error(transparent)]
    Client(#[from] ShippoError),

    #[error("Failed to render result: {0}")]
    Render(String),
}

impl ToolError {
    /// Stable tag reported as `details.type`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ToolError::Validation { .. } => "validation",
            ToolError::UnknownTool { .. } => "unknown_tool",
            ToolError::Client(e) => e.kind().as_str(),
            ToolError::Render(_) => "render",
        }
    }

    #[must_use]
    pub fn details(&self) -> Value {
        let mut details = serde_json::Map::new();
        details.insert("type".into(), json!(self.kind()));
        match self {
            ToolError::Validation { violations, .. } => {
                details.insert("violations".into(), json!(violations));
            }
            ToolError::UnknownTool { suggestions, .. } => {
                details.insert("suggestions".into(), json!(suggestions));
            }
            ToolError::Client(e) => {
                if let Some(status) = e.status() {
                    details.insert("status".into(), json!(status));
                }
                if let Some(secs) = e.retry_after_seconds() {
                    details.insert("retryAfterSeconds".into(), json!(secs));
                }
                if e.kind() != ErrorKind::Authentication {
                    details.insert("retryable".into(), json!(e.is_retryable()));
                }
            }
            ToolError::Render(_) => {}
        }
        Value::Object(details)
    }

    /// `{error, details}` as carried in the text block of a failed tool call.
    #[must_use]
    pub fn envelope(&self) -> Value {
        json!({
            "error": self.to_string(),
            "details": self.details(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ToolError, Violation};
    use serde_json::json;
    use shippo_client::ShippoError;

    #[test]
    fn rate_limit_envelope_carries_hint() {
        let e = ToolError::from(ShippoError::RateLimit {
            retry_after_seconds: 120,
        });
        let env = e.envelope();
        assert_eq!(env["details"]["type"], "rate_limit");
        assert_eq!(env["details"]["status"], 429);
        assert_eq!(env["details"]["retryAfterSeconds"], 120);
        assert_eq!(env["details"]["retryable"], true);
        assert_eq!(
            env["error"],
            "Rate limit exceeded. Retry after 120 seconds."
        );
    }

    #[test]
    fn api_envelope_carries_status() {
        let e = ToolError::from(ShippoError::Api {
            status: 404,
            message: "Not found.".into(),
        });
        assert_eq!(
            e.envelope(),
            json!({
                "error": "Not found.",
                "details": {"type": "api", "status": 404, "retryable": false}
            })
        );
    }

    #[test]
    fn validation_envelope_lists_violations() {
        let e = ToolError::Validation {
            message: "Invalid params: unknown parameter 'reslts' (did you mean 'results'?)".into(),
            violations: vec![
                Violation::UnknownParameter {
                    parameter: "reslts".into(),
                    did_you_mean: vec!["results".into()],
                },
                Violation::MissingParameter {
                    parameter: "address_id".into(),
                },
            ],
        };
        let env = e.envelope();
        assert_eq!(env["details"]["type"], "validation");
        assert_eq!(
            env["details"]["violations"],
            json!([
                {"type": "unknown_parameter", "parameter": "reslts", "didYouMean": ["results"]},
                {"type": "missing_parameter", "parameter": "address_id"}
            ])
        );
    }
}
