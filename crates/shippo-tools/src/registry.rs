//! Tool listing and dispatch.

use crate::catalog::{self, ToolDef};
use crate::error::{ToolError, Violation};
use crate::format::render;
use crate::params::FormatArg;
use crate::semantics::annotations_for;
use crate::validate::{closest_names, validate_arguments};
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::Value;
use shippo_client::{Credentials, ShippoClient};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// The fixed set of Shippo tools.
///
/// Holds no per-caller state: credentials arrive with each call, and only the HTTP
/// connection pool is shared between calls.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
    index: HashMap<&'static str, usize>,
    http: reqwest::Client,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_http_client(reqwest::Client::new())
    }

    /// Use `http` for every outbound request (e.g. one configured with a timeout).
    #[must_use]
    pub fn with_http_client(http: reqwest::Client) -> Self {
        let tools = catalog::tools();
        let index = tools
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name, i))
            .collect();
        Self { tools, index, http }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.iter().map(|def| def.name)
    }

    /// MCP descriptors for every tool, in catalog order.
    #[must_use]
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools.iter().map(describe).collect()
    }

    #[must_use]
    pub fn tool(&self, name: &str) -> Option<Tool> {
        self.index.get(name).map(|&i| describe(&self.tools[i]))
    }

    /// Run `name` and wrap the outcome as an MCP tool result.
    ///
    /// Failures never surface as protocol errors: they come back as an error result whose
    /// single text block is the JSON `{error, details}` envelope.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
        credentials: Credentials,
    ) -> CallToolResult {
        let args = Value::Object(arguments.unwrap_or_default());
        match self.try_call_tool(name, args, credentials).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!(tool = name, kind = e.kind(), error = %e, "tool call failed");
                error_result(&e)
            }
        }
    }

    /// Validate, decode, execute and render one call.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError`] for unknown tools, invalid arguments, remote failures and
    /// rendering failures.
    pub async fn try_call_tool(
        &self,
        name: &str,
        args: Value,
        credentials: Credentials,
    ) -> Result<String, ToolError> {
        let def = self.lookup(name)?;
        validate_arguments(&def.schema, &args)?;
        let format = serde_json::from_value::<FormatArg>(args.clone())
            .map_err(decode_error)?
            .format;
        let prepared = def.prepare(args).map_err(decode_error)?;

        let client = ShippoClient::with_http_client(self.http.clone(), credentials);
        let started = Instant::now();
        let output = prepared(client).await?;
        debug!(
            tool = name,
            format = format.as_str(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tool call succeeded"
        );
        render(&output, format)
    }

    fn lookup(&self, name: &str) -> Result<&ToolDef, ToolError> {
        match self.index.get(name) {
            Some(&i) => Ok(&self.tools[i]),
            None => {
                let names: Vec<&str> = self.names().collect();
                Err(ToolError::UnknownTool {
                    name: name.to_string(),
                    suggestions: closest_names(name, &names),
                })
            }
        }
    }
}

fn describe(def: &ToolDef) -> Tool {
    let schema = match &def.schema {
        Value::Object(obj) => obj.clone(),
        _ => JsonObject::new(),
    };
    let mut tool = Tool::new(def.name, def.description, Arc::new(schema));
    tool.annotations = Some(annotations_for(def.kind));
    tool
}

fn decode_error(e: serde_json::Error) -> ToolError {
    ToolError::Validation {
        message: format!("Invalid params: {e}"),
        violations: vec![Violation::Malformed {
            message: e.to_string(),
        }],
    }
}

fn error_result(e: &ToolError) -> CallToolResult {
    let envelope = e.envelope();
    let text = serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| envelope.to_string());
    CallToolResult::error(vec![Content::text(text)])
}

#[cfg(test)]
mod tests {
    use super::ToolRegistry;
    use serde_json::json;
    use shippo_client::Credentials;

    #[tokio::test]
    async fn unknown_tool_suggests_close_names() {
        let registry = ToolRegistry::new();
        let err = registry
            .try_call_tool("list_adresses", json!({}), Credentials::new("k"))
            .await
            .expect_err("unknown");
        let env = err.envelope();
        assert_eq!(env["details"]["type"], "unknown_tool");
        let suggestions = env["details"]["suggestions"].as_array().expect("array");
        assert!(suggestions.contains(&json!("list_addresses")));
    }

    #[tokio::test]
    async fn missing_required_argument_is_reported_before_any_request() {
        let registry = ToolRegistry::new();
        let err = registry
            .try_call_tool("get_address", json!({}), Credentials::default())
            .await
            .expect_err("missing");
        assert_eq!(err.kind(), "validation");
        assert_eq!(
            err.to_string(),
            "Invalid params: missing required parameter 'address_id'"
        );
    }

    #[tokio::test]
    async fn missing_credentials_become_an_authentication_result() {
        let registry = ToolRegistry::new();
        let result = registry
            .call_tool("list_addresses", None, Credentials::default())
            .await;
        assert_eq!(result.is_error, Some(true));
        let text = result
            .content
            .first()
            .and_then(|c| c.raw.as_text())
            .map(|t| t.text.as_str())
            .expect("text");
        let env: serde_json::Value = serde_json::from_str(text).expect("json");
        assert_eq!(env["details"]["type"], "authentication");
    }

    #[test]
    fn descriptors_carry_annotations() {
        let registry = ToolRegistry::new();
        let tool = registry.tool("delete_service_group").expect("tool");
        let ann = tool.annotations.expect("annotations");
        assert_eq!(ann.destructive_hint, Some(true));
        assert_eq!(ann.read_only_hint, Some(false));
        assert!(registry.tool("nope").is_none());
    }
}
