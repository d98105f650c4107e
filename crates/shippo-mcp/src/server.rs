//! MCP ServerHandler over the Shippo tool registry.

use crate::credentials;
use axum::http::request::Parts;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use shippo_client::Credentials;
use shippo_tools::ToolRegistry;
use std::sync::Arc;
use tracing::debug;

const INSTRUCTIONS: &str = "Tools for the Shippo shipping API: addresses, parcels, shipments \
and rates, label purchases (transactions), refunds, tracking, carrier accounts, customs, \
manifests, batches, pickups, orders, service groups, parcel templates and checkout live rates.\n\
Typical flow: create_shipment -> pick a rate -> create_transaction to buy the label -> \
get_tracking_status.\n\
Every tool accepts `format`: `markdown` (default) or `json`. Failures return a JSON \
{error, details} envelope with isError set.\n\
Credentials: send X-Shippo-Api-Key (or Authorization: Bearer) over HTTP, or `shippoApiKey` \
in the request _meta.";

/// Cloned once per MCP session; every clone shares the same registry.
#[derive(Clone)]
pub struct ShippoMcpServer {
    registry: Arc<ToolRegistry>,
    fallback: Arc<Credentials>,
}

impl ShippoMcpServer {
    #[must_use]
    pub fn new(registry: ToolRegistry, fallback: Credentials) -> Self {
        Self {
            registry: Arc::new(registry),
            fallback: Arc::new(fallback),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }
}

impl ServerHandler for ShippoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                title: Some("Shippo MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.registry.list_tools(),
            ..Default::default()
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let mut metas: Vec<&JsonObject> = Vec::with_capacity(2);
        if let Some(meta) = &request.meta {
            metas.push(&meta.0);
        }
        metas.push(&context.meta.0);

        let credentials = credentials::resolve(
            context.extensions.get::<Parts>(),
            &metas,
            &self.fallback,
        );
        debug!(
            tool = %request.name,
            has_key = credentials.api_key().is_some(),
            "dispatching tool call"
        );

        Ok(self
            .registry
            .call_tool(&request.name, request.arguments, credentials)
            .await)
    }
}
