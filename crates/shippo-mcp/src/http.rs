//! Streamable HTTP host.

use crate::server::ShippoMcpServer;
use anyhow::Context as _;
use axum::Router;
use axum::routing::get;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;

/// `/mcp` for the protocol, `/health` for liveness probes.
pub fn router(server: ShippoMcpServer) -> Router {
    let mcp = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    Router::new()
        .route("/health", get(health))
        .nest_service("/mcp", mcp)
}

async fn health() -> &'static str {
    "ok"
}

/// Serve until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the listener fails while serving.
pub async fn serve(
    listener: TcpListener,
    server: ShippoMcpServer,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("read listener address")?;
    info!(%addr, "serving MCP over streamable HTTP at /mcp");
    axum::serve(listener, router(server))
        .with_graceful_shutdown(shutdown)
        .await
        .context("http server")
}

#[cfg(test)]
mod tests {
    use super::router;
    use crate::server::ShippoMcpServer;
    use shippo_client::Credentials;
    use shippo_tools::ToolRegistry;
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn health_is_ok() -> anyhow::Result<()> {
        let server = ShippoMcpServer::new(ToolRegistry::new(), Credentials::default());
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            axum::serve(listener, router(server))
                .with_graceful_shutdown(async {
                    let _ = rx.await;
                })
                .await
        });

        let resp = reqwest::get(format!("http://{addr}/health")).await?;
        assert!(resp.status().is_success());
        assert_eq!(resp.text().await?, "ok");

        let _ = tx.send(());
        handle.await??;
        Ok(())
    }
}
