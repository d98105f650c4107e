use anyhow::Context as _;
use clap::Parser as _;
use rmcp::ServiceExt as _;
use shippo_mcp::{Cli, ShippoMcpServer, Transport, http, logging};
use shippo_tools::ToolRegistry;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_format)?;

    let registry = ToolRegistry::with_http_client(cli.http_client()?);
    let fallback = cli.fallback_credentials();
    if cli.transport == Transport::Http && cli.api_key.is_some() {
        warn!("ignoring SHIPPO_API_KEY over http; callers must send their own key");
    }
    info!(
        transport = ?cli.transport,
        tools = registry.len(),
        fallback_key = fallback.api_key().is_some(),
        base_url = fallback.base_url(),
        "shippo-mcp starting"
    );
    let server = ShippoMcpServer::new(registry, fallback);

    match cli.transport {
        Transport::Stdio => {
            let service = server
                .serve(rmcp::transport::io::stdio())
                .await
                .context("start stdio transport")?;
            service.waiting().await.context("stdio transport")?;
        }
        Transport::Http => {
            let listener = TcpListener::bind(cli.bind)
                .await
                .with_context(|| format!("bind {}", cli.bind))?;
            http::serve(listener, server, shutdown_signal()).await?;
        }
    }

    info!("shippo-mcp stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
