use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use shippo_client::Credentials;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout.
    Stdio,
    /// Streamable HTTP at `/mcp`.
    Http,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "shippo-mcp",
    version,
    about = "MCP server exposing the Shippo shipping API as tools"
)]
pub struct Cli {
    #[arg(long, env = "SHIPPO_MCP_TRANSPORT", value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Listen address for the http transport.
    #[arg(long, env = "SHIPPO_MCP_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Default level for this server's own crates. `RUST_LOG` overrides it when set.
    #[arg(long, env = "SHIPPO_MCP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "SHIPPO_MCP_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Timeout for each outbound Shippo request, in seconds. 0 disables it.
    #[arg(long, env = "SHIPPO_MCP_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,

    /// Fallback API key for stdio, used when a call carries none. Ignored over http.
    #[arg(long, env = "SHIPPO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Fallback API origin, paired with `--api-key`.
    #[arg(long, env = "SHIPPO_BASE_URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Process-wide credentials for calls that carry none.
    ///
    /// Empty over http, where every caller must bring a key of its own.
    #[must_use]
    pub fn fallback_credentials(&self) -> Credentials {
        match self.transport {
            Transport::Stdio => Credentials::from_parts(self.api_key.clone(), self.base_url.clone()),
            Transport::Http => Credentials::default(),
        }
    }

    /// The outbound HTTP client shared by every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn http_client(&self) -> anyhow::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if self.http_timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(self.http_timeout_secs));
        }
        builder.build().context("build outbound HTTP client")
    }
}
