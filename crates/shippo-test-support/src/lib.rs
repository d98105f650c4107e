//! Helpers shared by the integration suites of every crate in the workspace.

mod mcp_session;
mod mock;

pub use mcp_session::{McpStreamableHttpSession, tool_call_text};
pub use mock::{MockResponse, MockShippo, RecordedRequest};

use anyhow::Context as _;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// A server binary running in http mode on a private localhost port.
///
/// The process is killed and reaped on drop, so a failing test never leaks it.
pub struct ServerProcess {
    child: Child,
    base_url: String,
}

impl ServerProcess {
    /// Start `bin --transport http` and wait until `/health` answers.
    ///
    /// Shippo credentials are scrubbed from the inherited environment; pass them through
    /// `env` when a test needs them set.
    ///
    /// # Errors
    ///
    /// Returns an error if the binary cannot be spawned or never becomes healthy.
    pub async fn spawn_http(bin: &str, env: &[(&str, &str)]) -> anyhow::Result<Self> {
        let port = free_port()?;
        let mut cmd = Command::new(bin);
        cmd.args(["--transport", "http", "--bind", &format!("127.0.0.1:{port}")])
            .env_remove("SHIPPO_API_KEY")
            .env_remove("SHIPPO_BASE_URL")
            .env("RUST_LOG", "warn")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());
        for (k, v) in env {
            cmd.env(k, v);
        }
        let child = cmd.spawn().with_context(|| format!("spawn {bin}"))?;
        let server = Self {
            child,
            base_url: format!("http://127.0.0.1:{port}"),
        };
        wait_healthy(&format!("{}/health", server.base_url), Duration::from_secs(15)).await?;
        Ok(server)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Drop for ServerProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// An ephemeral localhost port that was free a moment ago. Nothing holds it afterwards.
fn free_port() -> anyhow::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").context("bind ephemeral port")?;
    Ok(listener.local_addr()?.port())
}

/// Poll `url` until it answers 2xx.
///
/// # Errors
///
/// Returns an error once `deadline` has passed without a successful response.
pub async fn wait_healthy(url: &str, deadline: Duration) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let started = Instant::now();
    while started.elapsed() < deadline {
        if let Ok(resp) = client.get(url).send().await
            && resp.status().is_success()
        {
            return Ok(());
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    anyhow::bail!("{url} not healthy after {deadline:?}")
}
