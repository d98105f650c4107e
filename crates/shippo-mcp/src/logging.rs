use crate::config::LogFormat;
use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Everything goes to stderr; stdout belongs to the stdio
/// transport.
///
/// # Errors
///
/// Returns an error if `level` is not a valid filter directive or a subscriber is already
/// installed.
pub fn init(level: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!(
            "shippo_mcp={level},shippo_tools={level},shippo_client={level},warn"
        ))
        .with_context(|| format!("invalid log level {level:?}"))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match format {
        LogFormat::Text => builder.with_ansi(false).try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!(e))
    .context("install tracing subscriber")
}
