//! Tracing setup for the stdio server
//!
//! stdout carries the MCP protocol, so every log line goes to stderr.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or blank. Connection-pool chatter
/// from the HTTP stack stays at warn.
const DEFAULT_FILTER: &str = "n8n_mcp=info,rmcp=warn,hyper_util=warn,reqwest=warn";

/// Log line format, `--log-format` / `LOG_FORMAT`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Plain text without ANSI colors
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Build the filter from `RUST_LOG`-style directives, or the default.
///
/// Invalid directives are an error rather than silently dropped.
fn env_filter(directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    let directives = directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(DEFAULT_FILTER);
    Ok(EnvFilter::try_new(directives)?)
}

pub fn init_tracing(format: LogFormat) -> anyhow::Result<()> {
    let filter = env_filter(std::env::var("RUST_LOG").ok().as_deref())?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => subscriber.with_ansi(false).try_init(),
        LogFormat::Json => subscriber.json().flatten_event(true).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
