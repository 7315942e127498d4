//! n8n MCP Server
//!
//! Exposes the n8n REST API to AI assistants over stdio.
//!
//! # Configuration
//! Server profiles are stored in `~/.binks/n8n-servers.json`, or the file
//! given with `--config` / `N8N_MCP_CONFIG`. Add profiles with the
//! `add_server` tool.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use rmcp::{transport::stdio, ServiceExt};

use n8n_mcp::logging::{init_tracing, LogFormat};
use n8n_mcp::registry::JsonFileStore;
use n8n_mcp::N8nMcpServer;

#[derive(Parser, Debug)]
#[command(name = "n8n-mcp", version, about = "MCP server for n8n workflow automation")]
struct Args {
    /// Path to the server profile file
    #[arg(long, env = "N8N_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Log line format on stderr
    #[arg(long, env = "LOG_FORMAT", value_enum, ignore_case = true, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.log_format)?;

    tracing::info!("Starting n8n MCP Server");

    let store = JsonFileStore::new(args.config.unwrap_or_else(JsonFileStore::default_path));
    tracing::info!("Server profiles: {}", store.path().display());

    let server = N8nMcpServer::new(Arc::new(store))?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
