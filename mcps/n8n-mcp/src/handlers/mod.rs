//! Handler implementations for n8n MCP tools
//!
//! Organized by domain: workflow, execution, profile, transfer, catalog.
//! Handlers return the caller-facing text; [`respond`] turns that into a
//! tool result at the MCP boundary.

mod catalog;
mod execution;
mod profile;
mod transfer;
mod workflow;

pub use catalog::*;
pub use execution::*;
pub use profile::*;
pub use transfer::*;
pub use workflow::*;

use reqwest::Client;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use std::sync::Arc;

use crate::client::N8nClient;
use crate::error::N8nResult;
use crate::operation::{invoke, RemoteOp};
use crate::registry::{ConfigStore, ServerRegistry};

/// Everything a handler needs: the registry and a shared HTTP client
#[derive(Clone)]
pub struct ApiContext {
    registry: ServerRegistry,
    http: Client,
}

impl ApiContext {
    pub fn new(store: Arc<dyn ConfigStore>) -> N8nResult<Self> {
        Ok(Self {
            registry: ServerRegistry::new(store),
            http: N8nClient::http_client()?,
        })
    }

    pub fn registry(&self) -> &ServerRegistry {
        &self.registry
    }

    /// Client for the named server, or the default server
    pub async fn client(&self, server: Option<&str>) -> N8nResult<N8nClient> {
        let profile = self.registry.resolve(server).await?;
        Ok(N8nClient::new(self.http.clone(), &profile))
    }

    /// Resolve a server and run one remote operation against it
    pub async fn run(&self, server: Option<&str>, op: RemoteOp) -> N8nResult<String> {
        let client = self.client(server).await?;
        invoke(&client, op).await
    }
}

/// Convert handler output to a tool result
pub fn respond(result: N8nResult<String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(text) => Ok(CallToolResult::success(vec![Content::text(text)])),
        Err(e) => {
            tracing::warn!(error = %e, "Tool call failed");
            Err(e.into())
        }
    }
}
