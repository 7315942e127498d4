//! MCP Server implementation
//!
//! This module defines the main MCP server that exposes n8n workflow,
//! execution and server-profile operations as tools. Handler
//! implementations are in the handlers module.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use std::sync::Arc;

use crate::error::N8nResult;
use crate::handlers::{self, respond, ApiContext};
use crate::params::*;
use crate::registry::ConfigStore;

/// The main n8n MCP Server
#[derive(Clone)]
pub struct N8nMcpServer {
    ctx: ApiContext,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl N8nMcpServer {
    pub fn new(store: Arc<dyn ConfigStore>) -> N8nResult<Self> {
        Ok(Self {
            ctx: ApiContext::new(store)?,
            tool_router: Self::tool_router(),
        })
    }

    // ========================================================================
    // Workflows
    // ========================================================================

    #[tool(description = "List workflows on an n8n server with id, name and active state")]
    async fn list_workflows(
        &self,
        Parameters(params): Parameters<ListWorkflowsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::list_workflows(&self.ctx, params).await)
    }

    #[tool(description = "Get a workflow by ID, including its nodes, connections and settings")]
    async fn get_workflow(
        &self,
        Parameters(params): Parameters<GetWorkflowParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::get_workflow(&self.ctx, params).await)
    }

    #[tool(
        description = "Create a workflow from a list of nodes and connections between them. Nodes without a position are laid out left to right. Optionally activates it."
    )]
    async fn create_workflow(
        &self,
        Parameters(params): Parameters<CreateWorkflowParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::create_workflow(&self.ctx, params).await)
    }

    #[tool(description = "Replace a workflow with a full workflow document (JSON text)")]
    async fn update_workflow(
        &self,
        Parameters(params): Parameters<UpdateWorkflowParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::update_workflow(&self.ctx, params).await)
    }

    #[tool(description = "Delete a workflow by ID")]
    async fn delete_workflow(
        &self,
        Parameters(params): Parameters<DeleteWorkflowParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::delete_workflow(&self.ctx, params).await)
    }

    #[tool(description = "Activate or deactivate a workflow by ID")]
    async fn set_workflow_active(
        &self,
        Parameters(params): Parameters<SetWorkflowActiveParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::set_workflow_active(&self.ctx, params).await)
    }

    // ========================================================================
    // Executions
    // ========================================================================

    #[tool(description = "List recent workflow executions, optionally filtered by workflow ID and status")]
    async fn list_executions(
        &self,
        Parameters(params): Parameters<ListExecutionsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::list_executions(&self.ctx, params).await)
    }

    // ========================================================================
    // Server Profiles
    // ========================================================================

    #[tool(description = "Add or update an n8n server profile (name, base URL, API key)")]
    async fn add_server(
        &self,
        Parameters(params): Parameters<AddServerParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::add_server(&self.ctx, params).await)
    }

    #[tool(description = "List configured n8n server profiles; API keys are redacted")]
    async fn list_servers(&self) -> Result<CallToolResult, McpError> {
        respond(handlers::list_servers(&self.ctx).await)
    }

    #[tool(description = "Check that an n8n server is reachable with its API key and report round-trip latency")]
    async fn test_server(
        &self,
        Parameters(params): Parameters<TestServerParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::test_server(&self.ctx, params).await)
    }

    #[tool(description = "Remove an n8n server profile")]
    async fn remove_server(
        &self,
        Parameters(params): Parameters<RemoveServerParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::remove_server(&self.ctx, params).await)
    }

    // ========================================================================
    // Export / Import
    // ========================================================================

    #[tool(description = "Export a workflow as portable JSON without server-assigned fields")]
    async fn export_workflow(
        &self,
        Parameters(params): Parameters<ExportWorkflowParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::export_workflow(&self.ctx, params).await)
    }

    #[tool(
        description = "Import a workflow from exported JSON text (must contain nodes and connections). Optionally activates it."
    )]
    async fn import_workflow(
        &self,
        Parameters(params): Parameters<ImportWorkflowParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::import_workflow(&self.ctx, params).await)
    }

    // ========================================================================
    // Node Catalog
    // ========================================================================

    #[tool(description = "Describe common n8n node types with example parameters, optionally by category")]
    async fn describe_node_types(
        &self,
        Parameters(params): Parameters<DescribeNodeTypesParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(handlers::describe_node_types(params))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for N8nMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "n8n MCP Server - manage workflows and executions on one or more n8n \
                 instances through their REST API. Add a server with add_server first; \
                 every workflow tool takes an optional server name and otherwise uses \
                 the default server. Use describe_node_types before create_workflow."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
