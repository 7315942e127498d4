//! Execution handler implementations

use crate::error::N8nResult;
use crate::format::summarize_execution;
use crate::operation::{RemoteOp, ResponseFormat};
use crate::params::{ListExecutionsParams, DEFAULT_EXECUTION_LIMIT};

use super::ApiContext;

/// List recent executions, optionally filtered by workflow and status
pub async fn list_executions(ctx: &ApiContext, params: ListExecutionsParams) -> N8nResult<String> {
    let limit = params.limit.unwrap_or(DEFAULT_EXECUTION_LIMIT);
    tracing::info!(
        workflow = params.workflow_id.as_deref().unwrap_or("*"),
        "Listing executions (limit: {})",
        limit
    );

    let op = RemoteOp::get(
        &["executions"],
        ResponseFormat::List {
            noun: "executions",
            summarize: summarize_execution,
        },
    )
    .query("limit", limit)
    .query_opt("workflowId", params.workflow_id)
    .query_opt("status", params.status);

    ctx.run(params.server.as_deref(), op).await
}
