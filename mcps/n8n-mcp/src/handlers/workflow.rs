//! Workflow handler implementations

use reqwest::Method;
use serde_json::{json, Map, Value};

use crate::client::N8nClient;
use crate::error::{N8nError, N8nResult};
use crate::format::summarize_workflow;
use crate::operation::{RemoteOp, ResponseFormat};
use crate::params::{
    CreateWorkflowParams, DeleteWorkflowParams, GetWorkflowParams, ListWorkflowsParams,
    SetWorkflowActiveParams, UpdateWorkflowParams, DEFAULT_WORKFLOW_LIMIT,
};
use crate::translate::{sanitize_for_export, to_canonical, WorkflowDraft};
use crate::types::CreateOutcome;

use super::ApiContext;

const WORKFLOWS: &str = "workflows";

/// Check a workflow id before it becomes a path segment.
///
/// Dot segments are dropped by URL normalization, so they are refused here.
pub(crate) fn checked_id(id: &str) -> N8nResult<&str> {
    let id = id.trim();
    if id.is_empty() || id == "." || id == ".." {
        return Err(N8nError::MalformedInput(format!("invalid workflow id '{}'", id)));
    }
    Ok(id)
}

/// Parse caller-supplied JSON text
pub(crate) fn parse_document(text: &str) -> N8nResult<Value> {
    serde_json::from_str(text).map_err(|e| N8nError::MalformedInput(format!("invalid JSON: {}", e)))
}

/// List workflows on a server
pub async fn list_workflows(ctx: &ApiContext, params: ListWorkflowsParams) -> N8nResult<String> {
    let limit = params.limit.unwrap_or(DEFAULT_WORKFLOW_LIMIT);
    tracing::info!("Listing workflows (limit: {})", limit);

    let op = RemoteOp::get(
        &[WORKFLOWS],
        ResponseFormat::List {
            noun: "workflows",
            summarize: summarize_workflow,
        },
    )
    .query("limit", limit)
    .query_opt("active", params.active);

    ctx.run(params.server.as_deref(), op).await
}

/// Fetch one workflow with its nodes and connections
pub async fn get_workflow(ctx: &ApiContext, params: GetWorkflowParams) -> N8nResult<String> {
    let id = checked_id(&params.id)?;
    let op = RemoteOp::get(&[WORKFLOWS, id], ResponseFormat::Detail);
    ctx.run(params.server.as_deref(), op).await
}

/// Build a workflow from node/connection specs and create it
pub async fn create_workflow(ctx: &ApiContext, params: CreateWorkflowParams) -> N8nResult<String> {
    if params.nodes.is_empty() {
        return Err(N8nError::MalformedInput(
            "a workflow needs at least one node".into(),
        ));
    }

    let workflow = to_canonical(WorkflowDraft {
        name: params.name,
        nodes: params.nodes,
        connections: params.connections,
        settings: params.settings.unwrap_or_default(),
    })?;
    let body = serde_json::to_value(&workflow)
        .map_err(|e| N8nError::MalformedInput(e.to_string()))?;

    tracing::info!(
        nodes = workflow.nodes.len(),
        "Creating workflow '{}'",
        workflow.name
    );

    let client = ctx.client(params.server.as_deref()).await?;
    let outcome = create_and_activate(&client, body, params.activate.unwrap_or(false)).await?;
    Ok(outcome.render("created"))
}

/// Replace a workflow with a full document
pub async fn update_workflow(ctx: &ApiContext, params: UpdateWorkflowParams) -> N8nResult<String> {
    let id = checked_id(&params.id)?;
    let document = match parse_document(&params.workflow_json)? {
        document @ Value::Object(_) => sanitize_for_export(document),
        _ => {
            return Err(N8nError::MalformedInput(
                "workflow_json must be a JSON object".into(),
            ))
        }
    };
    if document.is_empty() {
        return Err(N8nError::MalformedInput(
            "workflow_json has no updatable fields (server-assigned fields are ignored)".into(),
        ));
    }

    tracing::info!("Updating workflow {}", id);

    let op = RemoteOp::new(
        Method::PUT,
        &[WORKFLOWS, id],
        ResponseFormat::Confirmation(format!("Workflow {} updated successfully.", id)),
    )
    .body(Value::Object(document));

    ctx.run(params.server.as_deref(), op).await
}

/// Delete a workflow
pub async fn delete_workflow(ctx: &ApiContext, params: DeleteWorkflowParams) -> N8nResult<String> {
    let id = checked_id(&params.id)?;
    tracing::info!("Deleting workflow {}", id);

    let op = RemoteOp::new(
        Method::DELETE,
        &[WORKFLOWS, id],
        ResponseFormat::Confirmation(format!("Workflow {} deleted.", id)),
    );
    ctx.run(params.server.as_deref(), op).await
}

/// Activate or deactivate a workflow
pub async fn set_workflow_active(
    ctx: &ApiContext,
    params: SetWorkflowActiveParams,
) -> N8nResult<String> {
    let id = checked_id(&params.id)?;
    let client = ctx.client(params.server.as_deref()).await?;
    set_active(&client, id, params.active).await?;

    Ok(format!(
        "Workflow {} {}.",
        id,
        if params.active { "activated" } else { "deactivated" }
    ))
}

pub(crate) async fn set_active(client: &N8nClient, id: &str, active: bool) -> N8nResult<Value> {
    let id = checked_id(id)?;
    tracing::info!(server = client.server_name(), "Setting workflow {} active={}", id, active);
    client
        .request(
            Method::PATCH,
            &[WORKFLOWS, id],
            &[],
            Some(&json!({ "active": active })),
        )
        .await
}

/// Create a workflow, then activate it if asked.
///
/// A failed activation is carried in the outcome rather than returned as an
/// error, and the created workflow is left in place.
pub(crate) async fn create_and_activate(
    client: &N8nClient,
    body: Value,
    activate: bool,
) -> N8nResult<CreateOutcome> {
    let created = client
        .request(Method::POST, &[WORKFLOWS], &[], Some(&body))
        .await?;

    let mut outcome = CreateOutcome {
        created,
        activation: None,
    };

    if activate {
        let result = match outcome.id() {
            Some(id) => set_active(client, &id, true).await.map(|_| ()),
            None => Err(N8nError::InvalidResponse(
                "created workflow has no id".into(),
            )),
        };

        if let Err(e) = &result {
            tracing::warn!(error = %e, "Workflow created but activation failed");
        }
        outcome.activation = Some(result);
    }

    Ok(outcome)
}

/// Replace the document's name when an override is given
pub(crate) fn apply_name(document: &mut Map<String, Value>, name: Option<String>) {
    if let Some(name) = name {
        document.insert("name".to_string(), Value::String(name));
    }
}
