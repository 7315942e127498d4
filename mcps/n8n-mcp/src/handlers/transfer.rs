//! Export/import handler implementations

use serde_json::Value;

use crate::error::{N8nError, N8nResult};
use crate::params::{ExportWorkflowParams, ImportWorkflowParams};
use crate::translate::{sanitize_for_export, sanitize_for_import};

use super::workflow::{apply_name, checked_id, create_and_activate, parse_document};
use super::ApiContext;

/// Fetch a workflow and return a portable copy without server-assigned fields
pub async fn export_workflow(ctx: &ApiContext, params: ExportWorkflowParams) -> N8nResult<String> {
    let id = checked_id(&params.id)?;
    tracing::info!("Exporting workflow {}", id);

    let client = ctx.client(params.server.as_deref()).await?;
    let workflow = client
        .request(reqwest::Method::GET, &["workflows", id], &[], None)
        .await?;

    let portable = sanitize_for_export(workflow);
    serde_json::to_string_pretty(&portable).map_err(|e| N8nError::InvalidResponse(e.to_string()))
}

/// Create a workflow from an exported document.
///
/// The document is validated before any server is contacted.
pub async fn import_workflow(ctx: &ApiContext, params: ImportWorkflowParams) -> N8nResult<String> {
    let mut document = sanitize_for_import(parse_document(&params.workflow_json)?)?;
    apply_name(&mut document, params.name);

    let client = ctx.client(params.server.as_deref()).await?;
    tracing::info!(
        server = client.server_name(),
        "Importing workflow '{}'",
        document.get("name").and_then(serde_json::Value::as_str).unwrap_or("unnamed")
    );

    let outcome = create_and_activate(
        &client,
        Value::Object(document),
        params.activate.unwrap_or(false),
    )
    .await?;
    Ok(outcome.render("imported"))
}
