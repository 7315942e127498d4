//! Export/import parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportWorkflowParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub server: Option<String>,
    #[schemars(description = "Workflow ID")]
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ImportWorkflowParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub server: Option<String>,
    #[schemars(description = "Workflow document as JSON text; must contain nodes and connections")]
    pub workflow_json: String,
    #[schemars(description = "Name for the imported workflow (default: name in the document)")]
    pub name: Option<String>,
    #[schemars(description = "Activate the workflow after importing it")]
    pub activate: Option<bool>,
}
