//! Workflow parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::translate::{ConnectionSpec, NodeSpec};

pub const DEFAULT_WORKFLOW_LIMIT: u32 = 100;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListWorkflowsParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub server: Option<String>,
    #[schemars(description = "Maximum number of workflows to return (default: 100)")]
    pub limit: Option<u32>,
    #[schemars(description = "Only return active (true) or inactive (false) workflows")]
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetWorkflowParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub server: Option<String>,
    #[schemars(description = "Workflow ID")]
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateWorkflowParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub server: Option<String>,
    #[schemars(description = "Workflow name")]
    pub name: String,
    #[schemars(description = "Nodes in the workflow; see describe_node_types for types")]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    #[schemars(description = "Connections between nodes, referenced by node name")]
    pub connections: Vec<ConnectionSpec>,
    #[schemars(description = "Workflow settings object (default: {})")]
    pub settings: Option<Map<String, Value>>,
    #[schemars(description = "Activate the workflow after creating it")]
    pub activate: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateWorkflowParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub server: Option<String>,
    #[schemars(description = "Workflow ID")]
    pub id: String,
    #[schemars(
        description = "Full replacement workflow document as JSON text (name, nodes, connections, settings)"
    )]
    pub workflow_json: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteWorkflowParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub server: Option<String>,
    #[schemars(description = "Workflow ID")]
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SetWorkflowActiveParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub server: Option<String>,
    #[schemars(description = "Workflow ID")]
    pub id: String,
    #[schemars(description = "true to activate, false to deactivate")]
    pub active: bool,
}
