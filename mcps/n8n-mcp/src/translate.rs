//! Workflow shape translation
//!
//! Converts the simplified node/connection description accepted by the
//! `create_workflow` tool into n8n's workflow document, and strips the
//! server-assigned fields n8n rejects when a fetched workflow is created again.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::{N8nError, N8nResult};

/// Fields n8n assigns itself and refuses on workflow creation
pub const SERVER_ASSIGNED_FIELDS: &[&str] =
    &["id", "tags", "active", "createdAt", "updatedAt", "versionId"];

const GRID_SPACING_X: i64 = 250;
const GRID_Y: i64 = 300;

/// Highest output slot a connection may reference. n8n nodes expose a
/// handful of outputs; anything past this is rejected before allocating.
pub const MAX_OUTPUT_INDEX: usize = 64;

/// A node in a workflow draft
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NodeSpec {
    /// n8n node type (e.g. "n8n-nodes-base.httpRequest")
    #[serde(rename = "type")]
    #[schemars(description = "Node type, e.g. 'n8n-nodes-base.httpRequest'")]
    pub node_type: String,

    /// Display name, unique within the workflow; connections refer to it
    #[schemars(description = "Unique display name of the node, referenced by connections")]
    pub name: String,

    #[serde(default)]
    #[schemars(description = "Node parameters object")]
    pub parameters: Map<String, Value>,

    #[serde(default)]
    #[schemars(description = "Canvas position [x, y] (default: laid out left to right)")]
    pub position: Option<[i64; 2]>,

    #[serde(default)]
    #[schemars(description = "Node type version (default: 1)")]
    pub type_version: Option<f64>,
}

/// A directed edge between two draft nodes
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionSpec {
    #[schemars(description = "Name of the source node")]
    pub from_node: String,

    #[schemars(description = "Name of the target node")]
    pub to_node: String,

    #[serde(default)]
    #[schemars(description = "Output slot of the source node (default: 0)")]
    pub from_output_index: usize,

    #[serde(default)]
    #[schemars(description = "Input slot of the target node (default: 0)")]
    pub to_input_index: usize,
}

/// Input to [`to_canonical`]
#[derive(Debug, Clone, Default)]
pub struct WorkflowDraft {
    pub name: String,
    pub nodes: Vec<NodeSpec>,
    pub connections: Vec<ConnectionSpec>,
    pub settings: Map<String, Value>,
}

/// A node as n8n stores it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalNode {
    pub parameters: Map<String, Value>,
    #[serde(rename = "type")]
    pub node_type: String,
    pub type_version: f64,
    pub position: [i64; 2],
    pub name: String,
}

/// One end of a connection inside an output slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionTarget {
    /// Target node name
    #[serde(rename = "node")]
    pub target_node: String,
    /// Connection kind, always "main" here
    #[serde(rename = "type")]
    pub kind: String,
    /// Target input slot
    #[serde(rename = "index")]
    pub target_input_index: usize,
}

/// Outgoing connections of one node, indexed by output slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConnections {
    pub main: Vec<Vec<ConnectionTarget>>,
}

/// The workflow document sent to `POST /workflows`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalWorkflow {
    pub name: String,
    pub nodes: Vec<CanonicalNode>,
    pub connections: BTreeMap<String, NodeConnections>,
    pub settings: Map<String, Value>,
}

/// Build an n8n workflow document from a draft.
///
/// Nodes without a position are laid out at `(250 * index, 300)`. Output
/// slots are padded with empty arrays up to the referenced index; existing
/// entries are never reordered or dropped.
///
/// Fails with `MalformedInput` when a connection references an output slot
/// above [`MAX_OUTPUT_INDEX`].
pub fn to_canonical(draft: WorkflowDraft) -> N8nResult<CanonicalWorkflow> {
    if let Some(conn) = draft
        .connections
        .iter()
        .find(|c| c.from_output_index > MAX_OUTPUT_INDEX)
    {
        return Err(N8nError::MalformedInput(format!(
            "connection from '{}' uses output index {} (maximum is {})",
            conn.from_node, conn.from_output_index, MAX_OUTPUT_INDEX
        )));
    }

    let nodes = draft
        .nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| CanonicalNode {
            parameters: node.parameters,
            node_type: node.node_type,
            type_version: node.type_version.unwrap_or(1.0),
            position: node
                .position
                .unwrap_or([GRID_SPACING_X * index as i64, GRID_Y]),
            name: node.name,
        })
        .collect();

    let mut connections: BTreeMap<String, NodeConnections> = BTreeMap::new();
    for conn in draft.connections {
        let slots = conn.from_output_index.checked_add(1).ok_or_else(|| {
            N8nError::MalformedInput(format!("output index {} is out of range", conn.from_output_index))
        })?;
        let outputs = &mut connections.entry(conn.from_node).or_default().main;
        if outputs.len() < slots {
            outputs.resize_with(slots, Vec::new);
        }
        outputs[conn.from_output_index].push(ConnectionTarget {
            target_node: conn.to_node,
            kind: "main".to_string(),
            target_input_index: conn.to_input_index,
        });
    }

    Ok(CanonicalWorkflow {
        name: draft.name,
        nodes,
        connections,
        settings: draft.settings,
    })
}

/// Validate and clean a workflow document before creating it on a server.
///
/// The document must be an object with `nodes` and `connections`; nothing
/// else about its shape is checked.
pub fn sanitize_for_import(document: Value) -> N8nResult<Map<String, Value>> {
    let Value::Object(map) = document else {
        return Err(N8nError::MalformedInput(
            "workflow document must be a JSON object".into(),
        ));
    };

    for field in ["nodes", "connections"] {
        if !map.contains_key(field) {
            return Err(N8nError::MalformedInput(format!(
                "workflow document is missing '{}'",
                field
            )));
        }
    }

    Ok(strip_server_fields(map))
}

/// Produce a portable copy of a workflow fetched from a server.
///
/// Non-object values have nothing to strip and come back as an empty map.
pub fn sanitize_for_export(document: Value) -> Map<String, Value> {
    match document {
        Value::Object(map) => strip_server_fields(map),
        _ => Map::new(),
    }
}

fn strip_server_fields(mut map: Map<String, Value>) -> Map<String, Value> {
    for field in SERVER_ASSIGNED_FIELDS {
        map.remove(*field);
    }
    map
}
