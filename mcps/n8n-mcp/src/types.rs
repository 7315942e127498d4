//! Shared enums and outcome types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::error::N8nError;

/// Execution status filter accepted by `GET /executions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Error,
    Waiting,
    Running,
    Canceled,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "success",
            ExecutionStatus::Error => "error",
            ExecutionStatus::Waiting => "waiting",
            ExecutionStatus::Running => "running",
            ExecutionStatus::Canceled => "canceled",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node catalog category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    /// Starts a workflow
    Trigger,
    /// Talks to an external service
    Action,
    /// Routes or pauses items
    Logic,
    /// Reshapes item data
    Data,
}

impl NodeCategory {
    pub const ALL: [NodeCategory; 4] = [
        NodeCategory::Trigger,
        NodeCategory::Action,
        NodeCategory::Logic,
        NodeCategory::Data,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Trigger => "trigger",
            NodeCategory::Action => "action",
            NodeCategory::Logic => "logic",
            NodeCategory::Data => "data",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of creating a workflow and optionally activating it.
///
/// Activation runs only after a successful create, and its failure does not
/// undo the create: both outcomes are reported together.
#[derive(Debug)]
pub struct CreateOutcome {
    /// Workflow document returned by the server
    pub created: Value,
    /// `None` when activation was not requested
    pub activation: Option<Result<(), N8nError>>,
}

impl CreateOutcome {
    pub fn id(&self) -> Option<String> {
        match self.created.get("id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        self.created
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("unnamed")
    }

    /// Created but activation failed
    pub fn is_partial(&self) -> bool {
        matches!(self.activation, Some(Err(_)))
    }

    /// Caller-facing text for the whole operation
    pub fn render(&self, verb: &str) -> String {
        let mut text = format!(
            "Workflow {} successfully: \"{}\" (id: {})",
            verb,
            self.name(),
            self.id().as_deref().unwrap_or("unknown")
        );

        match &self.activation {
            None => {}
            Some(Ok(())) => text.push_str("\nWorkflow activated."),
            Some(Err(e)) => {
                text.push_str(&format!("\nWarning: activation failed: {}", e));
                text.push_str("\nThe workflow exists but is inactive.");
            }
        }

        text
    }
}
