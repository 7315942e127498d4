//! Execution parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ExecutionStatus;

pub const DEFAULT_EXECUTION_LIMIT: u32 = 20;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListExecutionsParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub server: Option<String>,
    #[schemars(description = "Only executions of this workflow ID")]
    pub workflow_id: Option<String>,
    #[schemars(description = "Status filter (success, error, waiting, running, canceled)")]
    pub status: Option<ExecutionStatus>,
    #[schemars(description = "Maximum number of executions to return (default: 20)")]
    pub limit: Option<u32>,
}
