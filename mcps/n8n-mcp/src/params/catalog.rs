//! Node catalog parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::NodeCategory;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DescribeNodeTypesParams {
    #[schemars(description = "Category filter (trigger, action, logic, data)")]
    pub category: Option<NodeCategory>,
}
