//! Node catalog handler

use crate::catalog::describe;
use crate::error::N8nResult;
use crate::params::DescribeNodeTypesParams;

/// Describe the built-in node type catalog
pub fn describe_node_types(params: DescribeNodeTypesParams) -> N8nResult<String> {
    Ok(describe(params.category))
}
