//! Parameter types for n8n MCP tools
//!
//! Organized by domain: workflow, execution, profile, transfer, catalog

mod catalog;
mod execution;
mod profile;
mod transfer;
mod workflow;

pub use catalog::*;
pub use execution::*;
pub use profile::*;
pub use transfer::*;
pub use workflow::*;
