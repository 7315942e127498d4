//! n8n MCP Library
//!
//! MCP tools for managing n8n workflows across one or more servers.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use n8n_mcp::{registry::JsonFileStore, N8nMcpServer};
//!
//! let store = Arc::new(JsonFileStore::new(JsonFileStore::default_path()));
//! let server = N8nMcpServer::new(store)?;
//! // Serve via stdio or any other rmcp transport
//! ```
//!
//! # Architecture
//!
//! - `registry` - Named server profiles persisted as JSON
//! - `translate` - Node/connection drafts to n8n workflow documents
//! - `client` - n8n REST API client
//! - `operation` - One API call plus a response rendering strategy
//! - `catalog` - Built-in node type catalog
//! - `handlers` - Tool implementations
//! - `server` - MCP server and tool router

pub mod catalog;
pub mod client;
pub mod error;
pub mod format;
pub mod handlers;
pub mod logging;
pub mod operation;
pub mod params;
pub mod registry;
pub mod server;
pub mod translate;
pub mod types;

// Re-export main server type
pub use server::N8nMcpServer;

pub use error::{N8nError, N8nResult};
pub use handlers::ApiContext;
