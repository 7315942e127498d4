//! Error types for n8n operations
//!
//! Covers registry lookups, the durable server store, caller-supplied input,
//! and the two ways an outbound API call can fail: the server answered with a
//! non-2xx status, or no response arrived at all.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while serving a tool call
#[derive(Error, Debug)]
pub enum N8nError {
    /// The registry holds no server profiles
    #[error("no n8n server configured - add one with the add_server tool")]
    NoServerConfigured,

    /// A server was requested by name but no profile matches
    #[error("n8n server '{0}' not found")]
    ServerNotFound(String),

    /// The API answered with a status outside 2xx
    #[error("n8n API returned status {status}: {body}")]
    RemoteNonSuccess {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, or the raw body text
        body: String,
    },

    /// No response was received (connection refused, DNS, TLS, ...)
    #[error("network failure (status 0): {0}")]
    NetworkFailure(String),

    /// Caller-supplied input could not be used
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A 2xx response whose body was not JSON
    #[error("invalid response from n8n: {0}")]
    InvalidResponse(String),

    /// Reading or writing the server store failed
    #[error("server store error: {0}")]
    Store(String),
}

impl N8nError {
    /// Status code to report for this error, if it came from the remote side.
    ///
    /// Network failures report 0, distinct from any server-returned status.
    pub fn status(&self) -> Option<u16> {
        match self {
            N8nError::RemoteNonSuccess { status, .. } => Some(*status),
            N8nError::NetworkFailure(_) => Some(0),
            _ => None,
        }
    }
}

impl From<std::io::Error> for N8nError {
    fn from(e: std::io::Error) -> Self {
        N8nError::Store(e.to_string())
    }
}

impl From<N8nError> for McpError {
    fn from(e: N8nError) -> Self {
        match e {
            N8nError::MalformedInput(_) => McpError::invalid_params(e.to_string(), None),
            _ => McpError::internal_error(e.to_string(), None),
        }
    }
}

/// Result type alias for n8n operations
pub type N8nResult<T> = Result<T, N8nError>;
