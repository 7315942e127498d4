//! Generic remote operation runner
//!
//! Most tools are one API call plus a rendering choice. A [`RemoteOp`] names
//! the verb, path, query and body; its [`ResponseFormat`] turns the JSON
//! response into the tool's text result.

use reqwest::Method;
use serde_json::Value;

use crate::client::N8nClient;
use crate::error::{N8nError, N8nResult};

/// How a successful response becomes text
#[derive(Clone)]
pub enum ResponseFormat {
    /// A page of items under `data`, one summary line each
    List {
        noun: &'static str,
        summarize: fn(&Value) -> String,
    },
    /// The full response as pretty JSON
    Detail,
    /// A fixed confirmation message
    Confirmation(String),
}

impl ResponseFormat {
    pub fn render(&self, response: &Value) -> N8nResult<String> {
        match self {
            ResponseFormat::List { noun, summarize } => {
                let items = match response {
                    Value::Array(items) => items.as_slice(),
                    _ => response
                        .get("data")
                        .and_then(Value::as_array)
                        .map(Vec::as_slice)
                        .unwrap_or_default(),
                };

                if items.is_empty() {
                    return Ok(format!("No {} found.", noun));
                }

                let mut lines = vec![format!("Found {} {}:", items.len(), noun)];
                lines.extend(items.iter().map(*summarize));

                if let Some(cursor) = response.get("nextCursor").and_then(Value::as_str) {
                    lines.push(format!("More results available (cursor: {})", cursor));
                }

                Ok(lines.join("\n"))
            }
            ResponseFormat::Detail => serde_json::to_string_pretty(response)
                .map_err(|e| N8nError::InvalidResponse(e.to_string())),
            ResponseFormat::Confirmation(message) => Ok(message.clone()),
        }
    }
}

/// One API call and how to render its result
#[derive(Clone)]
pub struct RemoteOp {
    pub method: Method,
    /// Raw path segments below `/api/v1`
    pub path: Vec<String>,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    pub format: ResponseFormat,
}

impl RemoteOp {
    pub fn new(method: Method, path: &[&str], format: ResponseFormat) -> Self {
        Self {
            method,
            path: path.iter().map(|s| s.to_string()).collect(),
            query: Vec::new(),
            body: None,
            format,
        }
    }

    pub fn get(path: &[&str], format: ResponseFormat) -> Self {
        Self::new(Method::GET, path, format)
    }

    /// Add a query parameter
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Add a query parameter when present
    pub fn query_opt(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Run a remote operation and render its response
pub async fn invoke(client: &N8nClient, op: RemoteOp) -> N8nResult<String> {
    let path: Vec<&str> = op.path.iter().map(String::as_str).collect();
    let response = client
        .request(op.method, &path, &op.query, op.body.as_ref())
        .await?;
    op.format.render(&response)
}
