//! HTTP client for the n8n public REST API
//!
//! Every call goes to `{url}/api/v1/<segments>` with the profile's API key.
//! Path segments are percent-encoded one by one, so a caller-supplied id can
//! never leave its own segment. A 2xx
//! body is parsed as JSON; any other status keeps the server's error text.
//! Calls are not retried and use the transport's default timeouts.

use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{debug, error, instrument};
use url::Url;

use crate::error::{N8nError, N8nResult};
use crate::registry::ServerProfile;

/// Header carrying the n8n API key
pub const API_KEY_HEADER: &str = "X-N8N-API-KEY";

/// Client bound to one server profile
#[derive(Clone)]
pub struct N8nClient {
    http: Client,
    server: String,
    base_url: String,
    api_key: String,
}

impl N8nClient {
    /// Build the shared reqwest client used for all servers
    pub fn http_client() -> N8nResult<Client> {
        Client::builder()
            .user_agent(concat!("n8n-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| N8nError::NetworkFailure(format!("failed to create HTTP client: {}", e)))
    }

    pub fn new(http: Client, profile: &ServerProfile) -> Self {
        Self {
            http,
            server: profile.name.clone(),
            base_url: profile.url.trim_end_matches('/').to_string(),
            api_key: profile.api_key.clone(),
        }
    }

    pub fn server_name(&self) -> &str {
        &self.server
    }

    /// Full URL for an API path given as raw segments, e.g. `["workflows", "42"]`
    pub fn endpoint(&self, segments: &[&str]) -> N8nResult<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            N8nError::MalformedInput(format!("invalid server URL '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                N8nError::MalformedInput(format!("server URL '{}' cannot have a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);

        Ok(url)
    }

    /// Perform one API call
    #[instrument(skip(self, query, body), fields(server = %self.server))]
    pub async fn request(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> N8nResult<Value> {
        let url = self.endpoint(path)?;
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(ACCEPT, "application/json");

        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            error!(error = %e, "n8n request failed without a response");
            N8nError::NetworkFailure(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| N8nError::NetworkFailure(e.to_string()))?;

        if !status.is_success() {
            error!(status = status.as_u16(), "n8n returned an error status");
            return Err(N8nError::RemoteNonSuccess {
                status: status.as_u16(),
                body: error_message(&text),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| N8nError::InvalidResponse(e.to_string()))
    }
}

/// Prefer the `message` field of a JSON error body, else the raw text
fn error_message(text: &str) -> String {
    if let Ok(Value::Object(body)) = serde_json::from_str::<Value>(text) {
        if let Some(message) = body.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        "(empty response body)".to_string()
    } else {
        trimmed.to_string()
    }
}
