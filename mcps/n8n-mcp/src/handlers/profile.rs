//! Server profile handler implementations

use std::time::Instant;

use reqwest::Method;
use url::Url;

use crate::error::{N8nError, N8nResult};
use crate::format::{format_millis, redact_key, summarize_server};
use crate::params::{AddServerParams, RemoveServerParams, TestServerParams};
use crate::registry::ServerProfile;

use super::ApiContext;

/// Check and normalize a base URL: http(s) only, no trailing slash
pub fn normalize_base_url(raw: &str) -> N8nResult<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|e| N8nError::MalformedInput(format!("invalid server URL '{}': {}", trimmed, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(N8nError::MalformedInput(format!(
            "server URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Add or replace a server profile
pub async fn add_server(ctx: &ApiContext, params: AddServerParams) -> N8nResult<String> {
    let name = params.name.trim();
    if name.is_empty() {
        return Err(N8nError::MalformedInput("server name cannot be empty".into()));
    }
    if params.api_key.trim().is_empty() {
        return Err(N8nError::MalformedInput("api_key cannot be empty".into()));
    }
    let url = normalize_base_url(&params.url)?;

    let profile = ServerProfile::new(name, url, params.api_key.trim())
        .with_default(params.is_default.unwrap_or(false));
    let stored = ctx.registry().upsert(profile).await?;

    Ok(format!(
        "Server '{}' saved ({}, key: {}){}.",
        stored.name,
        stored.url,
        redact_key(&stored.api_key),
        if stored.is_default { " as the default server" } else { "" }
    ))
}

/// List server profiles with redacted keys
pub async fn list_servers(ctx: &ApiContext) -> N8nResult<String> {
    let file = ctx.registry().list().await?;
    if file.servers.is_empty() {
        return Ok("No servers configured. Use add_server to add one.".to_string());
    }

    let default = file.default_name();
    let mut lines = vec![format!("Configured servers ({}):", file.servers.len())];
    lines.extend(
        file.servers
            .iter()
            .map(|s| summarize_server(s, Some(s.name.as_str()) == default)),
    );
    Ok(lines.join("\n"))
}

/// Check that a server answers an authenticated request, and how fast
pub async fn test_server(ctx: &ApiContext, params: TestServerParams) -> N8nResult<String> {
    let client = ctx.client(params.name.as_deref()).await?;

    let started = Instant::now();
    client
        .request(Method::GET, &["workflows"], &[("limit", "1".to_string())], None)
        .await?;
    let elapsed = started.elapsed().as_millis() as u64;

    tracing::info!(server = client.server_name(), latency_ms = elapsed, "Server reachable");
    Ok(format!(
        "Server '{}' is reachable at {} (round trip: {}).",
        client.server_name(),
        client.endpoint(&[])?,
        format_millis(elapsed)
    ))
}

/// Remove a server profile
pub async fn remove_server(ctx: &ApiContext, params: RemoveServerParams) -> N8nResult<String> {
    let (removed, new_default) = ctx.registry().remove(&params.name).await?;

    let mut text = format!("Server '{}' removed.", removed.name);
    if removed.is_default {
        match new_default {
            Some(name) => text.push_str(&format!(" Default server is now '{}'.", name)),
            None => text.push_str(" No servers remain."),
        }
    }
    Ok(text)
}
