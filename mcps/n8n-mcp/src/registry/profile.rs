//! Server profiles and the rules for selecting and mutating them
//!
//! `ServerFile` is the whole durable record. The methods here are pure so the
//! single-default invariant can be tested without touching storage.

use serde::{Deserialize, Serialize};

use crate::error::{N8nError, N8nResult};

/// A named n8n instance: base URL plus API key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerProfile {
    /// Unique name used to select the server
    pub name: String,
    /// Base URL, without trailing slash (e.g. "https://n8n.example.com")
    pub url: String,
    /// API key sent as `X-N8N-API-KEY`
    pub api_key: String,
    /// Whether this profile is used when no server name is given
    #[serde(default)]
    pub is_default: bool,
}

impl ServerProfile {
    pub fn new(name: impl Into<String>, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            api_key: api_key.into(),
            is_default: false,
        }
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }
}

/// The durable record: `{ "servers": [...] }` in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerFile {
    #[serde(default)]
    pub servers: Vec<ServerProfile>,
}

impl ServerFile {
    /// Select a server by exact name, or the default one when no name is given.
    ///
    /// Without a name the explicitly flagged default wins, else the first
    /// stored profile.
    pub fn resolve(&self, name: Option<&str>) -> N8nResult<&ServerProfile> {
        match name {
            Some(name) => self
                .servers
                .iter()
                .find(|s| s.name == name)
                .ok_or_else(|| N8nError::ServerNotFound(name.to_string())),
            None => self
                .servers
                .iter()
                .find(|s| s.is_default)
                .or_else(|| self.servers.first())
                .ok_or(N8nError::NoServerConfigured),
        }
    }

    /// Insert or replace a profile by name.
    ///
    /// The replaced entry is removed and the new one appended. A requested
    /// default clears the flag everywhere else; the only profile is always
    /// the default.
    pub fn upsert(&mut self, mut profile: ServerProfile) {
        self.servers.retain(|s| s.name != profile.name);

        if self.servers.is_empty() {
            profile.is_default = true;
        } else if profile.is_default {
            for server in &mut self.servers {
                server.is_default = false;
            }
        }

        self.servers.push(profile);
    }

    /// Remove a profile by name, promoting the first remaining one if the
    /// removed profile was the default.
    pub fn remove(&mut self, name: &str) -> N8nResult<ServerProfile> {
        let index = self
            .servers
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| N8nError::ServerNotFound(name.to_string()))?;

        let removed = self.servers.remove(index);

        if removed.is_default {
            if let Some(first) = self.servers.first_mut() {
                first.is_default = true;
            }
        }

        Ok(removed)
    }

    /// Name of the profile `resolve(None)` would pick
    pub fn default_name(&self) -> Option<&str> {
        self.resolve(None).ok().map(|s| s.name.as_str())
    }
}
