//! Server profile parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddServerParams {
    #[schemars(description = "Unique profile name (replaces an existing profile with this name)")]
    pub name: String,
    #[schemars(description = "Base URL of the n8n instance, e.g. https://n8n.example.com")]
    pub url: String,
    #[schemars(description = "n8n API key")]
    pub api_key: String,
    #[schemars(description = "Make this the default server")]
    pub is_default: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TestServerParams {
    #[schemars(description = "Server profile name (default server if omitted)")]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RemoveServerParams {
    #[schemars(description = "Server profile name")]
    pub name: String,
}
