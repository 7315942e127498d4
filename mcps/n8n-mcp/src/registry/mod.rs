//! Server registry
//!
//! Named n8n server profiles persisted through an injected [`ConfigStore`].
//! There is no in-memory cache: each call loads the record, and mutating
//! calls save it back before returning.

pub mod profile;
pub mod store;

pub use profile::{ServerFile, ServerProfile};
pub use store::{ConfigStore, JsonFileStore, MemoryStore};

use std::sync::Arc;

use crate::error::N8nResult;

/// Registry operations over a shared store
#[derive(Clone)]
pub struct ServerRegistry {
    store: Arc<dyn ConfigStore>,
}

impl ServerRegistry {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// Resolve a profile by name, or the default profile
    pub async fn resolve(&self, name: Option<&str>) -> N8nResult<ServerProfile> {
        let file = self.store.load().await?;
        file.resolve(name).cloned()
    }

    /// Add or replace a profile. Returns the profile as stored, with the
    /// default flag it actually received.
    pub async fn upsert(&self, profile: ServerProfile) -> N8nResult<ServerProfile> {
        let name = profile.name.clone();
        let mut file = self.store.load().await?;
        file.upsert(profile);
        self.store.save(&file).await?;

        tracing::info!(server = %name, "Saved server profile");
        file.resolve(Some(&name)).cloned()
    }

    /// Remove a profile. Returns the removed profile and the name of the new
    /// default, if any profile remains.
    pub async fn remove(&self, name: &str) -> N8nResult<(ServerProfile, Option<String>)> {
        let mut file = self.store.load().await?;
        let removed = file.remove(name)?;
        self.store.save(&file).await?;

        tracing::info!(server = %name, "Removed server profile");
        Ok((removed, file.default_name().map(str::to_string)))
    }

    /// All profiles in stored order
    pub async fn list(&self) -> N8nResult<ServerFile> {
        self.store.load().await
    }
}
