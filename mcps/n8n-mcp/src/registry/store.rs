//! Durable storage for the server registry
//!
//! The store only knows how to load and save a whole [`ServerFile`]. Every
//! registry operation reloads, and mutations save immediately; concurrent
//! writers race and the last save wins.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::profile::ServerFile;
use crate::error::{N8nError, N8nResult};

/// Load/save boundary for the server record
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the full record. A store with nothing saved yields an empty record.
    async fn load(&self) -> N8nResult<ServerFile>;

    /// Replace the full record
    async fn save(&self, file: &ServerFile) -> N8nResult<()>;
}

/// JSON file store with replace-on-write
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.binks/n8n-servers.json`, or `./n8n-servers.json` without a home dir
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".binks").join("n8n-servers.json"))
            .unwrap_or_else(|| PathBuf::from("n8n-servers.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ConfigStore for JsonFileStore {
    async fn load(&self) -> N8nResult<ServerFile> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No server file at {}, starting empty", self.path.display());
                return Ok(ServerFile::default());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(ServerFile::default());
        }

        serde_json::from_str(&content).map_err(|e| {
            N8nError::Store(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, file: &ServerFile) -> N8nResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(file)
            .map_err(|e| N8nError::Store(format!("failed to serialize servers: {}", e)))?;

        // Write beside the target and rename so readers never see a partial file
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600)).await?;
        }

        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(
            servers = file.servers.len(),
            "Saved server file to {}",
            self.path.display()
        );
        Ok(())
    }
}

/// In-process store, for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    file: Mutex<ServerFile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn load(&self) -> N8nResult<ServerFile> {
        Ok(self.file.lock().await.clone())
    }

    async fn save(&self, file: &ServerFile) -> N8nResult<()> {
        *self.file.lock().await = file.clone();
        Ok(())
    }
}
