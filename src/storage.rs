// src/storage.rs
//! Key/value persistence for the citizen profile.
//!
//! The dashboard only ever stores one value, but the port is keyed so other
//! backends (a database table, a browser store) can slot in unchanged.

use crate::error::StorageError;
use crate::models::Profile;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Key the profile is stored under.
pub const PROFILE_KEY: &str = "citizenProfile";

#[async_trait]
pub trait ProfileStorage: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<Profile>, StorageError>;

    /// Replaces whatever is stored under `key`.
    async fn save(&self, key: &str, profile: &Profile) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl ProfileStorage for JsonFileStorage {
    async fn load(&self, key: &str) -> Result<Option<Profile>, StorageError> {
        let path = self.path_for(key);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no stored profile");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn save(&self, key: &str, profile: &Profile) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(key);
        let body = serde_json::to_vec_pretty(profile)?;

        // Readers must never observe a partially written profile.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &path).await?;

        info!(path = %path.display(), "💾 Profile saved");
        Ok(())
    }
}

/// In-process storage holding serialized JSON, the way a browser store would.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    pub async fn insert_raw(&self, key: &str, value: impl Into<String>) {
        self.entries.write().await.insert(key.to_string(), value.into());
    }
}

#[async_trait]
impl ProfileStorage for MemoryStorage {
    async fn load(&self, key: &str) -> Result<Option<Profile>, StorageError> {
        match self.entries.read().await.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, key: &str, profile: &Profile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile)?;
        self.entries.write().await.insert(key.to_string(), raw);
        Ok(())
    }
}
