//! File-backed key-value storage
//!
//! Maps each key to `<root>/<key>.json`. Writes are whole-file
//! replacements; there is one writer per key by contract.

use crate::error::{CartError, CartResult};
use crate::storage::Storage;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Storage backend writing one JSON file per key
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path holding the value for `key`
    pub fn key_path(&self, key: &str) -> CartResult<PathBuf> {
        // Keys are flat names, never paths
        if key.is_empty() || key.contains(['/', '\\']) {
            return Err(CartError::KeyInvalid {
                key: key.to_string(),
                reason: "storage keys must be flat, non-empty names".to_string(),
            });
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    /// Storage root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn get(&self, key: &str) -> CartResult<Option<String>> {
        let path = self.key_path(key)?;

        if !path.exists() {
            debug!("No value stored for key {key}");
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| CartError::io(format!("reading {}", path.display()), e))?;

        Ok(Some(content))
    }

    async fn set(&self, key: &str, value: &str) -> CartResult<()> {
        let path = self.key_path(key)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CartError::io("creating storage directory", e))?;
        }

        fs::write(&path, value)
            .await
            .map_err(|e| CartError::io(format!("writing {}", path.display()), e))?;

        debug!("Wrote {} bytes under key {key}", value.len());
        Ok(())
    }
}
