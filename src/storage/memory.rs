//! In-memory key-value storage
//!
//! Used for `--ephemeral` runs and as a test double. `fail_writes`
//! turns every `set` into an error so persistence-failure paths can be
//! exercised without touching a filesystem.

use crate::error::{CartError, CartResult};
use crate::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Storage backend holding values in a process-local map
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with `value` under `key`
    pub fn seeded(key: &str, value: &str) -> Self {
        let storage = Self::new();
        // A freshly created mutex cannot be poisoned
        if let Ok(mut values) = storage.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        storage
    }

    /// Make every subsequent `set` fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> CartResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| CartError::Internal("storage map lock poisoned".to_string()))?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> CartResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CartError::persistence_write(key, "write failure injected"));
        }

        let mut values = self
            .values
            .lock()
            .map_err(|_| CartError::Internal("storage map lock poisoned".to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_value_visible() {
        let storage = MemoryStorage::seeded("cart", "[]");
        assert_eq!(storage.get("cart").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn injected_failure_surfaces() {
        let storage = MemoryStorage::new();
        storage.fail_writes(true);

        let err = storage.set("cart", "[]").await.unwrap_err();
        assert!(matches!(err, CartError::PersistenceWrite { .. }));

        storage.fail_writes(false);
        storage.set("cart", "[]").await.unwrap();
    }
}
