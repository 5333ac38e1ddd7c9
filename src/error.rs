//! Error types for marketcart
//!
//! All modules use `CartResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;

/// All errors that can occur in marketcart
#[derive(Error, Debug)]
pub enum CartError {
    // Store errors
    #[error("Cart store accessed before initialization")]
    Uninitialized,

    #[error("Persisted cart data is malformed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("Failed to persist cart under key {key}: {reason}")]
    PersistenceWrite { key: String, reason: String },

    // Storage errors
    #[error("Invalid storage key: {key}: {reason}")]
    KeyInvalid { key: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CartError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a persistence write error
    pub fn persistence_write(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PersistenceWrite {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Check if error leaves the in-memory cart intact
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Deserialization(_) | Self::PersistenceWrite { .. }
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Uninitialized => Some("Open the store with CartStore::open before use"),
            Self::Deserialization(_) => {
                Some("The persisted cart was discarded; the store starts empty")
            }
            Self::PersistenceWrite { .. } => {
                Some("The in-memory cart is intact; retry the operation to persist it")
            }
            _ => None,
        }
    }
}
