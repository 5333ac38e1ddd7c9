//! Key-value storage backends
//!
//! The cart store treats storage as an opaque get/set-by-key service.
//! Backends implement [`Storage`]; the cart owns a single fixed key
//! and fully replaces its value on every write.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::CartResult;
use async_trait::async_trait;

/// Storage key under which the cart snapshot is persisted
///
/// Namespaced so the blob cannot collide with other tools sharing the
/// same storage root. No other writer may touch this key.
pub const CART_KEY: &str = "marketcart.cart.items";

/// Abstract key-value storage interface
///
/// Implementations: [`FileStorage`] (one JSON file per key under the
/// state directory) and [`MemoryStorage`] (in-process, for tests and
/// ephemeral runs).
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> CartResult<Option<String>>;

    /// Store `value` under `key`, replacing any prior value
    async fn set(&self, key: &str, value: &str) -> CartResult<()>;
}
