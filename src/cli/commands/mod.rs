//! CLI command implementations

pub mod add;
pub mod clear;
pub mod config;
pub mod decrement;
pub mod increment;
pub mod show;

pub use add::execute as add;
pub use clear::execute as clear;
pub use config::execute as config;
pub use decrement::execute as decrement;
pub use increment::execute as increment;
pub use show::execute as show;

use crate::cart::{CartContext, CartStore};
use crate::config::{Config, ConfigManager};
use crate::error::CartResult;
use crate::storage::{FileStorage, MemoryStorage, Storage};
use std::sync::Arc;

/// Open the cart store and wrap it in the application context
///
/// The context is built once per invocation and threaded through the
/// cart subcommands; they resolve the store from it rather than
/// opening storage themselves. `--ephemeral` swaps the file backend
/// for an in-memory one, which also means the cart is gone when the
/// process exits.
pub async fn open_context(config: &Config, ephemeral: bool) -> CartResult<CartContext> {
    let storage: Box<dyn Storage> = if ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        Box::new(FileStorage::new(ConfigManager::storage_root(config)))
    };

    let store = CartStore::open(storage).await?;
    Ok(CartContext::with_store(Arc::new(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CartError;

    #[tokio::test]
    async fn open_context_resolves_store() {
        let config = Config::default();
        let ctx = open_context(&config, true).await.unwrap();

        let store = ctx.store().unwrap();
        assert!(store.products().is_empty());
    }

    #[test]
    fn unwired_context_fails_fast() {
        let ctx = CartContext::empty();
        assert!(matches!(ctx.store(), Err(CartError::Uninitialized)));
    }
}
