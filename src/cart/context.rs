//! Store injection context
//!
//! The application owns exactly one `CartStore` and threads it through
//! a `CartContext` instead of a hidden global. Consumers resolving the
//! store before one is installed get `CartError::Uninitialized`
//! immediately rather than a silently empty cart.

use crate::cart::store::CartStore;
use crate::error::{CartError, CartResult};
use std::sync::Arc;

/// Explicit holder for the application's single cart store
#[derive(Clone, Default)]
pub struct CartContext {
    store: Option<Arc<CartStore>>,
}

impl CartContext {
    /// Create a context with no store installed
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a context wrapping an opened store
    pub fn with_store(store: Arc<CartStore>) -> Self {
        Self { store: Some(store) }
    }

    /// Install a store into this context
    pub fn install(&mut self, store: Arc<CartStore>) {
        self.store = Some(store);
    }

    /// Resolve the store, failing fast if none is installed
    pub fn store(&self) -> CartResult<&Arc<CartStore>> {
        self.store.as_ref().ok_or(CartError::Uninitialized)
    }
}
