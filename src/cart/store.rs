//! Cart state container and persistence sync
//!
//! `CartStore` owns the authoritative list of line items. Every
//! mutation runs the same path: compute the next state with a pure
//! algorithm from [`crate::cart::ops`], swap it in under the write
//! lock, publish it to observers, then serialize that same snapshot to
//! storage. The persisted value is always re-derived from the
//! post-mutation state; no code path can serialize a stale binding
//! captured before the swap.

use crate::cart::item::{self, LineItem};
use crate::cart::ops;
use crate::error::{CartError, CartResult};
use crate::storage::{Storage, CART_KEY};
use std::sync::{Mutex, RwLock};
use tokio::sync::watch;
use tracing::{debug, warn};

/// In-memory cart mirrored to a storage backend
pub struct CartStore {
    state: RwLock<Vec<LineItem>>,
    observers: watch::Sender<Vec<LineItem>>,
    storage: Box<dyn Storage>,
    last_error: Mutex<Option<CartError>>,
}

impl CartStore {
    /// Open a store, hydrating from the storage backend
    ///
    /// A missing value starts the cart empty. A malformed value also
    /// starts the cart empty: the parse failure is logged and recorded
    /// in [`CartStore::take_last_error`], never returned from `open`.
    pub async fn open(storage: Box<dyn Storage>) -> CartResult<Self> {
        let mut hydrate_error = None;

        let items = match storage.get(CART_KEY).await? {
            None => {
                debug!("No persisted cart found, starting empty");
                Vec::new()
            }
            Some(raw) => match serde_json::from_str::<Vec<LineItem>>(&raw) {
                Ok(items) => {
                    // A snapshot written by an older process may carry
                    // zero-quantity rows; they never rest in memory.
                    let items: Vec<_> =
                        items.into_iter().filter(|i| i.quantity > 0).collect();
                    debug!("Hydrated cart with {} item(s)", items.len());
                    items
                }
                Err(e) => {
                    warn!("Discarding malformed persisted cart: {e}");
                    hydrate_error = Some(CartError::Deserialization(e));
                    Vec::new()
                }
            },
        };

        let (observers, _) = watch::channel(items.clone());
        Ok(Self {
            state: RwLock::new(items),
            observers,
            storage,
            last_error: Mutex::new(hydrate_error),
        })
    }

    /// Snapshot of the current cart contents
    pub fn products(&self) -> Vec<LineItem> {
        self.state
            .read()
            .map(|items| items.clone())
            .unwrap_or_default()
    }

    /// Sum of price times quantity over the current cart
    pub fn total(&self) -> f64 {
        item::total(&self.products())
    }

    /// Watch receiver notified with each new cart state
    pub fn subscribe(&self) -> watch::Receiver<Vec<LineItem>> {
        self.observers.subscribe()
    }

    /// Add one unit of `item`, merging with an existing entry by id
    pub async fn add_to_cart(&self, item: &LineItem) -> CartResult<()> {
        let snapshot = self.apply(|items| ops::add_to_cart(items, item))?;
        self.persist(&snapshot).await
    }

    /// Increase the quantity of `id` by one; unknown ids are a no-op
    pub async fn increment(&self, id: &str) -> CartResult<()> {
        let snapshot = self.apply(|items| ops::increment(items, id))?;
        self.persist(&snapshot).await
    }

    /// Decrease the quantity of `id` by one, removing it at zero
    pub async fn decrement(&self, id: &str) -> CartResult<()> {
        let snapshot = self.apply(|items| ops::decrement(items, id))?;
        self.persist(&snapshot).await
    }

    /// Empty the cart
    pub async fn clear(&self) -> CartResult<()> {
        let snapshot = self.apply(|_| Vec::new())?;
        self.persist(&snapshot).await
    }

    /// Take the most recent hydration or persistence failure, if any
    ///
    /// A failed write does not roll back the in-memory cart; callers
    /// that need stronger guarantees poll this to detect the
    /// divergence window and layer their own retry.
    pub fn take_last_error(&self) -> Option<CartError> {
        self.last_error
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
    }

    /// Swap in the state produced by `op` and notify observers
    ///
    /// Readers only ever see the list before or after the swap, never
    /// a partially-updated one. Returns the new snapshot for the
    /// persistence step.
    fn apply(
        &self,
        op: impl FnOnce(&[LineItem]) -> Vec<LineItem>,
    ) -> CartResult<Vec<LineItem>> {
        let mut state = self
            .state
            .write()
            .map_err(|_| CartError::Internal("cart state lock poisoned".to_string()))?;

        let next = op(&state);
        *state = next.clone();
        drop(state);

        // Receivers may all be gone; that is fine
        let _ = self.observers.send(next.clone());
        Ok(next)
    }

    /// Serialize `snapshot` and replace the persisted value
    ///
    /// The single exit point for writes: it receives the
    /// already-applied state as its only input. Failure is recorded
    /// and returned, the in-memory cart keeps the mutation result.
    async fn persist(&self, snapshot: &[LineItem]) -> CartResult<()> {
        let payload = serde_json::to_string(snapshot)?;

        match self.storage.set(CART_KEY, &payload).await {
            Ok(()) => {
                debug!("Persisted cart with {} item(s)", snapshot.len());
                Ok(())
            }
            Err(e) => {
                warn!("Cart persistence failed, in-memory state retained: {e}");
                let reported = CartError::persistence_write(CART_KEY, e.to_string());
                if let Ok(mut slot) = self.last_error.lock() {
                    *slot = Some(CartError::persistence_write(CART_KEY, e.to_string()));
                }
                Err(reported)
            }
        }
    }
}
