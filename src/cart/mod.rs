//! Cart state, mutation algorithms, and persistence sync

pub mod context;
pub mod item;
pub mod ops;
pub mod store;

pub use context::CartContext;
pub use item::LineItem;
pub use store::CartStore;
