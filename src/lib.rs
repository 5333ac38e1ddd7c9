//! Marketcart - Persistent Shopping Cart Store
//!
//! Holds cart line items in memory and mirrors every mutation to a
//! local key-value storage backend so cart contents survive restarts.

pub mod cart;
pub mod cli;
pub mod config;
pub mod error;
pub mod storage;

pub use error::{CartError, CartResult};
