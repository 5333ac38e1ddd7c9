//! Cart line item model

use serde::{Deserialize, Serialize};

/// One product entry in the cart
///
/// `id` is the external product identifier and is unique within a cart.
/// The wire format is a JSON array of these records, fields exactly as
/// named here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// External product identifier, unique per cart
    pub id: String,

    /// Display title
    pub title: String,

    /// Product image URL
    pub image_url: String,

    /// Unit price
    pub price: f64,

    /// Units in the cart; an item never rests at quantity 0
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item holding one unit
    pub fn single(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
            quantity: 1,
        }
    }

    /// Price of this line (unit price times quantity)
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Sum of all line subtotals
pub fn total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::subtotal).sum()
}
