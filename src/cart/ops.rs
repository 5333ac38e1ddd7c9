//! Pure cart mutation algorithms
//!
//! Each operation takes the current item list and returns a new one;
//! stored entries are never mutated in place. Untouched entries keep
//! their relative order, new items append at the end.

use crate::cart::item::LineItem;

/// Add one unit of `item` to the cart
///
/// If the id is already present this is an increment. Any quantity on
/// the input is ignored: adding always means "one more unit".
pub fn add_to_cart(items: &[LineItem], item: &LineItem) -> Vec<LineItem> {
    if items.iter().any(|existing| existing.id == item.id) {
        return increment(items, &item.id);
    }

    let mut next = items.to_vec();
    next.push(LineItem {
        quantity: 1,
        ..item.clone()
    });
    next
}

/// Increase the quantity of the item with `id` by one
///
/// Unknown ids are a no-op, not an error.
pub fn increment(items: &[LineItem], id: &str) -> Vec<LineItem> {
    let next = items
        .iter()
        .map(|item| {
            if item.id == id {
                LineItem {
                    quantity: item.quantity.saturating_add(1),
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect();

    drop_empty(next)
}

/// Decrease the quantity of the item with `id` by one
///
/// Unknown ids are a no-op. An item reaching quantity 0 is removed
/// entirely rather than retained as a zero-quantity row.
pub fn decrement(items: &[LineItem], id: &str) -> Vec<LineItem> {
    let next = items
        .iter()
        .map(|item| {
            if item.id == id {
                LineItem {
                    quantity: item.quantity.saturating_sub(1),
                    ..item.clone()
                }
            } else {
                item.clone()
            }
        })
        .collect();

    drop_empty(next)
}

/// Shared post-condition: only entries with quantity > 0 survive
fn drop_empty(items: Vec<LineItem>) -> Vec<LineItem> {
    items.into_iter().filter(|item| item.quantity > 0).collect()
}
