//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart identifiers and formatting.

use super::models::{format_money, Item};
use uuid::Uuid;

/// Echoes a caller-chosen cart id, or opens a fresh one (simple-form UUID v4)
/// for callers adding to or syncing a cart they have not named yet.
pub fn get_or_create_cart_id(cart_id: Option<String>) -> String {
    cart_id.unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

/// Produces a human-readable one-line description of a list of items.
///
/// Example output: `"Apple 10.00, Banana 5.50"`.
pub fn describe_items(items: &[Item]) -> String {
    items
        .iter()
        .map(|i| format!("{} {}", i.name(), format_money(i.price())))
        .collect::<Vec<_>>()
        .join(", ")
}
