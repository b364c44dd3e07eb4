//! Shopping Cart State Management
//!
//! Optional shared-mutation layer: keeps open carts in memory, keyed by cart
//! id, for callers that update carts from several threads. The summary core
//! ([`crate::summary::App`]) does not depend on it.

use super::{
    helpers::{describe_items, get_or_create_cart_id},
    models::{Cart, CartError, Item, Money},
};
use crate::summary::formatter::SummaryFormat;
use dashmap::{mapref::entry::Entry, DashMap};
use serde::Serialize;
use std::sync::Arc;

// =============================================================================
// Constants
// =============================================================================

/// Checkout message used when there was nothing to check out
pub const EMPTY_CART_MESSAGE: &str = "Cart is empty.";

// =============================================================================
// Responses
// =============================================================================

/// Outcome of an add or sync operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdate {
    /// Cart identifier
    pub cart_id: String,

    /// Number of items now in the cart
    pub item_count: usize,

    /// Cart total after the update
    pub total: Money,
}

/// Result of checking a cart out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Cart identifier
    pub cart_id: String,

    /// Items that were in the cart, in insertion order
    pub items: Vec<Item>,

    /// Sum of the checked out items
    pub total: Money,

    /// Human-readable description of the checkout
    pub message: String,
}

// =============================================================================
// Application State
// =============================================================================

/// Shared store that can be safely passed between threads
pub type SharedStore = Arc<CartStore>;

/// In-memory storage for carts, keyed by cart_id.
/// DashMap allows concurrent access without external Mutexes.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: DashMap<String, Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `items` to the cart, creating it on first use.
    ///
    /// Nothing is added, and no cart is created, if any item would overflow
    /// the cart total.
    pub fn add_items(
        &self,
        cart_id: Option<String>,
        items: Vec<Item>,
    ) -> Result<CartUpdate, CartError> {
        let cart_id = get_or_create_cart_id(cart_id);
        let cart = match self.carts.entry(cart_id.clone()) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().extend(items)?;
                entry.into_ref()
            }
            Entry::Vacant(entry) => entry.insert(Cart::from_items(items)?),
        };

        tracing::debug!(cart_id = %cart_id, items = cart.len(), "cart updated");
        Ok(CartUpdate {
            item_count: cart.len(),
            total: cart.total(),
            cart_id,
        })
    }

    /// Replaces the cart contents with exactly `items`.
    pub fn sync(&self, cart_id: Option<String>, items: Vec<Item>) -> Result<CartUpdate, CartError> {
        let cart_id = get_or_create_cart_id(cart_id);
        let cart = Cart::from_items(items)?;

        let update = CartUpdate {
            cart_id: cart_id.clone(),
            item_count: cart.len(),
            total: cart.total(),
        };
        self.carts.insert(cart_id, cart);

        tracing::debug!(cart_id = %update.cart_id, items = update.item_count, "cart synced");
        Ok(update)
    }

    /// Current total of a cart, if it exists.
    pub fn total(&self, cart_id: &str) -> Option<Money> {
        self.carts.get(cart_id).map(|cart| cart.total())
    }

    /// Renders a cart the same way the facade does, counting the cart's own items.
    pub fn summary(&self, cart_id: &str, formatter: &impl SummaryFormat) -> Option<String> {
        self.carts
            .get(cart_id)
            .map(|cart| formatter.format(cart.total(), cart.len()))
    }

    /// Removes the cart and returns what was in it.
    pub fn checkout(&self, cart_id: &str) -> Receipt {
        match self.carts.remove(cart_id) {
            Some((cart_id, mut cart)) if !cart.is_empty() => {
                let total = cart.total();
                let items = cart.clear();
                let message = format!("Checked out now: {}", describe_items(&items));
                tracing::info!(cart_id = %cart_id, %total, "{}", message);

                Receipt {
                    cart_id,
                    items,
                    total,
                    message,
                }
            }
            _ => Receipt {
                cart_id: cart_id.to_string(),
                items: Vec::new(),
                total: Money::ZERO,
                message: EMPTY_CART_MESSAGE.to_string(),
            },
        }
    }

    /// Number of open carts
    pub fn len(&self) -> usize {
        self.carts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }
}
