//! Cart summary facade
//!
//! [`App`] composes one [`Cart`], one formatter and a shared list of item
//! names, and answers `summary()` from their current state.

use super::{
    formatter::{Formatter, SummaryFormat},
    models::Summary,
};
use crate::cart::models::Cart;
use std::sync::Arc;

/// Composition root exposing the cart summary.
///
/// The name list only feeds the item count. It is never reconciled with the
/// cart's priced items, so the two may disagree in length.
#[derive(Debug, Clone)]
pub struct App<F = Formatter> {
    cart: Cart,
    formatter: F,
    item_names: Arc<[String]>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Cart::new(), Formatter, Arc::from(Vec::new()))
    }
}

impl<F: SummaryFormat> App<F> {
    pub fn new(cart: Cart, formatter: F, item_names: Arc<[String]>) -> Self {
        Self {
            cart,
            formatter,
            item_names,
        }
    }

    /// Formats the current cart total together with the name-list length.
    ///
    /// Recomputed on every call.
    pub fn summary(&self) -> String {
        self.formatter
            .format(self.cart.total(), self.item_names.len())
    }

    /// Structured form of [`App::summary`].
    pub fn snapshot(&self) -> Summary {
        let total = self.cart.total();
        let item_count = self.item_names.len();
        Summary {
            total,
            item_count,
            text: self.formatter.format(total, item_count),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn item_names(&self) -> &[String] {
        &self.item_names
    }
}
