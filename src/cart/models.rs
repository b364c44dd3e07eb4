//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain: the money type, priced items, the cart itself and the
//! errors raised when the cart refuses an item.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Constants
// =============================================================================

/// Number of fractional digits used when rendering amounts
pub const MONEY_SCALE: u32 = 2;

/// Exact decimal amount used for prices and totals
pub type Money = Decimal;

/// Renders an amount with exactly [`MONEY_SCALE`] fractional digits.
///
/// Example output: `"15.50"`, `"0.00"`, `"-3.25"`.
pub fn format_money(amount: Money) -> String {
    let rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", MONEY_SCALE as usize, rounded)
}

// =============================================================================
// Errors
// =============================================================================

/// Reasons a cart refuses an item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("item `{name}` has a negative price ({price})")]
    NegativePrice { name: String, price: Money },

    #[error("adding item `{name}` would overflow the cart total")]
    TotalOverflow { name: String },
}

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Unvalidated item shape accepted from JSON
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    price: Money,
}

/// A priced entry in the cart; each instance counts as one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    /// Name of the product
    name: String,

    /// Unit price, never negative
    price: Money,
}

impl Item {
    /// Creates an item, rejecting negative prices.
    pub fn new(name: impl Into<String>, price: Money) -> Result<Self, CartError> {
        let name = name.into();
        if price < Money::ZERO {
            return Err(CartError::NegativePrice { name, price });
        }
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl TryFrom<ItemRecord> for Item {
    type Error = CartError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::new(record.name, record.price)
    }
}

/// An ordered collection of priced items.
///
/// Items only enter through [`Cart::add_item`] and friends, which check that
/// the running total stays representable. That keeps [`Cart::total`]
/// infallible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart holding `items` in the given order.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self, CartError> {
        let mut cart = Self::new();
        cart.extend(items)?;
        Ok(cart)
    }

    /// Sum of all item prices; zero for an empty cart.
    pub fn total(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }

    /// Appends one item.
    pub fn add_item(&mut self, item: Item) -> Result<(), CartError> {
        Self::checked_total(self.total(), &item)?;
        tracing::debug!(name = item.name(), price = %item.price(), "item added to cart");
        self.items.push(item);
        Ok(())
    }

    /// Appends every item, or none of them if one would overflow the total.
    pub fn extend(&mut self, items: impl IntoIterator<Item = Item>) -> Result<(), CartError> {
        let incoming: Vec<Item> = items.into_iter().collect();

        let mut running = self.total();
        for item in &incoming {
            running = Self::checked_total(running, item)?;
        }

        tracing::debug!(count = incoming.len(), total = %running, "items added to cart");
        self.items.extend(incoming);
        Ok(())
    }

    /// Removes the first item called `name`.
    pub fn remove_item(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|i| i.name == name)?;
        let removed = self.items.remove(index);
        tracing::debug!(name, "item removed from cart");
        Some(removed)
    }

    /// Empties the cart and hands back what it held.
    pub fn clear(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn checked_total(running: Money, item: &Item) -> Result<Money, CartError> {
        running
            .checked_add(item.price)
            .ok_or_else(|| CartError::TotalOverflow {
                name: item.name.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(name: &str, price: Money) -> Item {
        Item::new(name, price).unwrap()
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = Cart::new();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(cart.is_empty());
    }

    #[test]
    fn total_is_sum_regardless_of_order() {
        let forward = Cart::from_items(vec![
            item("Apple", dec!(10.00)),
            item("Banana", dec!(5.50)),
            item("Pear", dec!(0.35)),
        ])
        .unwrap();
        let backward = Cart::from_items(vec![
            item("Pear", dec!(0.35)),
            item("Banana", dec!(5.50)),
            item("Apple", dec!(10.00)),
        ])
        .unwrap();

        assert_eq!(forward.total(), dec!(15.85));
        assert_eq!(forward.total(), backward.total());
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = Item::new("Refund", dec!(-1.00)).unwrap_err();
        assert_eq!(
            err,
            CartError::NegativePrice {
                name: "Refund".into(),
                price: dec!(-1.00)
            }
        );
    }

    #[test]
    fn free_items_are_allowed() {
        let mut cart = Cart::new();
        cart.add_item(item("Sample", dec!(0))).unwrap();
        cart.add_item(item("Sticker", dec!(0.00))).unwrap();
        assert_eq!(cart.total(), Decimal::ZERO);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn overflow_is_rejected_and_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(item("Yacht", Decimal::MAX)).unwrap();

        let err = cart.add_item(item("Dinghy", dec!(1))).unwrap_err();
        assert_eq!(err, CartError::TotalOverflow { name: "Dinghy".into() });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), Decimal::MAX);
    }

    #[test]
    fn extend_is_all_or_nothing() {
        let mut cart = Cart::from_items(vec![item("Apple", dec!(1))]).unwrap();

        let result = cart.extend(vec![item("Banana", dec!(2)), item("Yacht", Decimal::MAX)]);
        assert!(result.is_err());
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(), dec!(1));
    }

    #[test]
    fn mutations_keep_total_consistent() {
        let mut cart = Cart::new();
        cart.add_item(item("Apple", dec!(10.00))).unwrap();
        cart.add_item(item("Banana", dec!(5.50))).unwrap();
        cart.add_item(item("Apple", dec!(10.00))).unwrap();
        assert_eq!(cart.total(), dec!(25.50));

        let removed = cart.remove_item("Apple").unwrap();
        assert_eq!(removed.price(), dec!(10.00));
        assert_eq!(cart.total(), dec!(15.50));
        assert_eq!(cart.items()[0].name(), "Banana");

        assert!(cart.remove_item("Cherry").is_none());

        let cleared = cart.clear();
        assert_eq!(cleared.len(), 2);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn format_money_pads_and_rounds() {
        assert_eq!(format_money(Decimal::ZERO), "0.00");
        assert_eq!(format_money(dec!(15.5)), "15.50");
        assert_eq!(format_money(dec!(2.005)), "2.01");
        assert_eq!(format_money(dec!(-3.25)), "-3.25");
        assert_eq!(format_money(dec!(7)), "7.00");
    }

    #[test]
    fn item_deserialization_validates_price() {
        let ok: Item = serde_json::from_str(r#"{"name":"Apple","price":"10.00"}"#).unwrap();
        assert_eq!(ok.price(), dec!(10.00));

        let bad = serde_json::from_str::<Item>(r#"{"name":"Refund","price":"-4"}"#);
        assert!(bad.is_err());
    }
}
