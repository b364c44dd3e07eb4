//! Cart Summary Library
//!
//! This library provides priced shopping carts, their totals, and the
//! one-line summary shown to shoppers.

// Domain modules
pub mod cart;
pub mod summary;

pub use cart::{Cart, CartError, Item, Money};
pub use summary::{App, Formatter, SummaryFormat};
