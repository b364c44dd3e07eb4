//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (Money, Item, Cart, CartError)
//! - Business logic helpers (cart ids, item descriptions)
//! - In-memory cart store with add, sync and checkout flows

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{format_money, Cart, CartError, Item, Money};
pub use state::{CartStore, CartUpdate, Receipt, SharedStore};
