//! Summary formatting
//!
//! Turns a cart total and an item count into the display line shown to
//! shoppers. [`SummaryFormat`] is the seam [`super::App`] is generic over.

use crate::cart::models::{format_money, Money};

/// Renders a `(total, item_count)` pair as text.
pub trait SummaryFormat {
    fn format(&self, total: Money, item_count: usize) -> String;
}

/// The fixed `Total: {total}, Items: {item_count}` rendering.
///
/// Stateless; any total is accepted, negative ones included.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter;

impl SummaryFormat for Formatter {
    fn format(&self, total: Money, item_count: usize) -> String {
        format!("Total: {}, Items: {}", format_money(total), item_count)
    }
}
