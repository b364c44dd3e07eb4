//! Summary Models
//!
//! Serializable shapes produced by the summary facade.

use crate::cart::models::Money;
use serde::Serialize;

/// Structured form of a summary line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Cart total at the time of the snapshot
    pub total: Money,

    /// Number of entries in the item-name list
    pub item_count: usize,

    /// Rendered summary line
    pub text: String,
}
