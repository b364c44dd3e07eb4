//! Cart Summary Module
//!
//! This module renders cart totals for display, including:
//! - The formatting seam (SummaryFormat) and its fixed implementation
//! - The App facade composing a cart, a formatter and an item-name list
//! - The serializable Summary snapshot

pub mod app;
pub mod formatter;
pub mod models;

// Re-export commonly used types
pub use app::App;
pub use formatter::{Formatter, SummaryFormat};
pub use models::Summary;
