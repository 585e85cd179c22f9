//! Record Module
//!
//! The single data entity tracked by the inventory: one shoe SKU.
//!
//! ## Responsibilities
//! - Coerce raw text fields into typed values (trimmed text, numeric cost/quantity)
//! - Reject records whose numeric fields do not parse
//! - Render the human-readable listing line

mod shoe;

pub use shoe::{Shoe, ShoeDisplay};

/// Currency prefix used when no other symbol is configured
pub const DEFAULT_CURRENCY: &str = "£";
