//! Storage Module
//!
//! Persistent storage layer: a flat comma-separated text file, read and
//! written through the `csv` crate.
//!
//! ## Responsibilities
//! - Read the backing file record by record (header first, then records)
//! - Append a single record after a capture
//! - Rewrite the whole file after an in-place quantity change
//! - Create a header-only file on first run
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Country,Code,Product,Cost,Quantity       │  header (discarded on read)
//! ├──────────────────────────────────────────┤
//! │ UK,AB1,RunnerX,59.99,20                  │  one record per line
//! │ US,CD2,Trail Pro,120,3                   │  5 unquoted fields
//! │ ...                                      │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Fields are not quoted or escaped, so values containing commas are rejected
//! before they reach the file.

mod codec;
mod file;

pub use codec::{decode_record, render_record, HEADER};
pub use file::{InventoryFile, InventoryReader};
