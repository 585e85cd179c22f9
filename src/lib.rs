//! # shoestock
//!
//! A single-user command-line inventory tracker for shoe stock:
//! - Flat comma-separated text file as the only durable copy
//! - In-memory ordered store, rebuilt by explicit load
//! - Append-on-capture, rewrite-on-restock persistence
//! - Interactive numbered menu
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Menu Shell                              │
//! │              (stdin / stdout, one choice per line)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     Inventory                                │
//! │         (ordered Vec<Shoe>, linear scans, &mut self)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │ InventoryFile │
//!               │ (append /     │
//!               │  rewrite)     │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod storage;
pub mod inventory;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{InventoryError, Result};
pub use config::Config;
pub use inventory::Inventory;
pub use record::Shoe;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of shoestock
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
