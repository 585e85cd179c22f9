//! Error types for shoestock
//!
//! Provides a unified error type for all inventory operations.

use thiserror::Error;

/// Result type alias using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

/// Unified error type for shoestock operations
#[derive(Debug, Error)]
pub enum InventoryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Parse Errors
    // -------------------------------------------------------------------------
    #[error("invalid {field}: '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("malformed line: expected 5 fields, found {found}")]
    MalformedLine { found: usize },

    #[error("invalid {field}: '{value}' contains a comma")]
    UnsupportedComma { field: &'static str, value: String },

    #[error("CSV error: {0}")]
    Csv(String),

    // -------------------------------------------------------------------------
    // Inventory State Errors
    // -------------------------------------------------------------------------
    #[error("no data loaded")]
    EmptyInventory,

    #[error("no shoe found with code '{0}'")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Restock Errors
    // -------------------------------------------------------------------------
    #[error("restock cancelled")]
    RestockCancelled,

    #[error("quantity to add cannot be negative (got {0})")]
    NegativeRestock(i64),

    #[error("adding {amount} units to quantity {current} would overflow")]
    QuantityOverflow { current: u32, amount: u32 },
}

impl From<csv::Error> for InventoryError {
    fn from(err: csv::Error) -> Self {
        match err.into_kind() {
            csv::ErrorKind::Io(e) => InventoryError::Io(e),
            kind => InventoryError::Csv(format!("{:?}", kind)),
        }
    }
}
