//! Shoe record
//!
//! Typed representation of one inventory line.

use std::fmt;

use crate::error::{InventoryError, Result};

use super::DEFAULT_CURRENCY;

/// One shoe SKU
#[derive(Debug, Clone, PartialEq)]
pub struct Shoe {
    country: String,
    /// Search identifier, not guaranteed unique
    code: String,
    product: String,
    cost: f64,
    quantity: u32,
}

impl Shoe {
    /// Create a shoe from already typed values
    ///
    /// Text fields are trimmed the same way `parse` trims them.
    pub fn new(
        country: impl AsRef<str>,
        code: impl AsRef<str>,
        product: impl AsRef<str>,
        cost: f64,
        quantity: u32,
    ) -> Self {
        Self {
            country: country.as_ref().trim().to_string(),
            code: code.as_ref().trim().to_string(),
            product: product.as_ref().trim().to_string(),
            cost,
            quantity,
        }
    }

    /// Build a shoe from five raw text values
    ///
    /// Fails with `InvalidNumber` if cost is not a finite non-negative
    /// decimal or quantity is not a non-negative integer, and with
    /// `UnsupportedComma` if a text field contains a comma.
    pub fn parse(
        country: &str,
        code: &str,
        product: &str,
        cost: &str,
        quantity: &str,
    ) -> Result<Self> {
        let cost = parse_cost(cost)?;
        let quantity = parse_quantity(quantity)?;
        let shoe = Self::new(country, code, product, cost, quantity);
        shoe.ensure_storable()?;
        Ok(shoe)
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// Unit cost
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Units in stock
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Stock value of this line (cost * quantity)
    pub fn value(&self) -> f64 {
        self.cost * f64::from(self.quantity)
    }

    /// Case-insensitive code equality against an already trimmed query
    pub fn matches_code(&self, query: &str) -> bool {
        self.code.to_lowercase() == query.to_lowercase()
    }

    /// Add units to the stock count, rejecting overflow without mutating
    pub(crate) fn add_quantity(&mut self, amount: u32) -> Result<u32> {
        self.quantity = self
            .quantity
            .checked_add(amount)
            .ok_or(InventoryError::QuantityOverflow {
                current: self.quantity,
                amount,
            })?;
        Ok(self.quantity)
    }

    /// Reject text fields the unquoted file format cannot hold
    pub(crate) fn ensure_storable(&self) -> Result<()> {
        let fields = [
            ("country", &self.country),
            ("code", &self.code),
            ("product", &self.product),
        ];
        for (field, value) in fields {
            if value.contains(',') {
                return Err(InventoryError::UnsupportedComma {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Render the listing line with a specific currency symbol
    pub fn display_with<'a>(&'a self, currency: &'a str) -> ShoeDisplay<'a> {
        ShoeDisplay { shoe: self, currency }
    }
}

impl fmt::Display for Shoe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(DEFAULT_CURRENCY), f)
    }
}

/// Listing line: `country | code | product | £cost | Qty: quantity`
pub struct ShoeDisplay<'a> {
    shoe: &'a Shoe,
    currency: &'a str,
}

impl fmt::Display for ShoeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}{:.2} | Qty: {}",
            self.shoe.country,
            self.shoe.code,
            self.shoe.product,
            self.currency,
            self.shoe.cost,
            self.shoe.quantity
        )
    }
}

// =============================================================================
// Field Parsers
// =============================================================================

fn parse_cost(raw: &str) -> Result<f64> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(cost) if cost.is_finite() && cost >= 0.0 => Ok(cost),
        _ => Err(InventoryError::InvalidNumber {
            field: "cost",
            value: raw.to_string(),
        }),
    }
}

fn parse_quantity(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    raw.parse::<u32>().map_err(|_| InventoryError::InvalidNumber {
        field: "quantity",
        value: raw.to_string(),
    })
}
