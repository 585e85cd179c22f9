//! Inventory Module
//!
//! The in-memory store that coordinates records and the backing file.
//!
//! ## Responsibilities
//! - Load the store wholesale from the backing file
//! - Keep the file in sync after every mutation (append or full rewrite)
//! - Answer read-only queries with linear scans in store order

use std::path::Path;

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::record::Shoe;
use crate::storage::{decode_record, render_record, InventoryFile};

/// Ordered in-memory collection of shoes, backed by a text file
///
/// ## Persistence
///
/// - **Capture** appends a single line to the file
/// - **Restock** rewrites the whole file, since an existing line changed
///
/// Each write completes before the operation returns. A crash mid-write can
/// leave the file out of step with memory.
pub struct Inventory {
    /// Session configuration
    config: Config,

    /// Backing file (sole durable copy)
    file: InventoryFile,

    /// Records in insertion order, duplicates allowed
    shoes: Vec<Shoe>,
}

/// How a load ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Header read and records (possibly none) loaded
    Loaded,

    /// File existed but had no header line
    EmptyFile,

    /// File was missing and a header-only file was created
    Created,
}

/// A line rejected during load
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based line number in the file
    pub line_number: u64,

    /// Line content with each field trimmed
    pub line: String,

    /// Why the line was rejected
    pub reason: InventoryError,
}

/// Summary of a load operation
#[derive(Debug)]
pub struct LoadReport {
    pub status: LoadStatus,
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

/// Stock value for one record
#[derive(Debug, Clone, PartialEq)]
pub struct ItemValue {
    pub code: String,
    pub product: String,
    pub value: f64,
}

impl Inventory {
    /// Create an empty inventory for the given config
    ///
    /// Nothing is read until `load` is called.
    pub fn new(config: Config) -> Self {
        let file = InventoryFile::new(&config.inventory_path, config.sync_strategy);
        Self {
            config,
            file,
            shoes: Vec::new(),
        }
    }

    /// Create with a path (convenience method)
    ///
    /// Uses default config with the specified inventory file
    pub fn with_path(path: &Path) -> Self {
        let config = Config::builder().inventory_path(path).build();
        Self::new(config)
    }

    // =========================================================================
    // Load
    // =========================================================================

    /// Replace the store with the contents of the backing file
    ///
    /// Steps:
    /// 1. Clear the store
    /// 2. Missing file → create header-only file, report `Created`
    /// 3. Discard the header; no header → report `EmptyFile`
    /// 4. Decode each non-blank record, skipping malformed ones
    ///
    /// An I/O error mid-read returns `Err` and keeps the records already read.
    pub fn load(&mut self) -> Result<LoadReport> {
        self.shoes.clear();

        let mut reader = match self.file.open_reader()? {
            Some(reader) => reader,
            None => {
                tracing::warn!(
                    "{} not found, creating a new one",
                    self.file.path().display()
                );
                self.file.create()?;
                return Ok(LoadReport {
                    status: LoadStatus::Created,
                    loaded: 0,
                    skipped: Vec::new(),
                });
            }
        };

        if reader.read_header()?.is_none() {
            tracing::warn!("{} is empty", self.file.path().display());
            return Ok(LoadReport {
                status: LoadStatus::EmptyFile,
                loaded: 0,
                skipped: Vec::new(),
            });
        }

        let mut skipped = Vec::new();
        for entry in reader {
            let (line_number, record) = entry?;
            match decode_record(&record) {
                Ok(shoe) => self.shoes.push(shoe),
                Err(reason) => {
                    let line = render_record(&record);
                    tracing::warn!("Skipping line {}: {} ({})", line_number, line, reason);
                    skipped.push(SkippedLine {
                        line_number,
                        line,
                        reason,
                    });
                }
            }
        }

        if self.shoes.is_empty() {
            tracing::warn!("{} contains no records", self.file.path().display());
        }
        tracing::info!(
            "Loaded {} records ({} skipped) from {}",
            self.shoes.len(),
            skipped.len(),
            self.file.path().display()
        );

        Ok(LoadReport {
            status: LoadStatus::Loaded,
            loaded: self.shoes.len(),
            skipped,
        })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a new record and append it to the backing file
    ///
    /// The file is written first, so a failed write leaves the store as it was.
    /// Text fields containing a comma are rejected before anything is written.
    pub fn capture(&mut self, shoe: Shoe) -> Result<&Shoe> {
        shoe.ensure_storable()?;
        self.file.append(&shoe)?;
        tracing::info!("Captured {} ({})", shoe.product(), shoe.code());

        self.shoes.push(shoe);
        let index = self.shoes.len() - 1;
        Ok(&self.shoes[index])
    }

    /// Increase the quantity of the lowest-stocked record and rewrite the file
    ///
    /// `amount == 0` is treated as a cancel. If the rewrite fails the quantity
    /// is restored before the error is returned.
    pub fn restock_lowest(&mut self, amount: u32) -> Result<&Shoe> {
        if amount == 0 {
            return Err(InventoryError::RestockCancelled);
        }

        let index = self.lowest_index()?;
        let previous = self.shoes[index].quantity();
        let updated = self.shoes[index].add_quantity(amount)?;

        if let Err(e) = self.file.rewrite(&self.shoes) {
            tracing::warn!("Rewrite after restock failed, restoring quantity: {}", e);
            self.shoes[index].set_quantity(previous);
            return Err(e);
        }

        tracing::info!(
            "Restocked {} ({}): {} -> {}",
            self.shoes[index].product(),
            self.shoes[index].code(),
            previous,
            updated
        );
        Ok(&self.shoes[index])
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Fail with `EmptyInventory` when there is nothing loaded
    pub fn ensure_loaded(&self) -> Result<()> {
        if self.shoes.is_empty() {
            return Err(InventoryError::EmptyInventory);
        }
        Ok(())
    }

    /// All records in store order
    pub fn list(&self) -> Result<&[Shoe]> {
        self.ensure_loaded()?;
        Ok(&self.shoes)
    }

    /// Record with the lowest quantity (first one on ties)
    pub fn lowest(&self) -> Result<&Shoe> {
        let index = self.lowest_index()?;
        Ok(&self.shoes[index])
    }

    /// Record with the highest quantity (first one on ties)
    pub fn highest_quantity(&self) -> Result<&Shoe> {
        self.ensure_loaded()?;

        let mut best = &self.shoes[0];
        for shoe in &self.shoes[1..] {
            if shoe.quantity() > best.quantity() {
                best = shoe;
            }
        }
        Ok(best)
    }

    /// First record whose code equals `code`, ignoring case and surrounding
    /// whitespace
    pub fn find_by_code(&self, code: &str) -> Result<&Shoe> {
        self.ensure_loaded()?;

        let query = code.trim();
        tracing::debug!("Searching for code '{}'", query);
        self.shoes
            .iter()
            .find(|shoe| shoe.matches_code(query))
            .ok_or_else(|| InventoryError::NotFound(query.to_string()))
    }

    /// `cost * quantity` for every record, in store order
    pub fn value_per_item(&self) -> Result<Vec<ItemValue>> {
        self.ensure_loaded()?;

        Ok(self
            .shoes
            .iter()
            .map(|shoe| ItemValue {
                code: shoe.code().to_string(),
                product: shoe.product().to_string(),
                value: shoe.value(),
            })
            .collect())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Records in store order (empty slice if nothing is loaded)
    pub fn records(&self) -> &[Shoe] {
        &self.shoes
    }

    pub fn len(&self) -> usize {
        self.shoes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shoes.is_empty()
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Stable linear scan for the minimum quantity
    fn lowest_index(&self) -> Result<usize> {
        self.ensure_loaded()?;

        let mut best = 0;
        for (index, shoe) in self.shoes.iter().enumerate().skip(1) {
            if shoe.quantity() < self.shoes[best].quantity() {
                best = index;
            }
        }
        Ok(best)
    }
}
