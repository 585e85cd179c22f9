//! Configuration for shoestock
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for an inventory session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file holding the header line plus one record per line
    pub inventory_path: PathBuf,

    /// Sync strategy: whether to fsync after each file write
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Display Configuration
    // -------------------------------------------------------------------------
    /// Prefix used when rendering costs and values
    pub currency_symbol: String,
}

/// File sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Leave flushing to the OS
    None,

    /// fsync after every append or rewrite
    EveryWrite,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_path: PathBuf::from("inventory.txt"),
            sync_strategy: SyncStrategy::EveryWrite,
            currency_symbol: crate::record::DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing inventory file
    pub fn inventory_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.inventory_path = path.into();
        self
    }

    /// Set the file sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the currency symbol used for display
    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.currency_symbol = symbol.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
