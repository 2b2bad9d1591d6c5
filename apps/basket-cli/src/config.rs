//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags
//! 2. Environment variables (`BASKET_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup.

use std::path::{Path, PathBuf};

use basket_core::CatalogEntry;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AppError, AppResult};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    /// Catalog JSON file; the built-in demo catalog when unset.
    pub catalog_path: Option<PathBuf>,

    /// Label printed after amounts.
    pub currency_label: String,

    /// Answer every removal prompt with "yes" without reading input.
    pub assume_yes: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            catalog_path: None,
            currency_label: "บาท".to_string(),
            assume_yes: false,
        }
    }
}

impl CliConfig {
    /// Builds the configuration from `BASKET_*` variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BASKET_CATALOG`: catalog JSON path
    /// - `BASKET_CURRENCY_LABEL`: label after amounts
    /// - `BASKET_ASSUME_YES`: `true`/`false`/`1`/`0`
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = CliConfig::default();

        if let Some(path) = lookup("BASKET_CATALOG") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(label) = lookup("BASKET_CURRENCY_LABEL") {
            config.currency_label = label;
        }

        if let Some(value) = lookup("BASKET_ASSUME_YES") {
            config.assume_yes = parse_bool(&value).ok_or_else(|| AppError::Config {
                var: "BASKET_ASSUME_YES".to_string(),
                value,
            })?;
        }

        Ok(config)
    }

    /// Loads the catalog the shell offers with `list` / `buy`.
    pub fn load_catalog(&self) -> AppResult<Vec<CatalogEntry>> {
        match &self.catalog_path {
            Some(path) => read_catalog(path),
            None => Ok(demo_catalog()),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Reads a JSON array of `{"name": "...", "price": "..."}` records.
pub fn read_catalog(path: &Path) -> AppResult<Vec<CatalogEntry>> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<CatalogEntry> =
        serde_json::from_str(&text).map_err(|source| AppError::CatalogFormat {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), products = entries.len(), "catalog loaded");
    Ok(entries)
}

/// Catalog used when no file is configured.
pub fn demo_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("Mango Cake\nFresh mango cream", "120 บาท"),
        CatalogEntry::new("Thai Tea Roll", "85 บาท"),
        CatalogEntry::new("Coconut Jelly", "35.50 บาท"),
        CatalogEntry::new("Party Box (12 pcs)", "1,234.50 บาท"),
    ]
}
