//! # Domain Types
//!
//! Data handed between the cart store and its view.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │  CatalogEntry   │   │    LineItem     │   │   CartSummary   │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  name_text?     │──►│  name (key)     │──►│  items          │        │
//! │  │  price_text?    │   │  unit_price     │   │  total_quantity │        │
//! │  │  (raw markup)   │   │  quantity ≥ 1   │   │  total_price    │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::DEFAULT_ITEM_NAME;

// =============================================================================
// Line Item
// =============================================================================

/// One product line in the cart.
///
/// ## Invariants
/// - `name` is unique within a cart (exact, case-sensitive match)
/// - `quantity >= 1` for as long as the item is in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Display name, also the identity of the line.
    pub name: String,

    /// Price captured when the item was first added.
    pub unit_price: Money,

    /// Units in the cart.
    pub quantity: u32,
}

impl LineItem {
    /// Creates a line with quantity 1.
    pub fn new(name: impl Into<String>, unit_price: Money) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Catalog Entry
// =============================================================================

/// Raw text read off a product card.
///
/// Both fields are optional: catalog markup is inconsistent and a product box
/// may lack a heading or a price element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Heading text; only the first line is the product name.
    #[serde(default, rename = "name")]
    pub name_text: Option<String>,

    /// Price text as displayed, e.g. `"1,234.50 บาท"`.
    #[serde(default, rename = "price")]
    pub price_text: Option<String>,
}

impl CatalogEntry {
    pub fn new(name_text: impl Into<String>, price_text: impl Into<String>) -> Self {
        CatalogEntry {
            name_text: Some(name_text.into()),
            price_text: Some(price_text.into()),
        }
    }

    /// The product name: first line of the heading, trimmed.
    ///
    /// Falls back to [`DEFAULT_ITEM_NAME`] when the heading is missing or blank.
    ///
    /// ```rust
    /// use basket_core::CatalogEntry;
    ///
    /// let entry = CatalogEntry::new("Mango Cake\nFresh every morning", "120 บาท");
    /// assert_eq!(entry.name(), "Mango Cake");
    /// assert_eq!(CatalogEntry::default().name(), "สินค้า");
    /// ```
    pub fn name(&self) -> &str {
        self.name_text
            .as_deref()
            .and_then(|text| text.lines().next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_ITEM_NAME)
    }

    /// The price text, `"0"` when there was no price element.
    pub fn price_text(&self) -> &str {
        self.price_text.as_deref().unwrap_or("0")
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Owned snapshot of the cart plus its totals, ready to render or serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    pub items: Vec<LineItem>,
    #[ts(type = "number")]
    pub total_quantity: u64,
    pub total_price: Money,
}

impl CartSummary {
    /// Serializes the summary as JSON for a web view.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// Quantity Change Outcomes
// =============================================================================

/// How the user answered the removal prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemovalDecision {
    Confirmed,
    Declined,
}

impl From<bool> for RemovalDecision {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            RemovalDecision::Confirmed
        } else {
            RemovalDecision::Declined
        }
    }
}

/// What happened after a pending removal was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalResolution {
    /// The item left the cart; later items moved up one index.
    Removed(LineItem),
    /// The user kept the item; its quantity is back to 1.
    Reset,
}

/// Final result of [`CartStore::change_quantity_with`](crate::CartStore::change_quantity_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityOutcome {
    Updated { quantity: u32 },
    Removed(LineItem),
    Reset,
}

impl From<RemovalResolution> for QuantityOutcome {
    fn from(resolution: RemovalResolution) -> Self {
        match resolution {
            RemovalResolution::Removed(item) => QuantityOutcome::Removed(item),
            RemovalResolution::Reset => QuantityOutcome::Reset,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
