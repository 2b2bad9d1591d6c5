//! # basket-core: Pure Cart Logic for Basket
//!
//! This crate holds the shopping cart behind a catalog page: the line items,
//! the quantity rules and the totals. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                    View (basket-cli, web page)                  │    │
//! │  │    Catalog ──► Buy button ──► Cart list ──► "Remove item?"      │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ add / change_quantity / snapshot       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ basket-core (THIS CRATE) ★                      │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │   store   │  │   price   │  │   money   │  │   types   │    │    │
//! │  │   │ CartStore │  │  parser   │  │   Money   │  │ LineItem  │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO PROMPTS • NO RENDERING                            │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - `CartStore` and the removal confirmation handshake
//! - [`price`] - Free-form price text to [`Money`]
//! - [`money`] - Integer money type
//! - [`types`] - Line items, catalog entries, summaries, outcomes
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::CartStore;
//!
//! let mut cart = CartStore::new();
//! cart.add("Mango Cake", "120 บาท");
//! cart.add("Thai Tea", "1,234.50 บาท");
//!
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.total_price().to_string(), "1,354.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod price;
pub mod store;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use price::parse_price;
pub use store::{CartStore, PendingRemoval, QuantityChange, RemovalPrompt};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name used when a catalog entry has no readable heading ("product").
pub const DEFAULT_ITEM_NAME: &str = "สินค้า";
