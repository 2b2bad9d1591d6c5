//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## What Is (and Is Not) an Error
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cart Conditions                                 │
//! │                                                                         │
//! │  Malformed price text ("abc", "1.2.3")  ──► NOT an error, price is 0    │
//! │  Quantity drops to 0                    ──► NOT an error, the caller    │
//! │                                             confirms removal            │
//! │  Index not from the current snapshot    ──► CoreError::IndexOutOfRange  │
//! │  Quantity beyond u32::MAX               ──► CoreError::QuantityOverflow │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `IndexOutOfRange` is a caller bug: it is reported before any state is
//! touched and the cart stays exactly as it was.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The index does not reference an item in the cart.
    ///
    /// ## When This Occurs
    /// - The view kept an index from an older snapshot after a removal
    /// - A user typed a line number that is not on screen
    #[error("No cart item at index {index} (cart has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A quantity change would not fit in the quantity type.
    #[error("Quantity {requested} for {name} exceeds the maximum of {max}", max = u32::MAX)]
    QuantityOverflow { name: String, requested: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
