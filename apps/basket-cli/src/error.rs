//! # App Error Type
//!
//! Unified error type for the terminal view.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in basket-cli                             │
//! │                                                                         │
//! │  Startup (config, catalog) ── AppError ──► stderr, exit code 1          │
//! │                                                                         │
//! │  One shell command         ── AppError ──► "error: ..." on stdout,      │
//! │    unknown command / bad argument / no such line                        │
//! │                                            shell keeps running          │
//! │                                                                         │
//! │  Terminal I/O              ── AppError::Io ──► shell stops              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use basket_core::CoreError;
use thiserror::Error;

/// Errors raised by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cart rule violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading input or writing output failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The cart summary could not be encoded.
    #[error("Cannot encode cart: {0}")]
    Encode(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("Cannot read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON.
    #[error("Invalid catalog {path}: {source}")]
    CatalogFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// An environment variable has a value we cannot use.
    #[error("Invalid value for {var}: {value:?}")]
    Config { var: String, value: String },

    /// Shell input that is not a command.
    #[error("Unknown command: {0} (type \"help\")")]
    UnknownCommand(String),

    /// A command with missing or malformed arguments.
    #[error("{command}: {reason}")]
    InvalidArgument { command: String, reason: String },

    /// A cart line number that is not on screen.
    #[error("No line {line} in the cart (it has {len} lines)")]
    NoSuchLine { line: usize, len: usize },

    /// A catalog number that is not in the list.
    #[error("No product {number} in the catalog (it has {len} products)")]
    NoSuchProduct { number: usize, len: usize },
}

impl AppError {
    pub fn invalid_argument(command: &str, reason: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            command: command.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the shell must stop instead of reporting and carrying on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::CatalogRead { .. } | AppError::CatalogFormat { .. }
        )
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_errors_are_not_fatal() {
        assert!(!AppError::UnknownCommand("dance".to_string()).is_fatal());
        assert!(!AppError::NoSuchLine { line: 4, len: 1 }.is_fatal());
        assert!(!AppError::from(CoreError::IndexOutOfRange { index: 0, len: 0 }).is_fatal());
    }

    #[test]
    fn test_io_errors_are_fatal() {
        let err = AppError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            AppError::invalid_argument("buy", "expected a product number").to_string(),
            "buy: expected a product number"
        );
        assert_eq!(
            AppError::NoSuchLine { line: 3, len: 2 }.to_string(),
            "No line 3 in the cart (it has 2 lines)"
        );
    }
}
