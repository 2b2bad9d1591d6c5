//! # basket-cli: Terminal View for Basket
//!
//! A thin view over `basket-core`: it reads shopper commands, calls the cart
//! store, renders snapshots and owns the "remove this item?" prompt.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        basket (binary)                                  │
//! │                                                                         │
//! │  main.rs ─────► flags, logging, config, catalog                         │
//! │                                                                         │
//! │  shell.rs ────► Session: read line ─► Command ─► CartStore ─► render    │
//! │                                                                         │
//! │  commands.rs ─► parse "buy 2", "dec 1", "add Mango Cake | 120"          │
//! │                                                                         │
//! │  view.rs ─────► cart panel, badge, removal question                     │
//! │                                                                         │
//! │  config.rs ───► BASKET_* variables, catalog loading                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Build configuration (defaults, environment, flags)
//! 3. Load the catalog
//! 4. Run the session on stdin/stdout

pub mod commands;
pub mod config;
pub mod error;
pub mod shell;
pub mod view;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::CliConfig;
pub use error::{AppError, AppResult};
pub use shell::Session;

/// Runs one interactive session on the process terminal.
pub fn run(config: CliConfig) -> AppResult<()> {
    let catalog = config.load_catalog()?;
    info!(products = catalog.len(), "starting basket session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, catalog, stdin.lock(), stdout.lock());
    session.run()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every cart operation
/// - `RUST_LOG=basket_core=trace` - Core crate only
/// - Default: warnings, plus INFO for the basket crates
///
/// Logs go to stderr so they never mix with the rendered cart.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,basket_cli=info,basket_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
