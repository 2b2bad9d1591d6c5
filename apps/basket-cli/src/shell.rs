//! # Shell Session
//!
//! The read-eval-render loop that plays the view role for one [`CartStore`].
//!
//! ## Session Lifecycle
//! ```text
//! ┌──────────┐   read line   ┌──────────┐   execute   ┌──────────────┐
//! │  prompt  │──────────────►│  parse   │────────────►│  CartStore   │
//! │   "> "   │               │ Command  │             │  operation   │
//! └──────────┘               └──────────┘             └──────┬───────┘
//!      ▲                                                     │
//!      │            badge + totals re-derived                │
//!      └─────────────────────────────────────────────────────┘
//! ```
//!
//! One store per session, created empty and dropped when the session ends.
//! Input and output are generic so tests can drive a session from a
//! `Cursor` and inspect a `Vec<u8>`.

use std::io::{BufRead, Write};

use basket_core::{
    CartStore, CatalogEntry, CoreError, QuantityChange, RemovalDecision, RemovalResolution,
};
use tracing::{debug, info, warn};

use crate::commands::{self, Command};
use crate::config::CliConfig;
use crate::error::{AppError, AppResult};
use crate::view;

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive cart session.
pub struct Session<R, W> {
    store: CartStore,
    catalog: Vec<CatalogEntry>,
    config: CliConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: CliConfig, catalog: Vec<CatalogEntry>, input: R, output: W) -> Self {
        Session {
            store: CartStore::new(),
            catalog,
            config,
            input,
            output,
        }
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    ///
    /// Command errors are printed and the loop continues; I/O errors end it.
    pub fn run(&mut self) -> AppResult<()> {
        writeln!(self.output, "{}", view::HELP)?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("end of input, closing session");
                break;
            }

            let flow = match commands::parse(&line).and_then(|command| self.execute(command)) {
                Ok(flow) => flow,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(error = %err, "command failed");
                    writeln!(self.output, "error: {err}")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        info!(
            lines = self.store.len(),
            total_quantity = self.store.total_quantity(),
            "session ended"
        );
        Ok(())
    }

    /// Executes one command against the cart.
    pub fn execute(&mut self, command: Command) -> AppResult<Flow> {
        debug!(?command, "executing command");
        let mutates = command.mutates_cart();

        match command {
            Command::Nothing => {}
            Command::Help => write!(self.output, "{}", view::HELP)?,
            Command::List => write!(self.output, "{}", view::catalog(&self.catalog))?,
            Command::Buy { number } => {
                let entry = number
                    .checked_sub(1)
                    .and_then(|index| self.catalog.get(index))
                    .ok_or(AppError::NoSuchProduct {
                        number,
                        len: self.catalog.len(),
                    })?;
                self.store.add_entry(entry);
                writeln!(self.output, "Added {}", entry.name())?;
            }
            Command::Add { name, price_text } => {
                self.store.add(&name, &price_text);
                writeln!(self.output, "Added {name}")?;
            }
            Command::Change { line, delta } => self.change(line, delta)?,
            Command::Show { json: false } => write!(
                self.output,
                "{}",
                view::cart(
                    self.store.snapshot(),
                    self.store.total_price(),
                    &self.config.currency_label
                )
            )?,
            Command::Show { json: true } => {
                writeln!(self.output, "{}", self.store.summary().to_json()?)?;
            }
            Command::Checkout => {
                if self.store.is_empty() {
                    writeln!(self.output, "{}", view::EMPTY_CART)?;
                } else {
                    info!(total = %self.store.total_price(), "demo checkout");
                    writeln!(self.output, "{}", view::CHECKOUT_THANKS)?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        if mutates {
            writeln!(
                self.output,
                "{}",
                view::badge(
                    self.store.total_quantity(),
                    self.store.total_price(),
                    &self.config.currency_label
                )
            )?;
        }

        Ok(Flow::Continue)
    }

    /// Applies a quantity change to a 1-based cart line, asking before removal.
    fn change(&mut self, line: usize, delta: i64) -> AppResult<()> {
        let len = self.store.len();
        let no_such_line = AppError::NoSuchLine { line, len };
        let index = line.checked_sub(1).ok_or(no_such_line)?;

        let change = self.store.change_quantity(index, delta).map_err(|err| match err {
            CoreError::IndexOutOfRange { .. } => AppError::NoSuchLine { line, len },
            other => AppError::Core(other),
        })?;

        match change {
            QuantityChange::Updated { quantity } => {
                writeln!(self.output, "Line {line}: quantity {quantity}")?;
            }
            QuantityChange::PendingRemovalConfirmation(pending) => {
                let confirmed = if self.config.assume_yes {
                    true
                } else {
                    write!(self.output, "{}", view::removal_question(pending.item()))?;
                    self.output.flush()?;

                    let mut answer = String::new();
                    self.input.read_line(&mut answer)?;
                    view::is_yes(&answer)
                };

                match pending.resolve(RemovalDecision::from(confirmed)) {
                    RemovalResolution::Removed(item) => {
                        writeln!(self.output, "Removed {}", item.name)?;
                    }
                    RemovalResolution::Reset => {
                        writeln!(self.output, "Kept line {line} at quantity 1")?;
                    }
                }
            }
        }

        Ok(())
    }
}
