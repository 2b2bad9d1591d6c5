//! # Shell Commands
//!
//! Parses one line of shell input into a [`Command`].
//!
//! ```text
//! list                     catalog with numbers
//! buy <n>                  add catalog product n
//! add <name> | <price>     add a free-form item
//! inc <line> [n]   + <line>
//! dec <line> [n]   - <line>
//! cart [--json]    show
//! checkout
//! help             ?
//! quit             exit, q
//! ```
//!
//! Line and product numbers are 1-based, as printed on screen.

use crate::error::{AppError, AppResult};

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input.
    Nothing,
    Help,
    List,
    Buy { number: usize },
    Add { name: String, price_text: String },
    Change { line: usize, delta: i64 },
    Show { json: bool },
    Checkout,
    Quit,
}

impl Command {
    /// Whether running the command can change the cart.
    pub fn mutates_cart(&self) -> bool {
        matches!(
            self,
            Command::Buy { .. } | Command::Add { .. } | Command::Change { .. }
        )
    }
}

/// Parses one input line.
pub fn parse(line: &str) -> AppResult<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Nothing),
        "help" | "?" => Ok(Command::Help),
        "list" | "catalog" => Ok(Command::List),
        "buy" => Ok(Command::Buy {
            number: parse_number(word, rest, "a product number")?,
        }),
        "add" => parse_add(rest),
        "inc" | "+" => parse_change(word, rest, 1),
        "dec" | "-" => parse_change(word, rest, -1),
        "cart" | "show" => match rest {
            "" => Ok(Command::Show { json: false }),
            "--json" => Ok(Command::Show { json: true }),
            other => Err(AppError::invalid_argument(word, format!("unexpected {other:?}"))),
        },
        "checkout" => Ok(Command::Checkout),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => Err(AppError::UnknownCommand(word.to_string())),
    }
}

fn parse_add(rest: &str) -> AppResult<Command> {
    let (name, price_text) = match rest.split_once('|') {
        Some((name, price)) => (name.trim(), price.trim()),
        None => (rest, ""),
    };

    if name.is_empty() {
        return Err(AppError::invalid_argument("add", "expected <name> | <price>"));
    }

    Ok(Command::Add {
        name: name.to_string(),
        price_text: price_text.to_string(),
    })
}

fn parse_change(word: &str, rest: &str, sign: i64) -> AppResult<Command> {
    let mut args = rest.split_whitespace();
    let line = parse_number(word, args.next().unwrap_or(""), "a line number")?;

    let amount = match args.next() {
        Some(text) => text
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| AppError::invalid_argument(word, format!("bad amount {text:?}")))?,
        None => 1,
    };

    if let Some(extra) = args.next() {
        return Err(AppError::invalid_argument(word, format!("unexpected {extra:?}")));
    }

    Ok(Command::Change {
        line,
        delta: sign * amount,
    })
}

/// Parses a 1-based number.
fn parse_number(word: &str, text: &str, what: &str) -> AppResult<usize> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::invalid_argument(word, format!("expected {what}"))),
    }
}
