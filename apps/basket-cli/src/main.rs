//! Basket CLI - shop a catalog from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Built-in demo catalog
//! basket
//!
//! # Your own catalog, removals confirmed automatically
//! basket --catalog products.json --assume-yes
//!
//! # Scripted session
//! printf 'buy 1\nbuy 1\ncart\n' | basket
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use basket_cli::{AppResult, CliConfig};

#[derive(Parser)]
#[command(name = "basket")]
#[command(author, version, about = "Interactive shopping cart for a product catalog")]
struct Cli {
    /// Catalog JSON file: [{"name": "...", "price": "..."}]
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Label printed after amounts (default: บาท)
    #[arg(long)]
    currency_label: Option<String>,

    /// Remove items without asking when their quantity reaches zero
    #[arg(short = 'y', long)]
    assume_yes: bool,
}

impl Cli {
    /// Flags win over environment variables and defaults.
    fn into_config(self) -> AppResult<CliConfig> {
        let mut config = CliConfig::from_env()?;

        if let Some(path) = self.catalog {
            config.catalog_path = Some(path);
        }
        if let Some(label) = self.currency_label {
            config.currency_label = label;
        }
        if self.assume_yes {
            config.assume_yes = true;
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    basket_cli::init_tracing();

    let result = Cli::parse().into_config().and_then(basket_cli::run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "basket failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
