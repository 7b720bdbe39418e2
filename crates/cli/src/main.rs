//! Pop! Shop CLI - terminal storefront.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog
//! pop-shop catalog
//!
//! # Price a cart without entering the shop
//! pop-shop quote 1 8:3 --json
//!
//! # Interactive shopping session
//! pop-shop shop
//! ```
//!
//! # Commands
//!
//! - `catalog` - List purchasable products
//! - `quote` - Build a cart from `ID[:QTY]` arguments and print the summary
//! - `shop` - Interactive shell: add, adjust, and check out
//!
//! Logs go to stderr (filter with `RUST_LOG`); rendered output goes to stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pop_shop_storefront::{ShopSession, StorefrontConfig};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "pop-shop")]
#[command(version, about = "Pop! Shop terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List purchasable products
    Catalog {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Build a cart from arguments and print the order summary
    Quote {
        /// Items as `ID` or `ID:QTY`
        #[arg(required = true)]
        items: Vec<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive shopping session
    Shop,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pop_shop_storefront=info,pop_shop_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let mut session = ShopSession::from_config(&config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Catalog { json } => commands::catalog::list(&session, json, &mut out)?,
        Commands::Quote { items, json } => {
            commands::quote::run(&mut session, &items, json, &mut out)?;
        }
        Commands::Shop => {
            let stdin = io::stdin();
            commands::shop::Shell::new(&mut session, &config, stdin.lock(), &mut out).run()?;
        }
    }

    out.flush()?;
    Ok(())
}
