//! Brew Haven CLI - cart operations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Add one Latte to the cart
//! bh-cli cart add --id latte-1 --name Latte --price 4.50 --image latte.jpg
//!
//! # Adjust a quantity (negative deltas remove at zero)
//! bh-cli cart update --id latte-1 --delta -1
//!
//! # Remove an item
//! bh-cli cart remove --id latte-1
//!
//! # Show the rendered cart panel and badge
//! bh-cli cart show
//!
//! # Attempt checkout
//! bh-cli cart checkout
//!
//! # Reformat a phone number the way the tel input does
//! bh-cli phone format 5551234567
//! ```
//!
//! The cart persists to the file named by `BREWHAVEN_STORE_PATH`
//! (default: `brewhaven-store.json`), so state carries across invocations.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Rendered fragments go to stdout; that is this binary's output.
#![allow(clippy::print_stdout)]

use brewhaven_core::Price;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "bh-cli")]
#[command(author, version, about = "Brew Haven cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Operate on the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Phone input helpers
    Phone {
        #[command(subcommand)]
        action: PhoneAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a product
    Add {
        /// Stable product identifier
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Unit price, e.g. 4.50
        #[arg(long)]
        price: Price,

        /// Display image URL or path
        #[arg(long)]
        image: String,
    },
    /// Remove an item
    Remove {
        /// Stable product identifier
        #[arg(long)]
        id: String,
    },
    /// Add a signed delta to an item's quantity
    Update {
        /// Stable product identifier
        #[arg(long)]
        id: String,

        /// Signed quantity change, e.g. 1 or -1
        #[arg(long, allow_hyphen_values = true)]
        delta: i32,
    },
    /// Render the cart panel and badge
    Show,
    /// Attempt checkout
    Checkout,
}

#[derive(Subcommand)]
enum PhoneAction {
    /// Reformat raw input into (XXX) XXX-XXXX
    Format {
        /// Raw phone input
        input: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                id,
                name,
                price,
                image,
            } => commands::cart::add(&id, &name, price, &image)?,
            CartAction::Remove { id } => commands::cart::remove(&id)?,
            CartAction::Update { id, delta } => commands::cart::update(&id, delta)?,
            CartAction::Show => commands::cart::show()?,
            CartAction::Checkout => commands::cart::checkout()?,
        },
        Commands::Phone { action } => match action {
            PhoneAction::Format { input } => commands::phone::format(&input),
        },
    }
    Ok(())
}
