//! Minibank CLI - demo banking operations from the command line
//!
//! All data is transient: every invocation seeds the fixed demo accounts,
//! authenticates, applies one operation and prints the refreshed
//! statement. Nothing is persisted between runs.
//!
//! Usage:
//! ```bash
//! minibank accounts
//! minibank statement js 1111 --sorted
//! minibank transfer js 1111 --to jd --amount 500
//! minibank loan js 1111 --amount 1000
//! minibank close ss 4444 --confirm-user ss --confirm-pin 4444
//! minibank export js 1111 --format csv --output statement.csv
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

mod commands;

use commands::{accounts, operations, statement};

/// Minibank - an in-memory demo bank with a pure ledger engine
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the seeded demo accounts
    Accounts,

    /// Log in and print an account statement
    Statement {
        /// Username (e.g. js)
        username: String,
        /// Login PIN
        pin: u32,
        /// Sort rows ascending by amount instead of latest-first
        #[arg(long)]
        sorted: bool,
    },

    /// Transfer an amount to another account
    Transfer {
        /// Username
        username: String,
        /// Login PIN
        pin: u32,
        /// Recipient username
        #[arg(long)]
        to: String,
        /// Amount to transfer
        #[arg(long)]
        amount: Decimal,
    },

    /// Request a loan
    Loan {
        /// Username
        username: String,
        /// Login PIN
        pin: u32,
        /// Requested amount
        #[arg(long)]
        amount: Decimal,
    },

    /// Close the account
    Close {
        /// Username
        username: String,
        /// Login PIN
        pin: u32,
        /// Confirmation username (must match)
        #[arg(long)]
        confirm_user: String,
        /// Confirmation PIN (must match)
        #[arg(long)]
        confirm_pin: u32,
    },

    /// Export a statement to CSV, JSON or Markdown
    Export {
        /// Username
        username: String,
        /// Login PIN
        pin: u32,
        /// Export format
        #[arg(long, default_value = "csv")]
        format: ExportFormat,
        /// Output file path (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Sort rows ascending by amount
        #[arg(long)]
        sorted: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Markdown,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut directory = minibank_directory::AccountDirectory::seeded();

    match cli.command {
        Commands::Accounts => {
            accounts::list(&directory);
        }

        Commands::Statement {
            username,
            pin,
            sorted,
        } => {
            statement::show(&directory, &username, pin, sorted)?;
        }

        Commands::Transfer {
            username,
            pin,
            to,
            amount,
        } => {
            operations::transfer(&mut directory, &username, pin, &to, amount)?;
        }

        Commands::Loan {
            username,
            pin,
            amount,
        } => {
            operations::loan(&mut directory, &username, pin, amount)?;
        }

        Commands::Close {
            username,
            pin,
            confirm_user,
            confirm_pin,
        } => {
            operations::close(&mut directory, &username, pin, &confirm_user, confirm_pin)?;
        }

        Commands::Export {
            username,
            pin,
            format,
            output,
            sorted,
        } => {
            statement::export(&directory, &username, pin, format, output.as_deref(), sorted)?;
        }
    }

    Ok(())
}
