//! # Minibank Core
//!
//! Core domain types for Minibank:
//! - `Movement`: one signed transaction amount in an account's history
//! - `Account`: owner, derived username, movement log, interest rate
//! - `ledger`: pure functions deriving balance, inflow, outflow, interest
//!   from a movement log
//!
//! The ledger engine is the heart of the workspace. Everything else
//! (directory, business operations, reports, CLI) consumes its outputs.

pub mod account;
pub mod error;
pub mod ledger;
pub mod movement;

pub use account::Account;
pub use error::{CoreError, CoreResult};
pub use ledger::{balance, inflow, interest, outflow, LedgerSummary};
pub use movement::{Movement, MovementKind};
