//! # Movement Module
//!
//! Defines `Movement` - a single signed entry in an account's history.
//! Positive amounts are deposits, negative amounts are withdrawals.
//! The log is append-only: movements are never edited or removed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display classification of a movement.
///
/// Strictly positive amounts are tagged `Deposit`; everything else,
/// including an exact zero, is tagged `Withdrawal`. Zero still counts
/// toward the inflow bucket in the aggregates (see [`crate::ledger`]) -
/// the tag is a display concern only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Money entering the account
    Deposit,
    /// Money leaving the account
    Withdrawal,
}

impl MovementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(MovementKind::Deposit),
            "withdrawal" => Some(MovementKind::Withdrawal),
            _ => None,
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One signed transaction amount in an account's history.
///
/// Uses `rust_decimal::Decimal` for exact monetary arithmetic.
///
/// # Examples
/// ```
/// use minibank_core::{Movement, MovementKind};
/// use rust_decimal_macros::dec;
///
/// let mov = Movement::new(dec!(200));
/// assert_eq!(mov.kind(), MovementKind::Deposit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Signed amount (Decimal, serialized as String in JSON)
    pub amount: Decimal,
    /// When the movement was recorded
    pub recorded_at: DateTime<Utc>,
}

impl Movement {
    /// Create a Movement recorded now
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            recorded_at: Utc::now(),
        }
    }

    /// Create a Movement with an explicit timestamp (seed data, tests)
    pub fn recorded_at(amount: Decimal, recorded_at: DateTime<Utc>) -> Self {
        Self {
            amount,
            recorded_at,
        }
    }

    /// Display tag: amount > 0 is a deposit, anything else a withdrawal
    pub fn kind(&self) -> MovementKind {
        if self.amount > Decimal::ZERO {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }

    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.amount == Decimal::ZERO
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.amount)
    }
}
