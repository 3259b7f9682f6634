//! # Ledger Engine
//!
//! Pure functions deriving display and decision values from a movement
//! log. Stateless per call, no side effects, order-independent: the log's
//! chronological order matters for display but not for any aggregate here.
//!
//! Bucketing boundaries are observable behavior and intentionally
//! asymmetric:
//! - inflow/outflow split at `>= 0` / `< 0` (zero lands in the inflow
//!   bucket, contributing nothing),
//! - interest eligibility is strictly `> 0`, and per-movement interest
//!   below 1 unit is not credited.

use crate::movement::Movement;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-movement minimum interest: amounts below 1 unit are not credited.
const MIN_INTEREST: Decimal = Decimal::ONE;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Net balance: sum of all movement amounts. Empty log yields 0.
pub fn balance(movements: &[Movement]) -> Decimal {
    movements.iter().map(|m| m.amount).sum()
}

/// Total inflow: sum of absolute values of amounts >= 0.
pub fn inflow(movements: &[Movement]) -> Decimal {
    movements
        .iter()
        .filter(|m| m.amount >= Decimal::ZERO)
        .map(|m| m.amount.abs())
        .sum()
}

/// Total outflow: sum of absolute values of amounts < 0.
pub fn outflow(movements: &[Movement]) -> Decimal {
    movements
        .iter()
        .filter(|m| m.amount < Decimal::ZERO)
        .map(|m| m.amount.abs())
        .sum()
}

/// Qualifying interest for a rate given in percent (`1.2` means 1.2%).
///
/// Each strictly positive movement earns `amount * rate / 100`; earned
/// amounts below [`MIN_INTEREST`] are dropped, the rest summed. The
/// result is unrounded - rounding to 2 decimal places belongs to the
/// display boundary.
pub fn interest(movements: &[Movement], rate: Decimal) -> Decimal {
    movements
        .iter()
        .filter(|m| m.amount > Decimal::ZERO)
        .map(|m| m.amount * rate / HUNDRED)
        .filter(|earned| *earned >= MIN_INTEREST)
        .sum()
}

/// All four ledger figures for one account, computed together.
///
/// Convenience for callers that refresh a full summary after every
/// mutating action (the common case in the presentation layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub balance: Decimal,
    pub inflow: Decimal,
    pub outflow: Decimal,
    pub interest: Decimal,
}

impl LedgerSummary {
    pub fn compute(movements: &[Movement], rate: Decimal) -> Self {
        Self {
            balance: balance(movements),
            inflow: inflow(movements),
            outflow: outflow(movements),
            interest: interest(movements, rate),
        }
    }
}
