//! Account statements.
//!
//! A statement is a snapshot: numbered movement rows plus the four
//! ledger figures. Rows are shown most-recent-first; the sort toggle
//! switches to ascending-by-amount over a copy - the account's log is
//! never reordered.

use minibank_core::{Account, LedgerSummary, Movement, MovementKind};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row ordering of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Chronological log, latest movement on top
    #[default]
    LatestFirst,
    /// Sorted ascending by amount, largest on top
    ByAmount,
}

impl SortOrder {
    /// Order selected by a session's sort toggle
    pub fn from_toggle(sorted: bool) -> Self {
        if sorted {
            SortOrder::ByAmount
        } else {
            SortOrder::LatestFirst
        }
    }
}

/// One display row of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementRow {
    /// 1-based position in the rendered sequence
    pub index: usize,
    /// Deposit/withdrawal tag (zero renders as withdrawal)
    pub kind: MovementKind,
    pub amount: Decimal,
}

/// A rendered view of one account: rows plus summary figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub username: String,
    pub owner: String,
    pub order: SortOrder,
    /// Rows in display order (top first)
    pub rows: Vec<StatementRow>,
    pub summary: LedgerSummary,
}

impl Statement {
    /// Build a statement from an account.
    pub fn build(account: &Account, order: SortOrder) -> Self {
        let mut movements: Vec<&Movement> = account.movements.iter().collect();
        if order == SortOrder::ByAmount {
            movements.sort_by_key(|m| m.amount);
        }

        // Number rows in sequence order, then flip so the last lands on top
        let mut rows: Vec<StatementRow> = movements
            .iter()
            .enumerate()
            .map(|(i, m)| StatementRow {
                index: i + 1,
                kind: m.kind(),
                amount: m.amount,
            })
            .collect();
        rows.reverse();

        Self {
            username: account.username.clone(),
            owner: account.owner.clone(),
            order,
            rows,
            summary: account.summary(),
        }
    }

    /// Interest as displayed: rounded to 2 decimal places. The engine's
    /// value stays exact; this is the display boundary.
    pub fn display_interest(&self) -> Decimal {
        self.summary.interest.round_dp(2)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statement for {} ({})", self.owner, self.username)?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:>3} {:<10} {:>10}",
                row.index,
                row.kind.as_str(),
                row.amount
            )?;
        }
        writeln!(f, "  Balance:  {} EUR", self.summary.balance)?;
        writeln!(f, "  In:       {} EUR", self.summary.inflow)?;
        writeln!(f, "  Out:      {} EUR", self.summary.outflow)?;
        write!(f, "  Interest: {}", self.display_interest())
    }
}
