//! # Account Module
//!
//! Defines `Account` - an owner, a derived username, an append-only
//! movement log, an interest rate and a PIN. The balance is always
//! derived from the log via the ledger engine; it is never stored as
//! independent state.

use crate::error::{CoreError, CoreResult};
use crate::ledger::{self, LedgerSummary};
use crate::movement::Movement;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank account.
///
/// # Examples
/// ```
/// use minibank_core::Account;
/// use rust_decimal_macros::dec;
///
/// let account = Account::new("Jessica Davis", dec!(1.5), 2222).unwrap();
/// assert_eq!(account.username, "jd");
/// assert_eq!(account.balance(), dec!(0));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Login identifier, the lowercased initials of the owner's name
    pub username: String,
    /// Owner's full name
    pub owner: String,
    /// Append-only movement log, in chronological order
    pub movements: Vec<Movement>,
    /// Interest rate in percent (1.2 means 1.2%)
    pub interest_rate: Decimal,
    /// Login PIN (plaintext by design of the demo, see crate docs)
    pub pin: u32,
    /// When the account was opened
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Open an account with an empty movement log.
    ///
    /// The username is derived from the owner's name; an owner name with
    /// no usable initials is rejected.
    pub fn new(owner: &str, interest_rate: Decimal, pin: u32) -> CoreResult<Self> {
        let username = Self::username_from_owner(owner)?;
        Ok(Self {
            username,
            owner: owner.to_string(),
            movements: Vec::new(),
            interest_rate,
            pin,
            created_at: Utc::now(),
        })
    }

    /// Open an account with a pre-existing movement history (seed data).
    pub fn with_movements(
        owner: &str,
        movements: Vec<Movement>,
        interest_rate: Decimal,
        pin: u32,
    ) -> CoreResult<Self> {
        let mut account = Self::new(owner, interest_rate, pin)?;
        account.movements = movements;
        Ok(account)
    }

    /// Derive a username: lowercased first letter of each name part.
    ///
    /// "Steven Thomas Williams" -> "stw"
    pub fn username_from_owner(owner: &str) -> CoreResult<String> {
        let username: String = owner
            .to_lowercase()
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect();
        if username.is_empty() {
            return Err(CoreError::InvalidOwnerName(owner.to_string()));
        }
        Ok(username)
    }

    /// Owner's first name, for greetings
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }

    /// Append a movement to the log. Movements are never edited or
    /// removed afterwards.
    pub fn record(&mut self, amount: Decimal) {
        self.movements.push(Movement::new(amount));
    }

    /// Derived net balance (sum of all movements)
    pub fn balance(&self) -> Decimal {
        ledger::balance(&self.movements)
    }

    /// All four ledger figures for this account
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::compute(&self.movements, self.interest_rate)
    }

    /// Check login credentials
    pub fn credentials_match(&self, username: &str, pin: u32) -> bool {
        self.username == username && self.pin == pin
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (owner: {}, movements: {}, rate: {}%)",
            self.username,
            self.owner,
            self.movements.len(),
            self.interest_rate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_username_derivation() {
        assert_eq!(
            Account::username_from_owner("Jonas Schmedtmann").unwrap(),
            "js"
        );
        assert_eq!(
            Account::username_from_owner("Steven Thomas Williams").unwrap(),
            "stw"
        );
        assert_eq!(Account::username_from_owner("Sarah Smith").unwrap(), "ss");
    }

    #[test]
    fn test_username_rejects_blank_owner() {
        let err = Account::username_from_owner("   ").unwrap_err();
        assert!(matches!(err, CoreError::InvalidOwnerName(_)));
    }

    #[test]
    fn test_balance_is_derived_from_log() {
        let mut account = Account::new("Sarah Smith", dec!(1), 4444).unwrap();
        assert_eq!(account.balance(), dec!(0));

        account.record(dec!(430));
        account.record(dec!(-30));
        assert_eq!(account.balance(), dec!(400));

        // Appending is the only mutation; recomputing changes nothing
        assert_eq!(account.balance(), dec!(400));
        assert_eq!(account.movements.len(), 2);
    }

    #[test]
    fn test_summary_uses_account_rate() {
        let account = Account::with_movements(
            "Jonas Schmedtmann",
            vec![Movement::new(dec!(200)), Movement::new(dec!(3000))],
            dec!(1.2),
            1111,
        )
        .unwrap();

        let summary = account.summary();
        assert_eq!(summary.balance, dec!(3200));
        // 200 earns 2.4, 3000 earns 36
        assert_eq!(summary.interest, dec!(38.4));
    }

    #[test]
    fn test_credentials_match() {
        let account = Account::new("Jessica Davis", dec!(1.5), 2222).unwrap();
        assert!(account.credentials_match("jd", 2222));
        assert!(!account.credentials_match("jd", 1111));
        assert!(!account.credentials_match("js", 2222));
    }

    #[test]
    fn test_first_name() {
        let account = Account::new("Steven Thomas Williams", dec!(0.7), 3333).unwrap();
        assert_eq!(account.first_name(), "Steven");
    }
}
