//! The account store.
//!
//! `AccountDirectory` owns every account and is passed by reference to
//! whoever needs it - there is no ambient global account list. Lookup is
//! by username; iteration order is stable (sorted by username).

use crate::error::{DirectoryError, DirectoryResult};
use minibank_core::Account;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Owned, in-memory mapping from username to account.
#[derive(Debug, Default, Clone)]
pub struct AccountDirectory {
    accounts: BTreeMap<String, Account>,
}

impl AccountDirectory {
    /// Empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory holding the fixed demo accounts
    pub fn seeded() -> Self {
        crate::seed::seed()
    }

    /// Look up an account by username
    pub fn find(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    /// Look up a mutable account by username
    pub fn find_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    /// Add an account. Usernames must be unique.
    pub fn insert(&mut self, account: Account) -> DirectoryResult<()> {
        if self.accounts.contains_key(&account.username) {
            return Err(DirectoryError::DuplicateUsername(account.username));
        }
        tracing::info!(username = %account.username, "account opened");
        self.accounts.insert(account.username.clone(), account);
        Ok(())
    }

    /// Remove an account (closure), returning it
    pub fn remove(&mut self, username: &str) -> DirectoryResult<Account> {
        let account = self
            .accounts
            .remove(username)
            .ok_or_else(|| DirectoryError::AccountNotFound(username.to_string()))?;
        tracing::info!(username = %username, "account removed");
        Ok(account)
    }

    /// Append a movement to an account's log
    pub fn append_movement(&mut self, username: &str, amount: Decimal) -> DirectoryResult<()> {
        let account = self
            .find_mut(username)
            .ok_or_else(|| DirectoryError::AccountNotFound(username.to_string()))?;
        account.record(amount);
        tracing::debug!(username = %username, %amount, "movement appended");
        Ok(())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Iterate accounts in username order
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account(owner: &str, pin: u32) -> Account {
        Account::new(owner, dec!(1), pin).unwrap()
    }

    #[test]
    fn test_insert_and_find() {
        let mut directory = AccountDirectory::new();
        directory.insert(account("Jonas Schmedtmann", 1111)).unwrap();

        assert!(directory.contains("js"));
        assert_eq!(directory.find("js").unwrap().owner, "Jonas Schmedtmann");
        assert!(directory.find("jd").is_none());
    }

    #[test]
    fn test_insert_rejects_duplicate_username() {
        let mut directory = AccountDirectory::new();
        directory.insert(account("Jessica Davis", 2222)).unwrap();

        // "John Doe" collides on initials
        let result = directory.insert(account("John Doe", 5555));
        assert!(matches!(
            result,
            Err(DirectoryError::DuplicateUsername(u)) if u == "jd"
        ));
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_append_movement() {
        let mut directory = AccountDirectory::new();
        directory.insert(account("Sarah Smith", 4444)).unwrap();

        directory.append_movement("ss", dec!(430)).unwrap();
        directory.append_movement("ss", dec!(-30)).unwrap();
        assert_eq!(directory.find("ss").unwrap().balance(), dec!(400));

        let result = directory.append_movement("zz", dec!(1));
        assert!(matches!(result, Err(DirectoryError::AccountNotFound(_))));
    }

    #[test]
    fn test_remove() {
        let mut directory = AccountDirectory::new();
        directory.insert(account("Sarah Smith", 4444)).unwrap();

        let removed = directory.remove("ss").unwrap();
        assert_eq!(removed.owner, "Sarah Smith");
        assert!(directory.is_empty());

        assert!(matches!(
            directory.remove("ss"),
            Err(DirectoryError::AccountNotFound(_))
        ));
    }

    #[test]
    fn test_iter_is_username_ordered() {
        let mut directory = AccountDirectory::new();
        directory.insert(account("Sarah Smith", 4444)).unwrap();
        directory.insert(account("Jessica Davis", 2222)).unwrap();

        let usernames: Vec<&str> =
            directory.iter().map(|a| a.username.as_str()).collect();
        assert_eq!(usernames, vec!["jd", "ss"]);
    }
}
