//! Mutating operations: transfer, loan, close.
//!
//! Each command logs in, applies the operation and prints the refreshed
//! statement, mirroring how the UI recomputes every figure after a
//! mutating action.

use anyhow::{Context, Result};
use minibank_business as business;
use minibank_directory::AccountDirectory;
use minibank_reports::{SortOrder, Statement};
use rust_decimal::Decimal;

/// Transfer an amount to another account
pub fn transfer(
    directory: &mut AccountDirectory,
    username: &str,
    pin: u32,
    to: &str,
    amount: Decimal,
) -> Result<()> {
    let session = business::login(directory, username, pin)?;
    business::transfer(directory, &session, to, amount)?;

    println!("Transferred {} EUR to {}", amount, to);
    print_statement(directory, &session.username)?;
    Ok(())
}

/// Request a loan
pub fn loan(
    directory: &mut AccountDirectory,
    username: &str,
    pin: u32,
    amount: Decimal,
) -> Result<()> {
    let session = business::login(directory, username, pin)?;
    business::request_loan(directory, &session, amount)?;

    println!("Loan granted: {} EUR", amount);
    print_statement(directory, &session.username)?;
    Ok(())
}

/// Close the account
pub fn close(
    directory: &mut AccountDirectory,
    username: &str,
    pin: u32,
    confirm_user: &str,
    confirm_pin: u32,
) -> Result<()> {
    let session = business::login(directory, username, pin)?;
    let removed = business::close_account(directory, session, confirm_user, confirm_pin)?;

    println!("Account {} closed. Goodbye {}!", removed.username, removed.first_name());
    println!("Remaining accounts: {}", directory.len());
    Ok(())
}

fn print_statement(directory: &AccountDirectory, username: &str) -> Result<()> {
    let account = directory
        .find(username)
        .context("logged-in account disappeared")?;
    println!("{}", Statement::build(account, SortOrder::LatestFirst));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_transfer_updates_both_accounts() {
        let mut directory = AccountDirectory::seeded();
        transfer(&mut directory, "js", 1111, "jd", dec!(500)).unwrap();

        assert_eq!(directory.find("js").unwrap().balance(), dec!(3340));
        assert_eq!(directory.find("jd").unwrap().balance(), dec!(12220));
    }

    #[test]
    fn test_transfer_requires_login() {
        let mut directory = AccountDirectory::seeded();
        assert!(transfer(&mut directory, "js", 9999, "jd", dec!(1)).is_err());
        assert_eq!(directory.find("js").unwrap().balance(), dec!(3840));
    }

    #[test]
    fn test_loan_appends_movement() {
        let mut directory = AccountDirectory::seeded();
        loan(&mut directory, "ss", 4444, dec!(5000)).unwrap();
        assert_eq!(directory.find("ss").unwrap().balance(), dec!(7270));
    }

    #[test]
    fn test_close_removes_account() {
        let mut directory = AccountDirectory::seeded();
        close(&mut directory, "stw", 3333, "stw", 3333).unwrap();
        assert!(!directory.contains("stw"));
    }
}
