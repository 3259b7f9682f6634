//! Account operations: login, transfer, loan request, closure.
//!
//! Each handler validates first and mutates only once every rule has
//! passed, so a declined action leaves the directory untouched.

use crate::error::{BusinessError, BusinessResult};
use crate::session::Session;
use minibank_core::Account;
use minibank_directory::AccountDirectory;
use rust_decimal::Decimal;

/// Authenticate and open a session.
pub fn login(
    directory: &AccountDirectory,
    username: &str,
    pin: u32,
) -> BusinessResult<Session> {
    let account = directory
        .find(username)
        .filter(|account| account.credentials_match(username, pin))
        .ok_or(BusinessError::InvalidCredentials)?;

    tracing::info!(username = %account.username, "login");
    Ok(Session::new(&account.username))
}

/// Transfer an amount from the session's account to another account.
///
/// Rules: amount must be positive, must not exceed the sender's computed
/// balance, the recipient must exist and must not be the sender. On
/// success the sender's log gets `-amount` and the recipient's `+amount`.
pub fn transfer(
    directory: &mut AccountDirectory,
    session: &Session,
    to: &str,
    amount: Decimal,
) -> BusinessResult<()> {
    if amount <= Decimal::ZERO {
        return Err(BusinessError::InvalidAmount(amount));
    }
    if to == session.username {
        return Err(BusinessError::SelfTransfer);
    }
    if !directory.contains(to) {
        return Err(BusinessError::UnknownRecipient(to.to_string()));
    }

    let sender = directory
        .find(&session.username)
        .ok_or_else(|| BusinessError::UnknownRecipient(session.username.clone()))?;
    let available = sender.balance();
    if amount > available {
        return Err(BusinessError::insufficient_balance(amount, available));
    }

    directory.append_movement(&session.username, -amount)?;
    directory.append_movement(to, amount)?;

    tracing::info!(from = %session.username, %to, %amount, "transfer");
    Ok(())
}

/// Request a loan for the session's account.
///
/// Granted when the amount is positive and some historical movement is
/// at least a tenth of it; the loan lands as a single positive movement.
pub fn request_loan(
    directory: &mut AccountDirectory,
    session: &Session,
    amount: Decimal,
) -> BusinessResult<()> {
    if amount <= Decimal::ZERO {
        return Err(BusinessError::InvalidAmount(amount));
    }

    let minimum_deposit = amount / Decimal::TEN;
    let account = directory
        .find(&session.username)
        .ok_or_else(|| BusinessError::UnknownRecipient(session.username.clone()))?;
    let qualifies = account
        .movements
        .iter()
        .any(|m| m.amount >= minimum_deposit);
    if !qualifies {
        return Err(BusinessError::LoanDeclined { minimum_deposit });
    }

    directory.append_movement(&session.username, amount)?;

    tracing::info!(username = %session.username, %amount, "loan granted");
    Ok(())
}

/// Close the session's account.
///
/// The confirmation username and PIN must match the logged-in account
/// exactly. Consumes the session; the removed account is returned so the
/// caller can show a farewell.
pub fn close_account(
    directory: &mut AccountDirectory,
    session: Session,
    confirm_username: &str,
    confirm_pin: u32,
) -> BusinessResult<Account> {
    let account = directory
        .find(&session.username)
        .ok_or_else(|| BusinessError::UnknownRecipient(session.username.clone()))?;
    if !account.credentials_match(confirm_username, confirm_pin) {
        return Err(BusinessError::ConfirmationMismatch);
    }

    let removed = directory.remove(&session.username)?;
    tracing::info!(username = %removed.username, "account closed");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn seeded() -> AccountDirectory {
        AccountDirectory::seeded()
    }

    #[test]
    fn test_login_success() {
        let directory = seeded();
        let session = login(&directory, "js", 1111).unwrap();
        assert_eq!(session.username, "js");
        assert!(!session.sorted);
    }

    #[test]
    fn test_login_rejects_bad_credentials() {
        let directory = seeded();
        assert!(matches!(
            login(&directory, "js", 9999),
            Err(BusinessError::InvalidCredentials)
        ));
        assert!(matches!(
            login(&directory, "nobody", 1111),
            Err(BusinessError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_transfer_moves_both_legs() {
        let mut directory = seeded();
        let session = login(&directory, "js", 1111).unwrap();

        transfer(&mut directory, &session, "jd", dec!(500)).unwrap();

        assert_eq!(directory.find("js").unwrap().balance(), dec!(3340));
        assert_eq!(directory.find("jd").unwrap().balance(), dec!(12220));
        assert_eq!(
            directory.find("js").unwrap().movements.last().unwrap().amount,
            dec!(-500)
        );
    }

    #[test]
    fn test_transfer_rejects_non_positive_amount() {
        let mut directory = seeded();
        let session = login(&directory, "js", 1111).unwrap();

        assert!(matches!(
            transfer(&mut directory, &session, "jd", dec!(0)),
            Err(BusinessError::InvalidAmount(_))
        ));
        assert!(matches!(
            transfer(&mut directory, &session, "jd", dec!(-10)),
            Err(BusinessError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_transfer_never_exceeds_balance() {
        // Regardless of recipient validity, an amount above the computed
        // balance is declined
        let mut directory = seeded();
        let session = login(&directory, "js", 1111).unwrap();

        let result = transfer(&mut directory, &session, "jd", dec!(3841));
        assert!(matches!(
            result,
            Err(BusinessError::InsufficientBalance { .. })
        ));
        // Declined action leaves both logs untouched
        assert_eq!(directory.find("js").unwrap().balance(), dec!(3840));
        assert_eq!(directory.find("jd").unwrap().balance(), dec!(11720));

        // The full balance itself is transferable (amount <= balance)
        transfer(&mut directory, &session, "jd", dec!(3840)).unwrap();
        assert_eq!(directory.find("js").unwrap().balance(), dec!(0));
    }

    #[test]
    fn test_transfer_rejects_self_and_unknown_recipient() {
        let mut directory = seeded();
        let session = login(&directory, "js", 1111).unwrap();

        assert!(matches!(
            transfer(&mut directory, &session, "js", dec!(10)),
            Err(BusinessError::SelfTransfer)
        ));
        assert!(matches!(
            transfer(&mut directory, &session, "zz", dec!(10)),
            Err(BusinessError::UnknownRecipient(_))
        ));
    }

    #[test]
    fn test_loan_requires_tenth_deposit() {
        let mut directory = seeded();
        let session = login(&directory, "js", 1111).unwrap();

        // Largest movement is 3000, so up to 30000 qualifies
        request_loan(&mut directory, &session, dec!(30000)).unwrap();
        assert_eq!(directory.find("js").unwrap().balance(), dec!(33840));

        let result = request_loan(&mut directory, &session, dec!(300001));
        assert!(matches!(result, Err(BusinessError::LoanDeclined { .. })));
    }

    #[test]
    fn test_loan_rejects_non_positive_amount() {
        let mut directory = seeded();
        let session = login(&directory, "js", 1111).unwrap();

        assert!(matches!(
            request_loan(&mut directory, &session, dec!(0)),
            Err(BusinessError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_close_account() {
        let mut directory = seeded();
        let session = login(&directory, "ss", 4444).unwrap();

        let removed = close_account(&mut directory, session, "ss", 4444).unwrap();
        assert_eq!(removed.owner, "Sarah Smith");
        assert!(!directory.contains("ss"));
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn test_close_requires_matching_confirmation() {
        let mut directory = seeded();

        let session = login(&directory, "ss", 4444).unwrap();
        let result = close_account(&mut directory, session, "ss", 1111);
        assert!(matches!(result, Err(BusinessError::ConfirmationMismatch)));

        // Confirming someone else's credentials does not close their account
        let session = login(&directory, "ss", 4444).unwrap();
        let result = close_account(&mut directory, session, "js", 1111);
        assert!(matches!(result, Err(BusinessError::ConfirmationMismatch)));
        assert_eq!(directory.len(), 4);
    }
}
