//! Business layer errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Business operation errors
#[derive(Debug, Error)]
pub enum BusinessError {
    // === Login / credentials ===
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Closure confirmation does not match the logged-in account")]
    ConfirmationMismatch,

    // === Validation errors ===
    #[error("Invalid amount: {0} (must be positive)")]
    InvalidAmount(Decimal),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Unknown recipient: {0}")]
    UnknownRecipient(String),

    #[error("Cannot transfer to your own account")]
    SelfTransfer,

    #[error("Loan declined: no deposit of at least {minimum_deposit} on record")]
    LoanDeclined { minimum_deposit: Decimal },

    // === Wrapped errors ===
    #[error("Directory error: {0}")]
    Directory(#[from] minibank_directory::DirectoryError),
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;

impl BusinessError {
    pub fn insufficient_balance(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientBalance {
            requested,
            available,
        }
    }

    /// Whether the error is one the user can fix by retyping inputs
    pub fn is_user_error(&self) -> bool {
        !matches!(self, BusinessError::Directory(_))
    }
}
