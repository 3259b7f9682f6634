//! Directory errors

use thiserror::Error;

/// Errors from the account directory
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Account already exists: {0}")]
    DuplicateUsername(String),

    #[error("Core error: {0}")]
    Core(#[from] minibank_core::CoreError),
}

/// Result type alias for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DirectoryError::AccountNotFound("zz".to_string());
        assert_eq!(err.to_string(), "Account not found: zz");

        let err = DirectoryError::DuplicateUsername("js".to_string());
        assert_eq!(err.to_string(), "Account already exists: js");
    }
}
