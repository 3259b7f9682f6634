//! # Error Module
//!
//! Core domain errors, using thiserror. The ledger engine itself cannot
//! fail on well-formed numeric input; errors here cover account
//! construction only.

use thiserror::Error;

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Cannot derive a username from owner name: {0:?}")]
    InvalidOwnerName(String),
}

/// Result type alias with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::InvalidOwnerName("  ".to_string());
        assert_eq!(
            err.to_string(),
            "Cannot derive a username from owner name: \"  \""
        );
    }
}
