//! Result and error types for the core library

use rust_decimal::Decimal;
use thiserror::Error;

/// Core library error type
///
/// Insufficient funds and non-positive amounts are not errors at the service
/// level: `deposit` and `withdraw` report them as `Ok(false)`. Only policy
/// violations and missing entities surface as `Err`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Withdrawal of {amount:.2} exceeds the per-withdrawal limit of {limit:.2}")]
    LimitExceeded { amount: Decimal, limit: Decimal },

    #[error("Daily withdrawal limit reached ({limit})")]
    DailyCapExceeded { limit: u32 },

    #[error("A client with identity {0} already exists")]
    DuplicateIdentity(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// True for the withdrawal policy family (ceiling and daily cap)
    pub fn is_policy_limit(&self) -> bool {
        matches!(self, Self::LimitExceeded { .. } | Self::DailyCapExceeded { .. })
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_limit_classification() {
        let limit = Error::LimitExceeded {
            amount: Decimal::new(60000, 2),
            limit: Decimal::new(50000, 2),
        };
        assert!(limit.is_policy_limit());
        assert!(Error::DailyCapExceeded { limit: 3 }.is_policy_limit());
        assert!(!Error::not_found("client 123").is_policy_limit());
        assert!(!Error::InsufficientFunds.is_policy_limit());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::LimitExceeded {
            amount: Decimal::new(60000, 2),
            limit: Decimal::new(500, 0),
        };
        assert_eq!(
            err.to_string(),
            "Withdrawal of 600.00 exceeds the per-withdrawal limit of 500.00"
        );

        let err = Error::validation("name cannot be empty");
        assert!(err.to_string().contains("Validation error"));
    }
}
