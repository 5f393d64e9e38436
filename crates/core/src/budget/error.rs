//! Budget error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Budgeted amount cannot be negative.
    #[error("Budgeted amount cannot be negative")]
    NegativeAmount,

    /// A figure does not fit in a decimal.
    #[error("Amount overflow while computing budget figures")]
    AmountOverflow,

    /// Budget period ends before it starts.
    #[error("Budget period is invalid: {start} is after {end}")]
    InvalidPeriod {
        /// First day of the period.
        start: NaiveDate,
        /// Last day of the period.
        end: NaiveDate,
    },
}

impl BudgetError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::InvalidPeriod { .. } => "INVALID_PERIOD",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::NegativeAmount | Self::InvalidPeriod { .. } | Self::AmountOverflow => 400,
        }
    }
}
