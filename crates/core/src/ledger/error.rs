//! Ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Debit and credit totals differ by more than the tolerance.
    #[error("Unbalanced entry. Total debit: {total_debit}, total credit: {total_credit}")]
    UnbalancedEntry {
        /// Sum of the entry's debit amounts.
        total_debit: Decimal,
        /// Sum of the entry's credit amounts.
        total_credit: Decimal,
    },

    /// A total does not fit in a decimal.
    #[error("Amount overflow while totalling journal lines")]
    AmountOverflow,

    /// Lines of a posted entry cannot change.
    #[error("Cannot modify posted journal entry")]
    CannotModifyPosted,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnbalancedEntry { .. } => "UNBALANCED_ENTRY",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::CannotModifyPosted => "CANNOT_MODIFY_POSTED",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::UnbalancedEntry { .. } | Self::AmountOverflow => 400,
            Self::CannotModifyPosted => 409,
        }
    }
}
