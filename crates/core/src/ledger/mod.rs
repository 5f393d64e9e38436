//! Double-entry journal logic.
//!
//! This module implements the ledger side of the core:
//! - Journal lines and entry inputs
//! - The balance validator (debits = credits within a tolerance)
//! - The journal entry lifecycle (DRAFT -> POSTED)
//! - Error types for ledger operations

pub mod entry;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use entry::JournalEntry;
pub use error::LedgerError;
pub use types::{CreateJournalEntryInput, EntryState, EntryTotals, JournalLine};
pub use validation::{DEFAULT_BALANCE_TOLERANCE, totals, validate_balance};
