//! Balance validation for journal entries.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{EntryTotals, JournalLine};

/// Largest debit/credit difference accepted by default (0.01).
pub const DEFAULT_BALANCE_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Sums the debit and credit sides of `lines`.
///
/// # Errors
///
/// Returns [`LedgerError::AmountOverflow`] if either side exceeds the
/// decimal range.
pub fn totals(lines: &[JournalLine]) -> Result<EntryTotals, LedgerError> {
    lines.iter().try_fold(EntryTotals::default(), |acc, line| {
        Ok(EntryTotals {
            total_debit: acc
                .total_debit
                .checked_add(line.debit)
                .ok_or(LedgerError::AmountOverflow)?,
            total_credit: acc
                .total_credit
                .checked_add(line.credit)
                .ok_or(LedgerError::AmountOverflow)?,
        })
    })
}

/// Validates that `lines` balance within `tolerance`.
///
/// A difference of exactly `tolerance` is accepted. An empty line set sums
/// to zero on both sides and is therefore balanced.
///
/// # Errors
///
/// Returns [`LedgerError::UnbalancedEntry`] with both totals when
/// `|total_debit - total_credit| > tolerance`, or
/// [`LedgerError::AmountOverflow`] when a side cannot be summed.
pub fn validate_balance(
    lines: &[JournalLine],
    tolerance: Decimal,
) -> Result<EntryTotals, LedgerError> {
    let totals = totals(lines)?;

    if !totals.is_balanced(tolerance) {
        return Err(LedgerError::UnbalancedEntry {
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
        });
    }

    Ok(totals)
}
