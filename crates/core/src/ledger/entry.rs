//! Journal entry aggregate and its DRAFT -> POSTED lifecycle.

use budgetbook_shared::types::JournalEntryId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::LedgerError;
use super::types::{CreateJournalEntryInput, EntryState, EntryTotals, JournalLine};
use super::validation::validate_balance;

/// A journal entry made of ordered debit/credit lines.
///
/// Entries are only constructed through [`JournalEntry::create_draft`], and
/// lines only change through [`JournalEntry::replace_lines`]. Both run the
/// balance validator, so an entry in either state is always balanced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    id: JournalEntryId,
    date: NaiveDate,
    reference: String,
    narration: Option<String>,
    state: EntryState,
    lines: Vec<JournalLine>,
    #[serde(skip)]
    totals: EntryTotals,
}

impl JournalEntry {
    /// Validates `input` and creates the entry in [`EntryState::Draft`].
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnbalancedEntry`] if the lines do not balance
    /// within `tolerance`, or [`LedgerError::AmountOverflow`] if they cannot
    /// be summed.
    pub fn create_draft(
        input: CreateJournalEntryInput,
        tolerance: Decimal,
    ) -> Result<Self, LedgerError> {
        let totals = validate_balance(&input.lines, tolerance)?;

        Ok(Self {
            id: JournalEntryId::new(),
            date: input.date,
            reference: input.reference,
            narration: input.narration,
            state: EntryState::Draft,
            lines: input.lines,
            totals,
        })
    }

    /// Moves the entry to [`EntryState::Posted`].
    ///
    /// Balance is not re-checked; it was enforced when the lines were set.
    /// Posting an already posted entry leaves it unchanged. Returns true
    /// only when the state actually moved from draft to posted.
    pub fn post(&mut self) -> bool {
        if self.state.is_posted() {
            return false;
        }
        self.state = EntryState::Posted;
        true
    }

    /// Replaces the lines of a draft entry.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::CannotModifyPosted`] once the entry is posted,
    /// or [`LedgerError::UnbalancedEntry`] / [`LedgerError::AmountOverflow`]
    /// if the new lines do not validate.
    /// The entry is left untouched on error.
    pub fn replace_lines(
        &mut self,
        lines: Vec<JournalLine>,
        tolerance: Decimal,
    ) -> Result<EntryTotals, LedgerError> {
        if !self.state.is_editable() {
            return Err(LedgerError::CannotModifyPosted);
        }

        let totals = validate_balance(&lines, tolerance)?;
        self.lines = lines;
        self.totals = totals;
        Ok(totals)
    }

    /// Debit and credit totals, fixed whenever the lines are set.
    #[must_use]
    pub fn totals(&self) -> EntryTotals {
        self.totals
    }

    /// Entry ID.
    #[must_use]
    pub fn id(&self) -> JournalEntryId {
        self.id
    }

    /// Accounting date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// User-facing reference.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Optional narration.
    #[must_use]
    pub fn narration(&self) -> Option<&str> {
        self.narration.as_deref()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> EntryState {
        self.state
    }

    /// Lines in input order.
    #[must_use]
    pub fn lines(&self) -> &[JournalLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::validation::DEFAULT_BALANCE_TOLERANCE;
    use budgetbook_shared::types::AccountId;
    use rust_decimal_macros::dec;

    fn input(debit: Decimal, credit: Decimal) -> CreateJournalEntryInput {
        CreateJournalEntryInput {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            reference: "BILL/2024/0007".to_string(),
            narration: Some("Office supplies".to_string()),
            lines: vec![
                JournalLine::debit(AccountId::new(), debit),
                JournalLine::credit(AccountId::new(), credit),
            ],
        }
    }

    #[test]
    fn test_create_draft_balanced() {
        let entry = JournalEntry::create_draft(input(dec!(250), dec!(250)), DEFAULT_BALANCE_TOLERANCE)
            .unwrap();

        assert_eq!(entry.state(), EntryState::Draft);
        assert_eq!(entry.reference(), "BILL/2024/0007");
        assert_eq!(entry.narration(), Some("Office supplies"));
        assert_eq!(entry.lines().len(), 2);
        assert_eq!(entry.totals().total_debit, dec!(250));
    }

    #[test]
    fn test_create_draft_unbalanced_rejected() {
        let result =
            JournalEntry::create_draft(input(dec!(250), dec!(200)), DEFAULT_BALANCE_TOLERANCE);

        assert_eq!(
            result,
            Err(LedgerError::UnbalancedEntry {
                total_debit: dec!(250),
                total_credit: dec!(200),
            })
        );
    }

    #[test]
    fn test_create_draft_respects_custom_tolerance() {
        assert!(JournalEntry::create_draft(input(dec!(100.04), dec!(100)), dec!(0.05)).is_ok());
        assert!(JournalEntry::create_draft(input(dec!(100.04), dec!(100)), dec!(0.01)).is_err());
    }

    #[test]
    fn test_post_is_idempotent() {
        let mut entry =
            JournalEntry::create_draft(input(dec!(10), dec!(10)), DEFAULT_BALANCE_TOLERANCE)
                .unwrap();

        assert!(entry.post());
        assert_eq!(entry.state(), EntryState::Posted);
        assert!(!entry.post());
        assert_eq!(entry.state(), EntryState::Posted);
    }

    #[test]
    fn test_create_draft_overflowing_lines_rejected() {
        let account = AccountId::new();
        let mut overflowing = input(dec!(1), dec!(1));
        overflowing.lines = vec![
            JournalLine::debit(account, Decimal::MAX),
            JournalLine::debit(account, Decimal::MAX),
        ];

        assert_eq!(
            JournalEntry::create_draft(overflowing, DEFAULT_BALANCE_TOLERANCE),
            Err(LedgerError::AmountOverflow)
        );
    }

    #[test]
    fn test_replace_lines_overflow_keeps_old_totals() {
        let mut entry =
            JournalEntry::create_draft(input(dec!(10), dec!(10)), DEFAULT_BALANCE_TOLERANCE)
                .unwrap();
        let account = AccountId::new();

        let result = entry.replace_lines(
            vec![
                JournalLine::credit(account, Decimal::MAX),
                JournalLine::credit(account, Decimal::MAX),
            ],
            DEFAULT_BALANCE_TOLERANCE,
        );

        assert_eq!(result, Err(LedgerError::AmountOverflow));
        assert_eq!(entry.totals().total_credit, dec!(10));
    }

    #[test]
    fn test_replace_lines_on_draft() {
        let mut entry =
            JournalEntry::create_draft(input(dec!(10), dec!(10)), DEFAULT_BALANCE_TOLERANCE)
                .unwrap();
        let account = AccountId::new();

        let totals = entry
            .replace_lines(
                vec![
                    JournalLine::debit(account, dec!(75)),
                    JournalLine::credit(account, dec!(75)),
                ],
                DEFAULT_BALANCE_TOLERANCE,
            )
            .unwrap();

        assert_eq!(totals.total_debit, dec!(75));
        assert_eq!(entry.totals().total_credit, dec!(75));
    }

    #[test]
    fn test_replace_lines_unbalanced_keeps_old_lines() {
        let mut entry =
            JournalEntry::create_draft(input(dec!(10), dec!(10)), DEFAULT_BALANCE_TOLERANCE)
                .unwrap();
        let before = entry.lines().to_vec();

        let result = entry.replace_lines(
            vec![JournalLine::debit(AccountId::new(), dec!(75))],
            DEFAULT_BALANCE_TOLERANCE,
        );

        assert!(matches!(result, Err(LedgerError::UnbalancedEntry { .. })));
        assert_eq!(entry.lines(), before.as_slice());
    }

    #[test]
    fn test_posted_entry_is_immutable() {
        let mut entry =
            JournalEntry::create_draft(input(dec!(10), dec!(10)), DEFAULT_BALANCE_TOLERANCE)
                .unwrap();
        entry.post();

        let result = entry.replace_lines(Vec::new(), DEFAULT_BALANCE_TOLERANCE);

        assert_eq!(result, Err(LedgerError::CannotModifyPosted));
        assert_eq!(entry.lines().len(), 2);
    }
}
