//! Ledger domain types for journal entry creation and validation.

use budgetbook_shared::types::{AccountId, AnalyticAccountId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryState {
    /// Entry has been created and balanced, lines may still be replaced.
    Draft,
    /// Entry has been posted to the ledger (immutable).
    Posted,
}

impl EntryState {
    /// Returns true if the entry's lines can be modified.
    #[must_use]
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Draft)
    }

    /// Returns true if the entry counts towards budget actuals.
    #[must_use]
    pub fn is_posted(self) -> bool {
        matches!(self, Self::Posted)
    }
}

impl std::fmt::Display for EntryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Posted => write!(f, "posted"),
        }
    }
}

/// A single debit or credit line of a journal entry.
///
/// Only one of `debit` / `credit` is expected to be nonzero. That is the
/// caller's contract; the balance validator only looks at the sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    /// The account posted to.
    pub account_id: AccountId,
    /// Cost center the line is charged to, if any.
    #[serde(default)]
    pub analytic_account_id: Option<AnalyticAccountId>,
    /// Debit amount (>= 0).
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount (>= 0).
    #[serde(default)]
    pub credit: Decimal,
    /// Optional line label.
    #[serde(default)]
    pub label: Option<String>,
}

impl JournalLine {
    /// Creates a debit line.
    #[must_use]
    pub fn debit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id,
            analytic_account_id: None,
            debit: amount,
            credit: Decimal::ZERO,
            label: None,
        }
    }

    /// Creates a credit line.
    #[must_use]
    pub fn credit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id,
            analytic_account_id: None,
            debit: Decimal::ZERO,
            credit: amount,
            label: None,
        }
    }

    /// Tags the line with a cost center.
    #[must_use]
    pub fn with_analytic_account(mut self, analytic_account_id: AnalyticAccountId) -> Self {
        self.analytic_account_id = Some(analytic_account_id);
        self
    }

    /// Net amount charged to the line's cost center (debit - credit).
    ///
    /// `None` if the subtraction overflows.
    #[must_use]
    pub fn net_debit(&self) -> Option<Decimal> {
        self.debit.checked_sub(self.credit)
    }
}

/// Input for creating a new journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJournalEntryInput {
    /// Accounting date of the entry.
    pub date: NaiveDate,
    /// Reference shown to users (e.g. a bill number).
    pub reference: String,
    /// Optional free-text narration.
    #[serde(default)]
    pub narration: Option<String>,
    /// Ordered journal lines.
    pub lines: Vec<JournalLine>,
}

/// Debit and credit totals of a set of journal lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTotals {
    /// Sum of all debit amounts.
    pub total_debit: Decimal,
    /// Sum of all credit amounts.
    pub total_credit: Decimal,
}

impl EntryTotals {
    /// Returns `total_debit - total_credit`, `None` on overflow.
    #[must_use]
    pub fn difference(&self) -> Option<Decimal> {
        self.total_debit.checked_sub(self.total_credit)
    }

    /// Returns true if the totals differ by no more than `tolerance`.
    ///
    /// A difference too large to represent is never balanced.
    #[must_use]
    pub fn is_balanced(&self, tolerance: Decimal) -> bool {
        self.difference().is_some_and(|d| d.abs() <= tolerance)
    }
}
