//! In-memory record store for journal entries and budgets.

use budgetbook_core::budget::Budget;
use budgetbook_core::ledger::JournalEntry;
use budgetbook_shared::types::{BudgetId, JournalEntryId};
use dashmap::DashMap;

/// Holds records for the lifetime of the process.
///
/// Each call locks a single shard; there is no cross-record transaction.
#[derive(Debug, Default)]
pub struct Store {
    entries: DashMap<JournalEntryId, JournalEntry>,
    budgets: DashMap<BudgetId, Budget>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a journal entry, replacing any entry with the same ID.
    pub fn insert_entry(&self, entry: JournalEntry) {
        self.entries.insert(entry.id(), entry);
    }

    /// Returns a copy of the entry.
    #[must_use]
    pub fn entry(&self, id: JournalEntryId) -> Option<JournalEntry> {
        self.entries.get(&id).map(|e| e.value().clone())
    }

    /// Runs `f` on the stored entry while holding its shard lock.
    ///
    /// Returns `None` if no entry has this ID.
    pub fn update_entry<T>(
        &self,
        id: JournalEntryId,
        f: impl FnOnce(&mut JournalEntry) -> T,
    ) -> Option<T> {
        self.entries.get_mut(&id).map(|mut e| f(e.value_mut()))
    }

    /// Returns all entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<JournalEntry> {
        let mut entries: Vec<JournalEntry> = self.entries.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(JournalEntry::id);
        entries
    }

    /// Inserts a budget.
    pub fn insert_budget(&self, budget: Budget) {
        self.budgets.insert(budget.id, budget);
    }

    /// Returns a copy of the budget.
    #[must_use]
    pub fn budget(&self, id: BudgetId) -> Option<Budget> {
        self.budgets.get(&id).map(|b| b.value().clone())
    }

    /// Number of journal entries held, in any state.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of budgets held.
    #[must_use]
    pub fn budget_count(&self) -> usize {
        self.budgets.len()
    }
}
