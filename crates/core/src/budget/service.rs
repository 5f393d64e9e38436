//! Budget service: validation and posted-only actuals aggregation.

use budgetbook_shared::types::{AnalyticAccountId, BudgetId, BudgetLineId};
use rust_decimal::Decimal;

use super::actuals::compute_budget_actuals;
use super::error::BudgetError;
use super::types::{
    Budget, BudgetLine, BudgetLineReport, BudgetPeriod, BudgetReport, CreateBudgetInput,
};
use super::warning::{OverBudgetWarning, check_over_budget_warning};
use crate::ledger::{JournalEntry, JournalLine};

/// Budget service for business logic.
pub struct BudgetService;

/// Adds up `amounts`, failing instead of wrapping past the decimal range.
fn checked_sum<I>(amounts: I) -> Result<Decimal, BudgetError>
where
    I: IntoIterator<Item = Option<Decimal>>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        amount
            .and_then(|a| acc.checked_add(a))
            .ok_or(BudgetError::AmountOverflow)
    })
}

impl BudgetService {
    /// Validates `input` and builds a budget with fresh IDs.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidPeriod` if the period ends before it starts.
    /// Returns `BudgetError::NegativeAmount` if any line budgets a negative amount.
    pub fn create_budget(input: CreateBudgetInput) -> Result<Budget, BudgetError> {
        let period = input.period;
        if period.start > period.end {
            return Err(BudgetError::InvalidPeriod {
                start: period.start,
                end: period.end,
            });
        }

        if input.lines.iter().any(|l| l.budgeted < Decimal::ZERO) {
            return Err(BudgetError::NegativeAmount);
        }

        let lines = input
            .lines
            .into_iter()
            .map(|l| BudgetLine {
                id: BudgetLineId::new(),
                analytic_account_id: l.analytic_account_id,
                name: l.name,
                budgeted: l.budgeted,
            })
            .collect();

        Ok(Budget {
            id: BudgetId::new(),
            name: input.name,
            period,
            lines,
        })
    }

    /// Sums `debit - credit` of posted lines charged to `analytic_account_id`
    /// and dated within `period`.
    ///
    /// Draft entries never contribute, whatever their lines say.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::AmountOverflow` if the sum leaves the decimal range.
    pub fn posted_actual<'a, I>(
        entries: I,
        analytic_account_id: AnalyticAccountId,
        period: BudgetPeriod,
    ) -> Result<Decimal, BudgetError>
    where
        I: IntoIterator<Item = &'a JournalEntry>,
    {
        checked_sum(
            entries
                .into_iter()
                .filter(|e| e.state().is_posted() && period.contains(e.date()))
                .flat_map(JournalEntry::lines)
                .filter(|l| l.analytic_account_id == Some(analytic_account_id))
                .map(JournalLine::net_debit),
        )
    }

    /// Builds the budget vs actual report from posted entries.
    ///
    /// The summary runs the same calculator over the summed lines, so its
    /// percentage is weighted by budgeted amount.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::AmountOverflow` if a line or the summary cannot
    /// be computed within the decimal range.
    pub fn budget_vs_actual(
        budget: &Budget,
        entries: &[JournalEntry],
    ) -> Result<BudgetReport, BudgetError> {
        let lines = budget
            .lines
            .iter()
            .map(|line| {
                let actual =
                    Self::posted_actual(entries, line.analytic_account_id, budget.period)?;
                Ok(BudgetLineReport {
                    line: line.clone(),
                    actuals: compute_budget_actuals(line.budgeted, actual)?,
                })
            })
            .collect::<Result<Vec<_>, BudgetError>>()?;

        let total_budgeted = checked_sum(lines.iter().map(|r| Some(r.line.budgeted)))?;
        let total_actual = checked_sum(lines.iter().map(|r| Some(r.actuals.actual_amount)))?;

        Ok(BudgetReport {
            budget_id: budget.id,
            name: budget.name.clone(),
            period: budget.period,
            lines,
            summary: compute_budget_actuals(total_budgeted, total_actual)?,
        })
    }

    /// Projects a new transaction onto a budget line's posted actual.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::AmountOverflow` if the actual or the projection
    /// leaves the decimal range.
    pub fn check_line(
        budget: &Budget,
        line: &BudgetLine,
        entries: &[JournalEntry],
        new_transaction_amount: Decimal,
    ) -> Result<OverBudgetWarning, BudgetError> {
        let current = Self::posted_actual(entries, line.analytic_account_id, budget.period)?;
        check_over_budget_warning(line.budgeted, current, new_transaction_amount)
    }
}
