//! Pre-commit over-budget projection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// Outcome of projecting a new transaction onto current actuals.
///
/// Advisory only: the caller decides whether to warn or refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverBudgetWarning {
    /// Budgeted amount.
    pub budgeted_amount: Decimal,
    /// Posted actual before the new transaction.
    pub current_actual: Decimal,
    /// Amount of the new transaction.
    pub new_transaction_amount: Decimal,
    /// `current_actual + new_transaction_amount`.
    pub projected_total: Decimal,
    /// `projected_total > budgeted_amount`.
    pub will_exceed: bool,
    /// How far the projection overshoots the budget, zero otherwise.
    pub excess_amount: Decimal,
}

/// Projects `new_transaction_amount` onto `current_actual` and flags an overrun.
///
/// # Errors
///
/// Returns [`BudgetError::AmountOverflow`] if the projected total or the
/// excess cannot be represented.
pub fn check_over_budget_warning(
    budgeted: Decimal,
    current_actual: Decimal,
    new_transaction_amount: Decimal,
) -> Result<OverBudgetWarning, BudgetError> {
    let projected_total = current_actual
        .checked_add(new_transaction_amount)
        .ok_or(BudgetError::AmountOverflow)?;
    let will_exceed = projected_total > budgeted;

    let excess_amount = if will_exceed {
        projected_total
            .checked_sub(budgeted)
            .ok_or(BudgetError::AmountOverflow)?
    } else {
        Decimal::ZERO
    };

    Ok(OverBudgetWarning {
        budgeted_amount: budgeted,
        current_actual,
        new_transaction_amount,
        projected_total,
        will_exceed,
        excess_amount,
    })
}
