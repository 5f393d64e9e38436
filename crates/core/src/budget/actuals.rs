//! Budget vs actual figures for one budgeted amount.

use budgetbook_shared::types::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BudgetError;

/// Derived budget figures. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetActuals {
    /// Budgeted amount, as given.
    pub budgeted_amount: Decimal,
    /// Actual amount, as given.
    pub actual_amount: Decimal,
    /// `actual / budgeted * 100`, 2 dp; zero when nothing is budgeted.
    pub achieved_percentage: Decimal,
    /// `budgeted - actual`, 2 dp; negative when over budget.
    pub remaining_amount: Decimal,
    /// `actual > budgeted`. Spending exactly the budget is not over.
    pub is_over_budget: bool,
}

/// Computes achieved percentage, remaining amount and the over-budget flag.
///
/// `actual` must come from posted entries only; that filter is the caller's
/// query, see [`BudgetService::posted_actual`](super::BudgetService::posted_actual).
///
/// # Errors
///
/// Returns [`BudgetError::AmountOverflow`] if the percentage or the
/// remaining amount falls outside the decimal range.
pub fn compute_budget_actuals(
    budgeted: Decimal,
    actual: Decimal,
) -> Result<BudgetActuals, BudgetError> {
    let achieved_percentage = if budgeted > Decimal::ZERO {
        actual
            .checked_div(budgeted)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(round_money)
            .ok_or(BudgetError::AmountOverflow)?
    } else {
        Decimal::ZERO
    };

    let remaining_amount = budgeted
        .checked_sub(actual)
        .map(round_money)
        .ok_or(BudgetError::AmountOverflow)?;

    Ok(BudgetActuals {
        budgeted_amount: budgeted,
        actual_amount: actual,
        achieved_percentage,
        remaining_amount,
        is_over_budget: actual > budgeted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_on_budget() {
        let result = compute_budget_actuals(dec!(100), dec!(100)).unwrap();

        assert!(!result.is_over_budget);
        assert_eq!(result.remaining_amount, dec!(0));
        assert_eq!(result.achieved_percentage, dec!(100));
    }

    #[test]
    fn test_over_budget() {
        let result = compute_budget_actuals(dec!(100), dec!(150)).unwrap();

        assert!(result.is_over_budget);
        assert_eq!(result.remaining_amount, dec!(-50));
        assert_eq!(result.achieved_percentage, dec!(150));
    }

    #[test]
    fn test_under_budget() {
        let result = compute_budget_actuals(dec!(1000), dec!(800)).unwrap();

        assert!(!result.is_over_budget);
        assert_eq!(result.budgeted_amount, dec!(1000));
        assert_eq!(result.actual_amount, dec!(800));
        assert_eq!(result.remaining_amount, dec!(200));
        assert_eq!(result.achieved_percentage, dec!(80));
    }

    #[test]
    fn test_zero_budget_no_division() {
        let spent = compute_budget_actuals(dec!(0), dec!(500)).unwrap();
        assert_eq!(spent.achieved_percentage, dec!(0));
        assert!(spent.is_over_budget);
        assert_eq!(spent.remaining_amount, dec!(-500));

        let idle = compute_budget_actuals(dec!(0), dec!(0)).unwrap();
        assert_eq!(idle.achieved_percentage, dec!(0));
        assert!(!idle.is_over_budget);
    }

    #[test]
    fn test_percentage_rounded_to_two_places() {
        assert_eq!(
            compute_budget_actuals(dec!(3), dec!(1)).unwrap().achieved_percentage,
            dec!(33.33)
        );
        assert_eq!(
            compute_budget_actuals(dec!(3), dec!(2)).unwrap().achieved_percentage,
            dec!(66.67)
        );
    }

    #[test]
    fn test_remaining_rounded_half_away_from_zero() {
        assert_eq!(
            compute_budget_actuals(dec!(10.005), dec!(0)).unwrap().remaining_amount,
            dec!(10.01)
        );
        assert_eq!(
            compute_budget_actuals(dec!(0), dec!(10.005)).unwrap().remaining_amount,
            dec!(-10.01)
        );
    }

    #[test]
    fn test_percentage_overflow_reported() {
        assert_eq!(
            compute_budget_actuals(Decimal::new(1, 28), Decimal::MAX),
            Err(BudgetError::AmountOverflow)
        );
    }

    #[test]
    fn test_remaining_overflow_reported() {
        assert_eq!(
            compute_budget_actuals(Decimal::ONE, Decimal::MIN),
            Err(BudgetError::AmountOverflow)
        );
    }

    #[test]
    fn test_max_budget_fully_spent() {
        let result = compute_budget_actuals(Decimal::MAX, Decimal::MAX).unwrap();

        assert_eq!(result.achieved_percentage, dec!(100));
        assert_eq!(result.remaining_amount, Decimal::ZERO);
        assert!(!result.is_over_budget);
    }
}
