//! Budget data types.

use budgetbook_shared::types::{AnalyticAccountId, BudgetId, BudgetLineId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::actuals::BudgetActuals;

/// Inclusive date range a budget covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// First day of the period.
    pub start: NaiveDate,
    /// Last day of the period.
    pub end: NaiveDate,
}

impl BudgetPeriod {
    /// Returns true if `date` falls inside the period, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A budget: planned amounts per cost center over one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Budget name.
    pub name: String,
    /// Period the budget covers.
    pub period: BudgetPeriod,
    /// Planned amounts.
    pub lines: Vec<BudgetLine>,
}

impl Budget {
    /// Looks up a line by ID.
    #[must_use]
    pub fn line(&self, id: BudgetLineId) -> Option<&BudgetLine> {
        self.lines.iter().find(|l| l.id == id)
    }
}

/// Planned amount for one cost center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Budget line ID.
    pub id: BudgetLineId,
    /// Cost center whose posted lines are measured against this budget.
    pub analytic_account_id: AnalyticAccountId,
    /// Display name.
    pub name: String,
    /// Budgeted amount.
    pub budgeted: Decimal,
}

/// Input for creating a budget.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudgetInput {
    /// Budget name.
    pub name: String,
    /// Period the budget covers.
    pub period: BudgetPeriod,
    /// Planned amounts.
    pub lines: Vec<CreateBudgetLineInput>,
}

/// Input for a single budget line.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBudgetLineInput {
    /// Cost center.
    pub analytic_account_id: AnalyticAccountId,
    /// Display name.
    pub name: String,
    /// Budgeted amount (>= 0).
    pub budgeted: Decimal,
}

/// Budget line with its posted actuals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetLineReport {
    /// The planned line.
    pub line: BudgetLine,
    /// Derived figures for the line.
    pub actuals: BudgetActuals,
}

/// Budget vs actual report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Budget name.
    pub name: String,
    /// Period covered.
    pub period: BudgetPeriod,
    /// One row per budget line, in budget order.
    pub lines: Vec<BudgetLineReport>,
    /// Figures over the summed lines.
    pub summary: BudgetActuals,
}
