//! Budget tracking against posted actuals.

pub mod actuals;
pub mod error;
pub mod service;
pub mod types;
pub mod warning;


pub use actuals::{BudgetActuals, compute_budget_actuals};
pub use error::BudgetError;
pub use service::BudgetService;
pub use types::{
    Budget, BudgetLine, BudgetLineReport, BudgetPeriod, BudgetReport, CreateBudgetInput,
    CreateBudgetLineInput,
};
pub use warning::{OverBudgetWarning, check_over_budget_warning};
