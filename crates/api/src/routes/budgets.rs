//! Budget routes.
//!
//! Stored budgets are measured against posted journal entries only. The
//! two stateless calculator endpoints take raw figures from the caller.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use budgetbook_core::budget::{
    Budget, BudgetActuals, BudgetReport, BudgetService, CreateBudgetInput, OverBudgetWarning,
    check_over_budget_warning, compute_budget_actuals,
};
use budgetbook_shared::types::{BudgetId, BudgetLineId};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{
    AppState,
    error::ApiError,
    extract::{JsonBody, PathParams},
};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", post(create_budget))
        .route("/budgets/{budget_id}", get(get_budget))
        .route("/budgets/{budget_id}/actuals", get(get_budget_actuals))
        .route(
            "/budgets/{budget_id}/lines/{line_id}/check",
            post(check_budget_line),
        )
        .route("/budget-actuals", post(budget_actuals))
        .route("/over-budget-check", post(over_budget_check))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for checking a new transaction against a stored budget line.
#[derive(Debug, Deserialize)]
pub struct CheckLineRequest {
    /// Amount of the transaction about to be recorded.
    pub amount: Decimal,
}

/// Request body for the stateless actuals calculator.
#[derive(Debug, Deserialize)]
pub struct BudgetActualsRequest {
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Actual amount, from posted transactions.
    pub actual: Decimal,
}

/// Request body for the stateless over-budget projection.
#[derive(Debug, Deserialize)]
pub struct OverBudgetCheckRequest {
    /// Budgeted amount.
    pub budgeted: Decimal,
    /// Posted actual so far.
    pub current_actual: Decimal,
    /// Amount of the transaction about to be recorded.
    pub new_transaction_amount: Decimal,
}

fn find_budget(state: &AppState, budget_id: BudgetId) -> Result<Budget, ApiError> {
    state
        .store
        .budget(budget_id)
        .ok_or_else(|| ApiError::not_found(format!("budget {budget_id}")))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST `/budgets` - Create a budget with its lines.
async fn create_budget(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateBudgetInput>,
) -> Result<impl IntoResponse, ApiError> {
    let budget = BudgetService::create_budget(payload)?;

    info!(budget_id = %budget.id, lines = budget.lines.len(), "Budget created");

    state.store.insert_budget(budget.clone());
    Ok((StatusCode::CREATED, Json(budget)))
}

/// GET `/budgets/{budget_id}` - Fetch one budget.
async fn get_budget(
    State(state): State<AppState>,
    PathParams(budget_id): PathParams<BudgetId>,
) -> Result<Json<Budget>, ApiError> {
    find_budget(&state, budget_id).map(Json)
}

/// GET `/budgets/{budget_id}/actuals` - Budget vs posted actuals.
async fn get_budget_actuals(
    State(state): State<AppState>,
    PathParams(budget_id): PathParams<BudgetId>,
) -> Result<Json<BudgetReport>, ApiError> {
    let budget = find_budget(&state, budget_id)?;
    let entries = state.store.entries();
    Ok(Json(BudgetService::budget_vs_actual(&budget, &entries)?))
}

/// POST `/budgets/{budget_id}/lines/{line_id}/check` - Project a new
/// transaction onto a line's posted actual.
async fn check_budget_line(
    State(state): State<AppState>,
    PathParams((budget_id, line_id)): PathParams<(BudgetId, BudgetLineId)>,
    JsonBody(payload): JsonBody<CheckLineRequest>,
) -> Result<Json<OverBudgetWarning>, ApiError> {
    let budget = find_budget(&state, budget_id)?;
    let line = budget
        .line(line_id)
        .ok_or_else(|| ApiError::not_found(format!("budget line {line_id}")))?;

    let warning =
        BudgetService::check_line(&budget, line, &state.store.entries(), payload.amount)?;

    if warning.will_exceed {
        warn!(
            budget_id = %budget_id,
            line_id = %line_id,
            excess = %warning.excess_amount,
            "Transaction would exceed budget"
        );
    }

    Ok(Json(warning))
}

/// POST `/budget-actuals` - Stateless budget vs actual figures.
async fn budget_actuals(
    JsonBody(payload): JsonBody<BudgetActualsRequest>,
) -> Result<Json<BudgetActuals>, ApiError> {
    Ok(Json(compute_budget_actuals(payload.budgeted, payload.actual)?))
}

/// POST `/over-budget-check` - Stateless over-budget projection.
async fn over_budget_check(
    JsonBody(payload): JsonBody<OverBudgetCheckRequest>,
) -> Result<Json<OverBudgetWarning>, ApiError> {
    Ok(Json(check_over_budget_warning(
        payload.budgeted,
        payload.current_actual,
        payload.new_transaction_amount,
    )?))
}
