//! Conversion of domain errors into JSON responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use budgetbook_core::budget::BudgetError;
use budgetbook_core::ledger::LedgerError;
use budgetbook_shared::AppError;
use serde_json::json;

/// Error returned by handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Journal entry rule violated.
    Ledger(LedgerError),
    /// Budget rule violated.
    Budget(BudgetError),
    /// Missing record or input rejected before reaching the domain.
    App(AppError),
}

impl ApiError {
    /// Shorthand for a 404 naming the missing record.
    #[must_use]
    pub fn not_found(what: impl std::fmt::Display) -> Self {
        Self::App(AppError::NotFound(what.to_string()))
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self::Ledger(err)
    }
}

impl From<BudgetError> for ApiError {
    fn from(err: BudgetError) -> Self {
        Self::Budget(err)
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::App(AppError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::App(AppError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::App(AppError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Ledger(err) => {
                let mut body = json!({
                    "error": err.error_code(),
                    "message": err.to_string(),
                });
                if let LedgerError::UnbalancedEntry {
                    total_debit,
                    total_credit,
                } = err
                {
                    body["total_debit"] = json!(total_debit.to_string());
                    body["total_credit"] = json!(total_credit.to_string());
                }
                (err.http_status_code(), body)
            }
            Self::Budget(err) => (
                err.http_status_code(),
                json!({
                    "error": err.error_code(),
                    "message": err.to_string(),
                }),
            ),
            Self::App(err) => (
                err.status_code(),
                json!({
                    "error": err.error_code(),
                    "message": err.to_string(),
                }),
            ),
        };

        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
