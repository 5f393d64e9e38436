//! Liveness probe with a glimpse of what the store holds.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process answers.
    pub status: &'static str,
    /// Crate version of the running build.
    pub version: &'static str,
    /// Journal entries held, drafts included.
    pub journal_entries: usize,
    /// Budgets held.
    pub budgets: usize,
}

/// GET `/health`
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        journal_entries: state.store.entry_count(),
        budgets: state.store.budget_count(),
    })
}

/// Creates the health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
