//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST routes for journal entries and budgets
//! - The in-memory record store behind them
//! - Mapping of domain errors to JSON responses

pub mod error;
pub mod extract;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::Router;
use budgetbook_shared::config::LedgerConfig;
use rust_decimal::Decimal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use store::Store;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Journal entries and budgets.
    pub store: Arc<Store>,
    /// Largest accepted debit/credit difference for new or edited entries.
    pub balance_tolerance: Decimal,
}

impl AppState {
    /// Creates state with an empty store.
    #[must_use]
    pub fn new(ledger: &LedgerConfig) -> Self {
        Self {
            store: Arc::new(Store::new()),
            balance_tolerance: ledger.balance_tolerance,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
