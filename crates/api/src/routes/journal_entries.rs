//! Journal entry routes.
//!
//! Entries are validated for balance on creation and on every line
//! replacement, then posted through an explicit action.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use budgetbook_core::ledger::{
    CreateJournalEntryInput, EntryState, JournalEntry, JournalLine, LedgerError,
};
use budgetbook_shared::types::JournalEntryId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    AppState,
    error::ApiError,
    extract::{JsonBody, PathParams, QueryParams},
};

/// Creates the journal entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/journal-entries", post(create_entry).get(list_entries))
        .route("/journal-entries/{entry_id}", get(get_entry))
        .route("/journal-entries/{entry_id}/lines", put(replace_lines))
        .route("/journal-entries/{entry_id}/post", post(post_entry))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing entries.
#[derive(Debug, Deserialize)]
pub struct ListEntriesQuery {
    /// Only return entries in this state.
    pub state: Option<EntryState>,
}

/// Request body for replacing the lines of a draft entry.
#[derive(Debug, Deserialize)]
pub struct ReplaceLinesRequest {
    /// New lines, in order.
    pub lines: Vec<JournalLine>,
}

/// Response for a journal entry.
#[derive(Debug, Serialize)]
pub struct JournalEntryResponse {
    /// Entry ID.
    pub id: JournalEntryId,
    /// Accounting date.
    pub date: NaiveDate,
    /// Reference.
    pub reference: String,
    /// Narration.
    pub narration: Option<String>,
    /// Lifecycle state.
    pub state: EntryState,
    /// Lines in order.
    pub lines: Vec<JournalLine>,
    /// Sum of debits.
    pub total_debit: Decimal,
    /// Sum of credits.
    pub total_credit: Decimal,
}

impl From<&JournalEntry> for JournalEntryResponse {
    fn from(entry: &JournalEntry) -> Self {
        let totals = entry.totals();
        Self {
            id: entry.id(),
            date: entry.date(),
            reference: entry.reference().to_string(),
            narration: entry.narration().map(str::to_string),
            state: entry.state(),
            lines: entry.lines().to_vec(),
            total_debit: totals.total_debit,
            total_credit: totals.total_credit,
        }
    }
}

fn log_rejection(err: &LedgerError, reference: &str) {
    if let LedgerError::UnbalancedEntry {
        total_debit,
        total_credit,
    } = err
    {
        warn!(
            reference,
            total_debit = %total_debit,
            total_credit = %total_credit,
            "Rejected unbalanced journal entry"
        );
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST `/journal-entries` - Validate and create a draft entry.
async fn create_entry(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateJournalEntryInput>,
) -> Result<impl IntoResponse, ApiError> {
    let reference = payload.reference.clone();
    let entry = JournalEntry::create_draft(payload, state.balance_tolerance).inspect_err(|e| {
        log_rejection(e, &reference);
    })?;

    info!(entry_id = %entry.id(), reference = %entry.reference(), "Journal entry created");

    let response = JournalEntryResponse::from(&entry);
    state.store.insert_entry(entry);
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET `/journal-entries` - List entries, optionally filtered by state.
async fn list_entries(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ListEntriesQuery>,
) -> Json<Vec<JournalEntryResponse>> {
    let entries = state
        .store
        .entries()
        .iter()
        .filter(|e| query.state.is_none_or(|s| e.state() == s))
        .map(JournalEntryResponse::from)
        .collect();
    Json(entries)
}

/// GET `/journal-entries/{entry_id}` - Fetch one entry.
async fn get_entry(
    State(state): State<AppState>,
    PathParams(entry_id): PathParams<JournalEntryId>,
) -> Result<Json<JournalEntryResponse>, ApiError> {
    let entry = state
        .store
        .entry(entry_id)
        .ok_or_else(|| ApiError::not_found(format!("journal entry {entry_id}")))?;
    Ok(Json(JournalEntryResponse::from(&entry)))
}

/// PUT `/journal-entries/{entry_id}/lines` - Replace the lines of a draft.
async fn replace_lines(
    State(state): State<AppState>,
    PathParams(entry_id): PathParams<JournalEntryId>,
    JsonBody(payload): JsonBody<ReplaceLinesRequest>,
) -> Result<Json<JournalEntryResponse>, ApiError> {
    let tolerance = state.balance_tolerance;
    let response = state
        .store
        .update_entry(entry_id, |entry| {
            entry
                .replace_lines(payload.lines, tolerance)
                .inspect_err(|e| log_rejection(e, entry.reference()))?;
            Ok::<_, LedgerError>(JournalEntryResponse::from(&*entry))
        })
        .ok_or_else(|| ApiError::not_found(format!("journal entry {entry_id}")))??;

    info!(entry_id = %entry_id, "Journal entry lines replaced");
    Ok(Json(response))
}

/// POST `/journal-entries/{entry_id}/post` - Move a draft to posted.
async fn post_entry(
    State(state): State<AppState>,
    PathParams(entry_id): PathParams<JournalEntryId>,
) -> Result<Json<JournalEntryResponse>, ApiError> {
    let (transitioned, response) = state
        .store
        .update_entry(entry_id, |entry| {
            (entry.post(), JournalEntryResponse::from(&*entry))
        })
        .ok_or_else(|| ApiError::not_found(format!("journal entry {entry_id}")))?;

    if transitioned {
        info!(entry_id = %entry_id, "Journal entry posted");
    } else {
        debug!(entry_id = %entry_id, "Journal entry already posted");
    }
    Ok(Json(response))
}
