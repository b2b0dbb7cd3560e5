use std::sync::Arc;

use crate::{
    error::{ApiResult, OrFail},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use mindgrow_core::journal::{JournalEntry, NewJournalEntryInput};

async fn get_entries(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<JournalEntry>>> {
    let entries = state
        .journal_service
        .get_entries()
        .or_fail("Failed to fetch journal entries")?;
    Ok(Json(entries))
}

async fn create_entry(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<NewJournalEntryInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<JournalEntry>)> {
    const FAILED: &str = "Failed to create journal entry";
    let Json(input) = payload.or_fail(FAILED)?;
    let entry = state
        .journal_service
        .create_entry(input)
        .await
        .or_fail(FAILED)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/journals", get(get_entries).post(create_entry))
}
