use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::{ImportApplyRequest, ImportPreviewRequest}, responses::ImportPreviewResponse};
use crate::domain::models::calendar_event::CalendarEvent;
use crate::domain::models::import::Conflict;
use crate::domain::services::{import_applier::apply_resolutions, similarity::best_match};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// Minimum similarity score for a candidate to be surfaced as a conflict
/// rather than imported silently. Caller policy, not part of the matcher.
const CONFLICT_THRESHOLD: u32 = 40;

pub async fn preview_import(
    State(state): State<Arc<AppState>>,
    Path(household_id): Path<String>,
    Json(payload): Json<ImportPreviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state.event_repo.list(&household_id).await?;

    let mut conflicts = Vec::new();
    let mut unmatched = Vec::new();

    for candidate in payload.events {
        match best_match(&candidate, &existing).filter(|(_, m)| m.score >= CONFLICT_THRESHOLD) {
            Some((event, result)) => conflicts.push(Conflict {
                candidate,
                existing: event.clone(),
                match_score: result.score,
                match_reasons: result.reasons,
            }),
            None => unmatched.push(candidate),
        }
    }

    info!(
        conflicts = conflicts.len(),
        unmatched = unmatched.len(),
        "import preview for household {}",
        household_id
    );
    Ok(Json(ImportPreviewResponse { conflicts, unmatched }))
}

pub async fn apply_import(
    State(state): State<Arc<AppState>>,
    Path(household_id): Path<String>,
    Json(payload): Json<ImportApplyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut result = apply_resolutions(
        state.event_repo.as_ref(),
        &household_id,
        &payload.conflicts,
        &payload.resolutions,
    )
    .await;

    // Unmatched candidates bypass resolution and are created directly, with
    // the same per-index failure isolation; their indices follow the
    // conflict range.
    let offset = payload.conflicts.len();
    for (i, upload) in payload.unmatched.iter().enumerate() {
        let event = CalendarEvent::from_upload(&household_id, upload);
        match state.event_repo.insert(&event).await {
            Ok(_) => result.created += 1,
            Err(err) => result.record_failure(offset + i, err),
        }
    }

    Ok(Json(result))
}
