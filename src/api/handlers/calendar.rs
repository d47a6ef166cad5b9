use axum::{extract::{State, Path, Query}, http::header, response::IntoResponse, Json};
use crate::state::AppState;
use crate::domain::models::occurrence::CalendarEntry;
use crate::domain::services::{ics::generate_ics, override_resolver::resolve_occurrences, recurrence::expand_dates};
use crate::error::AppError;
use std::sync::Arc;
use chrono::NaiveDate;
use std::collections::HashMap;

fn parse_window(params: &HashMap<String, String>) -> Result<(NaiveDate, NaiveDate), AppError> {
    let start_str = params.get("start").ok_or(AppError::Validation("start required".into()))?;
    let end_str = params.get("end").ok_or(AppError::Validation("end required".into()))?;

    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d").map_err(|_| AppError::Validation("Invalid start".into()))?;
    let end = NaiveDate::parse_from_str(end_str, "%Y-%m-%d").map_err(|_| AppError::Validation("Invalid end".into()))?;
    Ok((start, end))
}

/// Expands every template over the window, overlays overrides, and merges
/// the household's one-off events into a single ascending entry list.
async fn resolve_window(
    state: &AppState,
    household_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<CalendarEntry>, AppError> {
    let mut entries = Vec::new();

    for template in state.template_repo.list(household_id).await? {
        let dates: Vec<NaiveDate> = expand_dates(&template, start, end).collect();
        if dates.is_empty() {
            continue;
        }
        let overrides = state.override_repo.list_by_range(&template.id, start, end).await?;
        for occurrence in resolve_occurrences(&template, dates, &overrides) {
            entries.push(CalendarEntry::from_occurrence(&template, occurrence));
        }
    }

    for event in state.event_repo.list_by_range(household_id, start, end).await? {
        entries.push(CalendarEntry::from_event(&event));
    }

    entries.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    Ok(entries)
}

pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Path(household_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = parse_window(&params)?;
    let entries = resolve_window(&state, &household_id, start, end).await?;
    Ok(Json(entries))
}

pub async fn get_calendar_ics(
    State(state): State<Arc<AppState>>,
    Path(household_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let (start, end) = parse_window(&params)?;
    let entries = resolve_window(&state, &household_id, start, end).await?;
    let body = generate_ics("Household Calendar", &entries);

    Ok((
        [(header::CONTENT_TYPE, "text/calendar; charset=utf-8")],
        body,
    ))
}
