use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::InstanceOverrideRequest;
use crate::domain::models::instance_override::InstanceOverride;
use crate::error::AppError;
use std::sync::Arc;
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

pub async fn upsert_override(
    State(state): State<Arc<AppState>>,
    Path((household_id, template_id)): Path<(String, String)>,
    Json(payload): Json<InstanceOverrideRequest>,
) -> Result<impl IntoResponse, AppError> {
    let template = state.template_repo.find_by_id(&household_id, &template_id).await?
        .ok_or(AppError::NotFound("Template not found".into()))?;

    let participants_json = if let Some(participants) = payload.participants {
        Some(serde_json::to_string(&participants)
            .map_err(|_| AppError::Validation("Invalid participants".into()))?)
    } else {
        None
    };

    let entity = InstanceOverride {
        id: Uuid::new_v4().to_string(),
        template_id: template.id,
        date: payload.date,
        participants_json,
        transportation: payload.transportation,
        cancelled: payload.cancelled,
        created_at: Utc::now(),
    };

    let saved = state.override_repo.upsert(&entity).await?;
    info!("Upserted override for template {} on {}", template_id, payload.date);
    Ok(Json(saved))
}

pub async fn list_overrides(
    State(state): State<Arc<AppState>>,
    Path((household_id, template_id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let template = state.template_repo.find_by_id(&household_id, &template_id).await?
        .ok_or(AppError::NotFound("Template not found".into()))?;

    let start_str = params.get("start").ok_or(AppError::Validation("start required".into()))?;
    let end_str = params.get("end").ok_or(AppError::Validation("end required".into()))?;

    let start = NaiveDate::parse_from_str(start_str, "%Y-%m-%d").map_err(|_| AppError::Validation("Invalid start".into()))?;
    let end = NaiveDate::parse_from_str(end_str, "%Y-%m-%d").map_err(|_| AppError::Validation("Invalid end".into()))?;

    let overrides = state.override_repo.list_by_range(&template.id, start, end).await?;
    Ok(Json(overrides))
}

pub async fn delete_override(
    State(state): State<Arc<AppState>>,
    Path((household_id, template_id, date_str)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let template = state.template_repo.find_by_id(&household_id, &template_id).await?
        .ok_or(AppError::NotFound("Template not found".into()))?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date".into()))?;

    state.override_repo.delete(&template.id, date).await?;
    info!("Deleted override for template {} on {}", template_id, date_str);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
