use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateTemplateRequest, UpdateTemplateRequest};
use crate::domain::models::template::{EventTemplate, RecurrenceSlot};
use crate::error::AppError;
use std::sync::Arc;
use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::info;
use uuid::Uuid;

fn validate_slots(slots: &[RecurrenceSlot]) -> Result<(), AppError> {
    for slot in slots {
        if slot.day_of_week > 6 {
            return Err(AppError::Validation(format!(
                "day_of_week must be between 0 and 6, got {}",
                slot.day_of_week
            )));
        }
        for value in [&slot.start_time, &slot.end_time] {
            if NaiveTime::parse_from_str(value, "%H:%M").is_err() {
                return Err(AppError::Validation(format!(
                    "Invalid time '{value}', expected HH:MM"
                )));
            }
        }
    }
    Ok(())
}

fn validate_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), AppError> {
    if end.is_some_and(|e| e < start) {
        return Err(AppError::Validation("end_date must not precede start_date".into()));
    }
    Ok(())
}

pub async fn create_template(
    State(state): State<Arc<AppState>>,
    Path(household_id): Path<String>,
    Json(payload): Json<CreateTemplateRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_slots(&payload.slots)?;
    validate_range(payload.start_date, payload.end_date)?;

    let template = EventTemplate {
        id: Uuid::new_v4().to_string(),
        household_id: household_id.clone(),
        title: payload.title,
        category: payload.category,
        slots_json: serde_json::to_string(&payload.slots)
            .map_err(|_| AppError::Validation("Invalid slots".into()))?,
        participants_json: serde_json::to_string(&payload.participants)
            .map_err(|_| AppError::Validation("Invalid participants".into()))?,
        transportation: payload.transportation,
        start_date: payload.start_date,
        end_date: payload.end_date,
        color: payload.color,
        created_at: Utc::now(),
    };

    let created = state.template_repo.create(&template).await?;
    info!("Created template {} for household {}", created.id, household_id);
    Ok(Json(created))
}

pub async fn list_templates(
    State(state): State<Arc<AppState>>,
    Path(household_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let templates = state.template_repo.list(&household_id).await?;
    Ok(Json(templates))
}

pub async fn get_template(
    State(state): State<Arc<AppState>>,
    Path((household_id, template_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let template = state.template_repo.find_by_id(&household_id, &template_id).await?
        .ok_or(AppError::NotFound("Template not found".into()))?;
    Ok(Json(template))
}

pub async fn update_template(
    State(state): State<Arc<AppState>>,
    Path((household_id, template_id)): Path<(String, String)>,
    Json(payload): Json<UpdateTemplateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut template = state.template_repo.find_by_id(&household_id, &template_id).await?
        .ok_or(AppError::NotFound("Template not found".into()))?;

    if let Some(val) = payload.title { template.title = val; }
    if let Some(val) = payload.category { template.category = val; }
    if let Some(val) = payload.slots {
        validate_slots(&val)?;
        template.slots_json = serde_json::to_string(&val)
            .map_err(|_| AppError::Validation("Invalid slots".into()))?;
    }
    if let Some(val) = payload.participants {
        template.participants_json = serde_json::to_string(&val)
            .map_err(|_| AppError::Validation("Invalid participants".into()))?;
    }
    if let Some(val) = payload.transportation { template.transportation = Some(val); }
    if let Some(val) = payload.start_date { template.start_date = val; }
    if let Some(val) = payload.end_date { template.end_date = Some(val); }
    if let Some(val) = payload.color { template.color = Some(val); }

    validate_range(template.start_date, template.end_date)?;

    let updated = state.template_repo.update(&template).await?;
    info!("Template updated: {}", template_id);
    Ok(Json(updated))
}

pub async fn delete_template(
    State(state): State<Arc<AppState>>,
    Path((household_id, template_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    // Overrides go with the template via ON DELETE CASCADE.
    state.template_repo.delete(&household_id, &template_id).await?;
    info!("Template deleted: {}", template_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
