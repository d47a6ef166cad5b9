use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::models::import::UploadedEvent;

/// A persisted one-off event. Import batches reconcile against these.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CalendarEvent {
    pub id: String,
    pub household_id: String,
    pub title: String,
    pub category: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub participants_json: String,
    pub transportation: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn from_upload(household_id: &str, upload: &UploadedEvent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            household_id: household_id.to_string(),
            title: upload.title.clone(),
            category: upload.category.clone(),
            start_date: upload.start_date,
            start_time: upload.start_time.clone(),
            end_time: upload.end_time.clone(),
            participants_json: serde_json::to_string(&upload.participants)
                .unwrap_or_else(|_| "[]".to_string()),
            transportation: upload.transportation.clone(),
            created_at: Utc::now(),
        }
    }

    /// The existing event updated with an uploaded candidate's fields.
    /// Identity and creation timestamp are kept.
    pub fn updated_from(&self, upload: &UploadedEvent) -> Self {
        Self {
            id: self.id.clone(),
            household_id: self.household_id.clone(),
            title: upload.title.clone(),
            category: upload.category.clone(),
            start_date: upload.start_date,
            start_time: upload.start_time.clone(),
            end_time: upload.end_time.clone(),
            participants_json: serde_json::to_string(&upload.participants)
                .unwrap_or_else(|_| "[]".to_string()),
            transportation: upload.transportation.clone(),
            created_at: self.created_at,
        }
    }

    pub fn participants(&self) -> Vec<String> {
        serde_json::from_str(&self.participants_json).unwrap_or_default()
    }
}
