use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted exception to a template's defaults for one specific date.
/// At most one override may exist per (template, date); the store enforces
/// this with a unique index.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct InstanceOverride {
    pub id: String,
    pub template_id: String,
    pub date: NaiveDate,
    pub participants_json: Option<String>,
    pub transportation: Option<String>,
    pub cancelled: bool,
    pub created_at: DateTime<Utc>,
}

impl InstanceOverride {
    pub fn new(template_id: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            template_id,
            date,
            participants_json: None,
            transportation: None,
            cancelled: false,
            created_at: Utc::now(),
        }
    }

    /// Overriding participant list, if the override supplies one.
    pub fn participants(&self) -> Option<Vec<String>> {
        self.participants_json
            .as_deref()
            .map(|json| serde_json::from_str(json).unwrap_or_default())
    }
}
