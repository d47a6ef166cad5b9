use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// One weekly day-of-week + time window within a template.
/// `day_of_week` runs 0 (Sunday) through 6 (Saturday).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecurrenceSlot {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct EventTemplate {
    pub id: String,
    pub household_id: String,
    pub title: String,
    pub category: String,
    pub slots_json: String,
    pub participants_json: String,
    pub transportation: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EventTemplate {
    /// Parsed recurrence slots. Malformed JSON yields no slots rather than an error.
    pub fn slots(&self) -> Vec<RecurrenceSlot> {
        serde_json::from_str(&self.slots_json).unwrap_or_default()
    }

    pub fn participants(&self) -> Vec<String> {
        serde_json::from_str(&self.participants_json).unwrap_or_default()
    }
}
