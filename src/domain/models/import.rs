use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::domain::models::calendar_event::CalendarEvent;

/// A candidate event supplied by an import batch. Never persisted as-is.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UploadedEvent {
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub transportation: Option<String>,
}

/// A scored pairing of one uploaded candidate against one existing event.
/// Produced per import batch and discarded after resolution.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Conflict {
    pub candidate: UploadedEvent,
    pub existing: CalendarEvent,
    pub match_score: u32,
    pub match_reasons: Vec<String>,
}

/// The human decision for one conflict.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Resolution {
    Skip,
    Update,
    Create,
}

#[derive(Debug, Serialize, Clone)]
pub struct BatchFailure {
    pub index: usize,
    pub error: String,
}

/// Audit-style summary of one applied import batch. Failures are recorded
/// per index and never abort the rest of the batch.
#[derive(Debug, Serialize, Default, Clone)]
pub struct BatchResult {
    pub created: u32,
    pub updated: u32,
    pub skipped: u32,
    pub failed: u32,
    pub failures: Vec<BatchFailure>,
}

impl BatchResult {
    pub fn record_failure(&mut self, index: usize, error: impl ToString) {
        self.failed += 1;
        self.failures.push(BatchFailure {
            index,
            error: error.to_string(),
        });
    }
}
