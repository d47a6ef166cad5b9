use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::models::import::{Conflict, Resolution, UploadedEvent};
use crate::domain::models::template::RecurrenceSlot;

#[derive(Deserialize)]
pub struct CreateTemplateRequest {
    pub title: String,
    pub category: String,
    pub slots: Vec<RecurrenceSlot>,
    #[serde(default)]
    pub participants: Vec<String>,
    pub transportation: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub color: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateTemplateRequest {
    pub title: Option<String>,
    pub category: Option<String>,
    pub slots: Option<Vec<RecurrenceSlot>>,
    pub participants: Option<Vec<String>>,
    pub transportation: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub color: Option<String>,
}

#[derive(Deserialize)]
pub struct InstanceOverrideRequest {
    pub date: NaiveDate,
    pub participants: Option<Vec<String>>,
    pub transportation: Option<String>,
    #[serde(default)]
    pub cancelled: bool,
}

#[derive(Deserialize)]
pub struct ImportPreviewRequest {
    pub events: Vec<UploadedEvent>,
}

#[derive(Deserialize)]
pub struct ImportApplyRequest {
    #[serde(default)]
    pub conflicts: Vec<Conflict>,
    /// Keyed by the conflict's position in `conflicts`.
    #[serde(default)]
    pub resolutions: HashMap<usize, Resolution>,
    /// Candidates that matched nothing during preview; created directly.
    #[serde(default)]
    pub unmatched: Vec<UploadedEvent>,
}
