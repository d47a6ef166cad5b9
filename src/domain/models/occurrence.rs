use serde::Serialize;
use chrono::NaiveDate;

use crate::domain::models::calendar_event::CalendarEvent;
use crate::domain::models::template::EventTemplate;

/// One concrete calendar-date instantiation of a template after override
/// merge. Computed fresh on every query, never persisted.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub template_id: String,
    pub date: NaiveDate,
    pub participants: Vec<String>,
    pub transportation: Option<String>,
    pub cancelled: bool,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Recurring,
    Single,
}

/// Fully joined view of one calendar entry, ready for the calendar response
/// or the .ics feed. Merges template occurrences and one-off events.
#[derive(Debug, Serialize, Clone)]
pub struct CalendarEntry {
    pub source_id: String,
    pub kind: EntryKind,
    pub title: String,
    pub category: Option<String>,
    pub date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub participants: Vec<String>,
    pub transportation: Option<String>,
    pub cancelled: bool,
    pub color: Option<String>,
}

impl CalendarEntry {
    pub fn from_occurrence(template: &EventTemplate, occurrence: Occurrence) -> Self {
        // Display times come from the first slot matching the weekday.
        let weekday = chrono::Datelike::weekday(&occurrence.date).num_days_from_sunday() as u8;
        let slot = template
            .slots()
            .into_iter()
            .find(|s| s.day_of_week == weekday);

        Self {
            source_id: occurrence.template_id,
            kind: EntryKind::Recurring,
            title: template.title.clone(),
            category: Some(template.category.clone()),
            date: occurrence.date,
            start_time: slot.as_ref().map(|s| s.start_time.clone()),
            end_time: slot.as_ref().map(|s| s.end_time.clone()),
            participants: occurrence.participants,
            transportation: occurrence.transportation,
            cancelled: occurrence.cancelled,
            color: template.color.clone(),
        }
    }

    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            source_id: event.id.clone(),
            kind: EntryKind::Single,
            title: event.title.clone(),
            category: event.category.clone(),
            date: event.start_date,
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            participants: event.participants(),
            transportation: event.transportation.clone(),
            cancelled: false,
            color: None,
        }
    }
}
