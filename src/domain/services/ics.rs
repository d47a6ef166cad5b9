use chrono::{Duration, NaiveTime};
use icalendar::{Calendar, CalendarDateTime, Component, Event as IcalEvent, EventLike};

use crate::domain::models::occurrence::CalendarEntry;

/// Generates an iCalendar (.ics) feed for a resolved calendar window.
/// Cancelled occurrences are left out of the feed entirely.
pub fn generate_ics(calendar_name: &str, entries: &[CalendarEntry]) -> String {
    let mut calendar = Calendar::new();
    calendar.name(calendar_name);

    for entry in entries.iter().filter(|e| !e.cancelled) {
        let uid = format!("{}-{}", entry.source_id, entry.date);
        let mut event = IcalEvent::new();
        event.summary(&entry.title).uid(&uid);

        match (
            parse_time(entry.start_time.as_deref()),
            parse_time(entry.end_time.as_deref()),
        ) {
            (Some(start), Some(end)) => {
                event.starts(CalendarDateTime::from(entry.date.and_time(start)));
                event.ends(CalendarDateTime::from(entry.date.and_time(end)));
            }
            // Entries without parseable times become all-day events.
            _ => {
                event.starts(entry.date);
                event.ends(entry.date + Duration::days(1));
            }
        }

        if !entry.participants.is_empty() {
            event.description(&entry.participants.join(", "));
        }

        calendar.push(event.done());
    }

    calendar.to_string()
}

fn parse_time(value: Option<&str>) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value?, "%H:%M").ok()
}
