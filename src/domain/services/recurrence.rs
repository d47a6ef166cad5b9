use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::domain::models::template::{EventTemplate, RecurrenceSlot};

/// Inclusive day-by-day walk between two calendar dates.
/// Empty when start > end.
#[derive(Debug, Clone)]
pub struct DateWindow {
    cursor: Option<NaiveDate>,
    end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            cursor: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for DateWindow {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.cursor?;
        self.cursor = if current < self.end {
            current.succ_opt()
        } else {
            None
        };
        Some(current)
    }
}

/// The dates on which a template actually recurs within a query window,
/// ascending. Pure: slot times never influence inclusion, only weekdays do.
///
/// The effective range is the intersection of the window with the template's
/// own active range; an empty intersection yields an empty sequence.
pub fn expand_dates(
    template: &EventTemplate,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    let mask = weekday_mask(&template.slots());
    let start = template.start_date.max(window_start);
    let end = template.end_date.map_or(window_end, |d| d.min(window_end));

    DateWindow::new(start, end)
        .filter(move |date| mask[date.weekday().num_days_from_sunday() as usize])
}

/// Boolean OR over slots: several slots on the same weekday still mark the
/// day once. A slot outside 0..=6 is skipped with a warning, never fatal.
fn weekday_mask(slots: &[RecurrenceSlot]) -> [bool; 7] {
    let mut mask = [false; 7];
    for slot in slots {
        match mask.get_mut(slot.day_of_week as usize) {
            Some(day) => *day = true,
            None => warn!(
                day_of_week = slot.day_of_week,
                "skipping recurrence slot with out-of-range weekday"
            ),
        }
    }
    mask
}
