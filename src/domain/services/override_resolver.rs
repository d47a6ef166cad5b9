use std::collections::{hash_map::Entry, HashMap};

use chrono::NaiveDate;
use tracing::warn;

use crate::domain::models::instance_override::InstanceOverride;
use crate::domain::models::occurrence::Occurrence;
use crate::domain::models::template::EventTemplate;

/// Overlays per-date overrides onto expanded occurrence dates.
///
/// Cancelled dates still produce an occurrence (flagged, not dropped) so a
/// calendar can render a strikethrough instead of a gap. Overrides whose
/// date is not among the candidates are orphans and are ignored here.
pub fn resolve_occurrences(
    template: &EventTemplate,
    candidate_dates: impl IntoIterator<Item = NaiveDate>,
    overrides: &[InstanceOverride],
) -> Vec<Occurrence> {
    let mut by_date: HashMap<NaiveDate, &InstanceOverride> = HashMap::new();
    for entity in overrides {
        match by_date.entry(entity.date) {
            Entry::Vacant(slot) => {
                slot.insert(entity);
            }
            // The store should make this impossible; tolerate it anyway.
            Entry::Occupied(mut slot) => {
                warn!(
                    template_id = %template.id,
                    date = %entity.date,
                    "duplicate instance overrides for one date, keeping the most recent"
                );
                if entity.created_at > slot.get().created_at {
                    slot.insert(entity);
                }
            }
        }
    }

    let default_participants = template.participants();

    candidate_dates
        .into_iter()
        .map(|date| {
            let entity = by_date.get(&date).copied();
            Occurrence {
                template_id: template.id.clone(),
                date,
                participants: entity
                    .and_then(|o| o.participants())
                    .unwrap_or_else(|| default_participants.clone()),
                transportation: entity
                    .and_then(|o| o.transportation.clone())
                    .or_else(|| template.transportation.clone()),
                cancelled: entity.is_some_and(|o| o.cancelled),
            }
        })
        .collect()
}
