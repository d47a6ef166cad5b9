use std::collections::HashMap;

use tracing::{error, info};

use crate::domain::models::calendar_event::CalendarEvent;
use crate::domain::models::import::{BatchResult, Conflict, Resolution};
use crate::domain::ports::CalendarEventRepository;

/// Applies per-conflict resolutions against the event store.
///
/// Store failures are isolated: each one is recorded under its conflict
/// index and the rest of the batch proceeds. There is no cross-batch
/// transaction. Indices without a resolution are passed over, counted as
/// neither success nor failure, so a partial batch can safely be re-applied.
pub async fn apply_resolutions(
    repo: &dyn CalendarEventRepository,
    household_id: &str,
    conflicts: &[Conflict],
    resolutions: &HashMap<usize, Resolution>,
) -> BatchResult {
    let mut result = BatchResult::default();

    for (index, conflict) in conflicts.iter().enumerate() {
        let Some(resolution) = resolutions.get(&index) else {
            continue;
        };

        match resolution {
            Resolution::Skip => result.skipped += 1,
            Resolution::Update => {
                let updated = conflict.existing.updated_from(&conflict.candidate);
                match repo.update(&updated).await {
                    Ok(_) => result.updated += 1,
                    Err(err) => {
                        error!(index, error = %err, "conflict update failed");
                        result.record_failure(index, err);
                    }
                }
            }
            Resolution::Create => {
                let event = CalendarEvent::from_upload(household_id, &conflict.candidate);
                match repo.insert(&event).await {
                    Ok(_) => result.created += 1,
                    Err(err) => {
                        error!(index, error = %err, "conflict create failed");
                        result.record_failure(index, err);
                    }
                }
            }
        }
    }

    info!(
        created = result.created,
        updated = result.updated,
        skipped = result.skipped,
        failed = result.failed,
        "import batch applied"
    );
    result
}
