//! Single-winner slot selection.

use chrono::NaiveDate;

use adslot_core::error::CoreError;
use adslot_core::registry;
use adslot_db::models::placement::Placement;
use adslot_db::repositories::PlacementRepo;
use adslot_db::DbPool;

use crate::error::AppResult;

/// The placement to render in `slot_key` on `on`, or `None` when the slot
/// is empty that day.
///
/// Validates the slot key against the compiled-in registry, then defers to
/// the store for the deterministic most-recently-touched winner among
/// active, non-auto-paused placements whose window covers `on`.
pub async fn current_for_slot(
    pool: &DbPool,
    slot_key: &str,
    on: NaiveDate,
) -> AppResult<Option<Placement>> {
    if registry::slot(slot_key).is_none() {
        return Err(CoreError::InvalidSlot {
            slot_key: slot_key.to_string(),
        }
        .into());
    }
    Ok(PlacementRepo::select_for_slot(pool, slot_key, on).await?)
}
