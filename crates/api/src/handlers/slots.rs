//! Handlers for the `/slots` catalogue and the storefront slot selector.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use adslot_core::registry::{self, SlotDefinition, TierDefinition};
use adslot_db::models::placement::Placement;

use crate::engine::selector;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// One tier and its slots, in priority order.
#[derive(Debug, Serialize)]
pub struct TierGroup {
    pub tier: &'static TierDefinition,
    pub slots: Vec<&'static SlotDefinition>,
}

/// GET /api/v1/slots
///
/// The compiled-in slot catalogue grouped by tier, for admin slot pickers.
pub async fn list() -> Json<DataResponse<Vec<TierGroup>>> {
    let data = registry::slots_grouped_by_tier()
        .into_iter()
        .map(|(tier, slots)| TierGroup { tier, slots })
        .collect();
    Json(DataResponse { data })
}

/// Selector query (`?on=YYYY-MM-DD`), defaulting to today (UTC).
#[derive(Debug, Deserialize)]
pub struct CurrentParams {
    pub on: Option<NaiveDate>,
}

/// GET /api/v1/slots/{slot_key}/current
///
/// The single placement to render in the slot, or `{"data": null}` when the
/// slot is empty that day.
pub async fn current(
    State(state): State<AppState>,
    Path(slot_key): Path<String>,
    Query(params): Query<CurrentParams>,
) -> AppResult<Json<DataResponse<Option<Placement>>>> {
    let on = params.on.unwrap_or_else(|| Utc::now().date_naive());
    let data = selector::current_for_slot(&state.pool, &slot_key, on).await?;
    Ok(Json(DataResponse { data }))
}
