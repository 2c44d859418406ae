//! Handlers for the `/placements` admin resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use adslot_core::error::CoreError;
use adslot_core::placement::InteractionKind;
use adslot_core::types::DbId;
use adslot_db::models::placement::{CreatePlacement, Placement, PlacementFilter, UpdatePlacement};
use adslot_db::repositories::{InteractionRepo, PlacementRepo};

use crate::engine::lifecycle::{LifecycleManager, PlacementPage};
use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// Optional listing filters (`?tier_key=&slot_key=`).
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub tier_key: Option<String>,
    pub slot_key: Option<String>,
}

/// GET /api/v1/placements
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
    Query(filter): Query<FilterParams>,
) -> AppResult<Json<PlacementPage>> {
    let filter = PlacementFilter {
        tier_key: filter.tier_key,
        slot_key: filter.slot_key,
    };
    let result = LifecycleManager::new(&state.pool)
        .list(filter, page.page(), page.page_size())
        .await?;
    Ok(Json(result))
}

/// POST /api/v1/placements
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlacement>,
) -> AppResult<(StatusCode, Json<Placement>)> {
    let placement = LifecycleManager::new(&state.pool).create(input).await?;
    Ok((StatusCode::CREATED, Json(placement)))
}

/// A placement plus its lifetime interaction tallies, for the admin
/// detail view.
#[derive(Debug, Serialize)]
pub struct PlacementDetail {
    #[serde(flatten)]
    pub placement: Placement,
    pub clicks: i64,
    pub impressions: i64,
}

/// GET /api/v1/placements/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PlacementDetail>> {
    let placement = PlacementRepo::find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Placement",
            id,
        }))?;
    let clicks =
        InteractionRepo::count_for_placement(&state.pool, id, InteractionKind::Click).await?;
    let impressions =
        InteractionRepo::count_for_placement(&state.pool, id, InteractionKind::Impression).await?;
    Ok(Json(PlacementDetail {
        placement,
        clicks,
        impressions,
    }))
}

/// PUT /api/v1/placements/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlacement>,
) -> AppResult<Json<Placement>> {
    let placement = LifecycleManager::new(&state.pool).edit(id, input).await?;
    Ok(Json(placement))
}

/// DELETE /api/v1/placements/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    LifecycleManager::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/placements/{id}/toggle
pub async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Placement>> {
    let placement = LifecycleManager::new(&state.pool).toggle_status(id).await?;
    Ok(Json(placement))
}
