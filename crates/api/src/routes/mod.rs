pub mod health;
pub mod interactions;
pub mod placements;
pub mod slots;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /placements                                      list, create
/// /placements/{id}                                 get, update, delete
/// /placements/{id}/toggle                          flip active/inactive (POST)
///
/// /ads/click                                       click beacon (POST, public)
/// /ads/reach                                       impression beacon (POST, public)
///
/// /slots                                           slot catalogue grouped by tier
/// /slots/{slot_key}/current                        placement to render today
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/placements", placements::router())
        .nest("/ads", interactions::router())
        .nest("/slots", slots::router())
}
