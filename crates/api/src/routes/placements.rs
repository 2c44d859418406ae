//! Route definitions for the `/placements` admin resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::placements;
use crate::state::AppState;

/// Routes mounted at `/placements`.
///
/// ```text
/// GET    /               -> list (paged, ?tier_key=&slot_key=)
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// POST   /{id}/toggle    -> toggle
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(placements::list).post(placements::create))
        .route(
            "/{id}",
            get(placements::get_by_id)
                .put(placements::update)
                .delete(placements::delete),
        )
        .route("/{id}/toggle", post(placements::toggle))
}
