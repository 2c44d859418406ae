//! Route definitions for the `/slots` catalogue and selector.

use axum::routing::get;
use axum::Router;

use crate::handlers::slots;
use crate::state::AppState;

/// Routes mounted at `/slots`.
///
/// ```text
/// GET /                      -> catalogue grouped by tier
/// GET /{slot_key}/current    -> placement to render (?on=YYYY-MM-DD)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(slots::list))
        .route("/{slot_key}/current", get(slots::current))
}
