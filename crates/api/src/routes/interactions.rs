//! Route definitions for the public `/ads` interaction beacons.

use axum::routing::post;
use axum::Router;

use crate::handlers::interactions;
use crate::state::AppState;

/// Routes mounted at `/ads`.
///
/// ```text
/// POST /click    -> click beacon
/// POST /reach    -> impression beacon
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/click", post(interactions::click))
        .route("/reach", post(interactions::reach))
}
