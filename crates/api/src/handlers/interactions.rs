//! Handlers for the public `/ads` interaction beacons.
//!
//! These endpoints are fired by storefront pages on every render and click,
//! so they always answer `{"success": true}` regardless of what billing
//! decided. A malformed or stale report must never break page rendering;
//! problems are logged server-side instead.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use adslot_core::placement::InteractionKind;
use adslot_core::types::DbId;

use crate::engine::billing;
use crate::state::AppState;

/// Beacon payload sent by the storefront ad snippet.
#[derive(Debug, Deserialize)]
pub struct InteractionReport {
    pub ads_id: Option<DbId>,
    pub ip_address: Option<String>,
}

/// POST /api/v1/ads/click
pub async fn click(
    State(state): State<AppState>,
    report: Result<Json<InteractionReport>, JsonRejection>,
) -> Json<Value> {
    record(&state, InteractionKind::Click, report).await;
    Json(json!({ "success": true }))
}

/// POST /api/v1/ads/reach
pub async fn reach(
    State(state): State<AppState>,
    report: Result<Json<InteractionReport>, JsonRejection>,
) -> Json<Value> {
    record(&state, InteractionKind::Impression, report).await;
    Json(json!({ "success": true }))
}

async fn record(
    state: &AppState,
    kind: InteractionKind,
    report: Result<Json<InteractionReport>, JsonRejection>,
) {
    let report = match report {
        Ok(Json(report)) => report,
        Err(rejection) => {
            tracing::debug!(kind = kind.as_str(), %rejection, "malformed interaction report dropped");
            return;
        }
    };
    let Some(placement_id) = report.ads_id else {
        tracing::debug!(kind = kind.as_str(), "interaction report without ads_id dropped");
        return;
    };
    let source_ip = report.ip_address.as_deref().unwrap_or("0.0.0.0");

    match billing::record_interaction(&state.pool, state.ledger.as_ref(), kind, placement_id, source_ip)
        .await
    {
        Ok(outcome) => {
            tracing::debug!(placement_id, kind = kind.as_str(), ?outcome, "interaction settled");
        }
        Err(err) => {
            tracing::error!(placement_id, kind = kind.as_str(), error = %err, "interaction billing failed");
        }
    }
}
