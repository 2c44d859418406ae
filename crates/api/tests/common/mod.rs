//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot`, no TCP
//! listener involved, with the same middleware stack production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use adslot_api::config::ServerConfig;
use adslot_api::engine::ledger::{Ledger, WalletLedger};
use adslot_api::router::build_app_router;
use adslot_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router backed by the real wallet ledger.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_ledger(pool.clone(), Arc::new(WalletLedger::new(pool)))
}

/// Build the application router with a substitute ledger implementation.
pub fn build_test_app_with_ledger(pool: PgPool, ledger: Arc<dyn Ledger>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ledger,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into a JSON value.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

/// Id of the first seeded seller.
pub async fn first_seller_id(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT id FROM sellers ORDER BY id LIMIT 1")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Set a seller's wallet balance directly.
pub async fn set_wallet_balance(pool: &PgPool, seller_id: i64, balance: &str) {
    sqlx::query("UPDATE seller_wallets SET balance = $2::numeric WHERE seller_id = $1")
        .bind(seller_id)
        .bind(balance)
        .execute(pool)
        .await
        .unwrap();
}

/// Current wallet balance as a string (e.g. "480.00").
pub async fn wallet_balance(pool: &PgPool, seller_id: i64) -> String {
    adslot_db::repositories::WalletRepo::balance(pool, seller_id)
        .await
        .unwrap()
        .expect("wallet row exists")
        .to_string()
}

/// Create a placement through the API and return its JSON representation.
///
/// `overrides` is merged over a valid default payload.
pub async fn create_placement(pool: PgPool, overrides: serde_json::Value) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "slot_key": "slot_home_top",
        "creative_url": "https://cdn.example.com/banner.png",
        "target_link": "https://shop.example.com/deal",
        "start_date": "2025-03-01",
    });
    if let (Some(base), Some(extra)) = (payload.as_object_mut(), overrides.as_object()) {
        for (k, v) in extra {
            base.insert(k.clone(), v.clone());
        }
    }

    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/placements", payload).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}
