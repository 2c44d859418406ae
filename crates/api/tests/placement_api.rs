//! HTTP-level integration tests for the placement admin endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_placement, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_returns_201_with_derived_columns(pool: PgPool) {
    let json = create_placement(pool, serde_json::json!({})).await;

    assert!(json["id"].is_number());
    assert_eq!(json["slot_key"], "slot_home_top");
    // Tier and end date come from the slot, never from the client.
    assert_eq!(json["tier_key"], "tier1");
    assert_eq!(json["start_date"], "2025-03-01");
    assert_eq!(json["end_date"], "2025-03-08");
    assert_eq!(json["status"], "active");
    assert_eq!(json["auto_paused"], false);
    assert!(json["cost_id"].is_number());
    assert!(json["seller_id"].is_number(), "falls back to first seller");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_ignores_client_supplied_tier(pool: PgPool) {
    // slot_footer_banner is a tier3 slot; a tier_key field in the payload
    // must not override that.
    let json = create_placement(
        pool,
        serde_json::json!({"slot_key": "slot_footer_banner", "tier_key": "tier1"}),
    )
    .await;

    assert_eq!(json["tier_key"], "tier3");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_missing_fields_returns_field_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/v1/placements", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"]["creative_url"], "Banner image URL is required");
    assert_eq!(json["fields"]["start_date"], "Start date is required");
    assert_eq!(json["fields"]["slot_key"], "Please select a valid slot");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_malformed_target_link_returns_field_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/placements",
        serde_json::json!({
            "slot_key": "slot_home_top",
            "creative_url": "https://cdn.example.com/banner.png",
            "target_link": "not-a-url",
            "start_date": "2025-03-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"]["target_link"], "Invalid URL format");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_slot_returns_invalid_slot(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/placements",
        serde_json::json!({
            "slot_key": "slot_retired_masthead",
            "creative_url": "https://cdn.example.com/banner.png",
            "start_date": "2025-03-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_SLOT");
    assert_eq!(json["fields"]["slot_key"], "Please select a valid slot");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unpriced_tier_is_rejected_before_any_write(pool: PgPool) {
    // Remove tier3 pricing, then try to book a tier3 slot.
    sqlx::query("DELETE FROM ad_costs WHERE tier_key = 'tier3'")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/placements",
        serde_json::json!({
            "slot_key": "slot_footer_banner",
            "creative_url": "https://cdn.example.com/banner.png",
            "start_date": "2025-03-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PRICING_NOT_CONFIGURED");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM placements")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "nothing may be persisted on a pricing failure");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_with_unknown_seller_returns_field_error(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/placements",
        serde_json::json!({
            "seller_id": 999999,
            "slot_key": "slot_home_top",
            "creative_url": "https://cdn.example.com/banner.png",
            "start_date": "2025-03-01",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["seller_id"].is_string());
}

// ---------------------------------------------------------------------------
// Get / update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_by_id_returns_placement(pool: PgPool) {
    let created = create_placement(pool.clone(), serde_json::json!({})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/placements/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    // Detail view carries lifetime interaction tallies.
    assert_eq!(json["clicks"], 0);
    assert_eq!(json["impressions"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/placements/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_to_new_slot_rederives_tier_and_end_date(pool: PgPool) {
    let created = create_placement(pool.clone(), serde_json::json!({})).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["tier_key"], "tier1");

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/placements/{id}"),
        serde_json::json!({
            "slot_key": "slot_footer_banner",
            "creative_url": "https://cdn.example.com/banner-v2.png",
            "start_date": "2025-04-01",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["slot_key"], "slot_footer_banner");
    assert_eq!(json["tier_key"], "tier3");
    assert_eq!(json["end_date"], "2025-04-08");
    assert_eq!(json["creative_url"], "https://cdn.example.com/banner-v2.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_to_active_clears_auto_pause(pool: PgPool) {
    let created = create_placement(pool.clone(), serde_json::json!({})).await;
    let id = created["id"].as_i64().unwrap();

    sqlx::query("UPDATE placements SET status = 'inactive', auto_paused = TRUE WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/placements/{id}"),
        serde_json::json!({
            "slot_key": "slot_home_top",
            "creative_url": "https://cdn.example.com/banner.png",
            "start_date": "2025-03-01",
            "status": "active",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "active");
    assert_eq!(json["auto_paused"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_returns_204_then_404(pool: PgPool) {
    let created = create_placement(pool.clone(), serde_json::json!({})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/placements/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/placements/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Toggle
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn toggle_flips_status_both_ways(pool: PgPool) {
    let created = create_placement(pool.clone(), serde_json::json!({})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/placements/{id}/toggle"),
        serde_json::json!({}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "inactive");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/placements/{id}/toggle"),
        serde_json::json!({}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "active");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn toggle_reactivation_clears_auto_pause(pool: PgPool) {
    let created = create_placement(pool.clone(), serde_json::json!({})).await;
    let id = created["id"].as_i64().unwrap();

    sqlx::query("UPDATE placements SET status = 'inactive', auto_paused = TRUE WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/placements/{id}/toggle"),
        serde_json::json!({}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "active");
    assert_eq!(json["auto_paused"], false);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_orders_by_slot_priority_then_recency(pool: PgPool) {
    // Footer (priority 10) created last, so it is the most recently touched
    // row; home top (priority 1) must still sort first.
    create_placement(
        pool.clone(),
        serde_json::json!({"slot_key": "slot_home_mid"}),
    )
    .await;
    create_placement(
        pool.clone(),
        serde_json::json!({"slot_key": "slot_home_top"}),
    )
    .await;
    create_placement(
        pool.clone(),
        serde_json::json!({"slot_key": "slot_footer_banner"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/placements").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["items"].as_array().unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(items[0]["slot_key"], "slot_home_top");
    assert_eq!(items[1]["slot_key"], "slot_home_mid");
    assert_eq!(items[2]["slot_key"], "slot_footer_banner");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_tier(pool: PgPool) {
    create_placement(
        pool.clone(),
        serde_json::json!({"slot_key": "slot_home_top"}),
    )
    .await;
    create_placement(
        pool.clone(),
        serde_json::json!({"slot_key": "slot_footer_banner"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/placements?tier_key=tier3").await;
    let json = body_json(response).await;

    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["slot_key"], "slot_footer_banner");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_pages_the_sorted_set(pool: PgPool) {
    for slot in ["slot_home_top", "slot_home_mid", "slot_footer_banner"] {
        create_placement(pool.clone(), serde_json::json!({"slot_key": slot})).await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/v1/placements?page=1&page_size=2").await;
    let json = body_json(response).await;
    assert_eq!(json["total"], 3);
    assert_eq!(json["items"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/placements?page=2&page_size=2").await;
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["items"][0]["slot_key"], "slot_footer_banner");
}
