//! HTTP-level integration tests for the slot catalogue and selector.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_placement, get, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Slot catalogue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn catalogue_groups_all_slots_by_tier(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/slots").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let groups = json["data"].as_array().unwrap();
    assert_eq!(groups.len(), 3);

    let total_slots: usize = groups
        .iter()
        .map(|g| g["slots"].as_array().unwrap().len())
        .sum();
    assert_eq!(total_slots, 17);

    assert_eq!(groups[0]["tier"]["key"], "tier1");
    assert_eq!(groups[0]["slots"][0]["key"], "slot_home_top");
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn selector_returns_the_placement_covering_the_date(pool: PgPool) {
    let created = create_placement(pool.clone(), serde_json::json!({})).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/slots/slot_home_top/current?on=2025-03-04").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn selector_window_bounds_are_inclusive(pool: PgPool) {
    create_placement(pool.clone(), serde_json::json!({})).await;

    // start_date 2025-03-01, tier1 runs 7 days, end_date 2025-03-08.
    for (on, occupied) in [
        ("2025-02-28", false),
        ("2025-03-01", true),
        ("2025-03-08", true),
        ("2025-03-09", false),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(
            app,
            &format!("/api/v1/slots/slot_home_top/current?on={on}"),
        )
        .await;
        let json = body_json(response).await;
        assert_eq!(json["data"].is_object(), occupied, "on={on}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn selector_prefers_the_most_recently_touched_placement(pool: PgPool) {
    let first = create_placement(pool.clone(), serde_json::json!({})).await;
    let first_id = first["id"].as_i64().unwrap();
    create_placement(pool.clone(), serde_json::json!({})).await;

    // Editing the first placement bumps its updated_at past the second's.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/placements/{first_id}"),
        serde_json::json!({
            "slot_key": "slot_home_top",
            "creative_url": "https://cdn.example.com/banner-v2.png",
            "start_date": "2025-03-01",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/slots/slot_home_top/current?on=2025-03-04").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], first_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn selector_skips_inactive_and_auto_paused_placements(pool: PgPool) {
    let created = create_placement(pool.clone(), serde_json::json!({})).await;
    let id = created["id"].as_i64().unwrap();

    sqlx::query("UPDATE placements SET status = 'inactive', auto_paused = TRUE WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/slots/slot_home_top/current?on=2025-03-04").await;
    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn selector_for_empty_slot_returns_null(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/slots/slot_footer_banner/current?on=2025-03-04").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn selector_rejects_unknown_slot(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/slots/slot_retired_masthead/current?on=2025-03-04").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_SLOT");
}
