//! Repository for the `placements` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use adslot_core::placement::PlacementStatus;
use adslot_core::types::DbId;

use crate::models::placement::{Placement, PlacementFilter, PlacementWrite};

/// Column list for `placements` queries.
const COLUMNS: &str = "id, seller_id, ad_type_id, slot_key, tier_key, cost_id, \
     creative_url, target_link, start_date, end_date, status, auto_paused, \
     notes, created_at, updated_at";

pub struct PlacementRepo;

impl PlacementRepo {
    /// Insert a new placement, returning the stored row.
    ///
    /// Single-statement write: validation and cost resolution happen before
    /// this call, so a failed operation persists nothing.
    pub async fn create(pool: &PgPool, w: &PlacementWrite) -> Result<Placement, sqlx::Error> {
        let query = format!(
            "INSERT INTO placements \
             (seller_id, ad_type_id, slot_key, tier_key, cost_id, creative_url, \
              target_link, start_date, end_date, status, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(w.seller_id)
            .bind(w.ad_type_id)
            .bind(&w.slot_key)
            .bind(&w.tier_key)
            .bind(w.cost_id)
            .bind(&w.creative_url)
            .bind(&w.target_link)
            .bind(w.start_date)
            .bind(w.end_date)
            .bind(w.status.as_str())
            .bind(&w.notes)
            .fetch_one(pool)
            .await
    }

    /// Fetch a placement by id.
    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<Placement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM placements WHERE id = $1");
        sqlx::query_as::<_, Placement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite all editable columns, returning the stored row, or `None`
    /// when the id does not exist. Setting the status to active clears
    /// `auto_paused` (explicit reactivation); any other edit leaves the
    /// flag untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        w: &PlacementWrite,
    ) -> Result<Option<Placement>, sqlx::Error> {
        let query = format!(
            "UPDATE placements SET \
             seller_id = $2, ad_type_id = $3, slot_key = $4, tier_key = $5, \
             cost_id = $6, creative_url = $7, target_link = $8, start_date = $9, \
             end_date = $10, status = $11, notes = $12, \
             auto_paused = CASE WHEN $11 = 'active' THEN FALSE ELSE auto_paused END, \
             updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(id)
            .bind(w.seller_id)
            .bind(w.ad_type_id)
            .bind(&w.slot_key)
            .bind(&w.tier_key)
            .bind(w.cost_id)
            .bind(&w.creative_url)
            .bind(&w.target_link)
            .bind(w.start_date)
            .bind(w.end_date)
            .bind(w.status.as_str())
            .bind(&w.notes)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a placement. Returns `false` when the row was already
    /// gone, so a racing second delete reports not-found instead of failing.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM placements WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the `(status, auto_paused)` pair. Returns `false` when the id
    /// does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: PlacementStatus,
        auto_paused: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE placements \
             SET status = $2, auto_paused = $3, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(status.as_str())
        .bind(auto_paused)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// System-initiated pause after a failed interaction charge. Appends the
    /// reason to the notes column for audit.
    pub async fn auto_pause(pool: &PgPool, id: DbId, reason: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE placements \
             SET status = 'inactive', auto_paused = TRUE, \
                 notes = CONCAT(COALESCE(notes, ''), ' | Auto-paused: ', $2::text), \
                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(reason)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List placements matching the filter, most recently touched first.
    ///
    /// Slot-priority ordering is applied by the caller: priorities live in
    /// the compiled-in registry, not in the database.
    pub async fn list(
        pool: &PgPool,
        filter: &PlacementFilter,
    ) -> Result<Vec<Placement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM placements \
             WHERE ($1::text IS NULL OR tier_key = $1) \
               AND ($2::text IS NULL OR slot_key = $2) \
             ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(&filter.tier_key)
            .bind(&filter.slot_key)
            .fetch_all(pool)
            .await
    }

    /// The single eligible placement for a slot on `today`, or `None`.
    ///
    /// Eligible: active, not auto-paused, and `today` inside the inclusive
    /// `[start_date, end_date]` window. Overlapping schedules resolve
    /// deterministically to the most recently touched row (id as the final
    /// tie-break), so every call with the same inputs returns the same
    /// winner.
    pub async fn select_for_slot(
        pool: &PgPool,
        slot_key: &str,
        today: NaiveDate,
    ) -> Result<Option<Placement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM placements \
             WHERE slot_key = $1 \
               AND status = 'active' \
               AND auto_paused = FALSE \
               AND start_date <= $2 \
               AND end_date >= $2 \
             ORDER BY updated_at DESC, id DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, Placement>(&query)
            .bind(slot_key)
            .bind(today)
            .fetch_optional(pool)
            .await
    }
}
