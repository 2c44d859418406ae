//! Repository for the append-only `interaction_events` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use adslot_core::placement::InteractionKind;
use adslot_core::types::DbId;

pub struct InteractionRepo;

impl InteractionRepo {
    /// Append one interaction event, returning the generated id.
    pub async fn append(
        pool: &PgPool,
        placement_id: DbId,
        kind: InteractionKind,
        source_ip: &str,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO interaction_events (placement_id, kind, source_ip) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(placement_id)
        .bind(kind.as_str())
        .bind(source_ip)
        .fetch_one(pool)
        .await
    }

    /// Whether this IP already clicked this placement on the given UTC day.
    ///
    /// Used to suppress repeat charges (the repeat event itself still gets
    /// logged). Call before appending the current event.
    pub async fn has_click_on_day(
        pool: &PgPool,
        placement_id: DbId,
        source_ip: &str,
        day: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM interaction_events \
             WHERE placement_id = $1 \
               AND kind = 'click' \
               AND source_ip = $2 \
               AND (occurred_at AT TIME ZONE 'UTC')::date = $3",
        )
        .bind(placement_id)
        .bind(source_ip)
        .bind(day)
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0) > 0)
    }

    /// Number of events of one kind recorded against a placement.
    pub async fn count_for_placement(
        pool: &PgPool,
        placement_id: DbId,
        kind: InteractionKind,
    ) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar(
            "SELECT COUNT(*) FROM interaction_events WHERE placement_id = $1 AND kind = $2",
        )
        .bind(placement_id)
        .bind(kind.as_str())
        .fetch_one(pool)
        .await?;
        Ok(count.unwrap_or(0))
    }
}
