//! Repository for the `ad_costs` table.

use sqlx::PgPool;

use adslot_core::types::DbId;

use crate::models::cost::CostRecord;

/// Column list for `ad_costs` queries.
const COLUMNS: &str = "id, ad_type_id, tier_key, cost_amount, created_at";

pub struct CostRepo;

impl CostRepo {
    /// Fetch a cost record by id.
    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<CostRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ad_costs WHERE id = $1");
        sqlx::query_as::<_, CostRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the unique cost record for an (ad type, tier) pair.
    ///
    /// Absence means pricing has not been configured for the pair, which is
    /// a hard creation-time error upstream.
    pub async fn find_by_type_and_tier(
        pool: &PgPool,
        ad_type_id: DbId,
        tier_key: &str,
    ) -> Result<Option<CostRecord>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ad_costs WHERE ad_type_id = $1 AND tier_key = $2");
        sqlx::query_as::<_, CostRecord>(&query)
            .bind(ad_type_id)
            .bind(tier_key)
            .fetch_optional(pool)
            .await
    }
}
