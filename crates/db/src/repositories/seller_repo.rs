//! Repository for the `sellers` table (read-only to this subsystem).

use sqlx::PgPool;

use adslot_core::types::DbId;

pub struct SellerRepo;

impl SellerRepo {
    /// Whether a seller with the given id exists.
    pub async fn exists(pool: &PgPool, seller_id: DbId) -> Result<bool, sqlx::Error> {
        let found: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM sellers WHERE id = $1")
                .bind(seller_id)
                .fetch_optional(pool)
                .await?;
        Ok(found.is_some())
    }

    /// Lowest-id seller, used as the documented fallback owner when a
    /// placement is created without an explicit seller.
    pub async fn first_id(pool: &PgPool) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM sellers ORDER BY id LIMIT 1")
            .fetch_optional(pool)
            .await
    }
}
