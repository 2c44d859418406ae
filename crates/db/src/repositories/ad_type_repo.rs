//! Repository for the `ad_types` table (seed data, read-only here).

use sqlx::PgPool;

use crate::models::ad_type::AdType;

pub struct AdTypeRepo;

impl AdTypeRepo {
    /// Look up an ad type by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<AdType>, sqlx::Error> {
        sqlx::query_as::<_, AdType>(
            "SELECT id, name, created_at FROM ad_types WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(pool)
        .await
    }
}
