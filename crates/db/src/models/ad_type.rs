use serde::Serialize;
use sqlx::FromRow;

use adslot_core::types::{DbId, Timestamp};

/// A row from the `ad_types` table. Seed data, read-only to this subsystem.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdType {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// Canonical ad type managed by the banner placement engine.
pub const BANNER_EXTERNAL: &str = "banner_external";
