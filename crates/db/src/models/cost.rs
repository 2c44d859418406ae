use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use adslot_core::types::{DbId, Timestamp};

/// A row from the `ad_costs` table: the priced record for one
/// (ad type, tier) pair.
///
/// Placements pin a `cost_id` at creation time, so later price changes do
/// not retroactively alter ads that were sold against an older row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CostRecord {
    pub id: DbId,
    pub ad_type_id: DbId,
    pub tier_key: String,
    pub cost_amount: Decimal,
    pub created_at: Timestamp,
}
