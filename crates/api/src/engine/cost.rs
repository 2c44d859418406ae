//! Per-request cost resolution.
//!
//! A placement pins the cost row for its (ad type, tier) pair at creation
//! time. The resolver memoizes lookups for the lifetime of one manager
//! instance so batch creates within a single request hit the store once per
//! tier. Instances are never shared across requests: pricing can change
//! between requests, and a long-lived cache would serve stale cost ids.

use std::collections::HashMap;

use adslot_core::error::CoreError;
use adslot_core::types::DbId;
use adslot_db::models::ad_type::BANNER_EXTERNAL;
use adslot_db::repositories::{AdTypeRepo, CostRepo};
use adslot_db::DbPool;

use crate::error::AppError;

/// Resolves (ad type, tier) pairs to pinned cost-record ids.
#[derive(Default)]
pub struct CostResolver {
    ad_type_id: Option<DbId>,
    by_tier: HashMap<String, DbId>,
}

impl CostResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the cost-record id for a tier under the banner ad type.
    ///
    /// Fails with [`CoreError::PricingNotConfigured`] when no cost row
    /// exists for the pair; placement creation/edit must treat that as a
    /// hard stop before any write.
    pub async fn resolve(&mut self, pool: &DbPool, tier_key: &str) -> Result<DbId, AppError> {
        if let Some(&cost_id) = self.by_tier.get(tier_key) {
            return Ok(cost_id);
        }

        let ad_type_id = self.ad_type_id(pool).await?;
        let cost = CostRepo::find_by_type_and_tier(pool, ad_type_id, tier_key)
            .await?
            .ok_or_else(|| CoreError::PricingNotConfigured {
                tier_key: tier_key.to_string(),
            })?;

        self.by_tier.insert(tier_key.to_string(), cost.id);
        Ok(cost.id)
    }

    /// The banner ad type id, looked up once per resolver instance.
    pub async fn ad_type_id(&mut self, pool: &DbPool) -> Result<DbId, AppError> {
        if let Some(id) = self.ad_type_id {
            return Ok(id);
        }
        let ad_type = AdTypeRepo::find_by_name(pool, BANNER_EXTERNAL)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("ad type '{BANNER_EXTERNAL}' is not seeded"))
            })?;
        self.ad_type_id = Some(ad_type.id);
        Ok(ad_type.id)
    }
}
