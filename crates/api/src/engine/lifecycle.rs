//! Placement lifecycle manager.
//!
//! Create/edit/delete/toggle/list with slot/tier/cost consistency:
//! the tier is always derived from the slot (a client-sent tier is
//! ignored), the cost row is pinned via the per-request [`CostResolver`],
//! and the end date is always recomputed from the start date and the
//! tier's configured duration. Validation and cost resolution complete
//! before any write, so a failed operation persists nothing.

use chrono::NaiveDate;

use adslot_core::error::CoreError;
use adslot_core::placement::{self, PlacementStatus};
use adslot_core::registry;
use adslot_core::types::DbId;
use adslot_core::validate::{is_valid_url, FieldErrors};
use adslot_db::models::placement::{
    CreatePlacement, Placement, PlacementFilter, PlacementWrite, UpdatePlacement,
};
use adslot_db::repositories::{PlacementRepo, SellerRepo};
use adslot_db::DbPool;

use crate::engine::cost::CostResolver;
use crate::error::AppError;

/// One lifecycle manager per request. Owns the request-scoped cost memo.
pub struct LifecycleManager<'a> {
    pool: &'a DbPool,
    resolver: CostResolver,
}

/// A page of placements in admin review order.
#[derive(Debug, serde::Serialize)]
pub struct PlacementPage {
    pub items: Vec<Placement>,
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
}

impl<'a> LifecycleManager<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self {
            pool,
            resolver: CostResolver::new(),
        }
    }

    /// Create a placement. Status defaults to active, `auto_paused` to
    /// false. All-or-nothing: any validation or pricing failure aborts
    /// before the single INSERT.
    pub async fn create(&mut self, input: CreatePlacement) -> Result<Placement, AppError> {
        let write = self.prepare_write(input).await?;
        Ok(PlacementRepo::create(self.pool, &write).await?)
    }

    /// Edit a placement, re-validating exactly as create. A changed slot
    /// re-derives the tier and re-pins the cost row; the end date is
    /// always recomputed from the (possibly new) start date.
    pub async fn edit(&mut self, id: DbId, input: UpdatePlacement) -> Result<Placement, AppError> {
        let write = self.prepare_write(input).await?;
        PlacementRepo::update(self.pool, id, &write)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Hard-delete a placement. A second racing delete reports not-found.
    pub async fn delete(&mut self, id: DbId) -> Result<(), AppError> {
        if PlacementRepo::delete(self.pool, id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Flip active ↔ inactive. Reactivating clears `auto_paused`;
    /// deactivating leaves the flag as an audit trail of why the
    /// placement was last turned off.
    pub async fn toggle_status(&mut self, id: DbId) -> Result<Placement, AppError> {
        let current = PlacementRepo::find(self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let next = placement::toggle(current.status(), current.auto_paused);
        PlacementRepo::set_status(self.pool, id, next.status, next.auto_paused).await?;

        PlacementRepo::find(self.pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List placements for admin review: slot priority ascending (unknown
    /// slots sort last under the 999 default), then most recently touched
    /// first. Priorities are compiled-in, so ordering and paging happen
    /// here rather than in SQL.
    pub async fn list(
        &mut self,
        filter: PlacementFilter,
        page: i64,
        page_size: i64,
    ) -> Result<PlacementPage, AppError> {
        // Repo returns updated_at DESC; a stable sort on priority keeps
        // that recency order as the tie-break within each slot.
        let mut rows = PlacementRepo::list(self.pool, &filter).await?;
        rows.sort_by(|a, b| {
            registry::slot_priority(&a.slot_key).total_cmp(&registry::slot_priority(&b.slot_key))
        });

        let total = rows.len() as i64;
        let offset = ((page - 1) * page_size) as usize;
        let items: Vec<Placement> = rows
            .into_iter()
            .skip(offset)
            .take(page_size as usize)
            .collect();

        Ok(PlacementPage {
            items,
            page,
            page_size,
            total,
        })
    }

    /// Validate the input and resolve every derived column. No writes.
    async fn prepare_write(&mut self, input: CreatePlacement) -> Result<PlacementWrite, AppError> {
        let mut errors = FieldErrors::new();

        let creative_url = match input.creative_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => {
                errors.insert("creative_url", "Banner image URL is required");
                String::new()
            }
        };

        let target_link = match input.target_link.as_deref().map(str::trim) {
            Some(link) if !link.is_empty() => {
                if !is_valid_url(link) {
                    errors.insert("target_link", "Invalid URL format");
                }
                Some(link.to_string())
            }
            _ => None,
        };

        if input.start_date.is_none() {
            errors.insert("start_date", "Start date is required");
        }

        let slot_key = input.slot_key.as_deref().map(str::trim).unwrap_or("");
        if slot_key.is_empty() {
            errors.insert("slot_key", "Please select a valid slot");
        }
        errors.into_result()?;

        // Unknown slot is its own error class: the fields above are form
        // mistakes, this one can also mean a retired slot key.
        let slot = registry::slot(slot_key).ok_or_else(|| CoreError::InvalidSlot {
            slot_key: slot_key.to_string(),
        })?;

        let start_date: NaiveDate = input
            .start_date
            .ok_or_else(|| AppError::BadRequest("start_date is required".into()))?;
        let end_date = placement::derive_end_date(start_date, slot.tier_key);

        // Hard stop before any write when the tier has no price for this
        // ad type.
        let cost_id = self.resolver.resolve(self.pool, slot.tier_key).await?;
        let ad_type_id = self.resolver.ad_type_id(self.pool).await?;

        let seller_id = self.resolve_seller(input.seller_id).await?;

        Ok(PlacementWrite {
            seller_id,
            ad_type_id,
            slot_key: slot.key.to_string(),
            tier_key: slot.tier_key.to_string(),
            cost_id,
            creative_url,
            target_link,
            start_date,
            end_date,
            status: input.status.unwrap_or(PlacementStatus::Active),
            notes: input
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
        })
    }

    /// Resolve the owning seller. Falls back to the first seller in the
    /// store when none is supplied (single-tenant demo convenience; the
    /// admin form omits the field).
    async fn resolve_seller(&self, supplied: Option<DbId>) -> Result<DbId, AppError> {
        let mut errors = FieldErrors::new();
        match supplied {
            Some(id) => {
                if SellerRepo::exists(self.pool, id).await? {
                    return Ok(id);
                }
                errors.insert("seller_id", format!("Unknown seller: {id}"));
            }
            None => match SellerRepo::first_id(self.pool).await? {
                Some(id) => return Ok(id),
                None => errors.insert("seller_id", "No sellers exist to own this placement"),
            },
        }
        Err(CoreError::Validation(errors).into())
    }
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Placement",
        id,
    })
}
