//! Placement entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use adslot_core::placement::{DisplayState, PlacementStatus};
use adslot_core::types::{DbId, Timestamp};

/// A row from the `placements` table: one purchased/scheduled occupancy of
/// one slot by one seller's creative for a date range.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Placement {
    pub id: DbId,
    pub seller_id: DbId,
    pub ad_type_id: DbId,
    pub slot_key: String,
    /// Copied from the slot's configured tier at creation time.
    pub tier_key: String,
    /// Pinned cost row; re-pinned only when the slot (and thus tier) changes.
    pub cost_id: DbId,
    pub creative_url: String,
    pub target_link: Option<String>,
    pub start_date: NaiveDate,
    /// Always derived as `start_date + tier duration`; never user-supplied.
    pub end_date: NaiveDate,
    pub status: String,
    pub auto_paused: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Placement {
    pub fn status(&self) -> PlacementStatus {
        PlacementStatus::from_db(&self.status)
    }

    /// Billing-derived three-way state.
    pub fn display_state(&self) -> DisplayState {
        DisplayState::from_parts(self.status(), self.auto_paused)
    }
}

/// DTO for creating a placement.
///
/// `tier_key`, `cost_id`, and `end_date` are intentionally absent: the
/// server derives all three from the slot and start date.
#[derive(Debug, Deserialize)]
pub struct CreatePlacement {
    pub seller_id: Option<DbId>,
    pub slot_key: Option<String>,
    pub creative_url: Option<String>,
    pub target_link: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub status: Option<PlacementStatus>,
    pub notes: Option<String>,
}

/// DTO for editing a placement. Same shape as create; a changed `slot_key`
/// re-derives the tier and re-pins the cost row.
pub type UpdatePlacement = CreatePlacement;

/// Validated column values for a placement insert/update, produced by the
/// lifecycle manager after slot/tier/cost resolution.
#[derive(Debug, Clone)]
pub struct PlacementWrite {
    pub seller_id: DbId,
    pub ad_type_id: DbId,
    pub slot_key: String,
    pub tier_key: String,
    pub cost_id: DbId,
    pub creative_url: String,
    pub target_link: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: PlacementStatus,
    pub notes: Option<String>,
}

/// Filter for admin placement listings.
#[derive(Debug, Default, Clone)]
pub struct PlacementFilter {
    pub tier_key: Option<String>,
    pub slot_key: Option<String>,
}
