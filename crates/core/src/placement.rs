//! Placement status and billing-derived display state.
//!
//! A placement carries a two-part state: the owner-visible `status`
//! (active/inactive) and the `auto_paused` flag recording whether the last
//! deactivation was system-initiated after a failed interaction charge.
//! The pair collapses into three display states; only [`DisplayState::Active`]
//! is eligible for rendering and billed interactions.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::registry;

/// Owner-visible placement status as persisted in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementStatus {
    Active,
    Inactive,
}

impl PlacementStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Parse a stored status value. Unknown values read as inactive so a
    /// bad row can never become eligible for display or billing.
    pub fn from_db(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            _ => Self::Inactive,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

/// The three-way state driving eligibility and billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Eligible for display and billed interactions.
    Active,
    /// Owner-initiated pause; not eligible, no billing attempted.
    PausedManual,
    /// System-initiated pause after a billing rejection; not eligible.
    PausedBudget,
}

impl DisplayState {
    /// Derive the display state from the persisted `(status, auto_paused)`
    /// pair. `auto_paused` only distinguishes the two paused flavours; an
    /// active placement is Active regardless of a stale flag.
    pub fn from_parts(status: PlacementStatus, auto_paused: bool) -> Self {
        match (status, auto_paused) {
            (PlacementStatus::Active, _) => Self::Active,
            (PlacementStatus::Inactive, false) => Self::PausedManual,
            (PlacementStatus::Inactive, true) => Self::PausedBudget,
        }
    }

    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Kind of billable interaction against a live placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Click,
    Impression,
}

impl InteractionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Impression => "impression",
        }
    }
}

/// Fraction of a tier's package price charged per click.
pub const CLICK_COST_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 3); // 0.002

/// Fraction of a tier's package price charged per impression.
pub const IMPRESSION_COST_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 4); // 0.0002

/// Unit cost for one interaction, derived from the placement's pinned
/// cost amount. Rounded to currency minor-unit precision.
pub fn interaction_unit_cost(cost_amount: Decimal, kind: InteractionKind) -> Decimal {
    let rate = match kind {
        InteractionKind::Click => CLICK_COST_RATE,
        InteractionKind::Impression => IMPRESSION_COST_RATE,
    };
    (cost_amount * rate).round_dp(2)
}

/// End date derived from the start date and the tier's configured run
/// duration. Never user-supplied; recomputed on every create and edit.
pub fn derive_end_date(start_date: NaiveDate, tier_key: &str) -> NaiveDate {
    start_date + chrono::Days::new(registry::tier_duration_days(tier_key) as u64)
}

/// Result of toggling a placement's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub status: PlacementStatus,
    pub auto_paused: bool,
}

/// Compute the post-toggle `(status, auto_paused)` pair.
///
/// Reactivating clears `auto_paused`: the owner has explicitly brought the
/// placement back (typically after topping up funds). Deactivating leaves
/// the flag as-is so the audit trail still shows *why* the placement was
/// last turned off.
pub fn toggle(status: PlacementStatus, auto_paused: bool) -> Toggle {
    match status.toggled() {
        PlacementStatus::Active => Toggle {
            status: PlacementStatus::Active,
            auto_paused: false,
        },
        PlacementStatus::Inactive => Toggle {
            status: PlacementStatus::Inactive,
            auto_paused,
        },
    }
}

/// Whether `today` falls within the placement's scheduled run window.
/// Both bounds are inclusive.
pub fn in_window(start_date: NaiveDate, end_date: NaiveDate, today: NaiveDate) -> bool {
    start_date <= today && today <= end_date
}
