//! Interaction billing.
//!
//! Every accepted interaction is appended to the event log; whether it is
//! also *charged* depends on the placement's display state, click dedup,
//! and the ledger's answer. A rejected or failed charge auto-pauses the
//! placement so it stops serving until the owner intervenes.

use chrono::Utc;
use rust_decimal::Decimal;

use adslot_core::placement::{interaction_unit_cost, InteractionKind};
use adslot_core::types::DbId;
use adslot_db::repositories::{CostRepo, InteractionRepo, PlacementRepo};
use adslot_db::DbPool;

use crate::engine::ledger::{ChargeOutcome, Ledger};
use crate::error::AppResult;

/// What happened to one reported interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingOutcome {
    /// Event logged and the seller's account debited.
    Charged,
    /// Click already billed for this IP today; event logged, no charge.
    DuplicateSkipped,
    /// Event logged; the computed unit cost was zero.
    FreeOfCharge,
    /// Placement unknown or not in the active display state. Nothing logged.
    Dropped,
    /// Charge rejected or failed; event logged and the placement paused.
    AutoPaused,
}

/// Record one interaction against a placement and settle its charge.
///
/// Fire-and-forget from the caller's perspective: the HTTP surface never
/// exposes the outcome, but the state transitions here (event append,
/// wallet debit, auto-pause) are the system's actual billing behaviour.
pub async fn record_interaction(
    pool: &DbPool,
    ledger: &dyn Ledger,
    kind: InteractionKind,
    placement_id: DbId,
    source_ip: &str,
) -> AppResult<BillingOutcome> {
    let placement = match PlacementRepo::find(pool, placement_id).await? {
        Some(p) => p,
        None => {
            tracing::debug!(placement_id, "interaction for unknown placement dropped");
            return Ok(BillingOutcome::Dropped);
        }
    };

    if !placement.display_state().is_active() {
        tracing::debug!(
            placement_id,
            state = ?placement.display_state(),
            "interaction for non-active placement dropped"
        );
        return Ok(BillingOutcome::Dropped);
    }

    // Dedup is decided before this event lands in the log, so the repeat
    // event itself is still recorded below.
    let duplicate_click = kind == InteractionKind::Click
        && InteractionRepo::has_click_on_day(
            pool,
            placement_id,
            source_ip,
            Utc::now().date_naive(),
        )
        .await?;

    InteractionRepo::append(pool, placement_id, kind, source_ip).await?;

    if duplicate_click {
        tracing::debug!(placement_id, source_ip, "repeat click logged without charge");
        return Ok(BillingOutcome::DuplicateSkipped);
    }

    let unit_cost = match CostRepo::find(pool, placement.cost_id).await? {
        Some(cost) => interaction_unit_cost(cost.cost_amount, kind),
        // A deleted cost row makes the interaction unpriceable; serve it
        // free rather than pause a placement over a pricing gap.
        None => Decimal::ZERO,
    };
    if unit_cost <= Decimal::ZERO {
        return Ok(BillingOutcome::FreeOfCharge);
    }

    let description = format!("{} on placement {placement_id}", kind.as_str());
    match ledger
        .charge(placement.seller_id, unit_cost, &description)
        .await
    {
        Ok(ChargeOutcome::Charged) => Ok(BillingOutcome::Charged),
        Ok(ChargeOutcome::Insufficient) => {
            pause(pool, placement_id, "Insufficient wallet balance").await?;
            Ok(BillingOutcome::AutoPaused)
        }
        Err(err) => {
            // A ledger fault is a failed charge, never an implicit success.
            tracing::error!(placement_id, error = %err, "ledger charge failed");
            pause(pool, placement_id, "Ledger charge failed").await?;
            Ok(BillingOutcome::AutoPaused)
        }
    }
}

async fn pause(pool: &DbPool, placement_id: DbId, reason: &str) -> AppResult<()> {
    PlacementRepo::auto_pause(pool, placement_id, reason).await?;
    tracing::warn!(placement_id, reason, "placement auto-paused");
    Ok(())
}
