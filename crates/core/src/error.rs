use crate::types::DbId;
use crate::validate::FieldErrors;

/// Domain error taxonomy for the placement engine.
///
/// Ledger charge refusals are deliberately absent: a failed interaction
/// charge is not an error surfaced to any caller, it drives the
/// auto-pause transition inside the billing engine.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown slot: {slot_key}")]
    InvalidSlot { slot_key: String },

    #[error("Pricing not configured for {tier_key}")]
    PricingNotConfigured { tier_key: String },

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}
