//! Billing ledger capability interface.
//!
//! The engine only needs "charge seller X amount Y → ok | insufficient";
//! the ledger's own consistency model is out of scope. The wallet-backed
//! implementation below is the production default; tests substitute stubs
//! through the [`Ledger`] trait object held in `AppState`.

use async_trait::async_trait;
use rust_decimal::Decimal;

use adslot_core::types::DbId;
use adslot_db::repositories::WalletRepo;
use adslot_db::DbPool;

/// Result of a charge attempt that reached the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeOutcome {
    /// The full amount was debited.
    Charged,
    /// The account could not cover the amount. Nothing was debited.
    Insufficient,
}

/// Errors from the ledger itself (I/O, store failures, timeouts).
///
/// Callers must treat these as charge failures, never as implicit
/// successes: unbilled inventory is worse than a paused ad.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger store error: {0}")]
    Store(#[from] sqlx::Error),
}

/// Synchronous boolean-outcome charge interface over the billing ledger.
#[async_trait]
pub trait Ledger: Send + Sync {
    async fn charge(
        &self,
        seller_id: DbId,
        amount: Decimal,
        description: &str,
    ) -> Result<ChargeOutcome, LedgerError>;
}

/// Ledger backed by the `seller_wallets` table.
pub struct WalletLedger {
    pool: DbPool,
}

impl WalletLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Ledger for WalletLedger {
    async fn charge(
        &self,
        seller_id: DbId,
        amount: Decimal,
        description: &str,
    ) -> Result<ChargeOutcome, LedgerError> {
        match WalletRepo::try_debit(&self.pool, seller_id, amount, description).await? {
            Some(balance_after) => {
                tracing::debug!(seller_id, %amount, %balance_after, "wallet charged");
                Ok(ChargeOutcome::Charged)
            }
            None => Ok(ChargeOutcome::Insufficient),
        }
    }
}
