//! Repository for the `seller_wallets` and `wallet_transactions` tables.

use rust_decimal::Decimal;
use sqlx::PgPool;

use adslot_core::types::DbId;

pub struct WalletRepo;

impl WalletRepo {
    /// Current balance for a seller, or `None` when no wallet row exists.
    pub async fn balance(pool: &PgPool, seller_id: DbId) -> Result<Option<Decimal>, sqlx::Error> {
        sqlx::query_scalar("SELECT balance FROM seller_wallets WHERE seller_id = $1")
            .bind(seller_id)
            .fetch_optional(pool)
            .await
    }

    /// Attempt to debit `amount` from a seller's wallet.
    ///
    /// The debit is a single conditional UPDATE guarded by
    /// `balance >= amount`, so concurrent charges cannot drive the balance
    /// negative. Returns the new balance, or `None` when funds were
    /// insufficient (or no wallet row exists). A successful debit also
    /// appends a `wallet_transactions` audit row in the same transaction.
    pub async fn try_debit(
        pool: &PgPool,
        seller_id: DbId,
        amount: Decimal,
        description: &str,
    ) -> Result<Option<Decimal>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let new_balance: Option<Decimal> = sqlx::query_scalar(
            "UPDATE seller_wallets \
             SET balance = balance - $2, updated_at = NOW() \
             WHERE seller_id = $1 AND balance >= $2 \
             RETURNING balance",
        )
        .bind(seller_id)
        .bind(amount)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(new_balance) = new_balance else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query(
            "INSERT INTO wallet_transactions \
             (seller_id, kind, amount, balance_after, description) \
             VALUES ($1, 'debit', $2, $3, $4)",
        )
        .bind(seller_id)
        .bind(amount)
        .bind(new_balance)
        .bind(description)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(new_balance))
    }
}
