//! SQLite rate store adapter.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::watch;

use rates_types::{Currency, RateStore, StoreError};

use crate::types::DbCurrency;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Rate Store
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite-backed currency snapshot store.
///
/// Mutations go through one transaction each; the change stream emits a new
/// snapshot only after the transaction commits, so subscribers never see a
/// half-replaced state.
#[derive(Clone)]
pub struct SqliteRateStore {
    pool: SqlitePool,
    snapshot: Arc<watch::Sender<Vec<Currency>>>,
}

impl SqliteRateStore {
    /// Creates the store over an already-migrated pool, seeding the change
    /// stream with whatever snapshot is on disk.
    pub async fn new(pool: SqlitePool) -> Result<Self, StoreError> {
        let current = read_snapshot(&pool).await?;
        let (snapshot, _) = watch::channel(current);
        Ok(Self {
            pool,
            snapshot: Arc::new(snapshot),
        })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

async fn read_snapshot(pool: &SqlitePool) -> Result<Vec<Currency>, StoreError> {
    let rows: Vec<DbCurrency> = sqlx::query_as(r#"SELECT code, value FROM currencies"#)
        .fetch_all(pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

    rows.into_iter().map(DbCurrency::into_domain).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// RateStore implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl RateStore for SqliteRateStore {
    async fn replace_all(&self, currencies: Vec<Currency>) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        sqlx::query(r#"DELETE FROM currencies"#)
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        for currency in &currencies {
            sqlx::query(r#"INSERT INTO currencies (code, value) VALUES (?, ?)"#)
                .bind(currency.code.code())
                .bind(currency.value)
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::Transaction(e.to_string()))?;

        tracing::debug!(count = currencies.len(), "replaced currency snapshot");
        self.snapshot.send_replace(currencies);
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<Currency>, StoreError> {
        read_snapshot(&self.pool).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query(r#"DELETE FROM currencies"#)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        self.snapshot.send_replace(Vec::new());
        Ok(())
    }

    fn watch_all(&self) -> watch::Receiver<Vec<Currency>> {
        self.snapshot.subscribe()
    }
}
