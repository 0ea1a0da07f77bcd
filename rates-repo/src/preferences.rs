//! SQLite preference store adapter.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use currency_codes::CurrencyCode;
use sqlx::SqlitePool;
use tokio::sync::watch;

use rates_types::{PreferenceStore, StoreError, freshness};

use crate::types::DbPreference;

const KEY_LAST_UPDATED: &str = "last_updated_at";
const KEY_SOURCE_CODE: &str = "source_currency_code";
const KEY_TARGET_CODE: &str = "target_currency_code";

/// Selection served before the user ever picks a source currency.
pub const DEFAULT_SOURCE_CODE: CurrencyCode = CurrencyCode::USD;
/// Selection served before the user ever picks a target currency.
pub const DEFAULT_TARGET_CODE: CurrencyCode = CurrencyCode::EUR;

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite-backed key-value settings store.
///
/// Point values (last-updated timestamp) are read on demand; the two
/// selection codes are additionally exposed as change streams that replay
/// the current value to new subscribers.
#[derive(Clone)]
pub struct SqlitePreferences {
    pool: SqlitePool,
    source_code: Arc<watch::Sender<CurrencyCode>>,
    target_code: Arc<watch::Sender<CurrencyCode>>,
}

impl SqlitePreferences {
    /// Creates the store over an already-migrated pool, seeding the
    /// selection streams from persisted values (or the defaults).
    pub async fn new(pool: SqlitePool) -> Result<Self, StoreError> {
        let source = load_code(&pool, KEY_SOURCE_CODE, DEFAULT_SOURCE_CODE).await?;
        let target = load_code(&pool, KEY_TARGET_CODE, DEFAULT_TARGET_CODE).await?;

        let (source_code, _) = watch::channel(source);
        let (target_code, _) = watch::channel(target);

        Ok(Self {
            pool,
            source_code: Arc::new(source_code),
            target_code: Arc::new(target_code),
        })
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"INSERT INTO preferences (key, value) VALUES (?, ?)
               ON CONFLICT(key) DO UPDATE SET value = excluded.value"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}

async fn read_value(pool: &SqlitePool, key: &str) -> Result<Option<String>, StoreError> {
    let row: Option<DbPreference> =
        sqlx::query_as(r#"SELECT value FROM preferences WHERE key = ?"#)
            .bind(key)
            .fetch_optional(pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

    Ok(row.map(|r| r.value))
}

async fn load_code(
    pool: &SqlitePool,
    key: &str,
    default: CurrencyCode,
) -> Result<CurrencyCode, StoreError> {
    let value = read_value(pool, key).await?;
    // An unparseable persisted code falls back to the default.
    Ok(value
        .and_then(|v| CurrencyCode::from_str(&v).ok())
        .unwrap_or(default))
}

// ─────────────────────────────────────────────────────────────────────────────
// PreferenceStore implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PreferenceStore for SqlitePreferences {
    async fn save_last_updated(&self, epoch_millis: i64) -> Result<(), StoreError> {
        self.upsert(KEY_LAST_UPDATED, &epoch_millis.to_string())
            .await
    }

    async fn is_data_fresh(&self, now_epoch_millis: i64) -> Result<bool, StoreError> {
        let value = read_value(&self.pool, KEY_LAST_UPDATED).await?;
        let Some(value) = value else {
            return Ok(false);
        };

        let last_updated: i64 = value
            .parse()
            .map_err(|_| StoreError::Database(format!("Corrupt timestamp: {}", value)))?;

        Ok(freshness::is_fresh(last_updated, now_epoch_millis))
    }

    async fn save_source_code(&self, code: CurrencyCode) -> Result<(), StoreError> {
        self.upsert(KEY_SOURCE_CODE, code.code()).await?;
        self.source_code.send_replace(code);
        Ok(())
    }

    async fn save_target_code(&self, code: CurrencyCode) -> Result<(), StoreError> {
        self.upsert(KEY_TARGET_CODE, code.code()).await?;
        self.target_code.send_replace(code);
        Ok(())
    }

    fn watch_source_code(&self) -> watch::Receiver<CurrencyCode> {
        self.source_code.subscribe()
    }

    fn watch_target_code(&self) -> watch::Receiver<CurrencyCode> {
        self.target_code.subscribe()
    }
}
