//! # Rates Repository
//!
//! Concrete store implementations (adapters) for the rate sync core.
//! This crate provides the SQLite adapters that implement the `RateStore`
//! and `PreferenceStore` ports over one shared connection pool.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

pub mod preferences;
pub mod sqlite;

mod types;

#[cfg(test)]
mod sqlite_tests;

pub use preferences::SqlitePreferences;
pub use sqlite::SqliteRateStore;

/// Build and initialize both stores from a database URL.
///
/// This function:
/// 1. Opens (creating if missing) the SQLite database
/// 2. Applies the idempotent schema migrations
/// 3. Returns ready-to-use stores sharing one pool
///
/// Re-invoking against an already-initialized database is a no-op apart
/// from opening a new pool.
///
/// # Examples
///
/// ```ignore
/// let (store, preferences) = build_stores("sqlite://rates.db?mode=rwc").await?;
/// ```
pub async fn build_stores(
    database_url: &str,
) -> anyhow::Result<(SqliteRateStore, SqlitePreferences)> {
    // Ensure on-disk SQLite target directory exists (no-op for in-memory).
    if let Some(path) = database_url.strip_prefix("sqlite://") {
        let path = path.split('?').next().unwrap_or(path);
        if path != ":memory:" {
            let p = std::path::Path::new(path);
            if let Some(parent) = p.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePool::connect_with(options).await?;

    let ddl_currencies = include_str!("../migrations/0001_create_currencies.sql");
    sqlx::query(ddl_currencies).execute(&pool).await?;

    let ddl_preferences = include_str!("../migrations/0002_create_preferences.sql");
    sqlx::query(ddl_preferences).execute(&pool).await?;

    let store = SqliteRateStore::new(pool.clone()).await?;
    let preferences = SqlitePreferences::new(pool).await?;

    Ok((store, preferences))
}
