//! Preference store port.

use currency_codes::CurrencyCode;
use tokio::sync::watch;

use crate::error::StoreError;

/// Port trait for the small durable key-value settings store.
///
/// Writes are last-write-wins. The selection streams replay the current
/// value to each new subscriber, then notify on every change.
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync + 'static {
    /// Persists the server-reported last-updated timestamp (epoch millis).
    async fn save_last_updated(&self, epoch_millis: i64) -> Result<(), StoreError>;

    /// Whether the persisted timestamp is within the freshness window.
    /// `false` when no timestamp has ever been saved.
    async fn is_data_fresh(&self, now_epoch_millis: i64) -> Result<bool, StoreError>;

    async fn save_source_code(&self, code: CurrencyCode) -> Result<(), StoreError>;

    async fn save_target_code(&self, code: CurrencyCode) -> Result<(), StoreError>;

    fn watch_source_code(&self) -> watch::Receiver<CurrencyCode>;

    fn watch_target_code(&self) -> watch::Receiver<CurrencyCode>;
}
