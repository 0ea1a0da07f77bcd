//! Local rate store port.

use tokio::sync::watch;

use crate::domain::Currency;
use crate::error::StoreError;

/// Port trait for the durable currency snapshot store.
///
/// The store holds the full snapshot from the most recent successful fetch.
/// All mutating operations MUST be atomic: a concurrent reader never
/// observes a partially replaced snapshot.
#[async_trait::async_trait]
pub trait RateStore: Send + Sync + 'static {
    /// Atomically deletes all existing records and inserts the given
    /// snapshot within one transaction.
    async fn replace_all(&self, currencies: Vec<Currency>) -> Result<(), StoreError>;

    /// Reads the current snapshot.
    async fn read_all(&self) -> Result<Vec<Currency>, StoreError>;

    /// Deletes every record.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Change stream over the snapshot: replays the current value to each
    /// new subscriber, then notifies on every committed mutation.
    fn watch_all(&self) -> watch::Receiver<Vec<Currency>>;
}
