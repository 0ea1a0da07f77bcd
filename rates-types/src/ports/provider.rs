//! Remote rate source port.
//!
//! This trait defines the interface for the remote exchange rate API.
//! Implementations can be HTTP clients, mock providers, etc.

use crate::domain::Currency;
use crate::error::ProviderError;

/// Port trait for the remote rate source.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the latest snapshot of rates against the API base currency.
    ///
    /// A successful fetch persists the server-reported last-updated
    /// timestamp as a side effect; a failed fetch leaves the stored
    /// timestamp untouched.
    async fn fetch_latest_rates(&self) -> Result<Vec<Currency>, ProviderError>;
}
