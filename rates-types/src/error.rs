//! Error types for the rate synchronization core.

/// Failures fetching rates from the remote API.
///
/// Every failure mode of a fetch is captured here; nothing is thrown past
/// the provider boundary.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP error code: {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Local store errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

impl From<StoreError> for ProviderError {
    fn from(err: StoreError) -> Self {
        ProviderError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_names_the_code() {
        let err = ProviderError::Status(503);
        assert_eq!(err.to_string(), "HTTP error code: 503");
    }

    #[test]
    fn test_store_error_promotes_to_provider_storage() {
        let err: ProviderError = StoreError::Database("disk io".into()).into();
        assert!(matches!(err, ProviderError::Storage(_)));
    }
}
