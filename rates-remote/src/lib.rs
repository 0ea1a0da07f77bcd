//! # Rates Remote
//!
//! HTTP adapter for the remote currency rate API.
//!
//! One GET against the configured endpoint, authenticated through an API
//! key header, translated from the wire format into domain currency
//! records. A successful fetch persists the server-reported last-updated
//! timestamp into the preference store; a failed fetch leaves it untouched.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use chrono::DateTime;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use currency_codes::CurrencyCode;
use rates_types::{Currency, PreferenceStore, ProviderError, RateProvider};

/// Bound on the whole request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Header the upstream API expects the key in.
const API_KEY_HEADER: &str = "apikey";

// ─────────────────────────────────────────────────────────────────────────────
// Wire format
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    meta: ApiMeta,
    data: HashMap<String, ApiCurrency>,
}

#[derive(Deserialize)]
struct ApiMeta {
    last_updated_at: String,
}

#[derive(Deserialize)]
struct ApiCurrency {
    code: String,
    value: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Currency API client
// ─────────────────────────────────────────────────────────────────────────────

/// Client for the latest-rates endpoint.
pub struct CurrencyApiClient<F: PreferenceStore> {
    endpoint: String,
    api_key: String,
    http: Client,
    preferences: F,
}

impl<F: PreferenceStore> CurrencyApiClient<F> {
    /// Creates a new client against the given endpoint.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, preferences: F) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            http: Client::new(),
            preferences,
        }
    }
}

#[async_trait::async_trait]
impl<F: PreferenceStore> RateProvider for CurrencyApiClient<F> {
    async fn fetch_latest_rates(&self) -> Result<Vec<Currency>, ProviderError> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        // Keep exactly the intersection with the recognized code set,
        // ordered by code for a deterministic snapshot.
        let mut currencies: Vec<Currency> = body
            .data
            .values()
            .filter_map(|wire| {
                CurrencyCode::from_str(&wire.code)
                    .ok()
                    .map(|code| Currency::new(code, wire.value))
            })
            .collect();
        currencies.sort_by_key(|currency| currency.code);

        let last_updated = DateTime::parse_from_rfc3339(&body.meta.last_updated_at)
            .map_err(|e| ProviderError::Parse(format!("last_updated_at: {}", e)))?
            .timestamp_millis();
        self.preferences.save_last_updated(last_updated).await?;

        tracing::debug!(count = currencies.len(), "fetched latest exchange rates");
        Ok(currencies)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
