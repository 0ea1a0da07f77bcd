//! # Rates Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Open the local snapshot and preference stores
//! - Create the remote client and the sync service
//! - Run the startup synchronization and report the resulting state

mod config;

use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_hex::SyncService;
use rates_remote::CurrencyApiClient;
use rates_repo::build_stores;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rates_app=debug,rates_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Using database: {}", config.database_url);

    // Build the stores (handles connection and migration)
    let (store, preferences) = build_stores(&config.database_url).await?;

    // Create the remote client and the sync service
    let client = CurrencyApiClient::new(config.api_endpoint, config.api_key, preferences.clone());
    let service = SyncService::new(client, store, preferences);

    let mut state_rx = service.subscribe();
    service.start().await;

    // Give the selection trackers a moment to resolve both slots.
    let _ = tokio::time::timeout(
        Duration::from_millis(500),
        state_rx.wait_for(|s| !s.source_currency.is_idle() && !s.target_currency.is_idle()),
    )
    .await;

    let state = service.state();
    tracing::info!(
        status = ?state.rate_status,
        currencies = state.all_currencies.len(),
        "synchronization complete"
    );
    if let Some(source) = state.source_currency.success() {
        tracing::info!("source currency: {} ({})", source.code, source.code.country());
    }
    if let Some(target) = state.target_currency.success() {
        tracing::info!("target currency: {} ({})", target.code, target.code.country());
    }

    service.shutdown();
    Ok(())
}
