//! Configuration loading from environment.

use std::env;

/// Application configuration.
pub struct Config {
    pub api_endpoint: String,
    pub api_key: String,
    pub database_url: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let api_endpoint = env::var("CURRENCY_API_URL")
            .unwrap_or_else(|_| "https://api.currencyapi.com/v3/latest".to_string());

        let api_key = env::var("CURRENCY_API_KEY")
            .map_err(|_| anyhow::anyhow!("CURRENCY_API_KEY environment variable is required"))?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://rates.db?mode=rwc".to_string());

        Ok(Self {
            api_endpoint,
            api_key,
            database_url,
        })
    }
}
