//! # Rates Types
//!
//! Domain types and port traits for the rate synchronization core.
//! This crate has ZERO external IO dependencies - only data structures,
//! the freshness policy, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, RequestState, SyncState) and the freshness policy
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Error types shared across the core

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use currency_codes::CurrencyCode;
pub use domain::{
    Currency, CurrencySelection, RateStatus, RequestState, SyncState, convert, exchange_rate,
    freshness,
};
pub use error::{ProviderError, StoreError};
pub use ports::{PreferenceStore, RateProvider, RateStore};
