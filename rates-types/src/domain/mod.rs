//! Domain models for the rate synchronization core.

pub mod convert;
pub mod currency;
pub mod freshness;
pub mod request_state;
pub mod state;

pub use convert::{convert, exchange_rate};
pub use currency::Currency;
pub use request_state::RequestState;
pub use state::{CurrencySelection, RateStatus, SyncState};
