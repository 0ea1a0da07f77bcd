//! Published synchronization state.

use crate::domain::currency::Currency;
use crate::domain::request_state::RequestState;

/// Freshness classification of the cached snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateStatus {
    Idle,
    Fresh,
    Stale,
}

/// Which side of the conversion pair a selection refers to.
///
/// Source and target may hold the same code; a same-currency conversion is
/// trivially allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySelection {
    Source,
    Target,
}

/// Everything the presentation layer observes from the sync controller.
///
/// Created `Idle`/empty at controller construction and mutated only by the
/// controller; observers must treat each snapshot as immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncState {
    pub rate_status: RateStatus,
    pub source_currency: RequestState<Currency>,
    pub target_currency: RequestState<Currency>,
    pub all_currencies: Vec<Currency>,
}

impl Default for SyncState {
    fn default() -> Self {
        Self {
            rate_status: RateStatus::Idle,
            source_currency: RequestState::Idle,
            target_currency: RequestState::Idle,
            all_currencies: Vec::new(),
        }
    }
}
