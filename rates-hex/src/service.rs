//! Rate Synchronization Service
//!
//! Orchestrates the remote source, local store and preference store through
//! their ports. Contains NO infrastructure logic - pure orchestration of
//! the cache-or-fetch algorithm plus selection tracking.

use std::sync::Arc;

use currency_codes::CurrencyCode;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use rates_types::{
    CurrencySelection, PreferenceStore, RateProvider, RateStatus, RateStore, RequestState,
    StoreError, SyncState,
};

/// Slot message when a selected code is missing from the loaded snapshot.
const CURRENCY_NOT_FOUND: &str = "Couldn't find the currency.";

/// Sync controller for the rate cache.
///
/// Generic over the three ports - adapters are injected at compile time.
/// This enables:
/// - Swapping adapters without code changes
/// - Testing with in-memory ports
/// - Compile-time checks for port implementation
///
/// All published state flows through one `watch` channel; observers get the
/// current `SyncState` immediately on subscription and a notification per
/// change, and must treat every snapshot as immutable.
pub struct SyncService<P, S, F>
where
    P: RateProvider,
    S: RateStore,
    F: PreferenceStore,
{
    provider: P,
    store: S,
    preferences: F,
    state: Arc<watch::Sender<SyncState>>,
    sync_gate: tokio::sync::Mutex<()>,
    trackers: std::sync::Mutex<Vec<JoinHandle<()>>>,
}

impl<P, S, F> SyncService<P, S, F>
where
    P: RateProvider,
    S: RateStore,
    F: PreferenceStore,
{
    /// Creates a new service over the given adapters. State starts
    /// `Idle`/empty until [`start`](Self::start) or [`sync`](Self::sync)
    /// runs.
    pub fn new(provider: P, store: S, preferences: F) -> Self {
        let (state, _) = watch::channel(SyncState::default());
        Self {
            provider,
            store,
            preferences,
            state: Arc::new(state),
            sync_gate: tokio::sync::Mutex::new(()),
            trackers: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Subscribes to published state changes.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.state.subscribe()
    }

    /// Snapshot of the current published state.
    pub fn state(&self) -> SyncState {
        self.state.borrow().clone()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Startup
    // ─────────────────────────────────────────────────────────────────────────────

    /// Runs the synchronization algorithm once, then begins tracking the
    /// source/target selections for the service's lifetime.
    pub async fn start(&self) {
        self.sync().await;
        self.track_selection(CurrencySelection::Source, self.preferences.watch_source_code());
        self.track_selection(CurrencySelection::Target, self.preferences.watch_target_code());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Synchronization
    // ─────────────────────────────────────────────────────────────────────────────

    /// Full synchronization pass: cache read, conditional refresh, status.
    ///
    /// Also the entry point for an explicit, caller-initiated refresh.
    /// Single-flight: overlapping calls queue behind the gate instead of
    /// racing each other's store writes.
    pub async fn sync(&self) {
        let _flight = self.sync_gate.lock().await;

        match self.store.read_all().await {
            Ok(cached) if !cached.is_empty() => {
                // Serve whatever we have before deciding about the network.
                self.state
                    .send_modify(|state| state.all_currencies = cached);
                if self.is_data_fresh().await {
                    tracing::debug!("cached rates are fresh, skipping fetch");
                } else {
                    tracing::debug!("cached rates are stale");
                    self.refresh().await;
                }
            }
            Ok(_) => {
                tracing::debug!("local cache is empty");
                self.refresh().await;
            }
            Err(e) => {
                // A failed cache read is not an empty cache; no fetch here.
                tracing::error!(error = %e, "failed to read the local rate cache");
            }
        }

        self.publish_rate_status().await;
    }

    /// Fetches a new snapshot and swaps it in, durable write first.
    ///
    /// On any failure the previous cache and published list stay untouched;
    /// retry is caller-initiated.
    async fn refresh(&self) {
        match self.provider.fetch_latest_rates().await {
            Ok(fetched) => {
                if let Err(e) = self.store.replace_all(fetched.clone()).await {
                    tracing::error!(error = %e, "failed to persist fetched rates");
                    return;
                }
                self.state
                    .send_modify(|state| state.all_currencies = fetched);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch latest rates");
            }
        }
    }

    /// Publishes Fresh/Stale from the currently persisted timestamp, so the
    /// status reflects reality whether or not a refresh just ran.
    async fn publish_rate_status(&self) {
        let status = if self.is_data_fresh().await {
            RateStatus::Fresh
        } else {
            RateStatus::Stale
        };
        self.state.send_modify(|state| state.rate_status = status);
    }

    async fn is_data_fresh(&self) -> bool {
        let now = chrono::Utc::now().timestamp_millis();
        match self.preferences.is_data_fresh(now).await {
            Ok(fresh) => fresh,
            Err(e) => {
                tracing::error!(error = %e, "freshness check failed, treating cache as stale");
                false
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Selection tracking
    // ─────────────────────────────────────────────────────────────────────────────

    /// Follows one selection stream for the service's lifetime: every
    /// emitted code is looked up against the currently published snapshot.
    ///
    /// The lookup re-runs on preference changes only, not on snapshot
    /// changes; a selection saved moments before a snapshot swap can land
    /// on the old list until the next emission.
    fn track_selection(&self, slot: CurrencySelection, mut codes: watch::Receiver<CurrencyCode>) {
        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            loop {
                let code = *codes.borrow_and_update();
                state.send_modify(|state| {
                    let looked_up = state
                        .all_currencies
                        .iter()
                        .find(|currency| currency.code == code)
                        .copied();
                    let value = match looked_up {
                        Some(currency) => RequestState::Success(currency),
                        None => RequestState::Error(CURRENCY_NOT_FOUND.to_string()),
                    };
                    match slot {
                        CurrencySelection::Source => state.source_currency = value,
                        CurrencySelection::Target => state.target_currency = value,
                    }
                });
                if codes.changed().await.is_err() {
                    break;
                }
            }
        });
        self.trackers
            .lock()
            .expect("selection tracker registry poisoned")
            .push(handle);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Selection operations
    // ─────────────────────────────────────────────────────────────────────────────

    /// Swaps the source and target slots in place. Persisting the swapped
    /// codes is a separate, caller-triggered action.
    pub fn switch_currencies(&self) {
        self.state.send_modify(|state| {
            std::mem::swap(&mut state.source_currency, &mut state.target_currency);
        });
    }

    /// Persists a new source selection. The slot updates asynchronously
    /// through the selection subscription, not here.
    pub async fn save_source_code(&self, code: CurrencyCode) -> Result<(), StoreError> {
        self.preferences.save_source_code(code).await
    }

    /// Persists a new target selection. The slot updates asynchronously
    /// through the selection subscription, not here.
    pub async fn save_target_code(&self, code: CurrencyCode) -> Result<(), StoreError> {
        self.preferences.save_target_code(code).await
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Teardown
    // ─────────────────────────────────────────────────────────────────────────────

    /// Cancels the selection-tracking tasks.
    pub fn shutdown(&self) {
        let mut trackers = self
            .trackers
            .lock()
            .expect("selection tracker registry poisoned");
        for handle in trackers.drain(..) {
            handle.abort();
        }
    }
}

impl<P, S, F> Drop for SyncService<P, S, F>
where
    P: RateProvider,
    S: RateStore,
    F: PreferenceStore,
{
    fn drop(&mut self) {
        if let Ok(trackers) = self.trackers.get_mut() {
            for handle in trackers.drain(..) {
                handle.abort();
            }
        }
    }
}
