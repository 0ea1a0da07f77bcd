//! Freshness policy for cached rate data.

use std::time::Duration;

/// How long a fetched snapshot counts as fresh.
///
/// The upstream API updates its rates once a day, so anything younger than
/// a day is served from cache without a network call.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Pure freshness check over epoch-millisecond timestamps.
pub fn is_fresh(last_updated_millis: i64, now_millis: i64) -> bool {
    now_millis - last_updated_millis < FRESHNESS_WINDOW.as_millis() as i64
}
