//! SQLite store integration tests.

#[cfg(test)]
mod tests {
    use currency_codes::CurrencyCode;
    use rates_types::{Currency, PreferenceStore, RateStore, freshness};

    use crate::preferences::{DEFAULT_SOURCE_CODE, DEFAULT_TARGET_CODE};
    use crate::{SqlitePreferences, SqliteRateStore, build_stores};

    async fn setup_stores() -> (SqliteRateStore, SqlitePreferences) {
        build_stores("sqlite::memory:").await.unwrap()
    }

    fn sample_snapshot() -> Vec<Currency> {
        vec![
            Currency::new(CurrencyCode::EUR, 0.92),
            Currency::new(CurrencyCode::USD, 1.0),
        ]
    }

    #[tokio::test]
    async fn test_read_all_empty_on_fresh_database() {
        let (store, _) = setup_stores().await;

        let rows = store.read_all().await.unwrap();

        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_replace_all_round_trip() {
        let (store, _) = setup_stores().await;

        store.replace_all(sample_snapshot()).await.unwrap();

        let rows = store.read_all().await.unwrap();
        assert_eq!(rows, sample_snapshot());
    }

    #[tokio::test]
    async fn test_replace_all_discards_previous_snapshot() {
        let (store, _) = setup_stores().await;

        store.replace_all(sample_snapshot()).await.unwrap();
        let replacement = vec![Currency::new(CurrencyCode::JPY, 155.2)];
        store.replace_all(replacement.clone()).await.unwrap();

        let rows = store.read_all().await.unwrap();
        assert_eq!(rows, replacement);
    }

    #[tokio::test]
    async fn test_watch_never_sees_intermediate_empty_state() {
        let (store, _) = setup_stores().await;
        store.replace_all(sample_snapshot()).await.unwrap();

        let mut watcher = store.watch_all();
        assert_eq!(*watcher.borrow_and_update(), sample_snapshot());

        let replacement = vec![Currency::new(CurrencyCode::GBP, 0.79)];
        store.replace_all(replacement.clone()).await.unwrap();

        watcher.changed().await.unwrap();
        // The single emission for the replace is the full new snapshot.
        assert_eq!(*watcher.borrow_and_update(), replacement);
        assert!(!watcher.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_watch_replays_current_snapshot_to_new_subscribers() {
        let (store, _) = setup_stores().await;
        store.replace_all(sample_snapshot()).await.unwrap();

        let late_subscriber = store.watch_all();

        assert_eq!(*late_subscriber.borrow(), sample_snapshot());
    }

    #[tokio::test]
    async fn test_clear_empties_store_and_stream() {
        let (store, _) = setup_stores().await;
        store.replace_all(sample_snapshot()).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.read_all().await.unwrap().is_empty());
        assert!(store.watch_all().borrow().is_empty());
    }

    #[tokio::test]
    async fn test_data_never_saved_is_not_fresh() {
        let (_, preferences) = setup_stores().await;

        let fresh = preferences.is_data_fresh(1_000_000).await.unwrap();

        assert!(!fresh);
    }

    #[tokio::test]
    async fn test_last_updated_round_trip_through_policy() {
        let (_, preferences) = setup_stores().await;
        let window_ms = freshness::FRESHNESS_WINDOW.as_millis() as i64;

        preferences.save_last_updated(1_000_000).await.unwrap();

        assert!(preferences.is_data_fresh(1_000_001).await.unwrap());
        assert!(
            !preferences
                .is_data_fresh(1_000_000 + window_ms)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_last_updated_is_last_write_wins() {
        let (_, preferences) = setup_stores().await;
        let window_ms = freshness::FRESHNESS_WINDOW.as_millis() as i64;

        preferences.save_last_updated(1_000).await.unwrap();
        preferences.save_last_updated(5_000_000).await.unwrap();

        assert!(preferences.is_data_fresh(5_000_000 + 1).await.unwrap());
        assert!(preferences.is_data_fresh(1_000 + window_ms).await.unwrap());
    }

    #[tokio::test]
    async fn test_selection_streams_start_at_defaults() {
        let (_, preferences) = setup_stores().await;

        assert_eq!(*preferences.watch_source_code().borrow(), DEFAULT_SOURCE_CODE);
        assert_eq!(*preferences.watch_target_code().borrow(), DEFAULT_TARGET_CODE);
    }

    #[tokio::test]
    async fn test_saved_codes_reach_subscribers() {
        let (_, preferences) = setup_stores().await;
        let mut source = preferences.watch_source_code();
        let mut target = preferences.watch_target_code();

        preferences
            .save_source_code(CurrencyCode::GBP)
            .await
            .unwrap();
        preferences
            .save_target_code(CurrencyCode::INR)
            .await
            .unwrap();

        source.changed().await.unwrap();
        target.changed().await.unwrap();
        assert_eq!(*source.borrow(), CurrencyCode::GBP);
        assert_eq!(*target.borrow(), CurrencyCode::INR);
    }

    #[tokio::test]
    async fn test_saved_codes_survive_reload_from_same_pool() {
        let (store, preferences) = setup_stores().await;

        preferences
            .save_source_code(CurrencyCode::CHF)
            .await
            .unwrap();

        // A preferences instance built over the same pool reads the
        // persisted value back, not the default.
        let reloaded = SqlitePreferences::new(store.pool().clone()).await.unwrap();
        assert_eq!(*reloaded.watch_source_code().borrow(), CurrencyCode::CHF);
    }
}
