#[cfg(test)]
pub mod test_utils {
    use crate::config::{initialize_app_state, AppConfig};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Seed used by tests so generated tables are reproducible
    pub const TEST_SAMPLE_SEED: u64 = 2024;

    /// Create AppState for testing
    pub fn setup_test_app_state() -> AppState {
        let config = AppConfig {
            upload_capacity: 10,
            sample_seed: Some(TEST_SAMPLE_SEED),
            ..AppConfig::default()
        };
        initialize_app_state(config)
    }

    /// Install the global test subscriber, writing through the test harness.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. Only the first call installs it.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        // Later calls find a subscriber already installed
        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        init_test_tracing();
        create_router(setup_test_app_state())
    }

    #[test]
    fn test_tracing_subscriber_stays_installed() {
        init_test_tracing();
        init_test_tracing();

        assert!(tracing::dispatcher::has_been_set());
    }
}
