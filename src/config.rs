use anyhow::Result;
use compute::default_views;
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Duration;
use crate::schemas::AppState;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_OPERATOR_NAME: &str = "John Doe";

/// Runtime configuration.
///
/// Layered from defaults, an optional `shrimplab.toml` in the working
/// directory, and `SHRIMPLAB_*` environment variables (highest priority).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Name shown as the logged-in operator on the home page
    pub operator_name: String,
    /// Seconds an uploaded table stays available
    pub upload_ttl_secs: u64,
    /// Maximum number of uploaded tables held at once
    pub upload_capacity: u64,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// Fixes the generated production table when set
    #[serde(default)]
    pub sample_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            operator_name: DEFAULT_OPERATOR_NAME.to_string(),
            upload_ttl_secs: 1800,
            upload_capacity: 100,
            request_timeout_secs: 30,
            sample_seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("bind_address", defaults.bind_address)?
            .set_default("operator_name", defaults.operator_name)?
            .set_default("upload_ttl_secs", defaults.upload_ttl_secs)?
            .set_default("upload_capacity", defaults.upload_capacity)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs)?
            .add_source(config::File::with_name("shrimplab").required(false))
            .add_source(config::Environment::with_prefix("SHRIMPLAB"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

/// Initialize application state from configuration
pub fn initialize_app_state(config: AppConfig) -> AppState {
    tracing::info!(
        "Initializing state for operator '{}' (sample seed: {:?})",
        config.operator_name,
        config.sample_seed
    );
    let views = default_views(&config.operator_name, config.sample_seed);

    // Uploaded tables live only in memory
    let cache = Cache::builder()
        .max_capacity(config.upload_capacity)
        .time_to_live(Duration::from_secs(config.upload_ttl_secs))
        .build();

    AppState {
        config: Arc::new(config),
        views,
        cache,
        upload_sequence: Arc::new(AtomicU64::new(0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address, "0.0.0.0:3000");
        assert_eq!(config.operator_name, "John Doe");
        assert_eq!(config.sample_seed, None);
    }

    #[test]
    fn test_config_layers_deserialize() {
        let settings = config::Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)
            .unwrap()
            .set_default("operator_name", "Ana")
            .unwrap()
            .set_default("upload_ttl_secs", 60)
            .unwrap()
            .set_default("upload_capacity", 5)
            .unwrap()
            .set_default("request_timeout_secs", 10)
            .unwrap()
            .set_override("sample_seed", 42)
            .unwrap()
            .build()
            .unwrap();

        let config: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.operator_name, "Ana");
        assert_eq!(config.upload_ttl_secs, 60);
        assert_eq!(config.sample_seed, Some(42));
    }
}
