//! Configuration management for the GMAO core

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Simulated latency applied to every store operation, in milliseconds
    pub latency_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Shared secret opening the session gate
    pub shared_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NumberingConfig {
    /// Year printed in `DI-YYYY-NNN` / `OT-YYYY-NNN` numbers.
    /// `None` means the current year of the clock.
    pub fixed_year: Option<i32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub numbering: NumberingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // GMAO_STORE__LATENCY_MS, GMAO_NUMBERING__FIXED_YEAR, ...
            .add_source(
                Environment::with_prefix("GMAO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("auth.shared_secret", env::var("GMAO_SECRET").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl StoreConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { latency_ms: 0 }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            shared_secret: "admin123".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            fixed_year: Some(2024),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_the_literal_numbering_year() {
        let config = AppConfig::default();
        assert_eq!(config.numbering.fixed_year, Some(2024));
        assert_eq!(config.store.latency(), Duration::ZERO);
        assert_eq!(config.auth.shared_secret, "admin123");
    }

    #[test]
    fn environment_overrides_nested_keys() {
        env::set_var("GMAO_STORE__LATENCY_MS", "7");
        env::set_var("GMAO_NUMBERING__FIXED_YEAR", "2030");
        env::set_var("GMAO_SECRET", "s3cret");
        let loaded = AppConfig::load();
        env::remove_var("GMAO_STORE__LATENCY_MS");
        env::remove_var("GMAO_NUMBERING__FIXED_YEAR");
        env::remove_var("GMAO_SECRET");

        let config = loaded.unwrap();
        assert_eq!(config.store.latency(), Duration::from_millis(7));
        assert_eq!(config.numbering.fixed_year, Some(2030));
        assert_eq!(config.auth.shared_secret, "s3cret");
    }
}
