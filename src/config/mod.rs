//! Configuration module for the DentalFlow data layer.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the JSON store file
    pub store_path: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let store_path = env::var("DENTALFLOW_STORE_PATH")
            .unwrap_or_else(|_| "./data/dentalflow.json".to_string())
            .into();

        let log_level = env::var("DENTALFLOW_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            store_path,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("DENTALFLOW_STORE_PATH");
        env::remove_var("DENTALFLOW_LOG_LEVEL");

        let config = Config::from_env();

        assert_eq!(config.store_path, PathBuf::from("./data/dentalflow.json"));
        assert_eq!(config.log_level, "info");
    }
}
