//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. All configuration is loaded at startup and validated before the
//! engine runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_ACTIVITY_WINDOW_DAYS, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_STREAK_WRITEBACK,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub analytics: AnalyticsConfig,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Analytics engine configuration
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Trailing window of the activity graph, in days
    pub activity_window_days: u32,
    /// Whether computed streaks are written back onto the user record
    pub streak_writeback: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database: DatabaseConfig::from_env()?,
            analytics: AnalyticsConfig::from_env()?,
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))?,
        })
    }
}

impl AnalyticsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            activity_window_days: env::var("ACTIVITY_WINDOW_DAYS")
                .unwrap_or_else(|_| DEFAULT_ACTIVITY_WINDOW_DAYS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ACTIVITY_WINDOW_DAYS".to_string()))?,
            streak_writeback: env::var("STREAK_WRITEBACK")
                .unwrap_or_else(|_| DEFAULT_STREAK_WRITEBACK.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STREAK_WRITEBACK".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
