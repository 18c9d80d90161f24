//! Client configuration.
//!
//! The page may embed a JSON object in
//! `<script type="application/json" id="woundscanConfig">` to point the
//! client at another analysis endpoint or change the log verbosity. Every
//! field is optional.

use serde::Deserialize;
use thiserror::Error;

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_FIELD_NAME};

/// Log level setting for the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Disable logging entirely
    Off,
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Errors from reading the embedded configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration field '{field}' must not be empty")]
    EmptyField { field: &'static str },
}

/// Settings for the upload client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// URL the image is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Multipart field name of the image part
    #[serde(default = "default_field_name")]
    pub field_name: String,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_field_name() -> String {
    DEFAULT_FIELD_NAME.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            field_name: default_field_name(),
            log_level: LogLevel::default(),
        }
    }
}

impl ClientConfig {
    /// Parse configuration JSON. Blank input yields the defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ClientConfig = serde_json::from_str(text)?;
        if config.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyField { field: "endpoint" });
        }
        if config.field_name.trim().is_empty() {
            return Err(ConfigError::EmptyField {
                field: "field_name",
            });
        }
        Ok(config)
    }
}
