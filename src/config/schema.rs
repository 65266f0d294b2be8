//! Configuration schema types
//!
//! This module defines the configuration structure for Harbour. Every
//! collaborator endpoint and the EU country set are explicit configuration
//! passed into components at construction; there is no global mutable
//! configuration object.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main Harbour configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarbourConfig {
    /// Application-level settings
    pub application: ApplicationConfig,

    /// Rendering service configuration
    pub rendering: RenderingConfig,

    /// Data-submission-hub configuration
    pub datahub: DataHubConfig,

    /// EU catch-reporting system configuration
    pub eu_catch: EuCatchConfig,

    /// Monitoring collaborator configuration
    pub monitoring: MonitoringConfig,

    /// Submission pipeline settings
    pub submission: SubmissionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HarbourConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.rendering.validate()?;
        self.datahub.validate()?;
        self.eu_catch.validate()?;
        self.monitoring.validate()?;
        self.submission.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Rendering service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Base URL of the rendering service
    pub base_url: String,

    /// Storage container the rendered artifact is uploaded to
    #[serde(default = "default_render_container")]
    pub container: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,
}

impl RenderingConfig {
    fn validate(&self) -> Result<(), String> {
        validate_base_url("rendering.base_url", &self.base_url)?;
        if self.container.trim().is_empty() {
            return Err("rendering.container must not be empty".to_string());
        }
        if self.timeout_seconds == 0 {
            return Err("rendering.timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

fn default_render_container() -> String {
    "export-documents".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Data-submission-hub configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataHubConfig {
    /// Base URL of the data-submission hub
    pub base_url: String,

    /// Endpoint path submission records are posted to
    #[serde(default = "default_datahub_endpoint")]
    pub submit_endpoint: String,

    /// API key presented to the hub
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,
}

impl DataHubConfig {
    fn validate(&self) -> Result<(), String> {
        validate_base_url("datahub.base_url", &self.base_url)?;
        if !self.submit_endpoint.starts_with('/') {
            return Err(format!(
                "datahub.submit_endpoint must start with '/', got '{}'",
                self.submit_endpoint
            ));
        }
        Ok(())
    }
}

fn default_datahub_endpoint() -> String {
    "/v1/export-certificates/submissions".to_string()
}

/// EU catch-reporting system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EuCatchConfig {
    /// Base URL of the EU catch-reporting system
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,
}

impl EuCatchConfig {
    fn validate(&self) -> Result<(), String> {
        validate_base_url("eu_catch.base_url", &self.base_url)
    }
}

/// Monitoring collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    /// Base URL of the monitoring collaborator
    pub base_url: String,

    /// Blocking-status flag consulted for monitoring-path selection.
    /// The flag never prevents submission.
    #[serde(default = "default_blocking_flag")]
    pub blocking_flag: String,
}

impl MonitoringConfig {
    fn validate(&self) -> Result<(), String> {
        validate_base_url("monitoring.base_url", &self.base_url)?;
        if self.blocking_flag.trim().is_empty() {
            return Err("monitoring.blocking_flag must not be empty".to_string());
        }
        Ok(())
    }
}

fn default_blocking_flag() -> String {
    "accountBlocked".to_string()
}

/// Submission pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Official names of EU member countries; a document destined for one of
    /// these is additionally submitted to the EU catch-reporting system
    pub eu_countries: Vec<String>,
}

impl SubmissionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.eu_countries.is_empty() {
            return Err("submission.eu_countries must not be empty".to_string());
        }
        for country in &self.eu_countries {
            if country.trim().is_empty() {
                return Err("submission.eu_countries entries must not be empty".to_string());
            }
        }
        Ok(())
    }

    /// True when the destination's official name is in the configured EU set
    pub fn is_eu_destination(&self, official_country_name: &str) -> bool {
        self.eu_countries
            .iter()
            .any(|country| country == official_country_name)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy (daily, hourly)
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must not be empty when local_enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

fn validate_base_url(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    url::Url::parse(value).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
    Ok(())
}
