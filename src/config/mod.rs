//! Configuration management for Harbour.
//!
//! This module provides TOML-based configuration loading, parsing and
//! validation. The resulting [`HarbourConfig`] struct is passed by reference
//! into each component at construction; validators and the submission
//! pipeline never read configuration from anywhere else.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use harbour::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("harbour.toml")?;
//!
//! println!("Rendering service: {}", config.rendering.base_url);
//! println!("EU countries: {}", config.submission.eu_countries.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [rendering]
//! base_url = "https://render.example.com"
//! container = "export-documents"
//!
//! [datahub]
//! base_url = "https://hub.example.com"
//! submit_endpoint = "/v1/export-certificates/submissions"
//! api_key = "${HARBOUR_DATAHUB_API_KEY}"
//!
//! [eu_catch]
//! base_url = "https://eucatch.example.com"
//!
//! [monitoring]
//! base_url = "https://monitoring.example.com"
//!
//! [submission]
//! eu_countries = ["SPAIN", "FRANCE", "IRELAND"]
//! ```
//!
//! Use `${VAR_NAME}` syntax for environment variable substitution, and
//! `HARBOUR_*` variables for per-key overrides.

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, DataHubConfig, EuCatchConfig, HarbourConfig, LoggingConfig,
    MonitoringConfig, RenderingConfig, SubmissionConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
