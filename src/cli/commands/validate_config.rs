//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Harbour configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateConfigArgs {}

impl ValidateConfigArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Rendering Service: {}", config.rendering.base_url);
                println!("  Rendering Container: {}", config.rendering.container);
                println!("  Data Hub: {}", config.datahub.base_url);
                println!("  Data Hub Endpoint: {}", config.datahub.submit_endpoint);
                println!(
                    "  Data Hub API Key: {}",
                    if config.datahub.api_key.is_some() {
                        "set"
                    } else {
                        "not set"
                    }
                );
                println!("  EU Catch System: {}", config.eu_catch.base_url);
                println!("  Monitoring: {}", config.monitoring.base_url);
                println!("  Blocking Flag: {}", config.monitoring.blocking_flag);
                println!(
                    "  EU Countries: {} configured",
                    config.submission.eu_countries.len()
                );
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
