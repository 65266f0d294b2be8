//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "harbour.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Harbour configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your collaborator endpoints", self.output);
                println!("  2. Set HARBOUR_DATAHUB_API_KEY in your environment or .env file");
                println!("  3. Validate configuration: harbour validate-config");
                println!("  4. Submit a draft: harbour submit --draft draft.json ...");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Harbour Configuration File
# Export document submission pipeline

[application]
log_level = "info"

[rendering]
base_url = "https://render.example.com"
container = "export-documents"
timeout_seconds = 30

[datahub]
base_url = "https://hub.example.com"
submit_endpoint = "/v1/export-certificates/submissions"
api_key = "${HARBOUR_DATAHUB_API_KEY}"
timeout_seconds = 30

[eu_catch]
base_url = "https://eucatch.example.com"
timeout_seconds = 30

[monitoring]
base_url = "https://monitoring.example.com"
blocking_flag = "accountBlocked"

[submission]
eu_countries = [
    "SPAIN",
    "FRANCE",
    "IRELAND",
    "NETHERLANDS",
]

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Harbour Configuration File
# Export document submission pipeline
#
# This file contains all configuration options with examples and explanations.
# Use ${VAR_NAME} syntax for environment variable substitution; HARBOUR_*
# variables override individual keys at load time.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Rendering Service
# ============================================================================
[rendering]
# Base URL of the document rendering collaborator
base_url = "https://render.example.com"

# Storage container the rendered artifact is uploaded to
container = "export-documents"

# Request timeout in seconds
timeout_seconds = 30

# ============================================================================
# Data-Submission Hub
# ============================================================================
[datahub]
# Base URL of the hub
base_url = "https://hub.example.com"

# Endpoint path submission records are posted to
submit_endpoint = "/v1/export-certificates/submissions"

# API key presented to the hub (use environment variable)
api_key = "${HARBOUR_DATAHUB_API_KEY}"

# Request timeout in seconds
timeout_seconds = 30

# ============================================================================
# EU Catch-Reporting System
# ============================================================================
[eu_catch]
# Base URL of the EU catch-reporting system; only documents whose
# destination is in submission.eu_countries are sent here
base_url = "https://eucatch.example.com"

# Request timeout in seconds
timeout_seconds = 30

# ============================================================================
# Protective Monitoring
# ============================================================================
[monitoring]
# Base URL of the monitoring collaborator
base_url = "https://monitoring.example.com"

# Blocking-status flag consulted for monitoring-path selection.
# The flag never prevents submission.
blocking_flag = "accountBlocked"

# ============================================================================
# Submission Pipeline
# ============================================================================
[submission]
# Official names of EU member countries, matched exactly against the
# document's destination country
eu_countries = [
    "AUSTRIA", "BELGIUM", "BULGARIA", "CROATIA", "CYPRUS", "CZECHIA",
    "DENMARK", "ESTONIA", "FINLAND", "FRANCE", "GERMANY", "GREECE",
    "HUNGARY", "IRELAND", "ITALY", "LATVIA", "LITHUANIA", "LUXEMBOURG",
    "MALTA", "NETHERLANDS", "POLAND", "PORTUGAL", "ROMANIA", "SLOVAKIA",
    "SLOVENIA", "SPAIN", "SWEDEN",
]

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Enable local file logging
local_enabled = false

# Directory for local log files
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
