//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Harbour using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Harbour - export document submission pipeline
#[derive(Parser, Debug)]
#[command(name = "harbour")]
#[command(version, about, long_about = None)]
#[command(author = "Harbour Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "harbour.toml", env = "HARBOUR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HARBOUR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a draft through the full pipeline
    Submit(commands::submit::SubmitArgs),

    /// Run business validation over a draft payload file
    Validate(commands::validate::ValidateArgs),

    /// Print the front-end projection of a draft payload
    Project(commands::project::ProjectArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate_config::ValidateConfigArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
