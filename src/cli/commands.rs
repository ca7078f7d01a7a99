//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Atlas Validators CLI
#[derive(Parser, Debug)]
#[command(name = "atlas-validators")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level, raised to debug by `--verbose`
    pub fn effective_log_level(&self) -> LogLevel {
        match self.log_level {
            LogLevel::Info | LogLevel::Warn | LogLevel::Error if self.verbose => LogLevel::Debug,
            level => level,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a JSON configuration against a schema
    Validate {
        /// Built-in schema name or schema file (YAML)
        #[arg(short, long)]
        schema: String,

        /// Configuration file (JSON)
        #[arg(short = 'C', long)]
        config: Option<PathBuf>,

        /// Inline configuration JSON
        #[arg(long)]
        config_json: Option<String>,
    },

    /// Load and structurally check a schema definition
    Check {
        /// Built-in schema name or schema file (YAML)
        #[arg(short, long)]
        schema: String,
    },

    /// Describe the discriminators a schema enforces
    Describe {
        /// Built-in schema name or schema file (YAML)
        #[arg(short, long)]
        schema: String,
    },

    /// List built-in schemas
    List,

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Directory containing additional schema YAML files
        #[arg(long)]
        schemas_dir: Option<PathBuf>,
    },
}

impl Commands {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Validate { .. } => "validate",
            Commands::Check { .. } => "check",
            Commands::Describe { .. } => "describe",
            Commands::List => "list",
            Commands::Serve { .. } => "serve",
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
