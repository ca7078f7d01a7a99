//! CLI module
//!
//! Command-line interface for validating configurations.
//!
//! # Commands
//!
//! - `validate` - Validate a JSON configuration against a schema
//! - `check` - Load and structurally check a schema
//! - `describe` - Show the discriminators a schema enforces
//! - `list` - List built-in schemas
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{serve, ServerConfig};
