//! Atlas Validators CLI
//!
//! Command-line interface for validating resource configurations

use anyhow::Context;
use atlas_validators::cli::{Cli, Runner};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level: tracing::Level = cli.effective_log_level().into();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let command = cli.command.name();
    Runner::new(cli)
        .run()
        .await
        .with_context(|| format!("{command} failed"))
}
