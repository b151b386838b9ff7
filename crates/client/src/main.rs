//! slotsync CLI entry point.

use clap::Parser;
use slotsync_client::cli::Cli;
use slotsync_client::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "Running command");

    let output = cli.run(&config)?;
    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
