//! Command-line entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fedi_notifier::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let (db, config) = fedi_notifier::init_foundation()?;

    cli::run(args, db, config).await
}
