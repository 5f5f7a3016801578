use clap::Parser;
use eyre::Result;

use carematch_cli::cli::Cli;
use carematch_cli::commands;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::run(Cli::parse())
}
