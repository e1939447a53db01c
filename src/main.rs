//! Flipdeck - flip-card widget markup renderer
//!
//! Command-line front end over the rendering library: renders payload files
//! to markup and generates sample payloads to start from.

use anyhow::Result;
use clap::{Parser, Subcommand};
use flipdeck::cli::{RenderArgs, SampleArgs};
use flipdeck::constants::APP_NAME;

/// Flipdeck - flip-card widget markup renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a payload file to widget markup
    Render(RenderArgs),
    /// Generate a sample payload with control-panel default cards
    Sample(SampleArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Render(args) => args.execute(),
        Command::Sample(args) => args.execute(),
    }
}
