//! Lander CLI - landing page preview.
//!
//! Provides commands for:
//! - `render`: Compose a page from the CMS and write its HTML
//! - `sections`: Print which sales page sections render

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, SectionsArgs};
use output::Output;

/// Lander - landing page preview.
#[derive(Parser)]
#[command(name = "lander", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a page and write it as HTML.
    Render(RenderArgs),
    /// Print the rendered section kinds of the sales page as JSON.
    Sections(SectionsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Render(args) => args.source.verbose,
        Commands::Sections(args) => args.source.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(),
        Commands::Sections(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
