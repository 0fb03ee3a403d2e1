//! Scribe CLI - minimal markdown content engine.
//!
//! Provides commands for:
//! - `list`: Print every document slug under the content root
//! - `render`: Print the rendered markup of one document

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ListArgs, RenderArgs};
use output::Output;

/// Scribe - minimal markdown content engine.
#[derive(Parser)]
#[command(name = "scribe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every document slug.
    List(ListArgs),
    /// Render one document to HTML.
    Render(RenderArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::List(args) => args.source.verbose,
            Self::Render(args) => args.source.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::List(args) => args.execute(),
        Commands::Render(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
