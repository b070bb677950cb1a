#![forbid(unsafe_code)]

mod cmd;
mod output;

use std::env;

use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "trellis: weighted-DAG engine demos",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for --format json).
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Minimal integer-weight example",
        long_about = "Build a three-vertex graph and report its longest path weight.",
        after_help = "EXAMPLES:\n    # Run the minimal example\n    trl mwe\n\n    # Emit machine-readable output\n    trl mwe --json"
    )]
    Mwe(cmd::mwe::MweArgs),

    #[command(
        about = "Integer-weight demo over a branching graph",
        long_about = "Build an eight-vertex graph with ten edges, then report its topological order and the extremal path weights between two vertices.",
        after_help = "EXAMPLES:\n    # Run the integer demo\n    trl ints\n\n    # Emit machine-readable output\n    trl ints --json"
    )]
    Ints(cmd::ints::IntsArgs),

    #[command(
        about = "String-weight demo (concatenation algebra)",
        long_about = "Drive the engine with string weights: add is concatenation, compare is length-then-lexicographic.",
        after_help = "EXAMPLES:\n    # Run the string demo\n    trl strings\n\n    # Emit machine-readable output\n    trl strings --json"
    )]
    Strings(cmd::strings::StringsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TRELLIS_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "trellis=debug,info"
        } else {
            "trellis=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let mode = output::resolve_output_mode(cli.format, cli.json);

    match cli.command {
        Commands::Mwe(args) => cmd::mwe::run(&args, mode),
        Commands::Ints(args) => cmd::ints::run(&args, mode),
        Commands::Strings(args) => cmd::strings::run(&args, mode),
    }
}
