#![forbid(unsafe_code)]

mod cmd;
mod input;
mod output;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "coursegraph: course prerequisite graph builder",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Build the prerequisite graph and write the layered-view document",
        long_about = "Load the courses and prerequisite-text files, build the directed \
                      prerequisite graph, compute a layered view per course, and write \
                      the combined JSON document.",
        after_help = "EXAMPLES:\n    # Build from scraped inputs\n    coursegraph build --courses courses.json --prereqs prereqs.json --out graphs.json\n\n    # Overlay a fresh run onto an existing document\n    coursegraph build --courses courses.json --prereqs prereqs.json --out graphs.json --merge\n\n    # Also emit the id → title index\n    coursegraph build --courses courses.json --prereqs prereqs.json --titles id_to_name.json"
    )]
    Build(cmd::build::BuildArgs),

    #[command(
        about = "Show one course's layered view",
        long_about = "Print the layered neighborhood view of a single course from a \
                      previously written graph document.",
        after_help = "EXAMPLES:\n    # Show a course\n    coursegraph show 01017 --document graphs.json\n\n    # Emit machine-readable output\n    coursegraph show 01017 --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        about = "Print whole-graph statistics",
        long_about = "Build the prerequisite graph and print summary statistics for \
                      operator sanity checks (counts, density, cycles, degrees).",
        after_help = "EXAMPLES:\n    # Catalog sanity report\n    coursegraph stats --courses courses.json --prereqs prereqs.json\n\n    # Emit machine-readable output\n    coursegraph stats --courses courses.json --prereqs prereqs.json --json"
    )]
    Stats(cmd::stats::StatsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("COURSEGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "coursegraph=debug,coursegraph_core=debug,info"
        } else {
            "coursegraph=info,coursegraph_core=info,warn"
        })
    });

    let format = env::var("COURSEGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr; stdout is reserved for command output.
    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = cli.output_mode();
    match &cli.command {
        Commands::Build(args) => cmd::build::run_build(args, output),
        Commands::Show(args) => cmd::show::run_show(args, output),
        Commands::Stats(args) => cmd::stats::run_stats(args, output),
    }
}
