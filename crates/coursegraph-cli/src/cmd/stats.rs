//! `coursegraph stats` — whole-graph sanity report.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use coursegraph_core::{CatalogStats, CourseGraph};

use crate::input;
use crate::output::{OutputMode, render};

/// Arguments for `coursegraph stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Courses input file (JSON: id → {title, body, department?}).
    #[arg(long, value_name = "FILE")]
    pub courses: PathBuf,

    /// Prerequisite texts input file (JSON: id → raw text).
    #[arg(long, value_name = "FILE")]
    pub prereqs: PathBuf,
}

/// Execute `coursegraph stats`.
pub fn run_stats(args: &StatsArgs, output: OutputMode) -> anyhow::Result<()> {
    let catalog = input::load_catalog(&args.courses)?;
    let references = input::load_references(&args.prereqs)?;
    let graph = CourseGraph::from_catalog(&catalog, &references);
    let stats = CatalogStats::from_graph(&graph);

    render(output, &stats, |stats, w| render_stats_human(stats, w))
}

fn render_stats_human(stats: &CatalogStats, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "Catalog graph")?;
    writeln!(w, "  courses:        {}", stats.node_count)?;
    writeln!(w, "  edges:          {}", stats.edge_count)?;
    writeln!(w, "  density:        {:.4}", stats.density)?;
    writeln!(w, "  cycles:         {}", stats.cycle_count)?;
    writeln!(w, "  isolated:       {}", stats.isolated_node_count)?;
    writeln!(w, "  max in-degree:  {}", stats.max_in_degree)?;
    writeln!(w, "  max out-degree: {}", stats.max_out_degree)?;
    Ok(())
}
