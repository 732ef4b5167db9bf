//! `coursegraph build` — run the full pipeline and write the document.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;
use tracing::info;

use coursegraph_core::{CourseGraph, GraphDocument, title_index};

use crate::input;
use crate::output::{OutputMode, render};

/// Arguments for `coursegraph build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Courses input file (JSON: id → {title, body, department?}).
    #[arg(long, value_name = "FILE")]
    pub courses: PathBuf,

    /// Prerequisite texts input file (JSON: id → raw text).
    #[arg(long, value_name = "FILE")]
    pub prereqs: PathBuf,

    /// Output graph document path.
    #[arg(long, value_name = "FILE", default_value = "graphs.json")]
    pub out: PathBuf,

    /// Merge into an existing output document instead of overwriting it.
    #[arg(long)]
    pub merge: bool,

    /// Also write an id → title index to this path.
    #[arg(long, value_name = "FILE")]
    pub titles: Option<PathBuf>,
}

/// Report payload for `coursegraph build`.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub courses: usize,
    pub edges: usize,
    pub entries_written: usize,
    pub out: PathBuf,
}

/// Execute `coursegraph build`.
pub fn run_build(args: &BuildArgs, output: OutputMode) -> anyhow::Result<()> {
    let catalog = input::load_catalog(&args.courses)?;
    let references = input::load_references(&args.prereqs)?;

    let graph = CourseGraph::from_catalog(&catalog, &references);
    info!(
        courses = graph.node_count(),
        edges = graph.edge_count(),
        "prerequisite graph built"
    );

    let fresh = GraphDocument::compute_all(&graph)?;
    let document = if args.merge {
        let mut existing = GraphDocument::load(&args.out)
            .with_context(|| format!("loading existing document {}", args.out.display()))?;
        existing.merge(fresh);
        existing
    } else {
        fresh
    };
    document
        .save(&args.out)
        .with_context(|| format!("writing document {}", args.out.display()))?;

    if let Some(ref titles_path) = args.titles {
        let titles = title_index(&graph);
        let json = serde_json::to_string_pretty(&titles)?;
        std::fs::write(titles_path, json)
            .with_context(|| format!("writing title index {}", titles_path.display()))?;
        info!(path = %titles_path.display(), entries = titles.len(), "title index written");
    }

    let report = BuildReport {
        courses: graph.node_count(),
        edges: graph.edge_count(),
        entries_written: document.len(),
        out: args.out.clone(),
    };
    render(output, &report, |report, w| {
        writeln!(
            w,
            "built graph: {} courses, {} prerequisite edges",
            report.courses, report.edges
        )?;
        writeln!(
            w,
            "wrote {} layered views to {}",
            report.entries_written,
            report.out.display()
        )
    })
}
