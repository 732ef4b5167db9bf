//! `coursegraph show` — print one course's layered view from a document.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use coursegraph_core::{GraphDocument, LayeredView};

use crate::output::{CliError, OutputMode, render, render_error};

/// Arguments for `coursegraph show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Course id to show.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Graph document to read from.
    #[arg(long, value_name = "FILE", default_value = "graphs.json")]
    pub document: PathBuf,
}

/// Execute `coursegraph show`.
pub fn run_show(args: &ShowArgs, output: OutputMode) -> anyhow::Result<()> {
    let document = GraphDocument::load(&args.document)
        .with_context(|| format!("loading document {}", args.document.display()))?;

    let Some(view) = document.get(&args.id) else {
        render_error(
            output,
            &CliError::with_details(
                format!("course {} not found in {}", args.id, args.document.display()),
                "run `coursegraph build` first, or check the id",
                "unknown_course",
            ),
        )?;
        anyhow::bail!("course not found");
    };

    render(output, view, |view, w| render_view_human(&args.id, view, w))
}

fn render_view_human(center: &str, view: &LayeredView, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{center}: {} courses, {} edges", view.nodes.len(), view.edges.len())?;
    writeln!(
        w,
        "levels: -{} .. +{}  (widest row: {} prereq / {} subseq)",
        view.max_prereq, view.max_subseq, view.prereq_height, view.subseq_height
    )?;

    let mut current_level: Option<i64> = None;
    for node in &view.nodes {
        if current_level != Some(node.level) {
            writeln!(w, "level {:+}:", node.level)?;
            current_level = Some(node.level);
        }
        writeln!(w, "  {}", node.id)?;
    }

    if !view.edges.is_empty() {
        writeln!(w, "edges:")?;
        for edge in &view.edges {
            writeln!(w, "  {} -> {}", edge.source, edge.target)?;
        }
    }
    Ok(())
}
