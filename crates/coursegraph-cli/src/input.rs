//! Loading of the collaborator-produced JSON input files.
//!
//! Two files feed the pipeline:
//!
//! - the courses file: `{ "<id>": {"title": ..., "body": ...} }`, one entry
//!   per scraped catalog page (`department` may be supplied explicitly;
//!   otherwise it is derived from the id prefix);
//! - the prereqs file: `{ "<id>": "<raw prerequisite text>" }`, the
//!   free-text prerequisite field as scraped. Course ids are extracted
//!   from the text here, not upstream.
//!
//! A malformed id in a key position is a collaborator bug and aborts the
//! run with context naming the offending key.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::info;

use coursegraph_core::{CourseId, CourseRecord, extract_references};

#[derive(Debug, Deserialize)]
struct RawCourse {
    title: String,
    #[serde(default)]
    body: String,
    #[serde(default)]
    department: String,
}

/// Load the courses file into the catalog map the graph builder consumes.
pub fn load_catalog(path: &Path) -> anyhow::Result<BTreeMap<CourseId, CourseRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading courses file {}", path.display()))?;
    let raw: BTreeMap<String, RawCourse> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing courses file {}", path.display()))?;

    let mut catalog = BTreeMap::new();
    for (key, course) in raw {
        let id = CourseId::parse(&key)
            .with_context(|| format!("courses file {}: bad key", path.display()))?;
        let department = if course.department.is_empty() {
            id.department().to_string()
        } else {
            course.department
        };
        catalog.insert(
            id,
            CourseRecord {
                title: course.title,
                body: course.body,
                department,
            },
        );
    }
    info!(path = %path.display(), courses = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Load the prereqs file and extract the referenced course ids from each
/// entry's free text.
pub fn load_references(path: &Path) -> anyhow::Result<BTreeMap<CourseId, BTreeSet<String>>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading prereqs file {}", path.display()))?;
    let raw: BTreeMap<String, String> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing prereqs file {}", path.display()))?;

    let mut references = BTreeMap::new();
    for (key, text) in raw {
        let id = CourseId::parse(&key)
            .with_context(|| format!("prereqs file {}: bad key", path.display()))?;
        references.insert(id, extract_references(&text));
    }
    info!(path = %path.display(), entries = references.len(), "prerequisite texts loaded");
    Ok(references)
}
