//! Graph document accumulation and persistence.
//!
//! # Overview
//!
//! The downstream visualization consumes a single JSON document keyed by
//! course id, one [`LayeredView`] per course. This module owns that
//! document: the parallel all-centers driver that fills it, merge/overwrite
//! semantics against a previously persisted file, and the (pretty,
//! deterministic) JSON on disk.
//!
//! Every run recomputes every entry from scratch — there is no incremental
//! path. [`GraphDocument::merge`] exists only so a fresh run can be overlaid
//! onto an existing file without touching unrelated entries.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CoreError, Result};
use crate::graph::build::CourseGraph;
use crate::graph::layering::{LayeredView, layered_view};

// ---------------------------------------------------------------------------
// GraphDocument
// ---------------------------------------------------------------------------

/// The full output document: course id → layered view.
///
/// Backed by a `BTreeMap` so serialization order is stable and re-runs on
/// identical input produce byte-identical files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphDocument {
    views: BTreeMap<String, LayeredView>,
}

impl GraphDocument {
    /// An empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the layered view of every course in the graph.
    ///
    /// Each center is a pure function of `(graph, center)` — the centers
    /// are fanned out across the rayon thread pool against the read-only
    /// graph, then reduced into one document. Total cost is O(V·(V+E)).
    ///
    /// # Errors
    ///
    /// Propagates [`CoreError::UnknownCourse`] from the layering engine;
    /// unreachable for ids obtained from the graph itself.
    pub fn compute_all(graph: &CourseGraph) -> Result<Self> {
        let ids = graph.course_ids();
        info!(
            courses = ids.len(),
            edges = graph.edge_count(),
            "computing layered views for all centers"
        );

        let views: BTreeMap<String, LayeredView> = ids
            .par_iter()
            .map(|id| layered_view(graph, id).map(|view| ((*id).to_string(), view)))
            .collect::<Result<_>>()?;

        Ok(Self { views })
    }

    /// Insert or replace one course's view.
    pub fn insert(&mut self, course_id: String, view: LayeredView) {
        self.views.insert(course_id, view);
    }

    /// Overlay `newer` onto this document. Entries present in both are
    /// taken from `newer`; entries only present here survive untouched.
    pub fn merge(&mut self, newer: Self) {
        self.views.extend(newer.views);
    }

    /// Look up one course's view.
    #[must_use]
    pub fn get(&self, course_id: &str) -> Option<&LayeredView> {
        self.views.get(course_id)
    }

    /// Number of course entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Return `true` if the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Iterate entries in course-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LayeredView)> {
        self.views.iter().map(|(id, view)| (id.as_str(), view))
    }

    /// Load a document from disk. A missing file is an empty document, so
    /// first runs and merge runs share one code path.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Io`] on read failure other than not-found, and
    /// [`CoreError::Json`] if the file exists but does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(err) => Err(CoreError::Io(err)),
        }
    }

    /// Write the document as pretty JSON, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Json`] or [`CoreError::Io`] on failure.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        info!(path = %path.display(), entries = self.len(), "graph document written");
        Ok(())
    }
}

/// The id → title index emitted alongside the graph document for label
/// lookup in the visualization.
#[must_use]
pub fn title_index(graph: &CourseGraph) -> BTreeMap<String, String> {
    graph
        .course_ids()
        .into_iter()
        .filter_map(|id| {
            graph
                .course(id)
                .map(|course| (id.to_string(), course.title.clone()))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CourseId, CourseRecord};
    use std::collections::{BTreeMap, BTreeSet};

    fn make_graph(nodes: &[&str], edges: &[(&str, &str)]) -> CourseGraph {
        let catalog: BTreeMap<CourseId, CourseRecord> = nodes
            .iter()
            .map(|n| {
                (
                    CourseId::parse(n).expect("test id"),
                    CourseRecord {
                        title: format!("Course {n}"),
                        body: String::new(),
                        department: "01".to_string(),
                    },
                )
            })
            .collect();
        let mut references: BTreeMap<CourseId, BTreeSet<String>> = BTreeMap::new();
        for (prereq, dependent) in edges {
            references
                .entry(CourseId::parse(dependent).expect("test id"))
                .or_default()
                .insert((*prereq).to_string());
        }
        CourseGraph::from_catalog(&catalog, &references)
    }

    #[test]
    fn compute_all_covers_every_course() {
        let graph = make_graph(
            &["01001", "01002", "01003"],
            &[("01001", "01002"), ("01002", "01003")],
        );
        let doc = GraphDocument::compute_all(&graph).expect("compute");

        assert_eq!(doc.len(), 3);
        for id in ["01001", "01002", "01003"] {
            let view = doc.get(id).expect("entry per course");
            assert!(view.nodes.iter().any(|n| n.id == id && n.level == 0));
        }
    }

    #[test]
    fn compute_all_matches_sequential_views() {
        let graph = make_graph(
            &["01001", "01002", "01003", "01004"],
            &[("01001", "01002"), ("01002", "01003"), ("01003", "01001")],
        );
        let doc = GraphDocument::compute_all(&graph).expect("compute");

        for id in graph.course_ids() {
            let sequential = layered_view(&graph, id).expect("view");
            assert_eq!(doc.get(id), Some(&sequential), "center {id}");
        }
    }

    #[test]
    fn merge_overlays_newer_entries() {
        let graph = make_graph(&["01001", "01002"], &[("01001", "01002")]);
        let mut old = GraphDocument::new();
        // A stale entry that the fresh run does not produce.
        old.insert(
            "99999".to_string(),
            layered_view(&graph, "01001").expect("view"),
        );
        let old_01001 = layered_view(&graph, "01002").expect("view");
        old.insert("01001".to_string(), old_01001);

        let fresh = GraphDocument::compute_all(&graph).expect("compute");
        old.merge(fresh.clone());

        // Overlapping keys replaced by the fresh run.
        assert_eq!(old.get("01001"), fresh.get("01001"));
        // Unrelated entries survive.
        assert!(old.get("99999").is_some());
        assert_eq!(old.len(), 3);
    }

    #[test]
    fn json_shape_matches_contract() {
        let graph = make_graph(&["01001", "01002"], &[("01001", "01002")]);
        let doc = GraphDocument::compute_all(&graph).expect("compute");
        let value: serde_json::Value =
            serde_json::to_value(&doc).expect("serialize");

        let entry = &value["01002"];
        assert_eq!(entry["nodes"][0]["id"], "01001");
        assert_eq!(entry["nodes"][0]["level"], -1);
        assert_eq!(entry["edges"][0]["source"], "01001");
        assert_eq!(entry["edges"][0]["target"], "01002");
        assert_eq!(entry["max_subseq"], 0);
        assert_eq!(entry["max_prereq"], 1);
        assert_eq!(entry["subseq_height"], 0);
        assert_eq!(entry["prereq_height"], 1);
    }

    #[test]
    fn save_and_load_round_trip() {
        let graph = make_graph(&["01001", "01002"], &[("01001", "01002")]);
        let doc = GraphDocument::compute_all(&graph).expect("compute");

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("graphs.json");
        doc.save(&path).expect("save");

        let loaded = GraphDocument::load(&path).expect("load");
        assert_eq!(loaded, doc);
    }

    #[test]
    fn load_missing_file_is_empty_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let doc = GraphDocument::load(&dir.path().join("absent.json")).expect("load");
        assert!(doc.is_empty());
    }

    #[test]
    fn load_garbage_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").expect("write");
        assert!(GraphDocument::load(&path).is_err());
    }

    #[test]
    fn save_is_deterministic() {
        let graph = make_graph(
            &["01003", "01001", "01002"],
            &[("01001", "01002"), ("01002", "01003")],
        );
        let a = serde_json::to_string_pretty(&GraphDocument::compute_all(&graph).expect("compute"))
            .expect("serialize");
        let b = serde_json::to_string_pretty(&GraphDocument::compute_all(&graph).expect("compute"))
            .expect("serialize");
        assert_eq!(a, b);
    }

    #[test]
    fn title_index_maps_every_course() {
        let graph = make_graph(&["01001", "01002"], &[]);
        let titles = title_index(&graph);
        assert_eq!(titles.len(), 2);
        assert_eq!(titles["01001"], "Course 01001");
    }
}
