//! Graph construction from catalog records and prerequisite references.
//!
//! # Overview
//!
//! This module turns the collaborator-supplied catalog (course id →
//! [`CourseRecord`]) and the extracted reference sets (course id → set of
//! mentioned 5-digit ids) into a [`petgraph`] directed graph suitable for
//! the layering engine.
//!
//! ## Edge Direction
//!
//! An edge `A → B` means "A is a **prerequisite** of B" — A must be
//! completed before B. References are extracted from B's page, so for
//! each `(course=B, refs={A, …})` pair we insert edge `A → B`.
//!
//! ## Reference Policy
//!
//! - A record with an empty title is an invalid page and contributes no node.
//! - A reference to an id that is not a catalog node is dropped (the page
//!   text mentioned something we do not know about — common for retired
//!   courses). Dropped references are debug-logged, never errors.
//! - A course referencing itself contributes no edge.
//! - Repeated mentions collapse to a single edge; the graph has no
//!   parallel edges.
//!
//! Cycles are *not* prevented. Catalogs contain mutual-prerequisite pairs
//! ("either order works"), and the layering engine is defined in their
//! presence.

#![allow(clippy::module_name_repetitions)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::model::{Course, CourseId, CourseRecord};

// ---------------------------------------------------------------------------
// CourseGraph
// ---------------------------------------------------------------------------

/// The directed prerequisite graph over a course catalog.
///
/// Nodes are course ids (strings). An edge `A → B` means "A is a
/// prerequisite of B". The graph is immutable once built — call
/// [`CourseGraph::from_catalog`] again if the catalog changes; there is no
/// incremental update path.
#[derive(Debug)]
pub struct CourseGraph {
    /// Directed graph: nodes = course ids, edges = prerequisite relations.
    pub graph: DiGraph<String, ()>,
    /// Mapping from course id to petgraph `NodeIndex`.
    pub node_map: HashMap<String, NodeIndex>,
    /// Course attributes, keyed by id. Every node has an entry.
    courses: HashMap<String, Course>,
}

impl CourseGraph {
    /// Build the prerequisite graph.
    ///
    /// `catalog` maps course id → extracted page attributes; `references`
    /// maps course id → the 5-digit ids mentioned in its prerequisite text.
    /// Records with empty titles are skipped. Reference entries for ids that
    /// did not survive the validity filter are ignored wholesale.
    ///
    /// Building twice from the same input yields identical node and edge
    /// sets — input maps are ordered, and duplicates collapse.
    pub fn from_catalog(
        catalog: &BTreeMap<CourseId, CourseRecord>,
        references: &BTreeMap<CourseId, BTreeSet<String>>,
    ) -> Self {
        let mut graph = DiGraph::<String, ()>::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(catalog.len());
        let mut courses: HashMap<String, Course> = HashMap::with_capacity(catalog.len());

        // Step 1: every valid catalog record becomes a node, dependencies
        // or not, so the layering engine sees the full node set.
        for (id, record) in catalog {
            if record.title.is_empty() {
                debug!(course = %id, "skipping invalid page (empty title)");
                continue;
            }
            let idx = graph.add_node(id.as_str().to_string());
            node_map.insert(id.as_str().to_string(), idx);
            courses.insert(id.as_str().to_string(), Course::from_record(id.clone(), record));
        }

        // Step 2: add one edge per validated (prerequisite, dependent) pair.
        for (course_id, refs) in references {
            let Some(&course_idx) = node_map.get(course_id.as_str()) else {
                debug!(course = %course_id, "reference entry for unknown course, ignoring");
                continue;
            };

            for reference in refs {
                if reference == course_id.as_str() {
                    debug!(course = %course_id, "self-reference dropped");
                    continue;
                }
                let Some(&prereq_idx) = node_map.get(reference.as_str()) else {
                    debug!(course = %course_id, reference, "unknown reference dropped");
                    continue;
                };
                // petgraph allows parallel edges; collapse them here.
                if !graph.contains_edge(prereq_idx, course_idx) {
                    graph.add_edge(prereq_idx, course_idx, ());
                }
            }
        }

        Self {
            graph,
            node_map,
            courses,
        }
    }

    /// Number of courses (nodes) in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of prerequisite relations (edges) in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Look up the `NodeIndex` for a course id.
    #[must_use]
    pub fn node_index(&self, course_id: &str) -> Option<NodeIndex> {
        self.node_map.get(course_id).copied()
    }

    /// The course id label of a node.
    #[must_use]
    pub fn course_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Full attributes for a course, if it is a node.
    #[must_use]
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }

    /// All course ids, in ascending order.
    #[must_use]
    pub fn course_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.node_map.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Return `true` if the graph contains the directed edge
    /// `prerequisite → dependent`.
    #[must_use]
    pub fn contains_edge(&self, prerequisite: &str, dependent: &str) -> bool {
        match (self.node_index(prerequisite), self.node_index(dependent)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
