//! Whole-graph summary statistics for the prerequisite graph.
//!
//! # Statistics Provided
//!
//! - **node_count** / **edge_count**: catalog size.
//! - **density**: `edge_count / (node_count * (node_count - 1))` — 0.0 for
//!   graphs with fewer than two nodes.
//! - **cycle_count**: strongly connected components with more than one
//!   member. Mutual-prerequisite pairs show up here; they are legal but
//!   worth surfacing to operators.
//! - **isolated_node_count**: courses with no prerequisites and no
//!   dependents at all.
//! - **max_in_degree** / **max_out_degree**: the most-required and
//!   most-requiring courses.

use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::visit::IntoNodeIdentifiers;
use serde::Serialize;

use crate::graph::build::CourseGraph;

// ---------------------------------------------------------------------------
// CatalogStats
// ---------------------------------------------------------------------------

/// Summary statistics for a built [`CourseGraph`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    /// Number of courses (nodes).
    pub node_count: usize,
    /// Number of prerequisite relations (edges).
    pub edge_count: usize,
    /// Graph density in `[0.0, 1.0]`.
    pub density: f64,
    /// Number of dependency cycles (SCCs with more than one member).
    pub cycle_count: usize,
    /// Courses with no in- or out-edges.
    pub isolated_node_count: usize,
    /// Highest number of prerequisites feeding one course.
    pub max_in_degree: usize,
    /// Highest number of courses depending on one course.
    pub max_out_degree: usize,
}

impl CatalogStats {
    /// Compute statistics from a built graph.
    #[must_use]
    pub fn from_graph(graph: &CourseGraph) -> Self {
        let node_count = graph.node_count();
        let edge_count = graph.edge_count();

        let cycle_count = tarjan_scc(&graph.graph)
            .iter()
            .filter(|scc| scc.len() > 1)
            .count();

        let isolated_node_count = graph
            .graph
            .node_identifiers()
            .filter(|&idx| {
                graph
                    .graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
                    && graph
                        .graph
                        .neighbors_directed(idx, Direction::Outgoing)
                        .next()
                        .is_none()
            })
            .count();

        let max_in_degree = graph
            .graph
            .node_identifiers()
            .map(|idx| {
                graph
                    .graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .count()
            })
            .max()
            .unwrap_or(0);

        let max_out_degree = graph
            .graph
            .node_identifiers()
            .map(|idx| {
                graph
                    .graph
                    .neighbors_directed(idx, Direction::Outgoing)
                    .count()
            })
            .max()
            .unwrap_or(0);

        Self {
            node_count,
            edge_count,
            density: compute_density(node_count, edge_count),
            cycle_count,
            isolated_node_count,
            max_in_degree,
            max_out_degree,
        }
    }

    /// Return `true` if the catalog contains at least one dependency cycle.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        self.cycle_count > 0
    }
}

#[allow(clippy::cast_precision_loss)]
fn compute_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count < 2 {
        return 0.0_f64;
    }
    let max_edges = (node_count * (node_count - 1)) as f64;
    edge_count as f64 / max_edges
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
                        title: "Course".to_string(),
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
    fn empty_graph_stats() {
        let stats = CatalogStats::from_graph(&make_graph(&[], &[]));
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.edge_count, 0);
        assert!((stats.density - 0.0).abs() < f64::EPSILON);
        assert_eq!(stats.cycle_count, 0);
        assert_eq!(stats.isolated_node_count, 0);
        assert_eq!(stats.max_in_degree, 0);
        assert_eq!(stats.max_out_degree, 0);
        assert!(!stats.has_cycles());
    }

    #[test]
    fn linear_chain_stats() {
        let stats = CatalogStats::from_graph(&make_graph(
            &["01001", "01002", "01003"],
            &[("01001", "01002"), ("01002", "01003")],
        ));
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
        assert_eq!(stats.cycle_count, 0);
        assert_eq!(stats.max_in_degree, 1);
        assert_eq!(stats.max_out_degree, 1);
        assert!(!stats.has_cycles());
    }

    #[test]
    fn mutual_prerequisites_counted_as_cycle() {
        let stats = CatalogStats::from_graph(&make_graph(
            &["01001", "01002"],
            &[("01001", "01002"), ("01002", "01001")],
        ));
        assert_eq!(stats.cycle_count, 1);
        assert!(stats.has_cycles());
        assert!((stats.density - 1.0).abs() < 1e-10);
    }

    #[test]
    fn isolated_courses_counted() {
        let stats = CatalogStats::from_graph(&make_graph(
            &["01001", "01002", "01003"],
            &[("01001", "01002")],
        ));
        assert_eq!(stats.isolated_node_count, 1);
    }

    #[test]
    fn hub_degrees() {
        // Three prerequisites into 01004, which feeds 01005.
        let stats = CatalogStats::from_graph(&make_graph(
            &["01001", "01002", "01003", "01004", "01005"],
            &[
                ("01001", "01004"),
                ("01002", "01004"),
                ("01003", "01004"),
                ("01004", "01005"),
            ],
        ));
        assert_eq!(stats.max_in_degree, 3);
        assert_eq!(stats.max_out_degree, 1);
    }

    #[test]
    fn density_two_nodes_one_edge() {
        let stats = CatalogStats::from_graph(&make_graph(
            &["01001", "01002"],
            &[("01001", "01002")],
        ));
        assert!((stats.density - 0.5).abs() < 1e-10);
    }
}
