//! Per-course layered neighborhood views.
//!
//! # Overview
//!
//! For a chosen center course, this module computes a signed "level" for
//! every course in its dependency neighborhood: negative levels are
//! prerequisite distance (ancestors), positive levels are subsequent-course
//! distance (descendants), and the center sits at level 0. The result is a
//! [`LayeredView`]: the leveled node list, the subset of edges that render
//! monotonically, and summary statistics for the visualization layout.
//!
//! # Algorithm
//!
//! 1. BFS from the center along edge direction → forward distances.
//! 2. BFS from the center against edge direction → backward distances.
//! 3. Node set = center ∪ forward-reachable ∪ backward-reachable.
//! 4. Level: center → 0; any backward-reachable node → minus its backward
//!    distance; otherwise its forward distance. Ancestor status is checked
//!    *first* — a node on a cycle through the center is both, and the
//!    ancestor side wins. This tie-break is deliberate and load-bearing:
//!    it keeps the level assignment total and deterministic on cyclic
//!    graphs.
//! 5. Keep an original edge `(u, v)` only if both endpoints are in the node
//!    set and `level(u) < level(v)` strictly. Back-edges from cycles and
//!    same-level edges are dropped from the view (not from the graph).
//!
//! Each center costs O(V + E); the adjacency lists make every BFS step
//! O(degree).
//!
//! # Determinism
//!
//! Nodes are sorted by `(level, id)` and edges by `(source, target)`, so a
//! view is byte-stable across runs regardless of hash-map iteration order.

use std::collections::{HashMap, VecDeque};

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::graph::build::CourseGraph;

// ---------------------------------------------------------------------------
// View records
// ---------------------------------------------------------------------------

/// One course in a layered view, with its signed level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewNode {
    /// Course id.
    pub id: String,
    /// Signed distance from the center: negative = prerequisite side,
    /// positive = subsequent side, 0 = the center itself.
    pub level: i64,
}

/// One retained edge in a layered view. Always satisfies
/// `level(source) < level(target)` within the owning view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEdge {
    /// Prerequisite course id.
    pub source: String,
    /// Dependent course id.
    pub target: String,
}

/// The layered neighborhood view of one center course.
///
/// Immutable once computed; views do not reference each other and are
/// recomputed from scratch for every center on every run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayeredView {
    /// All courses in the center's neighborhood, sorted by `(level, id)`.
    pub nodes: Vec<ViewNode>,
    /// Monotonic edge subset, sorted by `(source, target)`.
    pub edges: Vec<ViewEdge>,
    /// Maximum positive level (0 if the center has no descendants).
    pub max_subseq: i64,
    /// Absolute value of the minimum level (0 if no ancestors).
    pub max_prereq: i64,
    /// Largest number of courses sharing one positive level.
    pub subseq_height: usize,
    /// Largest number of courses sharing one negative level.
    pub prereq_height: usize,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Compute the layered view centered at `center`.
///
/// # Errors
///
/// Returns [`CoreError::UnknownCourse`] if `center` is not a node of the
/// graph. Well-formed graphs produce no other failures.
pub fn layered_view(graph: &CourseGraph, center: &str) -> Result<LayeredView, CoreError> {
    let center_idx = graph
        .node_index(center)
        .ok_or_else(|| CoreError::UnknownCourse {
            id: center.to_string(),
        })?;

    let forward = bfs_distances(&graph.graph, center_idx, Direction::Outgoing);
    let backward = bfs_distances(&graph.graph, center_idx, Direction::Incoming);

    // Level assignment with the ancestor-precedence tie-break. Both maps
    // contain the center at distance 0; the explicit center check keeps it
    // at level 0 rather than -0.
    let mut levels: HashMap<NodeIndex, i64> = HashMap::with_capacity(forward.len() + backward.len());
    for idx in forward.keys().chain(backward.keys()) {
        if levels.contains_key(idx) {
            continue;
        }
        let level = if *idx == center_idx {
            0
        } else if let Some(back) = backward.get(idx) {
            -i64::try_from(*back).unwrap_or(i64::MAX)
        } else {
            i64::try_from(forward[idx]).unwrap_or(i64::MAX)
        };
        levels.insert(*idx, level);
    }

    let mut nodes: Vec<ViewNode> = levels
        .iter()
        .filter_map(|(idx, level)| {
            graph.course_id(*idx).map(|id| ViewNode {
                id: id.to_string(),
                level: *level,
            })
        })
        .collect();
    nodes.sort_by(|a, b| (a.level, a.id.as_str()).cmp(&(b.level, b.id.as_str())));

    // Monotonic edge filter over the *original* edge set, restricted to the
    // neighborhood. Strict inequality drops cycle back-edges and
    // same-level edges.
    let mut edges: Vec<ViewEdge> = graph
        .graph
        .edge_references()
        .filter_map(|edge| {
            let src_level = levels.get(&edge.source())?;
            let tgt_level = levels.get(&edge.target())?;
            if src_level < tgt_level {
                Some(ViewEdge {
                    source: graph.course_id(edge.source())?.to_string(),
                    target: graph.course_id(edge.target())?.to_string(),
                })
            } else {
                None
            }
        })
        .collect();
    edges.sort_by(|a, b| (a.source.as_str(), a.target.as_str()).cmp(&(b.source.as_str(), b.target.as_str())));

    let (max_subseq, max_prereq, subseq_height, prereq_height) = summarize(levels.values().copied());

    Ok(LayeredView {
        nodes,
        edges,
        max_subseq,
        max_prereq,
        subseq_height,
        prereq_height,
    })
}

/// Single-source BFS shortest hop counts from `start`, following edges in
/// the given direction. The result includes `start` at distance 0.
fn bfs_distances(
    graph: &DiGraph<String, ()>,
    start: NodeIndex,
    direction: Direction,
) -> HashMap<NodeIndex, usize> {
    let mut distances: HashMap<NodeIndex, usize> = HashMap::new();
    let mut queue: VecDeque<NodeIndex> = VecDeque::new();

    distances.insert(start, 0);
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        let next_distance = distances[&node] + 1;
        for neighbor in graph.neighbors_directed(node, direction) {
            if !distances.contains_key(&neighbor) {
                distances.insert(neighbor, next_distance);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

/// Fold level values into the four summary statistics.
fn summarize(levels: impl Iterator<Item = i64>) -> (i64, i64, usize, usize) {
    let mut max_subseq = 0_i64;
    let mut min_level = 0_i64;
    let mut per_level: HashMap<i64, usize> = HashMap::new();

    for level in levels {
        max_subseq = max_subseq.max(level);
        min_level = min_level.min(level);
        if level != 0 {
            *per_level.entry(level).or_insert(0) += 1;
        }
    }

    let subseq_height = per_level
        .iter()
        .filter(|(level, _)| **level > 0)
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0);
    let prereq_height = per_level
        .iter()
        .filter(|(level, _)| **level < 0)
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(0);

    (max_subseq, min_level.abs(), subseq_height, prereq_height)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
