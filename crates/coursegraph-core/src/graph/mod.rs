//! Prerequisite graph construction and per-course analysis.
//!
//! ## Submodules
//!
//! - [`build`] — directed graph construction from catalog records and
//!   extracted prerequisite references.
//! - [`layering`] — per-center bidirectional BFS, signed levels, and the
//!   monotonic layered view.
//! - [`stats`] — whole-graph summary statistics.

pub mod build;
pub mod layering;
pub mod stats;

pub use build::CourseGraph;
pub use layering::{LayeredView, ViewEdge, ViewNode, layered_view};
pub use stats::CatalogStats;
