#![forbid(unsafe_code)]
//! coursegraph-core library.
//!
//! # Overview
//!
//! Builds a directed prerequisite graph from a scraped course catalog and
//! derives, for each course, a layered neighborhood view suitable for
//! left-to-right visualization:
//!
//! 1. [`extract`] pulls 5-digit course ids out of free-form prerequisite
//!    text.
//! 2. [`graph::build`] turns the catalog plus references into a
//!    [`petgraph`] directed graph (edges point prerequisite → dependent).
//! 3. [`graph::layering`] runs a bidirectional BFS per center course and
//!    assigns signed levels (prerequisites negative, dependents positive).
//! 4. [`export`] fans the per-center computation across a rayon thread
//!    pool and persists the combined JSON document.
//!
//! # Conventions
//!
//! - **Errors**: [`error::CoreError`] via `thiserror`; fallible functions
//!   return [`error::Result`].
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod error;
pub mod export;
pub mod extract;
pub mod graph;
pub mod model;

pub use error::{CoreError, Result};
pub use export::{GraphDocument, title_index};
pub use extract::extract_references;
pub use graph::{CatalogStats, CourseGraph, LayeredView, ViewEdge, ViewNode, layered_view};
pub use model::{Course, CourseId, CourseRecord};
