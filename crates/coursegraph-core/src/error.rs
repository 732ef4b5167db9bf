//! Error types for the coursegraph core.
//!
//! The core is deliberately quiet: unknown prerequisite references,
//! self-references, and dependency cycles are policy, not errors, and are
//! absorbed during graph construction and layering. What remains is a small
//! set of hard failures at the crate boundary.

use thiserror::Error;

/// Errors surfaced by the coursegraph core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A course identifier did not match the required shape
    /// (2 alphanumeric department characters followed by 3 digits).
    #[error("invalid course id '{id}': expected 2 alphanumeric characters followed by 3 digits")]
    InvalidCourseId {
        /// The offending identifier as received.
        id: String,
    },

    /// A layered view was requested for a course that is not a node in
    /// the graph.
    #[error("unknown course '{id}': not present in the catalog graph")]
    UnknownCourse {
        /// The requested center identifier.
        id: String,
    },

    /// JSON (de)serialization failure while reading or writing a graph
    /// document.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure while reading or writing a graph document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
