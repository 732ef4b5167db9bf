//! Data model for the course catalog.
//!
//! - [`course::CourseId`] — validated course identifier.
//! - [`course::CourseRecord`] — collaborator-supplied page attributes.
//! - [`course::Course`] — a catalog node with derived text metrics.

pub mod course;

pub use course::{Course, CourseId, CourseRecord};
