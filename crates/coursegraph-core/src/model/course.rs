//! Course identifiers and catalog node attributes.
//!
//! # Identifier Shape
//!
//! A course identifier is exactly 5 characters: a 2-character alphanumeric
//! department prefix followed by a zero-padded 3-digit suffix, e.g. `01017`
//! or `KU101`. Prerequisite references extracted from free text are 5-digit
//! numeric strings and use the same type.
//!
//! # Attribute Lifecycle
//!
//! A [`Course`] is created once, when a catalog record passes the validity
//! filter (non-empty title), and is never mutated afterward. The derived
//! text metrics (`text_size`, `word_count`) are computed at construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// CourseId
// ---------------------------------------------------------------------------

/// A validated course identifier.
///
/// Use [`CourseId::parse`] at trust boundaries (CLI input files, extracted
/// references) and [`CourseId::new_unchecked`] only where the identifier is
/// already known to be well-formed (e.g. keys coming back out of a graph
/// the builder produced).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Parse and validate a course identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCourseId`] if the input is not exactly
    /// 2 ASCII alphanumeric characters followed by 3 ASCII digits.
    pub fn parse(id: &str) -> Result<Self, CoreError> {
        if is_well_formed(id) {
            Ok(Self(id.to_string()))
        } else {
            Err(CoreError::InvalidCourseId { id: id.to_string() })
        }
    }

    /// Wrap an identifier without validation.
    ///
    /// Intended for identifiers that already passed through [`CourseId::parse`]
    /// or were produced by the graph builder.
    #[must_use]
    pub fn new_unchecked(id: &str) -> Self {
        Self(id.to_string())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 2-character department prefix.
    #[must_use]
    pub fn department(&self) -> &str {
        &self.0[..2]
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check the fixed-width identifier shape: 2 alphanumeric + 3 digits.
fn is_well_formed(id: &str) -> bool {
    let bytes = id.as_bytes();
    bytes.len() == 5
        && bytes[..2].iter().all(u8::is_ascii_alphanumeric)
        && bytes[2..].iter().all(u8::is_ascii_digit)
}

// ---------------------------------------------------------------------------
// CourseRecord
// ---------------------------------------------------------------------------

/// Collaborator-supplied attributes for one course page.
///
/// This is the input contract of the graph builder: the fetch and
/// text-extraction steps (outside this crate) produce one record per
/// course identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course title. An empty title marks an invalid page — the builder
    /// skips such records entirely.
    pub title: String,
    /// Free-text course description (objectives and content, already
    /// stripped of markup).
    pub body: String,
    /// Department code, normally equal to the first 2 identifier chars.
    pub department: String,
}

// ---------------------------------------------------------------------------
// Course
// ---------------------------------------------------------------------------

/// A node in the prerequisite graph: one valid course with its attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Validated identifier, unique within the catalog.
    pub id: CourseId,
    /// Course title (non-empty by construction).
    pub title: String,
    /// Free-text description.
    pub body: String,
    /// Department code.
    pub department: String,
    /// Byte length of `body`.
    pub text_size: usize,
    /// Whitespace-separated word count of `body`.
    pub word_count: usize,
}

impl Course {
    /// Build a course node from a validated id and its catalog record,
    /// computing the derived text metrics.
    #[must_use]
    pub fn from_record(id: CourseId, record: &CourseRecord) -> Self {
        Self {
            id,
            title: record.title.clone(),
            body: record.body.clone(),
            department: record.department.clone(),
            text_size: record.body.len(),
            word_count: record.body.split_whitespace().count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, body: &str) -> CourseRecord {
        CourseRecord {
            title: title.to_string(),
            body: body.to_string(),
            department: "01".to_string(),
        }
    }

    // -----------------------------------------------------------------------
    // CourseId validation
    // -----------------------------------------------------------------------

    #[test]
    fn numeric_id_parses() {
        let id = CourseId::parse("01017").expect("valid id");
        assert_eq!(id.as_str(), "01017");
        assert_eq!(id.department(), "01");
    }

    #[test]
    fn letter_prefix_parses() {
        let id = CourseId::parse("KU101").expect("valid id");
        assert_eq!(id.department(), "KU");
    }

    #[test]
    fn too_short_rejected() {
        assert!(CourseId::parse("0101").is_err());
    }

    #[test]
    fn too_long_rejected() {
        assert!(CourseId::parse("010175").is_err());
    }

    #[test]
    fn non_digit_suffix_rejected() {
        assert!(CourseId::parse("01a17").is_err());
        assert!(CourseId::parse("0101x").is_err());
    }

    #[test]
    fn non_alphanumeric_prefix_rejected() {
        assert!(CourseId::parse("-1017").is_err());
        assert!(CourseId::parse("0 017").is_err());
    }

    #[test]
    fn empty_rejected() {
        assert!(CourseId::parse("").is_err());
    }

    #[test]
    fn non_ascii_rejected() {
        // Multi-byte chars must not satisfy the fixed-width check.
        assert!(CourseId::parse("Ø1017").is_err());
    }

    #[test]
    fn display_round_trips() {
        let id = CourseId::parse("02450").expect("valid id");
        assert_eq!(id.to_string(), "02450");
    }

    #[test]
    fn serde_is_transparent() {
        let id = CourseId::parse("01017").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"01017\"");
        let back: CourseId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    // -----------------------------------------------------------------------
    // Course derived attributes
    // -----------------------------------------------------------------------

    #[test]
    fn text_metrics_computed_from_body() {
        let id = CourseId::parse("01017").expect("valid id");
        let course = Course::from_record(id, &record("Calculus", "limits and series"));
        assert_eq!(course.text_size, "limits and series".len());
        assert_eq!(course.word_count, 3);
    }

    #[test]
    fn empty_body_yields_zero_metrics() {
        let id = CourseId::parse("01017").expect("valid id");
        let course = Course::from_record(id, &record("Calculus", ""));
        assert_eq!(course.text_size, 0);
        assert_eq!(course.word_count, 0);
    }

    #[test]
    fn repeated_whitespace_not_counted_as_words() {
        let id = CourseId::parse("01017").expect("valid id");
        let course = Course::from_record(id, &record("Calculus", "  a \n b\t\tc  "));
        assert_eq!(course.word_count, 3);
    }
}
