//! Prerequisite reference extraction from free text.
//!
//! Course pages list prerequisites as prose ("01005 or 01015, and 02402").
//! The only machine-usable signal in that text is the set of 5-digit course
//! numbers it mentions. This module pulls those out; whether a mention is a
//! real course is decided later by the graph builder, which silently drops
//! references that are not catalog nodes.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// Matches one 5-digit course number.
///
/// `\d{5}` inside a longer digit run would also match — `\b` anchors keep
/// a 6-digit token (e.g. a year range "201720") from producing bogus ids.
fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\d{5}\b").expect("static pattern compiles"))
}

/// Extract the distinct 5-digit course numbers mentioned in `text`.
///
/// Whitespace and line breaks in the input are irrelevant; duplicates
/// collapse. Returns an ordered set so downstream iteration is
/// deterministic.
#[must_use]
pub fn extract_references(text: &str) -> BTreeSet<String> {
    reference_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
