//! Assertion helpers for decorator output
//!
//! Text output is checked with predicates; JSON output is parsed and looked
//! up by resource name.

#![allow(dead_code)]

use predicates::prelude::*;
use serde_json::Value;

/// Predicate for the "not in a git repository" error message
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Predicate for a path that resolves outside the repository
pub fn outside_repository() -> impl Predicate<str> {
    predicates::str::contains("Path is outside the repository")
}

/// Predicate for a text line carrying the given overlay and resource kind
pub fn has_overlay(overlay: &str, kind: &str) -> impl Predicate<str> {
    predicates::str::is_match(format!(r"{overlay}\s+{kind}\s")).expect("valid overlay pattern")
}

/// Parse `--json` stdout into its array of decoration lines
pub fn parse_lines(stdout: &[u8]) -> Vec<Value> {
    let value: Value = serde_json::from_slice(stdout).expect("decorator output is JSON");
    value.as_array().expect("decorator output is a JSON array").clone()
}

/// The decoration line for the resource called `name`
pub fn line_named<'a>(lines: &'a [Value], name: &str) -> &'a Value {
    lines
        .iter()
        .find(|line| line["name"] == name)
        .unwrap_or_else(|| panic!("no decoration line named '{name}' in {lines:?}"))
}

/// Overlay identity of the resource called `name`
pub fn overlay_of(lines: &[Value], name: &str) -> String {
    line_named(lines, name)["overlay"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}
