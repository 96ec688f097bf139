//! Text label decoration.
//!
//! Renders a resource label from a format string such as `{dirty:>} {name}`.
//! Rendering is a single pass over the format with a pre-sized buffer.
//!
//! # Placeholders
//! - `{name}`, `{branch}`, `{repository}`: substitute the value (empty when absent)
//! - `{branch:text}`: emit `text` then the value, only when the value is present
//! - `{dirty}`, `{staged}`, `{conflict}`: emit a default marker when the flag holds
//! - `{dirty:text}` etc.: emit `text` when the flag holds
//!
//! Unknown placeholders are kept literally; an unclosed `{` is literal text.
//! Runs of whitespace left behind by empty substitutions are collapsed.

use crate::core::classification::Classification;
use serde::{Deserialize, Serialize};

/// Label formats per resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFormats {
    pub file: String,
    pub folder: String,
    pub project: String,
    pub group: String,
}

impl Default for LabelFormats {
    fn default() -> Self {
        Self {
            file: "{dirty:>} {name}".to_string(),
            folder: "{dirty:>} {name}".to_string(),
            project: "{dirty:>} {name} [{repository}{branch: }]".to_string(),
            group: "{dirty:>} {name}".to_string(),
        }
    }
}

/// Values available to a label format.
#[derive(Debug, Default)]
pub struct LabelContext<'a> {
    pub name: Option<&'a str>,
    pub branch: Option<&'a str>,
    pub repository: Option<&'a str>,
    pub classification: Classification,
}

/// Render `format` with `context`.
pub fn render_label(format: &str, context: &LabelContext) -> String {
    let estimated_capacity = format.len()
        + context.name.map_or(0, str::len)
        + context.branch.map_or(0, str::len)
        + context.repository.map_or(0, str::len)
        + 8;

    let mut rendered = String::with_capacity(estimated_capacity);
    render_single_pass(format, context, &mut rendered);
    collapse_whitespace(&rendered)
}

fn render_single_pass(format: &str, context: &LabelContext, output: &mut String) {
    let mut chars = format.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        if !found_closing {
            output.push(ch);
            output.push_str(&placeholder);
            continue;
        }

        let (variable, text) = match placeholder.split_once(':') {
            Some((variable, text)) => (variable, Some(text)),
            None => (placeholder.as_str(), None),
        };

        match variable {
            "name" => push_value(output, context.name, text),
            "branch" => push_value(output, context.branch, text),
            "repository" => push_value(output, context.repository, text),
            "dirty" => push_flag(output, context.classification.dirty, text, ">"),
            "staged" => push_flag(
                output,
                context.classification.staging.is_staged(),
                text,
                "*",
            ),
            "conflict" => push_flag(output, context.classification.conflicting, text, "!"),
            _ => {
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
        }
    }
}

fn push_value(output: &mut String, value: Option<&str>, prefix: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        if let Some(prefix) = prefix {
            output.push_str(prefix);
        }
        output.push_str(value);
    }
}

fn push_flag(output: &mut String, set: bool, text: Option<&str>, marker: &str) {
    if set {
        output.push_str(text.unwrap_or(marker));
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_space = false;
    for ch in text.trim().chars() {
        if ch == ' ' {
            if !previous_space {
                result.push(ch);
            }
            previous_space = true;
        } else {
            result.push(ch);
            previous_space = false;
        }
    }
    result
}
