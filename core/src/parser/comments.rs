//! # Comment Groups
//!
//! Converts a group of Go comments into documentation text.

use regex::Regex;
use std::sync::OnceLock;

/// Returns the text of a comment group.
///
/// Comment markers are removed, along with one space after `//`. Compiler
/// directives such as `//go:generate` are dropped. Lines lose trailing
/// whitespace, leading blank lines are removed and runs of blank lines
/// collapse into one. Non-empty text ends with a single newline.
pub fn comment_group_text<S: AsRef<str>>(comments: &[S]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for comment in comments {
        let comment = comment.as_ref();
        let body = if let Some(line) = comment.strip_prefix("//") {
            if let Some(spaced) = line.strip_prefix(' ') {
                spaced
            } else if is_directive(line) {
                continue;
            } else {
                line
            }
        } else if let Some(block) = comment
            .strip_prefix("/*")
            .and_then(|c| c.strip_suffix("*/"))
        {
            block
        } else {
            comment
        };

        lines.extend(body.split('\n').map(|l| l.trim_end().to_string()));
    }

    let mut kept: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let previous_blank = kept.last().is_some_and(|l| l.is_empty());
        if !line.is_empty() || (!kept.is_empty() && !previous_blank) {
            kept.push(line);
        }
    }

    if kept.last().is_some_and(|l| !l.is_empty()) {
        kept.push(String::new());
    }

    kept.join("\n")
}

/// Whether a `//` comment body (marker already stripped) is a tool directive.
fn is_directive(body: &str) -> bool {
    static DIRECTIVE_RE: OnceLock<Regex> = OnceLock::new();
    let directive_re =
        DIRECTIVE_RE.get_or_init(|| Regex::new(r"^[a-z0-9]+:[a-z0-9]").expect("Invalid regex"));

    body.starts_with("line ")
        || body.starts_with("extern ")
        || body.starts_with("export ")
        || directive_re.is_match(body)
}
