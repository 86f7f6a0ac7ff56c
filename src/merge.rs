//! Idempotent registration of the preload script in `bunfig.toml`.
//!
//! The document is handled as plain text. The only structure recognised is a
//! `[test]` header standing alone on a line, so unrelated sections, comments
//! and formatting pass through untouched.

use regex::Regex;
use std::sync::LazyLock;

/// Configuration file patched at the project root.
pub const CONFIG_FILE: &str = "bunfig.toml";

/// Section header that owns the preload list.
pub const TEST_HEADER: &str = "[test]";

/// Fixture registered for loading before every test run.
pub const PRELOAD_PATH: &str = "./tests/fixtures/preload.ts";

/// The exact line whose presence marks the project as configured.
pub const PRELOAD_LINE: &str = r#"preload = ["./tests/fixtures/preload.ts"]"#;

// Matches a single line with any line terminator already removed. A leading
// byte order mark counts as whitespace.
static TEST_HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\x{FEFF}]*\[test\]\s*$").expect("valid regex"));

/// What [`merge`] did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAction {
    /// No document existed; a fresh one was produced.
    Created,
    /// The preload line was already present.
    AlreadyPresent,
    /// The preload line was inserted under an existing `[test]` header.
    Updated,
    /// A new `[test]` block was appended.
    Appended,
}

impl MergeAction {
    /// Whether the merged content differs from what is on disk.
    #[must_use]
    pub const fn modifies_file(self) -> bool {
        !matches!(self, Self::AlreadyPresent)
    }
}

/// Result of merging the preload registration into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merge {
    pub content: String,
    pub action: MergeAction,
}

/// The two-line `[test]` block joined with `eol`.
#[must_use]
pub fn preload_block(eol: &str) -> String {
    format!("{TEST_HEADER}{eol}{PRELOAD_LINE}")
}

/// Ensure `existing` registers the preload fixture exactly once.
///
/// Rules are tried in order and the first match wins:
///
/// 1. `None` yields the bare two-line block.
/// 2. Text already containing [`PRELOAD_LINE`] is returned unchanged.
/// 3. The preload line is inserted directly after the first line that is
///    `[test]` once surrounding whitespace is ignored.
/// 4. Otherwise the block is appended after one blank line.
///
/// A header carrying trailing content, such as `[test] # comment`, does not
/// satisfy rule 3 and receives a second block from rule 4.
///
/// # Examples
///
/// ```
/// use match_svg::merge::{MergeAction, merge};
///
/// let merged = merge(Some("[test]"));
/// assert_eq!(merged.action, MergeAction::Updated);
/// assert_eq!(merged.content, "[test]\npreload = [\"./tests/fixtures/preload.ts\"]");
/// ```
#[must_use]
pub fn merge(existing: Option<&str>) -> Merge {
    let Some(text) = existing else {
        return Merge {
            content: preload_block("\n"),
            action: MergeAction::Created,
        };
    };
    if text.contains(PRELOAD_LINE) {
        return Merge {
            content: text.to_owned(),
            action: MergeAction::AlreadyPresent,
        };
    }
    if let Some(content) = insert_after_header(text) {
        return Merge {
            content,
            action: MergeAction::Updated,
        };
    }
    Merge {
        content: append_block(text),
        action: MergeAction::Appended,
    }
}

/// Dominant line terminator of `text`.
fn line_ending(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Split a line from `split_inclusive` into its body and terminator.
fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

fn insert_after_header(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len() + PRELOAD_LINE.len() + 2);
    let mut inserted = false;
    for line in text.split_inclusive('\n') {
        if inserted {
            out.push_str(line);
            continue;
        }
        let (body, terminator) = split_terminator(line);
        if !TEST_HEADER_RE.is_match(body) {
            out.push_str(line);
            continue;
        }
        let eol = if terminator.is_empty() {
            line_ending(text)
        } else {
            terminator
        };
        out.push_str(body);
        out.push_str(eol);
        out.push_str(PRELOAD_LINE);
        out.push_str(terminator);
        inserted = true;
    }
    inserted.then_some(out)
}

fn append_block(text: &str) -> String {
    let eol = line_ending(text);
    let separator = if text.ends_with('\n') {
        eol.to_owned()
    } else {
        eol.repeat(2)
    };
    format!("{text}{separator}{}", preload_block(eol))
}
