//! Template files scaffolded into the target project.
//!
//! Paths are relative to the project root and use forward slashes, matching
//! how Bun resolves them from `bunfig.toml`.

/// Directory holding fixtures loaded by the test runner.
pub const FIXTURES_DIR: &str = "tests/fixtures";

/// Example test demonstrating `toMatchSvgSnapshot`.
pub const EXAMPLE_TEST_PATH: &str = "tests/svg.test.ts";

/// Preload script that registers the snapshot matchers.
pub const PRELOAD_FILE_PATH: &str = "tests/fixtures/preload.ts";

pub const EXAMPLE_TEST: &str = include_str!("templates/svg.test.ts");

pub const PRELOAD_FILE: &str = include_str!("templates/preload.ts");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::PRELOAD_PATH;

    #[test]
    fn preload_template_imports_matchers() {
        assert_eq!(PRELOAD_FILE.trim_end(), r#"import "bun-match-svg""#);
    }

    #[test]
    fn example_test_uses_snapshot_matcher() {
        assert!(EXAMPLE_TEST.contains("toMatchSvgSnapshot(import.meta.path)"));
        assert!(EXAMPLE_TEST.starts_with(r#"import { expect, test } from "bun:test""#));
    }

    #[test]
    fn registered_preload_points_at_template() {
        assert_eq!(PRELOAD_PATH, format!("./{PRELOAD_FILE_PATH}"));
        assert!(PRELOAD_FILE_PATH.starts_with(FIXTURES_DIR));
    }
}
