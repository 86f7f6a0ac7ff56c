//! The `init` routine: install the dependency, scaffold fixtures and register
//! the preload script.
//!
//! Steps run strictly in order against an explicit project root. A failing
//! step aborts the run; earlier steps stay on disk, which is safe because each
//! one is idempotent.

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::error::InitError;
use crate::installer::{Installer, PACKAGE};
use crate::merge::{CONFIG_FILE, Merge, MergeAction, merge};
use crate::report::{Marker, Reporter};
use crate::scaffold::{FileOutcome, ensure_dir, read_if_present, write_if_absent};
use crate::templates::{
    EXAMPLE_TEST, EXAMPLE_TEST_PATH, FIXTURES_DIR, PRELOAD_FILE, PRELOAD_FILE_PATH,
};

/// Hint printed once the project is ready.
pub const NEXT_STEP: &str = "You can now run: bun test";

/// What each step of [`run_init`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub installed: bool,
    pub example_test: FileOutcome,
    pub preload_file: FileOutcome,
    pub config: MergeAction,
}

impl InitReport {
    /// Whether the run left every file as it found it.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.example_test == FileOutcome::Skipped
            && self.preload_file == FileOutcome::Skipped
            && self.config == MergeAction::AlreadyPresent
    }
}

/// Set up `root` for SVG snapshot testing.
///
/// Passing `None` for `installer` skips dependency installation.
///
/// # Errors
///
/// Propagates installer failures and any filesystem error other than a file
/// already existing.
pub fn run_init<W: Write>(
    root: &Path,
    installer: Option<&dyn Installer>,
    reporter: &mut Reporter<W>,
) -> Result<InitReport, InitError> {
    let installed = install(root, installer, reporter)?;

    ensure_dir(&root.join(FIXTURES_DIR))?;
    let example_test = scaffold_file(
        root,
        EXAMPLE_TEST_PATH,
        EXAMPLE_TEST,
        "example test",
        reporter,
    )?;
    let preload_file = scaffold_file(
        root,
        PRELOAD_FILE_PATH,
        PRELOAD_FILE,
        "preload file",
        reporter,
    )?;
    let config = register_preload(root, reporter)?;

    reporter.blank();
    reporter.line(Marker::NextStep, NEXT_STEP);
    Ok(InitReport {
        installed,
        example_test,
        preload_file,
        config,
    })
}

fn install<W: Write>(
    root: &Path,
    installer: Option<&dyn Installer>,
    reporter: &mut Reporter<W>,
) -> Result<bool, InitError> {
    let Some(installer) = installer else {
        reporter.line(
            Marker::Skip,
            &format!("Skipping installation of {PACKAGE}."),
        );
        return Ok(false);
    };
    reporter.line(Marker::Install, &format!("Installing {PACKAGE}..."));
    // The installer inherits the terminal.
    reporter.flush();
    installer.install(root, PACKAGE)?;
    Ok(true)
}

fn scaffold_file<W: Write>(
    root: &Path,
    relative: &str,
    contents: &str,
    label: &str,
    reporter: &mut Reporter<W>,
) -> Result<FileOutcome, InitError> {
    let outcome = write_if_absent(&root.join(relative), contents)?;
    match outcome {
        FileOutcome::Created => {
            reporter.line(Marker::Done, &format!("Created {label} in {relative}"));
        }
        FileOutcome::Skipped => {
            reporter.line(
                Marker::Skip,
                &format!("{relative} already exists, skipping."),
            );
        }
    }
    Ok(outcome)
}

fn register_preload<W: Write>(
    root: &Path,
    reporter: &mut Reporter<W>,
) -> Result<MergeAction, InitError> {
    let path = root.join(CONFIG_FILE);
    let existing = read_if_present(&path)?;
    let Merge { content, action } = merge(existing.as_deref());
    debug!("{CONFIG_FILE} merge decided {action:?}");
    if action.modifies_file() {
        fs::write(&path, content).map_err(|e| InitError::io(&path, e))?;
        info!("wrote {}", path.display());
    }
    let (marker, text) = match action {
        MergeAction::Created => (Marker::Done, format!("Created {CONFIG_FILE}")),
        MergeAction::AlreadyPresent => (
            Marker::Skip,
            format!("{CONFIG_FILE} already has preload configuration, skipping."),
        ),
        MergeAction::Updated => (
            Marker::Done,
            format!("Updated {CONFIG_FILE} with preload configuration."),
        ),
        MergeAction::Appended => (
            Marker::Done,
            format!("Added preload configuration to {CONFIG_FILE}."),
        ),
    };
    reporter.line(marker, &text);
    Ok(action)
}
