//! Filesystem helpers that never overwrite existing project files.

use crate::error::InitError;
use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Outcome of [`write_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Created,
    Skipped,
}

/// Create `path` and any missing parents.
///
/// # Errors
///
/// Returns [`InitError::Io`] when a directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<(), InitError> {
    fs::create_dir_all(path).map_err(|e| InitError::io(path, e))
}

/// Write `contents` to `path` unless a file already exists there.
///
/// Creation uses `create_new`, so an existing file is detected atomically and
/// left byte-for-byte intact. A file whose write fails is removed again so a
/// later run does not mistake it for user content.
///
/// # Errors
///
/// Returns [`InitError::Io`] for any failure other than the file already
/// existing.
pub fn write_if_absent(path: &Path, contents: &str) -> Result<FileOutcome, InitError> {
    let file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("{} exists; leaving it untouched", path.display());
            return Ok(FileOutcome::Skipped);
        }
        Err(e) => return Err(InitError::io(path, e)),
    };
    write_or_discard(file, path, contents)?;
    Ok(FileOutcome::Created)
}

/// Write `contents` through `out`, removing the freshly created `path` when
/// the write fails.
fn write_or_discard<W: Write>(mut out: W, path: &Path, contents: &str) -> Result<(), InitError> {
    let result = out.write_all(contents.as_bytes()).and_then(|()| out.flush());
    drop(out);
    result.map_err(|e| {
        if let Err(rm) = fs::remove_file(path) {
            warn!("failed to remove partially written {}: {rm}", path.display());
        }
        InitError::io(path, e)
    })
}

/// Read `path` as UTF-8, returning `None` when it does not exist.
///
/// # Errors
///
/// Returns [`InitError::Io`] when the file exists but cannot be read.
pub fn read_if_present(path: &Path) -> Result<Option<String>, InitError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(InitError::io(path, e)),
    }
}
