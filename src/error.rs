//! Error type shared by every step of `match-svg init`.

use ortho_config::OrthoError;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InitError {
    #[error("installation via `{program}` failed with {status}")]
    InstallFailed { program: String, status: ExitStatus },
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[source] Box<OrthoError>),
}

impl InitError {
    /// Attach the offending path to a filesystem error.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<OrthoError> for InitError {
    fn from(err: OrthoError) -> Self {
        Self::Config(Box::new(err))
    }
}
