//! Dependency installation through the project's package manager.
//!
//! [`Installer`] is the seam between the init routine and the outside world:
//! the binary uses [`CommandInstaller`] while tests substitute closures.

use crate::error::InitError;
use log::{debug, info};
use std::path::Path;
use std::process::{Command, Stdio};

/// Package added to the project as a development dependency.
pub const PACKAGE: &str = "bun-match-svg";

/// Package manager used when none is configured.
pub const DEFAULT_INSTALLER: &str = "bun";

/// Adds a development dependency to a project.
pub trait Installer {
    /// Install `package` into the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an [`InitError`] when the dependency could not be installed.
    fn install(&self, root: &Path, package: &str) -> Result<(), InitError>;
}

impl<F> Installer for F
where
    F: Fn(&Path, &str) -> Result<(), InitError>,
{
    fn install(&self, root: &Path, package: &str) -> Result<(), InitError> {
        self(root, package)
    }
}

/// Runs `<program> add -d <package>` with inherited standard streams.
#[derive(Debug, Clone)]
pub struct CommandInstaller {
    program: String,
}

impl CommandInstaller {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, root: &Path, package: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["add", "-d", package])
            .current_dir(root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        cmd
    }
}

impl Default for CommandInstaller {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALLER)
    }
}

impl Installer for CommandInstaller {
    fn install(&self, root: &Path, package: &str) -> Result<(), InitError> {
        debug!(
            "running `{} add -d {package}` in {}",
            self.program,
            root.display()
        );
        let status = self
            .command(root, package)
            .status()
            .map_err(|source| InitError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(InitError::InstallFailed {
                program: self.program.clone(),
                status,
            });
        }
        info!("installed {package} with {}", self.program);
        Ok(())
    }
}
