//! Command-line argument structures.
//!
//! Isolates clap derivations so lint expectations remain scoped, keeping
//! `main.rs` focused on dispatch.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use log::debug;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::installer::DEFAULT_INSTALLER;

/// Top-level parser for the `match-svg` binary.
#[derive(Parser, Debug)]
#[command(
    name = "match-svg",
    version,
    about = "Set up bun-match-svg snapshot tests in a Bun project"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install bun-match-svg, scaffold an example test and register the preload script
    Init(InitArgs),
    // Anything else prints the usage line instead of a clap error.
    #[command(external_subcommand)]
    Other(Vec<OsString>),
}

/// Parameters accepted by the `init` sub-command.
#[derive(Parser, Deserialize, Serialize, Debug, OrthoConfig, Clone, Default)]
#[command(name = "init")]
#[ortho_config(prefix = "MSVG")]
pub struct InitArgs {
    /// Project root to scaffold (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,
    /// Package manager used to add the dependency (defaults to `bun`)
    #[arg(long, value_name = "PROGRAM")]
    pub installer: Option<String>,
    /// Do not install bun-match-svg
    #[arg(long)]
    // A `false` CLI default must not mask `true` from env or config.
    #[serde(default, skip_serializing_if = "is_false")]
    pub skip_install: bool,
}

impl InitArgs {
    /// Package manager executable, falling back to [`DEFAULT_INSTALLER`].
    #[must_use]
    pub fn installer_program(&self) -> &str {
        self.installer.as_deref().unwrap_or(DEFAULT_INSTALLER)
    }
}

/// Parse `argv` into the requested command.
///
/// Arguments that do not form an `init` invocation parse as `None`, so the
/// caller prints the usage line instead of a clap error. Help, version and
/// malformed `init` options still surface as [`clap::Error`].
///
/// # Errors
///
/// Returns the clap error for `--help`, `--version` and invalid `init`
/// arguments.
pub fn parse_command<I, T>(argv: I) -> Result<Option<Commands>, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    match Cli::try_parse_from(argv.iter().cloned()) {
        Ok(cli) => Ok(cli.command),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Err(e)
        }
        Err(e) if argv.get(1).is_some_and(|arg| arg == "init") => Err(e),
        Err(e) => {
            debug!("arguments do not name a subcommand: {:?}", e.kind());
            Ok(None)
        }
    }
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde passes fields by reference"
)]
fn is_false(value: &bool) -> bool {
    !*value
}
