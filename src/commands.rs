//! Command execution helpers for `match-svg`.
//!
//! Owns the runtime flow of each subcommand: configuration layering, project
//! root resolution, installer selection and terminal output.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::banners::{ERROR_PREFIX, USAGE};
use crate::cli_args::InitArgs;
use crate::config::load_init_args;
use crate::environment;
use crate::error::InitError;
use crate::init::{InitReport, run_init};
use crate::installer::{CommandInstaller, Installer};
use crate::report::{Marker, Reporter};

/// Run `init` with configuration merged beneath the CLI arguments.
///
/// # Errors
///
/// Returns the first [`InitError`] raised by configuration loading or by any
/// init step.
pub fn run_init_command(args: &InitArgs) -> Result<InitReport, InitError> {
    let args = load_init_args(args)?;
    let root = project_root(&args)?;
    debug!("initialising {}", root.display());

    let glyphs = environment::locale_is_utf8();
    if !glyphs {
        warn!("terminal locale is not UTF-8; printing status lines without emoji");
    }

    let installer = CommandInstaller::new(args.installer_program());
    let installer: Option<&dyn Installer> = if args.skip_install {
        None
    } else {
        Some(&installer)
    };

    let mut reporter = Reporter::new(std::io::stdout().lock(), glyphs);
    run_init(&root, installer, &mut reporter)
}

fn project_root(args: &InitArgs) -> Result<PathBuf, InitError> {
    let Some(dir) = &args.dir else {
        return std::env::current_dir().map_err(|e| InitError::io(Path::new("."), e));
    };
    if !dir.is_dir() {
        return Err(InitError::io(
            dir,
            io::Error::new(io::ErrorKind::NotFound, "project directory does not exist"),
        ));
    }
    Ok(dir.clone())
}

/// Print the one-line usage message.
pub fn print_usage() {
    if let Err(e) = writeln!(std::io::stdout().lock(), "{USAGE}") {
        debug!("failed to print usage: {e}");
    }
}

/// Report a fatal init error on stderr.
pub fn report_failure(err: &InitError) {
    let glyphs = environment::locale_is_utf8();
    let line = Marker::Failure.render(glyphs, &format!("{ERROR_PREFIX} {err}"));
    if let Err(e) = writeln!(std::io::stderr().lock(), "{line}") {
        debug!("failed to print error: {e}");
    }
}
