//! Configuration loading helpers.
//!
//! Layers `init` options from defaults, `.msvg.toml` (`[cmds.init]`), the
//! `MSVGCMDS_INIT_*` environment and the command line, in increasing
//! precedence.

use ortho_config::load_and_merge_subcommand_for;

use crate::cli_args::InitArgs;
use crate::error::InitError;

/// Merge configuration sources beneath the parsed `init` arguments.
///
/// # Errors
///
/// Returns [`InitError::Config`] when a configuration source cannot be read
/// or parsed.
pub fn load_init_args(cli_args: &InitArgs) -> Result<InitArgs, InitError> {
    load_and_merge_subcommand_for::<InitArgs>(cli_args).map_err(InitError::from)
}
