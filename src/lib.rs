//! Scaffold `bun-match-svg` snapshot tests into a Bun project.
//!
//! Each step of `match-svg init` is exposed so tests can drive it against a
//! temporary project root instead of the process working directory.

pub mod banners;
pub mod cli_args;
pub mod commands;
pub mod config;
pub mod environment;
pub mod error;
pub mod init;
pub mod installer;
pub mod merge;
pub mod report;
pub mod scaffold;
pub mod templates;

pub use cli_args::{Cli, Commands, InitArgs};
pub use error::InitError;
pub use init::{InitReport, run_init};
pub use installer::{CommandInstaller, Installer};
pub use merge::{Merge, MergeAction, merge};
