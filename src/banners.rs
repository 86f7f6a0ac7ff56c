//! Fixed lines printed by the binary outside the init steps.

/// Printed when no recognised subcommand is given.
pub const USAGE: &str = "Usage: match-svg init";

/// Prefix for the fatal error reported on stderr.
pub const ERROR_PREFIX: &str = "Error during initialization:";
