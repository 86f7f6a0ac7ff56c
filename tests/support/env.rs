//! Environment and directory guards for integration tests.
//!
//! Capture and restore environment variables, temporarily change the working
//! directory, and write `.msvg.toml` files for configuration tests.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use match_svg::environment::{remove_var, set_var, var_os};

/// Variables read when layering `init` configuration.
pub const CONFIG_KEYS: &[&str] = &[
    "MSVG_CONFIG_PATH",
    "MSVGCMDS_INIT_DIR",
    "MSVGCMDS_INIT_INSTALLER",
    "MSVGCMDS_INIT_SKIP_INSTALL",
];

/// RAII guard that restores captured environment variables on drop.
pub struct EnvGuard {
    entries: Vec<(OsString, Option<OsString>)>,
}

impl EnvGuard {
    /// Capture `keys`, removing them from the environment for the guard's
    /// lifetime.
    ///
    /// Callers must serialise tests with `#[serial]`.
    pub fn new(keys: &[&str]) -> Self {
        let entries = keys
            .iter()
            .map(|key| {
                let key = OsString::from(key);
                let previous = var_os(&key);
                remove_var(&key);
                (key, previous)
            })
            .collect();
        Self { entries }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &mut self.entries {
            match value.take() {
                Some(val) => set_var(&*key, val),
                None => remove_var(&*key),
            }
        }
    }
}

/// RAII guard restoring the working directory on drop.
pub struct DirGuard {
    previous: PathBuf,
}

impl DirGuard {
    /// Enter `path`, returning a guard that restores the prior working
    /// directory when dropped.
    pub fn enter(path: impl AsRef<Path>) -> Self {
        let previous = env::current_dir().expect("current dir");
        env::set_current_dir(path.as_ref()).expect("set dir");
        Self { previous }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        // Best effort; Drop must not panic.
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Write `content` to a temporary `.msvg.toml` and return its directory and path.
pub fn write_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create config dir");
    let path = dir.path().join(".msvg.toml");
    fs::write(&path, content).expect("write config");
    (dir, path)
}

/// Write a config file, point `MSVG_CONFIG_PATH` at it, and return the
/// directory and path.
///
/// Callers must hold an [`EnvGuard`] covering `MSVG_CONFIG_PATH`.
pub fn setup_env_and_config(content: &str) -> (TempDir, PathBuf) {
    let (dir, path) = write_config(content);
    set_var("MSVG_CONFIG_PATH", path.as_os_str());
    (dir, path)
}
