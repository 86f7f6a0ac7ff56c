//! Temporary Bun projects and fake installers.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use match_svg::report::Reporter;
use match_svg::{InitError, InitReport, Installer, run_init};
use tempfile::TempDir;

/// An empty project directory removed on drop.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create project dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, contents).expect("write project file");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative)).expect("read project file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path().join(relative).exists()
    }

    /// Contents of every file the init routine manages, missing ones as `None`.
    pub fn snapshot(&self) -> Vec<Option<String>> {
        ["tests/svg.test.ts", "tests/fixtures/preload.ts", "bunfig.toml"]
            .into_iter()
            .map(|rel| fs::read_to_string(self.path().join(rel)).ok())
            .collect()
    }

    /// Run `init` with `installer`, capturing status lines with emoji markers.
    pub fn init(&self, installer: &dyn Installer) -> Result<(InitReport, String), InitError> {
        let mut reporter = Reporter::new(Vec::new(), true);
        let report = run_init(self.path(), Some(installer), &mut reporter)?;
        let out = String::from_utf8(reporter.into_inner()).expect("utf8 output");
        Ok((report, out))
    }
}

/// Records every install request and always succeeds.
#[derive(Default)]
pub struct RecordingInstaller {
    calls: RefCell<Vec<(PathBuf, String)>>,
}

impl RecordingInstaller {
    pub fn calls(&self) -> Vec<(PathBuf, String)> {
        self.calls.borrow().clone()
    }
}

impl Installer for RecordingInstaller {
    fn install(&self, root: &Path, package: &str) -> Result<(), InitError> {
        self.calls
            .borrow_mut()
            .push((root.to_path_buf(), package.to_owned()));
        Ok(())
    }
}
