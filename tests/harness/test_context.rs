//! Shared testing harness for `sitebind` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that override site settings.
const SETTINGS_ENV: [&str; 7] = [
    "BUSINESS_NAME",
    "BUSINESS_PHONE",
    "BUSINESS_EMAIL",
    "BUSINESS_ADDRESS",
    "GOOGLE_MAPS_API_KEY",
    "CALENDLY_URL",
    "GOOGLE_ANALYTICS_ID",
];

/// Testing harness providing an isolated site directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("site");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to a scratch directory outside the work directory.
    pub(crate) fn scratch(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Build a command for invoking the compiled `sitebind` binary in the work directory.
    ///
    /// Settings overrides and the log filter inherited from the outer
    /// environment are cleared.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sitebind").expect("Failed to locate sitebind binary");
        cmd.current_dir(&self.work_dir);
        for key in SETTINGS_ENV {
            cmd.env_remove(key);
        }
        cmd.env_remove("SITEBIND_LOG");
        cmd
    }

    /// Write a page relative to the work directory, creating parent directories.
    pub(crate) fn write_page(&self, relative: &str, html: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create page directory");
        }
        fs::write(&path, html).expect("Failed to write page");
        path
    }

    /// Read a file relative to the work directory.
    pub(crate) fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Write `site.toml` into the work directory.
    pub(crate) fn write_settings(&self, content: &str) {
        fs::write(self.work_dir.join("site.toml"), content).expect("Failed to write site.toml");
    }

    /// Write a raw `SITE_CONFIG` record and return its path.
    pub(crate) fn write_record(&self, name: &str, json: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, json).expect("Failed to write record");
        path
    }
}
