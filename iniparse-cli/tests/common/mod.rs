//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with a clean environment
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables read by the CLI.
const CLI_ENV_VARS: &[&str] = &[
    "INIPARSE_OPTIONS",
    "INIPARSE_NO_INLINE_COMMENTS",
    "INIPARSE_NO_INFER_TYPES",
    "INIPARSE_LOG_MODE",
];

/// A small INI document exercising every value type.
#[allow(dead_code)]
pub const SAMPLE_INI: &str = "\
# Sample application settings
[server]
host = localhost
port = 8080   # default port
timeout = 2.5

[features]
enabled = yes
tags = [web, 1, true]
empty =

[server]
debug = False
";

/// Test environment with an isolated temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with iniparse environment variables cleared.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("iniparse").expect("Failed to find iniparse binary");
        for var in CLI_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file into the test environment and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write [`SAMPLE_INI`] and return its path.
    pub fn sample(&self) -> PathBuf {
        self.write_file("sample.ini", SAMPLE_INI)
    }

    /// Run `iniparse parse --format json` on a file and return the parsed JSON.
    ///
    /// # Panics
    /// Panics if the command fails or prints invalid JSON.
    pub fn parse_json(&self, path: &Path) -> serde_json::Value {
        let output = self
            .command()
            .arg("parse")
            .arg(path)
            .output()
            .expect("Failed to run parse command");

        assert!(
            output.status.success(),
            "Parse failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("Output is not valid JSON")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
