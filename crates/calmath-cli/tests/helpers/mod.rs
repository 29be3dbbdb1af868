use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Test harness running the CLI in an isolated working directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new harness with an empty working directory and UTC as zone
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("calmath").expect("Failed to find calmath binary");
        cmd.current_dir(self.temp_dir.path())
            .env("CALMATH_TIMEZONE", "UTC")
            .env_remove("CALMATH_DATE_INPUT")
            .env_remove("CALMATH_SCHEDULE__WORK_DAYS")
            .env_remove("CALMATH_SCHEDULE__OFF_DAYS")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Working directory where `calmath.toml` is looked up
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a config file into the working directory
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir().join("calmath.toml"), contents).expect("Failed to write config");
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Helper to run a command and return trimmed stdout
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.run_success(args).get_output().stdout.clone();
        String::from_utf8(output).expect("stdout is not UTF-8").trim().to_string()
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
