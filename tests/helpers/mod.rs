//! Test helpers for sheet2sql integration tests
//!
//! This module provides helper functions and structs to simplify
//! writing command-line tests for the sheet2sql binary.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Represents a test case for sheet2sql
pub struct SheetTestCase {
    /// Additional command line arguments
    pub args: Vec<String>,
    /// Data written to stdin
    pub stdin: Option<String>,
    /// Expected strings in stdout
    pub expected_stdout: Vec<String>,
    /// Strings that must not appear in stdout
    pub unexpected_stdout: Vec<String>,
    /// Expected strings in stderr
    pub expected_stderr: Vec<String>,
    /// Whether the command is expected to succeed
    pub should_succeed: bool,
}

impl Default for SheetTestCase {
    fn default() -> Self {
        SheetTestCase {
            args: Vec::new(),
            stdin: None,
            expected_stdout: Vec::new(),
            unexpected_stdout: Vec::new(),
            expected_stderr: Vec::new(),
            should_succeed: true,
        }
    }
}

/// Run sheet2sql with the test case's arguments and check its output
pub fn run_test_case(test_case: SheetTestCase) -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("sheet2sql")?;
    cmd.args(&test_case.args);

    if let Some(input) = test_case.stdin {
        cmd.write_stdin(input);
    }

    let mut assert = cmd.assert();

    if test_case.should_succeed {
        assert = assert.success();
    } else {
        assert = assert.failure();
    }

    for expected in test_case.expected_stdout {
        assert = assert.stdout(predicate::str::contains(expected));
    }

    for unexpected in test_case.unexpected_stdout {
        assert = assert.stdout(predicate::str::contains(unexpected).not());
    }

    for expected in test_case.expected_stderr {
        assert = assert.stderr(predicate::str::contains(expected));
    }

    Ok(())
}

/// Helper function to create a temp directory for tests, respecting CARGO_TARGET_TMPDIR if set
pub fn create_temp_dir() -> Result<TempDir, Box<dyn std::error::Error>> {
    if let Ok(cargo_target_tmpdir) = env::var("CARGO_TARGET_TMPDIR") {
        fs::create_dir_all(&cargo_target_tmpdir)?;
        Ok(TempDir::new_in(cargo_target_tmpdir)?)
    } else {
        Ok(TempDir::new()?)
    }
}

/// Helper function to create a sheet export with custom data
pub fn create_custom_csv(
    dir: &Path,
    filename: &str,
    content: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Path to the static sample.csv test file
pub fn get_static_sample_file() -> PathBuf {
    PathBuf::from("tests/data/sample.csv")
}

/// Path to the static products.tsv test file
pub fn get_static_tsv_file() -> PathBuf {
    PathBuf::from("tests/data/products.tsv")
}
