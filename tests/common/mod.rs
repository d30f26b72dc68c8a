#![allow(dead_code)]

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the loc-scan binary.
#[macro_export]
macro_rules! loc_scan {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("loc-scan"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a C file with the given number of code, comment and blank lines.
    pub fn create_c_file(
        &self,
        relative_path: &str,
        code_lines: usize,
        comment_lines: usize,
        blank_lines: usize,
    ) -> PathBuf {
        let mut content = String::new();

        for i in 0..comment_lines {
            let _ = writeln!(content, "// Comment line {i}");
        }

        for _ in 0..blank_lines {
            content.push('\n');
        }

        for i in 0..code_lines {
            let _ = writeln!(content, "int var_{i} = {i};");
        }

        self.create_file(relative_path, &content)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
