// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub mod fixtures;

/// Czech sample with multi-byte characters around weak words, a shortcut, units and digit groups
pub const CZECH_SAMPLE: &str = "Přišel k nám že s. r. o. zaplatí 2 500 000 korun za 3 kg a 20 °C v zimě";

/// Expected `&nbsp;` output of `CZECH_SAMPLE` with default tables
pub const CZECH_EXPECTED: &str = "Přišel k&nbsp;nám že&nbsp;s.&nbsp;r.&nbsp;o. zaplatí 2&nbsp;500&nbsp;000 korun za&nbsp;3&nbsp;kg a&nbsp;20&nbsp;°C v&nbsp;zimě";

/// Test fixture helper for creating temporary directories with input files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a text file with given content
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write a TOML configuration file
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file("linebreaks.toml", content)
    }

    /// Read a file back as UTF-8
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> String {
        fs::read_to_string(path).expect("Failed to read test file")
    }
}
