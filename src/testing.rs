//! Testing utilities for romsift
//!
//! This module provides a `TestDir` wrapper around a temporary directory
//! populated with ROM-style filenames, plus a helper to read its listing back.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;

/// Temporary directory that is removed when dropped
///
/// # Panics
/// Constructors panic if the directory or its files cannot be created.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create an empty temporary directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Create a temporary directory holding one small file per name
    #[must_use]
    pub fn with_files(names: &[&str]) -> Self {
        let dir = Self::new();
        for name in names {
            dir.create_file(name);
        }
        dir
    }

    /// Create a file with default content
    pub fn create_file(&self, name: &str) {
        self.create_file_with_content(name, b"test content");
    }

    /// Create a file with custom content
    pub fn create_file_with_content(&self, name: &str, content: &[u8]) {
        let mut file = fs::File::create(self.dir.path().join(name)).expect("Failed to create file");
        file.write_all(content).expect("Failed to write file");
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// File names currently in the directory, sorted
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.dir.path())
            .expect("Failed to read temp dir")
            .filter_map(std::result::Result::ok)
            .filter(|e| e.path().is_file())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_dir_with_files() {
        let dir = TestDir::with_files(&["b (x).bin", "a.bin"]);
        assert_eq!(dir.names(), vec!["a.bin", "b (x).bin"]);
        let content = fs::read_to_string(dir.path().join("a.bin")).unwrap();
        assert_eq!(content, "test content");
    }

    #[test]
    fn test_dir_cleanup() {
        let path: PathBuf;
        {
            let dir = TestDir::with_files(&["a.bin"]);
            path = dir.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }
}
