//! Filesystem capability used by the planners and the executor
//!
//! Everything romsift does to disk goes through [`FileSystem`]: one listing
//! at the start of a run, then renames and deletes while a plan executes.
//! [`DiskFs`] works on a real directory, [`MockFs`] keeps an in-memory
//! listing for tests.

mod mock;

pub use mock::MockFs;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Size and modification time of one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStat {
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl FileStat {
    #[must_use]
    pub const fn new(len: u64, modified: Option<SystemTime>) -> Self {
        Self { len, modified }
    }
}

/// Directory operations, all relative to one directory.
///
/// Names passed in and returned are basenames.
pub trait FileSystem {
    /// Names of the files in the directory
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed.
    fn list(&self) -> io::Result<Vec<String>>;

    /// Rename `from` to `to`
    ///
    /// # Errors
    /// Returns an error if `from` is missing, `to` already exists, or the
    /// rename itself fails.
    fn rename(&self, from: &str, to: &str) -> io::Result<()>;

    /// Delete `name`
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be removed.
    fn remove(&self, name: &str) -> io::Result<()>;

    /// Size and modification time of `name`
    ///
    /// # Errors
    /// Returns an error if the file's metadata cannot be read.
    fn stat(&self, name: &str) -> io::Result<FileStat>;

    /// Where the files live, for display
    fn location(&self) -> String;
}

/// A real directory on disk
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl FileSystem for DiskFs {
    /// Regular files only, sorted by name so a scan is repeatable.
    fn list(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::warn!("Skipping non UTF-8 filename {}", raw.to_string_lossy()),
            }
        }
        names.sort();
        Ok(names)
    }

    fn rename(&self, from: &str, to: &str) -> io::Result<()> {
        if from == to {
            return Ok(());
        }
        let target = self.path(to);
        // std::fs::rename silently replaces an existing target on unix
        if target.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{to} already exists"),
            ));
        }
        fs::rename(self.path(from), target)
    }

    fn remove(&self, name: &str) -> io::Result<()> {
        fs::remove_file(self.path(name))
    }

    fn stat(&self, name: &str) -> io::Result<FileStat> {
        let meta = fs::metadata(self.path(name))?;
        Ok(FileStat::new(meta.len(), meta.modified().ok()))
    }

    fn location(&self) -> String {
        self.root().display().to_string()
    }
}
