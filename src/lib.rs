//! Romsift - sift and clean collections of ROM files
//!
//! ROM dumps are commonly named `Title (Tag) (Tag).ext`. This library groups
//! the files of a directory by title, then either deletes all but the chosen
//! files of each title (sift) or strips the tags every file of a title shares
//! (clean). Both run as a plan that can be previewed before it touches disk.

use std::path::PathBuf;
use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod entry;
pub mod fs;
pub mod output;
pub mod plan;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum RomSiftError {
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// The target directory does not exist
    #[error("directory {} not found", .0.display())]
    DirectoryNotFound(PathBuf),
    /// The target directory exists but cannot be read
    #[error("directory {} cannot be accessed: {reason}", .path.display())]
    DirectoryInaccessible { path: PathBuf, reason: String },
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RomSiftError {
    /// Check that `dir` is a directory that can be listed
    ///
    /// # Errors
    /// Returns `DirectoryNotFound` if nothing exists at `dir`, and
    /// `DirectoryInaccessible` if it is not a directory or cannot be read.
    pub fn check_directory(dir: &std::path::Path) -> Result<(), Self> {
        let metadata = std::fs::metadata(dir).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Self::DirectoryNotFound(dir.to_path_buf()),
            _ => Self::DirectoryInaccessible {
                path: dir.to_path_buf(),
                reason: e.to_string(),
            },
        })?;

        if !metadata.is_dir() {
            return Err(Self::DirectoryInaccessible {
                path: dir.to_path_buf(),
                reason: "not a directory".into(),
            });
        }

        std::fs::read_dir(dir).map_err(|e| Self::DirectoryInaccessible {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}
