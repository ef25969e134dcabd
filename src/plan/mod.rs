//! Planning and execution of filesystem changes
//!
//! Both workflows run in two phases. A planner turns title groups into an
//! ordered list of [`Operation`]s without touching the disk; the
//! [`executor`] then either narrates that list (dry run) or applies it in
//! order through a [`FileSystem`].
//!
//! - `clean`: strip tags shared by every member of a group
//! - `sift`: keep a selected subset of each group and delete the rest
//! - `policy`: non-interactive keep-set selection for `sift`
//! - `executor`: dry-run preview or sequential apply, with a summary

pub mod clean;
pub mod executor;
pub mod policy;
pub mod sift;

pub use clean::{plan_clean, plan_clean_all};
pub use executor::{ExecSummary, execute};
pub use policy::{KeepPolicy, PolicySelector};
pub use sift::{KeepSelector, KeepSet, SiftPlan, plan_sift};

use std::io;

use crate::fs::FileSystem;

/// A planned change, not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do for `name`
    Skip { name: String },
    /// Rename `from` to `to`
    Rename { from: String, to: String },
    /// Delete every file in `files`, in order
    Delete { files: Vec<String> },
}

/// One planned change, tagged with the title group it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub title: String,
    pub action: Action,
}

/// Result of applying one operation
#[derive(Debug, Default)]
pub struct Applied {
    /// Number of files actually renamed or deleted
    pub count: usize,
    /// Files that could not be changed, with the reason
    pub failures: Vec<(String, io::Error)>,
}

impl Operation {
    #[must_use]
    pub const fn new(title: String, action: Action) -> Self {
        Self { title, action }
    }

    /// Number of files this operation intends to change
    #[must_use]
    pub fn planned(&self) -> usize {
        match &self.action {
            Action::Skip { .. } => 0,
            Action::Rename { .. } => 1,
            Action::Delete { files } => files.len(),
        }
    }

    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self.action, Action::Skip { .. })
    }

    /// Perform the change.
    ///
    /// Failures are collected, never propagated: a delete keeps going through
    /// the rest of its files after one of them fails.
    pub fn apply(&self, fs: &dyn FileSystem) -> Applied {
        let mut applied = Applied::default();
        match &self.action {
            Action::Skip { .. } => {}
            Action::Rename { from, to } => match fs.rename(from, to) {
                Ok(()) => applied.count += 1,
                Err(e) => {
                    log::warn!("rename {from} -> {to} failed: {e}");
                    applied.failures.push((from.clone(), e));
                }
            },
            Action::Delete { files } => {
                for file in files {
                    match fs.remove(file) {
                        Ok(()) => applied.count += 1,
                        Err(e) => {
                            log::warn!("delete {file} failed: {e}");
                            applied.failures.push((file.clone(), e));
                        }
                    }
                }
            }
        }
        applied
    }
}
