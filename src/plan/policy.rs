//! Non-interactive keep policies for sift

use std::fmt;
use std::time::SystemTime;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::sift::{KeepSelector, KeepSet};
use crate::entry::TitleGroup;
use crate::fs::FileSystem;

/// Which file of a title group survives a non-interactive sift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum KeepPolicy {
    /// Keep the first file in listing order
    #[default]
    First,
    /// Keep every file (nothing is deleted)
    All,
    /// Keep no file at all
    None,
    /// Keep the biggest file
    Largest,
    /// Keep the most recently modified file
    Newest,
    /// Keep the file carrying the best-ranked preferred tag
    Preferred,
}

impl fmt::Display for KeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::First => "first",
            Self::All => "all",
            Self::None => "none",
            Self::Largest => "largest",
            Self::Newest => "newest",
            Self::Preferred => "preferred",
        };
        f.write_str(name)
    }
}

/// Applies a [`KeepPolicy`] to each group.
///
/// Ties always go to the earliest entry. Files whose metadata cannot be read
/// count as empty and oldest.
pub struct PolicySelector<'a> {
    policy: KeepPolicy,
    preferred_tags: &'a [String],
    fs: &'a dyn FileSystem,
}

impl<'a> PolicySelector<'a> {
    #[must_use]
    pub fn new(policy: KeepPolicy, preferred_tags: &'a [String], fs: &'a dyn FileSystem) -> Self {
        Self {
            policy,
            preferred_tags,
            fs,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> KeepPolicy {
        self.policy
    }

    /// `preferred` has nothing to rank by without at least one tag
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.policy != KeepPolicy::Preferred || !self.preferred_tags.is_empty()
    }

    fn size(&self, name: &str) -> u64 {
        self.fs.stat(name).map(|s| s.len).unwrap_or(0)
    }

    fn modified(&self, name: &str) -> Option<SystemTime> {
        self.fs.stat(name).ok().and_then(|s| s.modified)
    }

    /// Rank of the best preferred tag on an entry, lower is better
    fn preference_rank(&self, tags: &[String]) -> Option<usize> {
        self.preferred_tags
            .iter()
            .position(|preferred| tags.iter().any(|t| t == preferred))
    }

    fn best_by<K: Ord>(group: &TitleGroup, key: impl Fn(usize) -> K) -> usize {
        // max_by_key keeps the last maximum, walk in reverse so the first wins
        (0..group.len())
            .rev()
            .max_by_key(|&i| key(i))
            .unwrap_or(0)
    }
}

impl KeepSelector for PolicySelector<'_> {
    fn select(&self, group: &TitleGroup) -> KeepSet {
        if group.is_empty() {
            return KeepSet::new();
        }

        let keep = match self.policy {
            KeepPolicy::All => return (0..group.len()).collect(),
            KeepPolicy::None => return KeepSet::new(),
            KeepPolicy::First => 0,
            KeepPolicy::Largest => {
                Self::best_by(group, |i| self.size(&group.entries[i].filename))
            }
            KeepPolicy::Newest => {
                Self::best_by(group, |i| self.modified(&group.entries[i].filename))
            }
            KeepPolicy::Preferred => group
                .entries
                .iter()
                .enumerate()
                .filter_map(|(i, e)| self.preference_rank(&e.tags).map(|rank| (rank, i)))
                .min()
                .map_or(0, |(_, i)| i),
        };

        log::debug!(
            "{} policy keeps {} of '{}'",
            self.policy,
            group.entries[keep].filename,
            group.title
        );
        KeepSet::from([keep])
    }
}
