//! Per-group tag occurrence counts

use std::collections::{HashMap, HashSet};

use super::FileEntry;

/// Count of each distinct tag across one title group.
///
/// Every occurrence counts, so a tag repeated inside one filename is counted
/// once per repetition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagHistogram {
    counts: HashMap<String, usize>,
}

impl TagHistogram {
    #[must_use]
    pub fn from_entries(entries: &[FileEntry]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for tag in entries.iter().flat_map(|e| e.tags.iter()) {
            *counts.entry(tag.clone()).or_default() += 1;
        }
        Self { counts }
    }

    #[must_use]
    pub fn count(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    /// Tags counted at least `group_size` times
    #[must_use]
    pub fn common_tags(&self, group_size: usize) -> HashSet<&str> {
        self.counts
            .iter()
            .filter(|&(_, &count)| count >= group_size)
            .map(|(tag, _)| tag.as_str())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
