//! Grouping of entries by canonical title

use std::collections::HashMap;
use std::io;

use super::FileEntry;
use crate::fs::FileSystem;

/// All entries sharing one title, in directory-listing order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleGroup {
    pub title: String,
    pub entries: Vec<FileEntry>,
}

impl TitleGroup {
    #[must_use]
    pub const fn new(title: String) -> Self {
        Self {
            title,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.entries.len() == 1
    }
}

/// Title groups in first-seen order.
///
/// Titles compare by exact, case-sensitive string equality. The order of
/// groups and of entries inside a group is the order they were added, which
/// is the order operations are later planned and executed in.
#[derive(Debug, Clone, Default)]
pub struct TitleGroups {
    groups: Vec<TitleGroup>,
    index: HashMap<String, usize>,
    files: usize,
}

impl TitleGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Group parsed entries by title
    #[must_use]
    pub fn group(entries: impl IntoIterator<Item = FileEntry>) -> Self {
        let mut groups = Self::new();
        for entry in entries {
            groups.push(entry);
        }
        groups
    }

    /// List the directory behind `fs` once and group every name in it.
    ///
    /// # Errors
    /// Returns the listing error; parsing and grouping cannot fail.
    pub fn scan(fs: &dyn FileSystem) -> io::Result<Self> {
        let names = fs.list()?;
        log::debug!("scanned {} name(s)", names.len());
        Ok(Self::group(names.iter().map(|name| FileEntry::parse(name))))
    }

    /// Add one entry, opening a new group if its title is new
    pub fn push(&mut self, entry: FileEntry) {
        let slot = match self.index.get(&entry.title) {
            Some(&slot) => slot,
            None => {
                let slot = self.groups.len();
                self.index.insert(entry.title.clone(), slot);
                self.groups.push(TitleGroup::new(entry.title.clone()));
                slot
            }
        };
        self.groups[slot].entries.push(entry);
        self.files += 1;
    }

    #[must_use]
    pub fn get(&self, title: &str) -> Option<&TitleGroup> {
        self.index.get(title).map(|&slot| &self.groups[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TitleGroup> {
        self.groups.iter()
    }

    /// Every entry across all groups, group by group
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.groups.iter().flat_map(|g| g.entries.iter())
    }

    #[must_use]
    pub fn title_count(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.files
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a TitleGroups {
    type Item = &'a TitleGroup;
    type IntoIter = std::slice::Iter<'a, TitleGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
