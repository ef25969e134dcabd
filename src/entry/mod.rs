//! Filename model
//!
//! Turns a raw filename such as `Game (USA) (Rev 1).bin` into a structured
//! [`FileEntry`]: the canonical title, the ordered list of parenthesized
//! tags and the extension. Parsing is total: any string yields an entry.

pub mod group;
pub mod histogram;

pub use group::{TitleGroup, TitleGroups};
pub use histogram::TagHistogram;

use regex::Regex;
use std::sync::LazyLock;

/// Matches one non-nested parenthesized tag, capturing its contents.
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]+)\)").expect("tag pattern is a valid regex"));

/// One file on disk, as seen through its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Basename as found on disk
    pub filename: String,
    /// Extension including the leading dot, empty if none
    pub extension: String,
    /// Text before the first `(`, trimmed
    pub title: String,
    /// Parenthesized tags in left-to-right order, parentheses stripped
    pub tags: Vec<String>,
}

impl FileEntry {
    /// Parse a filename (or path) into an entry.
    ///
    /// Only the basename is considered. The extension runs from the last
    /// `.` to the end, unless that dot starts the name (`.hidden` has no
    /// extension).
    ///
    /// # Examples
    ///
    /// ```
    /// use romsift::entry::FileEntry;
    ///
    /// let entry = FileEntry::parse("Game (USA) (Rev 1).bin");
    /// assert_eq!(entry.title, "Game");
    /// assert_eq!(entry.tags, vec!["USA", "Rev 1"]);
    /// assert_eq!(entry.extension, ".bin");
    /// ```
    #[must_use]
    pub fn parse(filename: &str) -> Self {
        let filename = basename(filename);
        let (stem, extension) = split_extension(filename);

        let tags = TAG_RE
            .captures_iter(stem)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        let title = stem
            .split_once('(')
            .map_or(stem, |(head, _)| head)
            .trim()
            .to_string();

        Self {
            filename: filename.to_string(),
            extension: extension.to_string(),
            title,
            tags,
        }
    }

    /// Name this entry would have with the given tags
    #[must_use]
    pub fn with_tags<S: AsRef<str>>(&self, tags: &[S]) -> String {
        clean_filename(&self.title, tags, &self.extension)
    }
}

/// Join a title, tags and extension into a filename.
///
/// Each tag is written as ` (tag)` after the title. Parsing the result with
/// [`FileEntry::parse`] gives back the same title and tags.
#[must_use]
pub fn clean_filename<S: AsRef<str>>(title: &str, tags: &[S], extension: &str) -> String {
    let mut name = String::from(title);
    for tag in tags {
        name.push_str(" (");
        name.push_str(tag.as_ref());
        name.push(')');
    }
    name.push_str(extension);
    name
}

fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}
