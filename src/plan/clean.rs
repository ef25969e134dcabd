//! Clean planner: compute the minimal distinguishing name for each file
//!
//! A title with one file needs no tags at all. In a larger group, a tag
//! counted at least once per member is treated as common and dropped from
//! every member; the remaining tags keep their original order because they
//! are what tells the members apart.
//!
//! "Counted at least N times" is an approximation of "present on all N
//! members": a tag repeated inside one filename can reach the threshold
//! without being on every member, and is then stripped as well.

use super::{Action, Operation};
use crate::entry::{FileEntry, TagHistogram, TitleGroup, TitleGroups};

/// Plan the renames for one title group, one operation per entry
#[must_use]
pub fn plan_clean(group: &TitleGroup) -> Vec<Operation> {
    if group.is_singleton() {
        let entry = &group.entries[0];
        return vec![rename_or_skip(&group.title, entry, &[] as &[&str])];
    }

    let histogram = TagHistogram::from_entries(&group.entries);
    let common = histogram.common_tags(group.len());

    group
        .entries
        .iter()
        .map(|entry| {
            let kept: Vec<&str> = entry
                .tags
                .iter()
                .map(String::as_str)
                .filter(|tag| !common.contains(tag))
                .collect();
            rename_or_skip(&group.title, entry, &kept)
        })
        .collect()
}

/// Plan the renames for every group, in title order
#[must_use]
pub fn plan_clean_all(groups: &TitleGroups) -> Vec<Operation> {
    groups.iter().flat_map(plan_clean).collect()
}

fn rename_or_skip<S: AsRef<str>>(title: &str, entry: &FileEntry, tags: &[S]) -> Operation {
    let target = entry.with_tags(tags);
    let action = if target == entry.filename {
        Action::Skip {
            name: entry.filename.clone(),
        }
    } else {
        Action::Rename {
            from: entry.filename.clone(),
            to: target,
        }
    };
    Operation::new(title.to_string(), action)
}
