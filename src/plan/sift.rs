//! Sift planner: decide which files of each title group survive

use std::collections::BTreeSet;

use super::{Action, Operation};
use crate::entry::TitleGroup;

/// 0-based indices of the entries to keep
pub type KeepSet = BTreeSet<usize>;

/// Chooses which entries of a group to keep
pub trait KeepSelector {
    fn select(&self, group: &TitleGroup) -> KeepSet;
}

/// Outcome of planning one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiftPlan {
    pub title: String,
    /// Filenames that stay on disk
    pub kept: Vec<String>,
    /// Number of entries outside the keep set. Can differ from the number
    /// actually deleted if some deletes fail.
    pub remove_count: usize,
    /// One delete covering every removed entry, or a skip if none is removed
    pub operation: Operation,
}

/// Plan one group: everything the selector does not keep is deleted.
///
/// Indices outside the group are ignored.
#[must_use]
pub fn plan_sift(group: &TitleGroup, selector: &dyn KeepSelector) -> SiftPlan {
    let keep = selector.select(group);

    let (kept, removed): (Vec<_>, Vec<_>) = group
        .entries
        .iter()
        .enumerate()
        .partition(|(i, _)| keep.contains(i));

    let kept: Vec<String> = kept.into_iter().map(|(_, e)| e.filename.clone()).collect();
    let files: Vec<String> = removed.into_iter().map(|(_, e)| e.filename.clone()).collect();
    let remove_count = files.len();

    let action = if files.is_empty() {
        Action::Skip {
            name: group.title.clone(),
        }
    } else {
        Action::Delete { files }
    };

    SiftPlan {
        title: group.title.clone(),
        kept,
        remove_count,
        operation: Operation::new(group.title.clone(), action),
    }
}

/// Resolve a typed keep selection for a group of `len` entries.
///
/// The input is a comma-separated list of 1-based indices:
/// - a `0` anywhere keeps nothing
/// - tokens that are not integers, or fall outside `1..=len`, are ignored
/// - if no usable index remains, everything is kept
#[must_use]
pub fn parse_keep_input(input: &str, len: usize) -> KeepSet {
    let numbers: Vec<i64> = input
        .split(',')
        .filter_map(|token| token.trim().parse::<i64>().ok())
        .collect();

    if numbers.contains(&0) {
        return KeepSet::new();
    }

    let keep: KeepSet = numbers
        .into_iter()
        .filter_map(|n| usize::try_from(n).ok())
        .filter(|&n| (1..=len).contains(&n))
        .map(|n| n - 1)
        .collect();

    if keep.is_empty() {
        (0..len).collect()
    } else {
        keep
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{FileEntry, TitleGroups};

    struct Fixed(Vec<usize>);

    impl KeepSelector for Fixed {
        fn select(&self, _group: &TitleGroup) -> KeepSet {
            self.0.iter().copied().collect()
        }
    }

    fn game_group() -> TitleGroup {
        let groups = TitleGroups::group(
            ["Game (USA).bin", "Game (Europe).bin", "Game (USA)(Beta).bin"]
                .iter()
                .map(|n| FileEntry::parse(n)),
        );
        groups.get("Game").cloned().unwrap()
    }

    #[test]
    fn test_keep_first_deletes_rest() {
        let plan = plan_sift(&game_group(), &Fixed(vec![0]));
        assert_eq!(plan.kept, vec!["Game (USA).bin"]);
        assert_eq!(plan.remove_count, 2);
        assert_eq!(
            plan.operation.action,
            Action::Delete {
                files: vec!["Game (Europe).bin".into(), "Game (USA)(Beta).bin".into()]
            }
        );
    }

    #[test]
    fn test_keep_all_is_skip() {
        let plan = plan_sift(&game_group(), &Fixed(vec![0, 1, 2]));
        assert_eq!(plan.remove_count, 0);
        assert!(plan.operation.is_skip());
    }

    #[test]
    fn test_keep_none_deletes_everything() {
        let plan = plan_sift(&game_group(), &Fixed(vec![]));
        assert!(plan.kept.is_empty());
        assert_eq!(plan.remove_count, 3);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let plan = plan_sift(&game_group(), &Fixed(vec![2, 7]));
        assert_eq!(plan.kept, vec!["Game (USA)(Beta).bin"]);
        assert_eq!(plan.remove_count, 2);
    }

    #[test]
    fn test_parse_zero_keeps_none() {
        assert!(parse_keep_input("0", 3).is_empty());
        assert!(parse_keep_input("1, 0", 3).is_empty());
    }

    #[test]
    fn test_parse_list_is_one_based() {
        let keep = parse_keep_input("1,3", 3);
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_parse_garbage_keeps_all() {
        let keep = parse_keep_input("abc", 3);
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(parse_keep_input("", 2).len(), 2);
    }

    #[test]
    fn test_parse_ignores_bad_tokens_in_valid_list() {
        let keep = parse_keep_input(" 2 , x, ,3", 3);
        assert_eq!(keep.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_parse_only_out_of_range_keeps_all() {
        assert_eq!(parse_keep_input("9,-1", 3).len(), 3);
    }
}
