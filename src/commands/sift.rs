//! Sift command - keep a subset of each title's files and delete the rest

use super::{RunOptions, scan};
use crate::RomSiftError;
use crate::entry::TitleGroup;
use crate::fs::FileSystem;
use crate::output;
use crate::plan::sift::{KeepSelector, KeepSet};
use crate::plan::{ExecSummary, PolicySelector, execute as run_plan, plan_sift};
use crate::ui::{InteractiveSelector, UserInput};

type Result<T> = std::result::Result<T, RomSiftError>;

/// Keeps every file; used for groups with nothing to choose between
struct KeepAll;

impl KeepSelector for KeepAll {
    fn select(&self, group: &TitleGroup) -> KeepSet {
        (0..group.len()).collect()
    }
}

/// Execute the sift command
///
/// Non-interactive runs choose survivors with `policy`. Interactive runs
/// pause after the scan, then ask about every title with more than one
/// file; single-file titles are kept without asking.
///
/// # Errors
/// Returns `InvalidInput` if the `preferred` policy has no tags to rank by,
/// before the directory is touched, or an error if the directory cannot be
/// listed.
pub fn execute(
    fs: &dyn FileSystem,
    input: &dyn UserInput,
    options: RunOptions,
    policy: &PolicySelector<'_>,
) -> Result<ExecSummary> {
    if !policy.is_usable() {
        return Err(RomSiftError::InvalidInput(format!(
            "the {} policy needs at least one tag (--prefer TAG or preferred_tags in config)",
            policy.policy()
        )));
    }

    let groups = scan(fs, options.verbose)?;
    if groups.is_empty() {
        println!("No files to sift.");
        return Ok(ExecSummary::new());
    }

    if options.interactive {
        println!();
        if let Err(e) = input.pause() {
            log::warn!("pause failed: {e}");
        }
    }

    let interactive = InteractiveSelector::new(input, fs);
    let mut ops = Vec::with_capacity(groups.title_count());
    let mut to_remove = 0;
    for group in &groups {
        let selector: &dyn KeepSelector = if !options.interactive {
            policy
        } else if group.is_singleton() {
            &KeepAll
        } else {
            &interactive
        };

        let plan = plan_sift(group, selector);
        log::debug!(
            "{}: keeping {} of {} file(s)",
            plan.title,
            plan.kept.len(),
            group.len()
        );
        to_remove += plan.remove_count;
        ops.push(plan.operation);
    }

    println!("\nSift files...");
    if to_remove > 0 {
        println!("{}", output::marked_for_removal(to_remove, groups.file_count()));
    }
    let summary = run_plan(&ops, options.noop, fs, options.verbose);

    if summary.planned == 0 {
        println!("No files to sift.");
    } else {
        let count = if options.noop { summary.planned } else { summary.applied };
        println!("\n{}", output::outcome("removed", options.noop, count, groups.file_count()));
    }
    if summary.has_errors() {
        summary.print("Sift");
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFs;
    use crate::plan::KeepPolicy;
    use crate::ui::ScriptedInput;

    const GAMES: [&str; 4] = [
        "Game (USA).bin",
        "Game (Europe).bin",
        "Game (USA) (Beta).bin",
        "Solo (Japan).bin",
    ];

    fn default_policy(fs: &MockFs) -> PolicySelector<'_> {
        PolicySelector::new(KeepPolicy::default(), &[], fs)
    }

    fn interactive() -> RunOptions {
        RunOptions {
            interactive: true,
            ..RunOptions::default()
        }
    }

    #[test]
    fn test_sift_default_policy_keeps_first() {
        let fs = MockFs::with_files(&GAMES);
        let summary =
            execute(&fs, &ScriptedInput::default(), RunOptions::default(), &default_policy(&fs))
                .unwrap();

        assert_eq!(summary.planned, 2);
        assert_eq!(summary.applied, 2);
        assert_eq!(fs.names(), vec!["Game (USA).bin", "Solo (Japan).bin"]);
    }

    #[test]
    fn test_sift_preferred_policy() {
        let fs = MockFs::with_files(&GAMES);
        let preferred = vec!["Europe".to_string()];
        let policy = PolicySelector::new(KeepPolicy::Preferred, &preferred, &fs);
        execute(&fs, &ScriptedInput::default(), RunOptions::default(), &policy).unwrap();

        assert_eq!(fs.names(), vec!["Game (Europe).bin", "Solo (Japan).bin"]);
    }

    #[test]
    fn test_sift_interactive_only_prompts_duplicates() {
        let fs = MockFs::with_files(&GAMES);
        let input = ScriptedInput::new(&["1,3"]);
        let summary = execute(&fs, &input, interactive(), &default_policy(&fs)).unwrap();

        assert_eq!(input.prompts().len(), 1);
        assert_eq!(summary.applied, 1);
        assert_eq!(
            fs.names(),
            vec!["Game (USA).bin", "Game (USA) (Beta).bin", "Solo (Japan).bin"]
        );
    }

    #[test]
    fn test_sift_interactive_zero_removes_whole_group() {
        let fs = MockFs::with_files(&GAMES);
        let input = ScriptedInput::new(&["0"]);
        let summary = execute(&fs, &input, interactive(), &default_policy(&fs)).unwrap();

        assert_eq!(summary.applied, 3);
        assert_eq!(fs.names(), vec!["Solo (Japan).bin"]);
    }

    #[test]
    fn test_sift_interactive_garbage_keeps_all() {
        let fs = MockFs::with_files(&GAMES);
        let input = ScriptedInput::new(&["abc"]);
        let summary = execute(&fs, &input, interactive(), &default_policy(&fs)).unwrap();

        assert_eq!(summary.planned, 0);
        assert!(fs.calls().is_empty());
    }

    #[test]
    fn test_sift_noop_touches_nothing() {
        let fs = MockFs::with_files(&GAMES);
        let options = RunOptions {
            noop: true,
            ..RunOptions::default()
        };
        let summary =
            execute(&fs, &ScriptedInput::default(), options, &default_policy(&fs)).unwrap();

        assert_eq!(summary.planned, 2);
        assert_eq!(summary.applied, 0);
        assert!(fs.calls().is_empty());
    }

    #[test]
    fn test_sift_failed_delete_is_reported() {
        let fs = MockFs::with_files(&GAMES);
        fs.fail_on("Game (Europe).bin");
        let summary =
            execute(&fs, &ScriptedInput::default(), RunOptions::default(), &default_policy(&fs))
                .unwrap();

        assert_eq!(summary.applied, 1);
        assert_eq!(summary.errors, 1);
        assert!(fs.names().contains(&"Game (Europe).bin".to_string()));
    }

    #[test]
    fn test_sift_preferred_without_tags_is_rejected() {
        let fs = MockFs::with_files(&["G (USA).x", "G (Europe).x"]);
        let policy = PolicySelector::new(KeepPolicy::Preferred, &[], &fs);
        let result = execute(&fs, &ScriptedInput::default(), RunOptions::default(), &policy);

        assert!(matches!(result, Err(RomSiftError::InvalidInput(_))));
        assert!(fs.calls().is_empty());
        assert_eq!(fs.names(), vec!["G (USA).x", "G (Europe).x"]);
    }

    #[test]
    fn test_sift_empty_directory() {
        let fs = MockFs::default();
        let summary =
            execute(&fs, &ScriptedInput::default(), RunOptions::default(), &default_policy(&fs))
                .unwrap();
        assert_eq!(summary.planned, 0);
    }
}
