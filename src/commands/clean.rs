//! Clean command - strip tags shared by every file of a title

use colored::Colorize;

use super::{RunOptions, scan};
use crate::RomSiftError;
use crate::fs::FileSystem;
use crate::output;
use crate::plan::{ExecSummary, Operation, execute as run_plan, plan_clean_all};
use crate::ui::UserInput;

type Result<T> = std::result::Result<T, RomSiftError>;

/// Execute the clean command
///
/// In interactive mode the plan is previewed first and a single confirmation
/// decides whether it is applied. A failed prompt takes the default (yes).
///
/// # Errors
/// Returns an error if the directory cannot be listed.
pub fn execute(
    fs: &dyn FileSystem,
    input: &dyn UserInput,
    options: RunOptions,
) -> Result<ExecSummary> {
    let groups = scan(fs, options.verbose)?;
    if groups.is_empty() {
        println!("No files to clean.");
        return Ok(ExecSummary::new());
    }

    let ops = plan_clean_all(&groups);
    let renames = ops.iter().filter(|op| !op.is_skip()).count();
    log::debug!("planned {renames} rename(s) across {} title(s)", groups.title_count());

    println!("\nClean files...");

    if renames == 0 {
        // Nothing to apply; narrate the skips for a verbose run
        let summary = run_plan(&ops, options.noop, fs, options.verbose);
        println!("No files to clean.");
        return Ok(summary);
    }

    let summary = if options.interactive && !options.noop {
        if confirm(&ops, renames, fs, input, options.verbose) {
            run_plan(&ops, false, fs, options.verbose)
        } else {
            println!("{}", "Cancelled.".yellow());
            return Ok(ExecSummary {
                planned: renames,
                ..ExecSummary::new()
            });
        }
    } else {
        run_plan(&ops, options.noop, fs, options.verbose)
    };

    let count = if options.noop { summary.planned } else { summary.applied };
    println!("\n{}", output::outcome("cleaned", options.noop, count, groups.file_count()));
    if summary.has_errors() {
        summary.print("Clean");
    }

    Ok(summary)
}

/// Preview the plan, then ask once whether to apply it
fn confirm(
    ops: &[Operation],
    renames: usize,
    fs: &dyn FileSystem,
    input: &dyn UserInput,
    verbose: bool,
) -> bool {
    run_plan(ops, true, fs, verbose);
    println!();

    match input.prompt_confirm(&format!("Rename {renames} file(s)?"), true) {
        Ok(answer) => answer,
        Err(e) => {
            log::warn!("confirmation failed, using default: {e}");
            true
        }
    }
}
