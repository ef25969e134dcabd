//! Plan executor: narrate or apply operations in order, then summarize

use colored::Colorize;

use super::{Action, Operation};
use crate::fs::FileSystem;

/// Summary of a plan run
#[derive(Debug, Default)]
pub struct ExecSummary {
    /// Files the plan intends to change
    pub planned: usize,
    /// Files actually changed (always 0 in a dry run)
    pub applied: usize,
    /// Operations that had nothing to do
    pub skipped: usize,
    pub errors: usize,
    pub error_messages: Vec<String>,
}

impl ExecSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_error(&mut self, msg: String) {
        self.errors += 1;
        self.error_messages.push(msg);
    }
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.errors > 0
    }
    pub fn print(&self, operation: &str) {
        println!("\n{}", format!("=== {operation} Summary ===").bold());
        println!("  {} {}", "✓ Applied:".green(), self.applied);
        if self.skipped > 0 {
            println!("  {} {}", "⊘ Skipped:".yellow(), self.skipped);
        }
        if self.errors > 0 {
            println!("  {} {}", "✗ Errors:".red(), self.errors);
            println!("\n{}", "Error details:".red().bold());
            for msg in &self.error_messages {
                println!("  - {msg}");
            }
        }
    }
}

/// Run a plan, strictly in order.
///
/// With `dry_run` every operation is only narrated and the filesystem is
/// never touched. Otherwise each operation is applied in turn; a failure is
/// recorded in the summary and the run moves on to the next operation.
/// Skips are narrated only when `verbose`.
pub fn execute(
    ops: &[Operation],
    dry_run: bool,
    fs: &dyn FileSystem,
    verbose: bool,
) -> ExecSummary {
    let mut summary = ExecSummary::new();
    let total: usize = ops.iter().filter(|op| !op.is_skip()).count();
    let mut step = 0;

    for op in ops {
        summary.planned += op.planned();

        if op.is_skip() {
            summary.skipped += 1;
            if verbose && let Action::Skip { name } = &op.action {
                println!("{}kip {}...", if dry_run { "Would s" } else { "S" }, name.bold());
            }
            continue;
        }

        step += 1;
        narrate(op, step, total, dry_run);
        if dry_run {
            continue;
        }

        let applied = op.apply(fs);
        summary.applied += applied.count;
        for (file, err) in applied.failures {
            eprintln!("{} {}: {}", "✗ Failed:".red(), file, err);
            summary.add_error(format!("{file}: {err}"));
        }
    }

    log::info!(
        "plan finished: {} planned, {} applied, {} skipped, {} error(s)",
        summary.planned,
        summary.applied,
        summary.skipped,
        summary.errors
    );
    summary
}

fn narrate(op: &Operation, step: usize, total: usize, dry_run: bool) {
    let counter = format!("[{step}/{total}]").dimmed();
    match &op.action {
        Action::Rename { from, to } => println!(
            "{counter} {}ename {} to {}...",
            if dry_run { "Would r" } else { "R" },
            from.bold(),
            to.bold()
        ),
        Action::Delete { files } => {
            for file in files {
                println!(
                    "{counter} {}emove {}...",
                    if dry_run { "Would r" } else { "R" },
                    file.bold()
                );
            }
        }
        Action::Skip { .. } => {}
    }
}
