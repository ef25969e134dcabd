//! Output formatting for CLI display
//!
//! Helpers for the scan and result lines both commands print. File names and
//! counts are rendered bold.

use colored::Colorize;

/// Line printed for each file found during a verbose scan
#[must_use]
pub fn found_file(filename: &str) -> String {
    format!("Found {}.", filename.bold())
}

/// Scan summary line
#[must_use]
pub fn found_summary(titles: usize, files: usize) -> String {
    format!(
        "Found {} titles across {} files.",
        titles.to_string().bold(),
        files.to_string().bold()
    )
}

/// Closing line of a run, e.g. "Cleaned 2 of 5 files."
///
/// `verb` is the past tense, lower case ("cleaned", "removed"). With `noop`
/// the line reads "Would have cleaned 2 of 5 files." instead.
#[must_use]
pub fn outcome(verb: &str, noop: bool, count: usize, total: usize) -> String {
    let lead = if noop {
        format!("Would have {verb}")
    } else {
        capitalize(verb)
    };
    format!(
        "{lead} {} of {} files.",
        count.to_string().bold(),
        total.to_string().bold()
    )
}

/// Pre-execution total for sift, e.g. "2 of 5 files marked for removal."
#[must_use]
pub fn marked_for_removal(count: usize, total: usize) -> String {
    format!(
        "{} of {} files marked for removal.",
        count.to_string().bold(),
        total.to_string().bold()
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
