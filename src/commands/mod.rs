//! Command implementations
//!
//! Each command is a module with an execute function that scans the
//! directory behind a [`FileSystem`], plans its changes, and runs the plan.

pub mod clean;
pub mod sift;

pub use clean::execute as clean;
pub use sift::execute as sift;

use crate::entry::TitleGroups;
use crate::fs::FileSystem;
use crate::output;

/// Flags shared by every command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Ask before changing anything
    pub interactive: bool,
    /// Only narrate what would be done
    pub noop: bool,
    /// Print every file found and every skipped file
    pub verbose: bool,
}

/// Scan the directory once and report what was found
fn scan(fs: &dyn FileSystem, verbose: bool) -> std::io::Result<TitleGroups> {
    println!("Scanning {}...", fs.location());
    let groups = TitleGroups::scan(fs)?;

    if verbose {
        for entry in groups.entries() {
            println!("{}", output::found_file(&entry.filename));
        }
    }
    if !groups.is_empty() {
        println!("{}", output::found_summary(groups.title_count(), groups.file_count()));
    }

    Ok(groups)
}
