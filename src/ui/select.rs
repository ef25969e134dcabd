//! Interactive keep selection for sift

use byte_unit::{Byte, UnitType};
use chrono::{DateTime, Local};
use colored::Colorize;

use super::input::UserInput;
use crate::entry::TitleGroup;
use crate::fs::FileSystem;
use crate::plan::sift::{KeepSelector, KeepSet, parse_keep_input};

/// Asks the user which files of each group to keep.
///
/// The group is listed with 1-based numbers, then one line of input is read
/// and resolved with [`parse_keep_input`]. If the prompt itself fails the
/// whole group is kept.
pub struct InteractiveSelector<'a> {
    input: &'a dyn UserInput,
    fs: &'a dyn FileSystem,
}

impl<'a> InteractiveSelector<'a> {
    #[must_use]
    pub fn new(input: &'a dyn UserInput, fs: &'a dyn FileSystem) -> Self {
        Self { input, fs }
    }

    fn describe(&self, name: &str) -> String {
        let Ok(stat) = self.fs.stat(name) else {
            return String::new();
        };
        let size = Byte::from_u64(stat.len)
            .get_appropriate_unit(UnitType::Binary)
            .to_string();
        match stat.modified {
            Some(modified) => {
                let modified: DateTime<Local> = modified.into();
                format!("{size}, {}", modified.format("%Y-%m-%d %H:%M"))
            }
            None => size,
        }
    }
}

impl KeepSelector for InteractiveSelector<'_> {
    fn select(&self, group: &TitleGroup) -> KeepSet {
        println!("\n{} {}", "Title:".bold(), group.title.cyan().bold());
        for (i, entry) in group.entries.iter().enumerate() {
            let details = self.describe(&entry.filename);
            if details.is_empty() {
                println!("  {}. {}", i + 1, entry.filename);
            } else {
                println!("  {}. {} {}", i + 1, entry.filename, format!("({details})").dimmed());
            }
        }

        let prompt = "Files to keep (comma-separated numbers, 0 for none, enter for all)";
        match self.input.prompt_text(prompt, "") {
            Ok(line) => parse_keep_input(&line, group.len()),
            Err(e) => {
                log::warn!("selection for '{}' failed, keeping all: {e}", group.title);
                (0..group.len()).collect()
            }
        }
    }
}
