//! Integration tests for romsift
//!
//! These tests run both commands end to end against real temporary
//! directories.

use std::fs;
use std::path::Path;

use romsift::commands::{self, RunOptions};
use romsift::fs::DiskFs;
use romsift::plan::{KeepPolicy, PolicySelector};
use romsift::ui::ScriptedInput;
use tempfile::TempDir;

/// Helper function to create a directory holding the given files
fn setup_rom_dir(names: &[&str]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in names {
        fs::write(dir.path().join(name), name.as_bytes()).unwrap();
    }
    dir
}

/// Helper function to list a directory, sorted
fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn sift(dir: &Path, input: &ScriptedInput, options: RunOptions, keep: KeepPolicy) {
    let fs = DiskFs::new(dir);
    let preferred = vec!["Europe".to_string()];
    let policy = PolicySelector::new(keep, &preferred, &fs);
    commands::sift(&fs, input, options, &policy).unwrap();
}

fn interactive() -> RunOptions {
    RunOptions {
        interactive: true,
        ..RunOptions::default()
    }
}

const GAMES: [&str; 3] = ["Game (Europe).bin", "Game (USA) (Beta).bin", "Game (USA).bin"];

#[test]
fn test_clean_leaves_group_without_common_tags() {
    let dir = setup_rom_dir(&GAMES);
    let fs = DiskFs::new(dir.path());

    let summary = commands::clean(&fs, &ScriptedInput::default(), RunOptions::default()).unwrap();
    assert_eq!(summary.planned, 0);
    assert_eq!(listing(dir.path()), GAMES);
}

#[test]
fn test_clean_strips_common_and_singleton_tags() {
    let dir = setup_rom_dir(&[
        "Widget (Rev A).zip",
        "Quest (USA) (Rev 1).bin",
        "Quest (USA) (Rev 2).bin",
    ]);
    let fs = DiskFs::new(dir.path());

    let summary = commands::clean(&fs, &ScriptedInput::default(), RunOptions::default()).unwrap();
    assert_eq!(summary.applied, 3);
    assert_eq!(
        listing(dir.path()),
        vec!["Quest (Rev 1).bin", "Quest (Rev 2).bin", "Widget.zip"]
    );
}

#[test]
fn test_clean_twice_is_a_no_op() {
    let dir = setup_rom_dir(&[
        "Widget (Rev A).zip",
        "Quest (USA) (Rev 1).bin",
        "Quest (USA) (Rev 2).bin",
    ]);
    let fs = DiskFs::new(dir.path());

    commands::clean(&fs, &ScriptedInput::default(), RunOptions::default()).unwrap();
    let after_first = listing(dir.path());

    let second = commands::clean(&fs, &ScriptedInput::default(), RunOptions::default()).unwrap();
    assert_eq!(second.planned, 0);
    assert_eq!(listing(dir.path()), after_first);
}

#[test]
fn test_clean_noop_changes_nothing() {
    let dir = setup_rom_dir(&["Widget (Rev A).zip"]);
    let fs = DiskFs::new(dir.path());
    let options = RunOptions {
        noop: true,
        ..RunOptions::default()
    };

    let summary = commands::clean(&fs, &ScriptedInput::default(), options).unwrap();
    assert_eq!(summary.planned, 1);
    assert_eq!(summary.applied, 0);
    assert_eq!(listing(dir.path()), vec!["Widget (Rev A).zip"]);
}

#[test]
fn test_clean_collision_is_reported_not_overwritten() {
    // Both names clean to "X.bin"
    let dir = setup_rom_dir(&["X (a).bin", "X (a) (a).bin"]);
    let fs = DiskFs::new(dir.path());

    let summary = commands::clean(&fs, &ScriptedInput::default(), RunOptions::default()).unwrap();
    assert_eq!(summary.planned, 2);
    assert_eq!(summary.applied, 1);
    assert_eq!(summary.errors, 1);
    assert_eq!(listing(dir.path()), vec!["X (a).bin", "X.bin"]);
    assert_eq!(fs::read(dir.path().join("X.bin")).unwrap(), b"X (a) (a).bin");
}

#[test]
fn test_sift_interactive_keep_list() {
    let dir = setup_rom_dir(&GAMES);
    let input = ScriptedInput::new(&["1,3"]);

    sift(dir.path(), &input, interactive(), KeepPolicy::First);
    assert_eq!(listing(dir.path()), vec!["Game (Europe).bin", "Game (USA).bin"]);
}

#[test]
fn test_sift_interactive_zero_removes_group() {
    let dir = setup_rom_dir(&GAMES);
    let input = ScriptedInput::new(&["0"]);

    sift(dir.path(), &input, interactive(), KeepPolicy::First);
    assert!(listing(dir.path()).is_empty());
}

#[test]
fn test_sift_interactive_garbage_keeps_everything() {
    let dir = setup_rom_dir(&GAMES);
    let input = ScriptedInput::new(&["abc"]);

    sift(dir.path(), &input, interactive(), KeepPolicy::First);
    assert_eq!(listing(dir.path()), GAMES);
}

#[test]
fn test_sift_policies() {
    let dir = setup_rom_dir(&GAMES);
    sift(dir.path(), &ScriptedInput::default(), RunOptions::default(), KeepPolicy::Preferred);
    assert_eq!(listing(dir.path()), vec!["Game (Europe).bin"]);

    let dir = setup_rom_dir(&GAMES);
    sift(dir.path(), &ScriptedInput::default(), RunOptions::default(), KeepPolicy::Largest);
    // Contents are the names, so the longest name is the largest file
    assert_eq!(listing(dir.path()), vec!["Game (USA) (Beta).bin"]);
}

#[test]
fn test_sift_noop_changes_nothing() {
    let dir = setup_rom_dir(&GAMES);
    let options = RunOptions {
        noop: true,
        ..RunOptions::default()
    };

    sift(dir.path(), &ScriptedInput::default(), options, KeepPolicy::First);
    assert_eq!(listing(dir.path()), GAMES);
}

#[test]
fn test_directories_are_not_titles() {
    let dir = setup_rom_dir(&["Game (USA).bin"]);
    fs::create_dir(dir.path().join("Game (Europe)")).unwrap();

    sift(dir.path(), &ScriptedInput::default(), RunOptions::default(), KeepPolicy::None);
    assert_eq!(listing(dir.path()), vec!["Game (Europe)"]);
}
