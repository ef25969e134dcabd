//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **sift**: keep one (or a chosen few) files per title and delete the rest
//! - **clean**: strip the tags every file of a title shares from its name
//! - **config**: print the effective configuration
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use romsift::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["romsift", "clean", "roms", "--noop"]);
//! assert!(matches!(cli.command, Commands::Clean { noop: true, .. }));
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::commands::RunOptions;
use crate::plan::KeepPolicy;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "romsift")]
#[command(about = "Sift and clean ROM filenames", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print every file found and every file skipped
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Delete all but the chosen files of each title
    #[command(visible_alias = "s")]
    Sift {
        /// Directory holding the ROM files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Choose the files to keep for each title with more than one file
        /// (single-file titles are kept without asking)
        #[arg(short = 'i', long = "interactive")]
        interactive: bool,

        /// Show what would be deleted without deleting anything
        #[arg(short = 'n', long = "noop")]
        noop: bool,

        /// Which file to keep when not interactive (overrides config)
        #[arg(short = 'k', long = "keep", value_enum, value_name = "POLICY")]
        keep: Option<KeepPolicy>,

        /// Preferred tag for the `preferred` policy, best first (repeatable)
        #[arg(short = 'p', long = "prefer", value_name = "TAG")]
        prefer: Vec<String>,
    },

    /// Remove tags shared by every file of a title
    #[command(visible_alias = "c")]
    Clean {
        /// Directory holding the ROM files
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Preview the renames and ask before applying them
        #[arg(short = 'i', long = "interactive")]
        interactive: bool,

        /// Show what would be renamed without renaming anything
        #[arg(short = 'n', long = "noop")]
        noop: bool,
    },

    /// Show the effective configuration and where it is read from
    Config,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Commands {
    /// Directory the command works on, if it takes one
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        match self {
            Self::Sift { dir, .. } | Self::Clean { dir, .. } => Some(dir),
            Self::Config => None,
        }
    }

    /// Run flags for the command, with the global verbose setting folded in
    #[must_use]
    pub fn run_options(&self, verbose: bool) -> RunOptions {
        match self {
            Self::Sift {
                interactive, noop, ..
            }
            | Self::Clean {
                interactive, noop, ..
            } => RunOptions {
                interactive: *interactive,
                noop: *noop,
                verbose,
            },
            Self::Config => RunOptions {
                verbose,
                ..RunOptions::default()
            },
        }
    }
}
