//! Romsift CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Keep the first file of every title, delete the rest
//! romsift sift roms
//!
//! # Keep the best-ranked region instead
//! romsift sift roms --keep preferred --prefer USA --prefer Europe
//!
//! # Pick the survivors by hand
//! romsift sift roms --interactive
//!
//! # Preview stripping the tags every file of a title shares
//! romsift clean roms --noop
//!
//! # Show the effective configuration
//! romsift config
//! ```
//!
//! # Configuration
//!
//! Defaults can be set in the user's config directory
//! (`~/.config/romsift/config.toml` on Linux) or with `ROMSIFT_*`
//! environment variables. Command-line flags win over both.

use colored::Colorize;
use romsift::{
    RomSiftError,
    cli::{Cli, Commands},
    commands::{self, RunOptions},
    config::RomSiftConfig,
    fs::DiskFs,
    plan::{KeepPolicy, PolicySelector},
    ui::DialoguerInput,
};
use std::path::Path;

type Result<T> = std::result::Result<T, RomSiftError>;

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn handle_clean_command(dir: &Path, options: RunOptions) -> Result<()> {
    let fs = DiskFs::new(dir);
    commands::clean(&fs, &DialoguerInput::new(), options)?;
    Ok(())
}

fn handle_sift_command(
    dir: &Path,
    options: RunOptions,
    keep: KeepPolicy,
    preferred_tags: &[String],
) -> Result<()> {
    let fs = DiskFs::new(dir);
    let policy = PolicySelector::new(keep, preferred_tags, &fs);
    log::info!("sifting with the {keep} policy");
    commands::sift(&fs, &DialoguerInput::new(), options, &policy)?;
    Ok(())
}

fn handle_config_command(config: &RomSiftConfig) -> Result<()> {
    match RomSiftConfig::config_path() {
        Ok(path) if path.exists() => println!("# {}", path.display()),
        Ok(path) => println!("# {} (not present, using defaults)", path.display()),
        Err(e) => log::warn!("{e}"),
    }
    print!("{}", config.to_toml()?);
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = RomSiftConfig::load()?;

    let verbose = cli.verbose || config.verbose;
    init_logging(verbose);
    log::debug!("effective config: {config:?}");

    if let Some(dir) = cli.command.directory() {
        RomSiftError::check_directory(dir)?;
    }

    let options = cli.command.run_options(verbose);
    match &cli.command {
        Commands::Clean { dir, .. } => handle_clean_command(dir, options),
        Commands::Sift {
            dir, keep, prefer, ..
        } => {
            let keep = keep.unwrap_or(config.keep);
            let preferred = if prefer.is_empty() {
                &config.preferred_tags
            } else {
                prefer
            };
            handle_sift_command(dir, options, keep, preferred)
        }
        Commands::Config => handle_config_command(&config),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
}
