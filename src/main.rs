//! fcflasher - flight controller firmware manager
//!
//! Identifies attached flight controller boards, validates candidate
//! firmware images against the board identity tables, and installs
//! firmware over the connection the board uses:
//! - **Serial boards** (Pixhawk family and friends) - APJ descriptor
//!   firmware, flashed through an external uploader tool
//! - **Board computers and SITL** - native ELF firmware, placed on the
//!   filesystem after architecture and identity checks
//!
//! Board identification merges a static identifier table with USB ids
//! recovered from the remote board manifest, cached locally.

mod cli;
mod commands;
mod uploader;

use clap::Parser;
use cli::{Cli, Commands};
use fcflasher_core::identity::IdentifierRegistry;
use fcflasher_core::manifest::ManifestHandler;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the board identifier cache
const DEFAULT_CACHE_PATH: &str = "/var/lib/fcflasher/boards.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let cache_path = cli
        .cache
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_PATH));

    match cli.command {
        Commands::Detect => {
            let registry = build_registry(&cache_path);
            commands::detect::run_detect(&registry)
        }
        Commands::Classify {
            product,
            manufacturer,
        } => {
            let registry = build_registry(&cache_path);
            commands::detect::run_classify(&registry, &product, &manufacturer);
            Ok(())
        }
        Commands::Validate { firmware, board } => commands::firmware::run_validate(&firmware, board),
        Commands::Install {
            firmware,
            board,
            port,
            dest,
            uploader,
        } => commands::firmware::run_install(
            &firmware,
            board,
            port.as_deref(),
            dest.as_deref(),
            &uploader,
        ),
        Commands::Manifest { force } => commands::manifest::run_refresh(&cache_path, force),
        Commands::ListBoards => {
            commands::list::list_boards();
            Ok(())
        }
    }
}

/// Build the identifier registry, enriching it from the manifest cache
///
/// Enrichment is best-effort: a failed refresh with no usable cache
/// degrades to the static identifier table with a warning.
fn build_registry(cache_path: &Path) -> IdentifierRegistry {
    if let Some(dir) = cache_path.parent() {
        let _ = fs::create_dir_all(dir);
    }

    match ManifestHandler::new().process_and_export(cache_path) {
        Ok(cache) => IdentifierRegistry::with_manifest(&cache),
        Err(err) => {
            log::warn!(
                "manifest refresh failed ({}); using static identifiers only",
                err
            );
            IdentifierRegistry::from_static()
        }
    }
}
