//! Manifest cache maintenance command

use fcflasher_core::manifest::ManifestHandler;
use std::fs;
use std::path::Path;

/// Refresh the board cache if needed and print a summary
///
/// With `force`, the existing cache file is removed first so a fresh
/// fetch always happens.
pub fn run_refresh(cache_path: &Path, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = cache_path.parent() {
        fs::create_dir_all(dir)?;
    }
    if force && cache_path.exists() {
        fs::remove_file(cache_path)?;
    }

    let cache = ManifestHandler::new().process_and_export(cache_path)?;

    let device_count = cache.len();
    let platform_count: usize = cache.values().map(Vec::len).sum();
    println!("Found {} unique USB ids", device_count);
    println!("Total platform mappings: {}", platform_count);
    Ok(())
}
