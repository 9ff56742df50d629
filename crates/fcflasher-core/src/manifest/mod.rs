//! Manifest cache loading and processing
//!
//! The remote board manifest maps USB vendor/product identifiers to board
//! platform names. Processing it is expensive (network fetch of a gzipped
//! document), so the flattened result is persisted to a JSON cache file
//! that stays valid for ten days. Consumers call `process_and_export`,
//! which reuses a valid cache and otherwise fetches, extracts, and
//! persists a fresh one.

mod extract;
mod fetch;

pub use extract::{extract, normalize_usb_id, walk, ManifestVisitor, UsbIdCollector};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use thiserror::Error;

/// Flattened manifest: normalized `vendor:pid` to ordered platform names
pub type ManifestCache = BTreeMap<String, Vec<String>>;

/// Well-known manifest location
pub const MANIFEST_URL: &str = "https://firmware.ardupilot.org/manifest.json.gz";

/// Cache files older than this are re-derived
pub const CACHE_MAX_AGE: Duration = Duration::from_secs(10 * 24 * 60 * 60);

/// Errors surfaced by a forced manifest refresh
///
/// Cache read failures are never errors (the cache is re-derived); these
/// only cover the fetch-extract-persist path, which callers treat as
/// best-effort registry enrichment.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Network failure or non-success status
    #[error("manifest download failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Gunzip or file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON
    #[error("manifest decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Downloads and processes the board manifest, maintaining the cache file
#[derive(Debug, Clone)]
pub struct ManifestHandler {
    url: String,
}

impl Default for ManifestHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestHandler {
    /// Handler pointed at the well-known manifest location
    pub fn new() -> Self {
        Self {
            url: MANIFEST_URL.to_string(),
        }
    }

    /// Handler pointed at an alternative manifest location
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Check that the cache file exists and is younger than the maximum age
    pub fn is_cache_valid(path: &Path) -> bool {
        let age = fs::metadata(path)
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|mtime| SystemTime::now().duration_since(mtime).ok());
        match age {
            Some(age) => age < CACHE_MAX_AGE,
            None => false,
        }
    }

    /// Read and parse the cache file
    ///
    /// Any I/O or decode failure yields `None`: a corrupt cache is
    /// equivalent to an absent one and triggers a fresh derivation.
    pub fn load(path: &Path) -> Option<ManifestCache> {
        let data = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&data) {
            Ok(cache) => Some(cache),
            Err(err) => {
                log::debug!("discarding unreadable cache {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Serialize the cache to `path`, atomically
    ///
    /// Writes a sibling temporary file and renames it into place so a
    /// crash never leaves a half-written cache behind.
    pub fn persist(cache: &ManifestCache, path: &Path) -> Result<(), ManifestError> {
        let data = serde_json::to_string_pretty(cache)?;
        let mut tmp = path.to_path_buf();
        tmp.set_extension("tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Produce the current cache, refreshing the file if needed
    ///
    /// Uses the existing cache when it is present, fresh, and readable;
    /// otherwise fetches the manifest, extracts the USB identifier map,
    /// and persists it. This is the only entry point other components
    /// call.
    pub fn process_and_export(&self, path: &Path) -> Result<ManifestCache, ManifestError> {
        if Self::is_cache_valid(path) {
            if let Some(cache) = Self::load(path) {
                log::debug!("using existing board cache at {}", path.display());
                return Ok(cache);
            }
        }

        log::info!("refreshing board manifest from {}", self.url);
        let document = self.fetch_remote()?;
        let cache = extract(&document);
        Self::persist(&cache, path)?;
        log::info!(
            "cached {} USB ids ({} platform mappings) to {}",
            cache.len(),
            cache.values().map(Vec::len).sum::<usize>(),
            path.display()
        );
        Ok(cache)
    }
}
