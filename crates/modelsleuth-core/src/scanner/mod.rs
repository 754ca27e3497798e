/// Scanner module — turns a folder tree of `.glb` files into a catalog.
///
/// The scan is a single blocking pass:
/// - validate the root (missing / not a directory are reported as values),
/// - walk the tree in a stable, sorted order ([`walk`]),
/// - derive a key, name, category and URL per matching file,
/// - insert each entry under a collision-free key.
pub mod walk;

use crate::config::CatalogConfig;
use crate::error::ScanError;
use crate::model::Catalog;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Counters collected while scanning, for the console summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Filesystem entries (files and directories) visited below the root.
    pub entries_visited: u64,
    /// Entries that matched the model extension and were catalogued.
    pub models_found: u64,
    /// Keys that needed a numeric suffix to stay unique.
    pub key_collisions: u64,
    pub duration: Duration,
}

/// Result of a completed scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub catalog: Catalog,
    pub stats: ScanStats,
}

/// Check that `root` exists and is a directory.
pub fn validate_root(root: &Path) -> Result<(), ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Validate `root`, then scan it recursively and build the catalog.
///
/// An empty catalog is a normal result. Walk errors below the root abort
/// the scan with [`ScanError::Walk`].
pub fn scan_models(root: &Path, config: &CatalogConfig) -> Result<ScanOutcome, ScanError> {
    validate_root(root)?;
    scan_validated(root, config)
}

/// Scan a root that [`validate_root`] has already accepted.
///
/// A root that has gone missing since validation surfaces as
/// [`ScanError::Walk`].
pub fn scan_validated(root: &Path, config: &CatalogConfig) -> Result<ScanOutcome, ScanError> {
    info!("Starting scan of {}", root.display());

    let outcome = walk::walk_models(root, config)?;

    info!(
        "Scan complete: {} models ({} collisions) from {} entries in {:?}",
        outcome.stats.models_found,
        outcome.stats.key_collisions,
        outcome.stats.entries_visited,
        outcome.stats.duration
    );
    Ok(outcome)
}
