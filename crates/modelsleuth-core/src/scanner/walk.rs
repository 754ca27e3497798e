/// Directory walker using `jwalk` in serial, sorted mode.
///
/// Entries within each directory are sorted by name, so two scans of the
/// same tree produce the same catalog order and the same collision suffixes.
/// Directory symlinks are not followed; a symlink that resolves to a regular
/// file is catalogued like the file itself.
use crate::classify::classify_path;
use crate::config::CatalogConfig;
use crate::error::ScanError;
use crate::model::{AssetEntry, Catalog};
use crate::naming::{display_name, sanitize_key};
use crate::scanner::{ScanOutcome, ScanStats};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

/// Walk `root` and catalogue every file whose name ends with
/// `config.extension`. The root must already be validated.
pub fn walk_models(root: &Path, config: &CatalogConfig) -> Result<ScanOutcome, ScanError> {
    let start = Instant::now();
    let mut catalog = Catalog::new();
    let mut stats = ScanStats::default();

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    for entry_result in walker {
        let entry = entry_result?;

        // Depth 0 is the root itself.
        if entry.depth == 0 {
            continue;
        }
        stats.entries_visited += 1;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        let Some(stem) = file_name.strip_suffix(config.extension.as_str()) else {
            continue;
        };

        let path = entry.path();
        if file_type.is_symlink() && !path.is_file() {
            debug!("Skipping {}: symlink does not resolve to a file", path.display());
            continue;
        }

        let relative = relative_url_path(root, &path);
        let base_key = sanitize_key(stem);
        let category = classify_path(&relative);
        let asset = AssetEntry::new(
            display_name(stem),
            config.description.as_str(),
            category,
            config.url_for(&relative),
            config.scale,
        );

        let key = catalog.insert_unique(&base_key, asset);
        if key != base_key {
            stats.key_collisions += 1;
            debug!("Key '{base_key}' already taken, {relative} stored as '{key}'");
        }
        debug!("Catalogued {relative} as '{key}' ({category})");
        stats.models_found += 1;
    }

    stats.duration = start.elapsed();
    Ok(ScanOutcome { catalog, stats })
}

/// Path of `path` relative to `root`, joined with `/` on every platform.
pub fn relative_url_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
