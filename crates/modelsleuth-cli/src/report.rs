/// Console report — the human-readable lines printed around a scan.
///
/// Every function writes to a caller-supplied `Write` so the run can be
/// captured in tests; the binary passes locked stdout/stderr.
use modelsleuth_core::analysis::CategoryStats;
use modelsleuth_core::model::format::{format_count, format_duration};
use modelsleuth_core::scanner::ScanStats;
use modelsleuth_core::{Catalog, ScanError};
use std::io::{self, Write};
use std::path::Path;

/// Number of catalog entries shown in the preview.
pub const PREVIEW_LIMIT: usize = 3;

pub fn scan_started(out: &mut impl Write, root: &Path) -> io::Result<()> {
    writeln!(out, "Scanning folder: {}", root.display())
}

/// Root validation failure, written to the error stream.
pub fn invalid_root(err_out: &mut impl Write, err: &ScanError) -> io::Result<()> {
    writeln!(err_out, "Error: {err}")
}

pub fn no_models(out: &mut impl Write, extension: &str) -> io::Result<()> {
    writeln!(out, "No {extension} files found.")
}

pub fn models_found(
    out: &mut impl Write,
    extension: &str,
    stats: &ScanStats,
) -> io::Result<()> {
    writeln!(
        out,
        "Found {} {extension} files ({} entries scanned in {})",
        format_count(stats.models_found),
        format_count(stats.entries_visited),
        format_duration(stats.duration)
    )
}

pub fn saved(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "JSON saved to: {}", path.display())
}

/// Key, name, URL and category of the first [`PREVIEW_LIMIT`] entries,
/// followed by a count of the rest.
pub fn preview(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Preview (first {PREVIEW_LIMIT} entries):")?;
    for (key, entry) in catalog.iter().take(PREVIEW_LIMIT) {
        writeln!(out)?;
        writeln!(out, "  {key}:")?;
        writeln!(out, "    - Name: {}", entry.name)?;
        writeln!(out, "    - URL: {}", entry.url)?;
        writeln!(out, "    - Category: {}", entry.category)?;
    }

    let remaining = catalog.len().saturating_sub(PREVIEW_LIMIT);
    if remaining > 0 {
        writeln!(out)?;
        let noun = if remaining == 1 { "entry" } else { "entries" };
        writeln!(out, "  ... and {} more {noun}", format_count(remaining as u64))?;
    }
    Ok(())
}

/// One line per non-empty category with its count and summed default cost.
pub fn category_breakdown(out: &mut impl Write, stats: &[CategoryStats]) -> io::Result<()> {
    if stats.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "By category:")?;
    for s in stats {
        writeln!(
            out,
            "  {:<16}{:>8}   cost {}",
            s.category.label(),
            format_count(s.count),
            format_count(s.total_cost)
        )?;
    }
    Ok(())
}
