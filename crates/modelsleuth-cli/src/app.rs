/// Run orchestration: validate → scan → write → report.
///
/// An invalid root prints an error and exits 1, an empty scan prints a
/// notice and writes nothing, otherwise the catalog file is (over)written and
/// a preview is printed.
use crate::args::Args;
use crate::report;
use anyhow::{Context, Result};
use modelsleuth_core::analysis::category_breakdown;
use modelsleuth_core::scanner::{scan_validated, validate_root};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

/// How a run ended. Fatal failures are returned as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The catalog was written to `path`.
    Written { path: PathBuf, count: usize },
    /// The scan found no model files; nothing was written.
    NoModels,
    /// The root does not exist or is not a directory.
    InvalidRoot,
}

impl RunOutcome {
    /// Process exit status for this outcome.
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Written { .. } | Self::NoModels => 0,
            Self::InvalidRoot => 1,
        }
    }
}

/// Run against the process's stdout and stderr.
pub fn run(args: &Args) -> Result<RunOutcome> {
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(args, &mut stdout.lock(), &mut stderr.lock())
}

/// Run with the report going to `out` and user errors to `err_out`.
pub fn run_with(
    args: &Args,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> Result<RunOutcome> {
    if let Err(err) = validate_root(&args.root) {
        report::invalid_root(err_out, &err)?;
        return Ok(RunOutcome::InvalidRoot);
    }

    let config = args.catalog_config();
    report::scan_started(out, &args.root)?;

    let outcome = scan_validated(&args.root, &config)
        .with_context(|| format!("scan of {} failed", args.root.display()))?;
    let catalog = outcome.catalog;

    if catalog.is_empty() {
        report::no_models(out, &config.extension)?;
        return Ok(RunOutcome::NoModels);
    }

    report::models_found(out, &config.extension, &outcome.stats)?;

    catalog
        .save(&args.output, args.indent)
        .with_context(|| format!("failed to write catalog to {}", args.output.display()))?;
    info!("Wrote {} entries to {}", catalog.len(), args.output.display());

    report::saved(out, &args.output)?;
    report::preview(out, &catalog)?;
    report::category_breakdown(out, &category_breakdown(&catalog))?;
    out.flush()?;

    Ok(RunOutcome::Written {
        path: args.output.clone(),
        count: catalog.len(),
    })
}
