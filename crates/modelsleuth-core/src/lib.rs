/// ModelSleuth Core — scanning, classification, and catalog model.
///
/// This crate contains all business logic with zero console I/O.
/// It is designed to be reusable across different frontends (CLI, build
/// scripts, asset pipelines).
///
/// # Modules
///
/// - [`model`] — Asset entries, categories, and the ordered catalog.
/// - [`naming`] — Key sanitizing and display-name derivation from filenames.
/// - [`classify`] — Path-keyword classification into categories.
/// - [`scanner`] — Recursive `.glb` discovery that assembles a catalog.
/// - [`analysis`] — Post-scan summaries (per-category breakdown).
/// - [`config`] — Per-run catalog constants with defaults.
/// - [`error`] — Error types returned by the scanner and catalog I/O.
pub mod analysis;
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod naming;
pub mod scanner;

pub use config::CatalogConfig;
pub use error::{CatalogError, ScanError};
pub use model::{AssetEntry, Catalog, Category, Icon};
