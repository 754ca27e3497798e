/// ModelSleuth CLI — command-line frontend.
///
/// This crate owns argument parsing and console output. Scanning and
/// catalog logic live in `modelsleuth-core`.
pub mod app;
pub mod args;
pub mod report;

pub use app::{run, run_with, RunOutcome};
pub use args::Args;
