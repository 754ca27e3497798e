//! ModelSleuth — .glb model catalog generator.
//!
//! Thin binary entry point. All logic lives in the `modelsleuth-core`
//! and `modelsleuth-cli` crates.

use clap::Parser;
use modelsleuth_cli::Args;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the report on stdout.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("ModelSleuth starting");

    let outcome = modelsleuth_cli::run(&args)?;
    Ok(ExitCode::from(outcome.exit_status()))
}
