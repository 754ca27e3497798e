/// Command-line surface.
use clap::Parser;
use modelsleuth_core::config::DEFAULT_URL_PREFIX;
use modelsleuth_core::model::catalog::DEFAULT_INDENT;
use modelsleuth_core::CatalogConfig;
use std::path::PathBuf;
use tracing::Level;

/// Output file written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "glb_models.json";

#[derive(Parser, Debug, Clone)]
#[command(name = "modelsleuth", version)]
#[command(about = "Scan a folder tree for .glb models and generate a JSON building catalog")]
pub struct Args {
    /// Folder to scan (recursively)
    pub root: PathBuf,

    /// JSON file to write
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Indentation width of the JSON output
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Prefix for each model's URL
    #[arg(long, default_value = DEFAULT_URL_PREFIX)]
    pub url_prefix: String,

    /// Log scan details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Catalog settings derived from the arguments.
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::default().with_url_prefix(&self.url_prefix)
    }

    /// Maximum log level for the tracing subscriber.
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}
