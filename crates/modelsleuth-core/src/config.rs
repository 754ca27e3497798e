/// Per-run catalog settings.
///
/// Defaults reproduce the building config the placement UI ships with:
/// models served from `/models/`, placeholder descriptions, scale 2.
use crate::naming::MODEL_EXTENSION;

/// Default URL prefix under which models are served.
pub const DEFAULT_URL_PREFIX: &str = "/models/";

/// Placeholder description written for every discovered asset.
pub const DEFAULT_DESCRIPTION: &str = "Descrição Placeholder.";

/// Default render scale written for every discovered asset.
pub const DEFAULT_SCALE: u32 = 2;

/// Settings that shape the catalog produced by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Filename suffix a file must end with to be catalogued (case-sensitive).
    pub extension: String,
    /// Prefix joined with the relative path to build each entry's URL.
    /// Always ends with `/`.
    pub url_prefix: String,
    pub description: String,
    pub scale: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            extension: MODEL_EXTENSION.to_owned(),
            url_prefix: DEFAULT_URL_PREFIX.to_owned(),
            description: DEFAULT_DESCRIPTION.to_owned(),
            scale: DEFAULT_SCALE,
        }
    }
}

impl CatalogConfig {
    /// Replace the URL prefix, adding the trailing `/` if it is missing.
    pub fn with_url_prefix(mut self, prefix: &str) -> Self {
        let mut prefix = prefix.to_owned();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        self.url_prefix = prefix;
        self
    }

    /// URL for a model at `relative_path` (already `/`-separated).
    pub fn url_for(&self, relative_path: &str) -> String {
        format!("{}{relative_path}", self.url_prefix)
    }
}
