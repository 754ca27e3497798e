/// Data model for the ModelSleuth catalog.
///
/// Re-exports the asset entry, its category/icon enums, and the ordered
/// catalog that the scanner fills.
pub mod asset;
pub mod catalog;
pub mod format;

pub use asset::{AssetEntry, Category, Icon};
pub use catalog::Catalog;
