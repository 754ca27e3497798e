/// Analysis modules — post-scan summaries for the console report.

pub mod categories;

pub use categories::{category_breakdown, CategoryStats};
