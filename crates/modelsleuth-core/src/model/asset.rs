/// A single catalogued model and the category tables that drive its defaults.
///
/// The field set and JSON names match the building config consumed by the
/// placement UI, so an entry serializes to exactly
/// `name, description, category, cost, url, icon, scale`.
use serde::{Deserialize, Serialize};

/// Coarse classification bucket derived from path keywords.
///
/// Declaration order is the classifier's priority order, highest last:
/// `Special` beats `Infrastructure` beats `Nature` beats `Construction`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Construction,
    Nature,
    Infrastructure,
    Special,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 4] = [
        Self::Construction,
        Self::Nature,
        Self::Infrastructure,
        Self::Special,
    ];

    /// Default placement cost for assets in this category.
    pub fn cost(self) -> u32 {
        match self {
            Self::Construction => 10,
            Self::Nature => 25,
            Self::Infrastructure => 1,
            Self::Special => 1000,
        }
    }

    /// Icon hint shown next to assets in this category.
    pub fn icon(self) -> Icon {
        match self {
            Self::Construction => Icon::Home,
            Self::Nature => Icon::TreeDeciduous,
            Self::Infrastructure => Icon::Route,
            Self::Special => Icon::Star,
        }
    }

    /// Machine name, as written to the catalog.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Construction => "construction",
            Self::Nature => "nature",
            Self::Infrastructure => "infrastructure",
            Self::Special => "special",
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Construction => "Construction",
            Self::Nature => "Nature",
            Self::Infrastructure => "Infrastructure",
            Self::Special => "Special",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon tag understood by the placement UI (lucide icon names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Home,
    TreeDeciduous,
    Route,
    Star,
}

/// One discovered model file and its derived metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetEntry {
    /// Display label derived from the filename stem.
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Default placement cost; always `category.cost()` for scanned entries.
    pub cost: u32,
    /// Web path the model is served from, always with `/` separators.
    pub url: String,
    pub icon: Icon,
    /// Default render scale.
    pub scale: u32,
}

impl AssetEntry {
    /// Build an entry whose cost and icon come from `category`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        url: impl Into<String>,
        scale: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            cost: category.cost(),
            url: url.into(),
            icon: category.icon(),
            scale,
        }
    }
}
