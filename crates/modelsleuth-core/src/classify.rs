/// Path-keyword classification into asset categories.
///
/// Artists organise models into folders such as `special/`, `infra/` or
/// `park/`; the folder (or file) name is the only classification signal.
use crate::model::Category;

/// Keyword table in priority order. The first row with any matching
/// keyword wins; paths matching none are [`Category::Construction`].
const RULES: &[(Category, &[&str])] = &[
    (Category::Special, &["special"]),
    (Category::Infrastructure, &["infra", "infrastructure"]),
    (Category::Nature, &["nature", "park", "tree"]),
];

/// Classify a path relative to the scan root (forward slashes).
///
/// Matching is a case-insensitive substring test over the whole path, so
/// `Parks/Oak.glb`, `nature/x.glb` and `street-tree.glb` are all nature.
pub fn classify_path(relative_path: &str) -> Category {
    let lower = relative_path.to_lowercase();
    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|&(category, _)| category)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_paths_are_construction() {
        assert_eq!(classify_path("Farm-House.glb"), Category::Construction);
        assert_eq!(classify_path("buildings/shop.glb"), Category::Construction);
        assert_eq!(classify_path(""), Category::Construction);
    }

    #[test]
    fn keyword_folders_map_to_categories() {
        assert_eq!(classify_path("special/statue.glb"), Category::Special);
        assert_eq!(classify_path("infra/Road_Tile.glb"), Category::Infrastructure);
        assert_eq!(classify_path("Infrastructure/bridge.glb"), Category::Infrastructure);
        assert_eq!(classify_path("nature/rock.glb"), Category::Nature);
        assert_eq!(classify_path("Parks/bench.glb"), Category::Nature);
    }

    /// Keywords match anywhere, including inside the filename.
    #[test]
    fn keywords_match_filenames_too() {
        assert_eq!(classify_path("tree.glb"), Category::Nature);
        assert_eq!(classify_path("props/Street-Tree.glb"), Category::Nature);
        assert_eq!(classify_path("misc/SpecialTower.glb"), Category::Special);
    }

    #[test]
    fn priority_special_over_infrastructure_over_nature() {
        assert_eq!(classify_path("infra/special/gate.glb"), Category::Special);
        assert_eq!(classify_path("park/infra/lamp.glb"), Category::Infrastructure);
        assert_eq!(classify_path("nature/trees/oak.glb"), Category::Nature);
    }

    /// Substring matching is intentionally loose: "street" contains "tree".
    #[test]
    fn substring_matches_inside_words() {
        assert_eq!(classify_path("street/lamp.glb"), Category::Nature);
        assert_eq!(classify_path("parking/garage.glb"), Category::Nature);
    }

    proptest! {
        #[test]
        fn classification_is_pure(path in "[a-zA-Z/_. -]{0,48}") {
            prop_assert_eq!(classify_path(&path), classify_path(&path));
            prop_assert_eq!(classify_path(&path), classify_path(&path.to_uppercase()));
        }
    }
}
