/// End-to-end scanner integration tests.
///
/// These tests run the real `scan_models` walk against temporary folder
/// trees created with `tempfile`, then check the catalog it assembles: keys,
/// derived fields, collision suffixes, and the JSON file written from it.
use modelsleuth_core::model::{Catalog, Category, Icon};
use modelsleuth_core::scanner::{scan_models, validate_root};
use modelsleuth_core::{CatalogConfig, ScanError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Create an empty file at `root/rel`, creating parent folders as needed.
fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"glTF").unwrap();
}

/// A reproducible model folder:
///
/// ```text
/// root/
///   Farm-House.glb
///   readme.txt
///   infra/
///     Road_Tile.glb
///   nature/
///     oak.glb
///   special/
///     Statue.glb
///     notes.GLB
/// ```
fn build_model_tree(root: &Path) {
    touch(root, "Farm-House.glb");
    touch(root, "readme.txt");
    touch(root, "infra/Road_Tile.glb");
    touch(root, "nature/oak.glb");
    touch(root, "special/Statue.glb");
    touch(root, "special/notes.GLB");
}

fn scan(root: &Path) -> Catalog {
    scan_models(root, &CatalogConfig::default())
        .expect("scan failed")
        .catalog
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn scan_catalogues_only_glb_files() {
    let tmp = TempDir::new().expect("failed to create temp dir");
    build_model_tree(tmp.path());

    let outcome = scan_models(tmp.path(), &CatalogConfig::default()).unwrap();
    let keys: HashSet<&str> = outcome.catalog.keys().collect();

    assert_eq!(
        keys,
        HashSet::from(["farm_house", "road_tile", "oak", "statue"]),
        "uppercase .GLB and non-model files must be skipped"
    );
    assert_eq!(outcome.stats.models_found, 4);
    // 6 files + 3 folders below the root.
    assert_eq!(outcome.stats.entries_visited, 9);
    assert_eq!(outcome.stats.key_collisions, 0);
}

#[test]
fn root_file_is_construction() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "Farm-House.glb");

    let catalog = scan(tmp.path());
    let entry = catalog.get("farm_house").expect("farm_house missing");

    assert_eq!(entry.name, "Farm House");
    assert_eq!(entry.category, Category::Construction);
    assert_eq!(entry.cost, 10);
    assert_eq!(entry.icon, Icon::Home);
    assert_eq!(entry.url, "/models/Farm-House.glb");
    assert_eq!(entry.scale, 2);
    assert_eq!(entry.description, "Descrição Placeholder.");
}

#[test]
fn infra_folder_is_infrastructure() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "infra/Road_Tile.glb");

    let catalog = scan(tmp.path());
    let entry = catalog.get("road_tile").expect("road_tile missing");

    assert_eq!(entry.name, "Road Tile");
    assert_eq!(entry.category, Category::Infrastructure);
    assert_eq!(entry.cost, 1);
    assert_eq!(entry.icon, Icon::Route);
    assert_eq!(entry.url, "/models/infra/Road_Tile.glb");
}

#[test]
fn nested_urls_keep_folder_structure() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "special/monuments/Big Statue.glb");

    let catalog = scan(tmp.path());
    let entry = catalog.get("big_statue").expect("big_statue missing");
    assert_eq!(entry.url, "/models/special/monuments/Big Statue.glb");
    assert_eq!(entry.category, Category::Special);
    assert_eq!(entry.icon, Icon::Star);
    assert_eq!(entry.cost, 1000);
}

/// `tree.glb` and `Tree.glb` sanitize to the same key; one keeps `tree`,
/// the other gets `tree_1`. Which one wins depends on traversal order, so
/// only the key set and the pairing of names are asserted.
#[test]
fn case_distinct_names_get_suffixed_keys() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "tree.glb");
    touch(tmp.path(), "Tree.glb");

    let outcome = scan_models(tmp.path(), &CatalogConfig::default()).unwrap();
    let catalog = outcome.catalog;

    let keys: HashSet<&str> = catalog.keys().collect();
    assert_eq!(keys, HashSet::from(["tree", "tree_1"]));
    assert_eq!(outcome.stats.key_collisions, 1);

    let urls: HashSet<&str> = catalog.iter().map(|(_, e)| e.url.as_str()).collect();
    assert_eq!(urls, HashSet::from(["/models/tree.glb", "/models/Tree.glb"]));
    // Both contain "tree" in the path.
    assert!(catalog.iter().all(|(_, e)| e.category == Category::Nature));
}

#[test]
fn keys_are_unique_across_folders() {
    let tmp = TempDir::new().unwrap();
    for dir in ["a", "b", "c", "d"] {
        touch(tmp.path(), &format!("{dir}/house.glb"));
        touch(tmp.path(), &format!("{dir}/House.glb"));
    }
    touch(tmp.path(), "house_1.glb");

    let catalog = scan(tmp.path());
    let keys: HashSet<&str> = catalog.keys().collect();
    assert_eq!(keys.len(), 9, "every file must get its own key");
    assert_eq!(catalog.len(), 9);
    assert!(keys.contains("house") && keys.contains("house_1"));
}

#[test]
fn repeated_scans_produce_identical_catalogs() {
    let tmp = TempDir::new().unwrap();
    build_model_tree(tmp.path());
    touch(tmp.path(), "nature/Oak.glb");

    assert_eq!(scan(tmp.path()), scan(tmp.path()));
}

#[test]
fn unusable_name_falls_back_to_placeholder_key() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "!!!.glb");
    touch(tmp.path(), "sub/###.glb");

    let catalog = scan(tmp.path());
    let keys: HashSet<&str> = catalog.keys().collect();
    assert_eq!(keys, HashSet::from(["model", "model_1"]));
}

#[test]
fn empty_directory_yields_empty_catalog() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("empty/nested")).unwrap();
    touch(tmp.path(), "notes.txt");

    let outcome = scan_models(tmp.path(), &CatalogConfig::default()).unwrap();
    assert!(outcome.catalog.is_empty());
    assert_eq!(outcome.stats.models_found, 0);
}

#[test]
fn missing_root_is_reported() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");

    let err = scan_models(&missing, &CatalogConfig::default()).unwrap_err();
    assert!(matches!(err, ScanError::RootNotFound(ref p) if p == &missing));
}

#[test]
fn file_root_is_reported() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "house.glb");
    let file = tmp.path().join("house.glb");

    let err = validate_root(&file).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory(_)));
}

#[test]
fn custom_url_prefix_is_applied() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "park/bench.glb");

    let config = CatalogConfig::default().with_url_prefix("/cdn/glb");
    let catalog = scan_models(tmp.path(), &config).unwrap().catalog;
    assert_eq!(catalog.get("bench").unwrap().url, "/cdn/glb/park/bench.glb");
}

/// Writing the catalog and reading it back reproduces every entry.
#[test]
fn saved_catalog_round_trips() {
    let tmp = TempDir::new().unwrap();
    let models = tmp.path().join("models");
    build_model_tree(&models);
    touch(&models, "Praça Central.glb");

    let catalog = scan(&models);
    let out = tmp.path().join("glb_models.json");
    catalog.save(&out, 2).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("\"Praça Central\""), "non-ASCII must be verbatim");

    let loaded = Catalog::load(&out).unwrap();
    assert_eq!(loaded, catalog);
}

#[test]
fn save_overwrites_existing_file() {
    let tmp = TempDir::new().unwrap();
    touch(tmp.path(), "models/a.glb");
    let out = tmp.path().join("out.json");
    fs::write(&out, "x".repeat(4096)).unwrap();

    let catalog = scan(&tmp.path().join("models"));
    catalog.save(&out, 2).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap())
        .expect("stale bytes left behind");
    assert_eq!(parsed.as_object().map(|o| o.len()), Some(1));
}

#[cfg(unix)]
#[test]
fn symlinked_files_are_catalogued_but_dirs_not_followed() {
    let tmp = TempDir::new().unwrap();
    let outside = tmp.path().join("outside");
    touch(&outside, "linked-dir/hidden.glb");
    touch(&outside, "target.glb");

    let root = tmp.path().join("root");
    fs::create_dir_all(&root).unwrap();
    std::os::unix::fs::symlink(outside.join("target.glb"), root.join("alias.glb")).unwrap();
    std::os::unix::fs::symlink(outside.join("linked-dir"), root.join("dirlink")).unwrap();

    let catalog = scan(&root);
    let keys: HashSet<&str> = catalog.keys().collect();
    assert_eq!(keys, HashSet::from(["alias"]));
}
