/// Ordered key → entry map that the scanner fills and the writer serializes.
///
/// Backed by an `IndexMap`, so lookups are O(1) and serialization walks the
/// entries in the order they were discovered.
use crate::error::CatalogError;
use crate::model::AssetEntry;
use indexmap::IndexMap;
use serde::de::{Deserializer, Error as _, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Default indentation width of the written JSON document.
pub const DEFAULT_INDENT: usize = 2;

/// The generated catalog: asset keys mapped to entries, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, AssetEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&AssetEntry> {
        self.entries.get(key)
    }

    /// Iterate `(key, entry)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Insert `entry` under `key`.
    ///
    /// An existing key keeps its position and has its entry replaced; the
    /// previous entry is returned.
    pub fn insert(&mut self, key: String, entry: AssetEntry) -> Option<AssetEntry> {
        self.entries.insert(key, entry)
    }

    /// First key derived from `base` that is not yet taken.
    ///
    /// Returns `base` itself when free, otherwise `base_1`, `base_2`, … up to
    /// the first suffix not already present.
    pub fn resolve_key(&self, base: &str) -> String {
        if !self.contains_key(base) {
            return base.to_owned();
        }
        let mut counter: u64 = 1;
        loop {
            let candidate = format!("{base}_{counter}");
            if !self.contains_key(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    /// Insert `entry` under the first free key derived from `base` and return
    /// the key actually used.
    pub fn insert_unique(&mut self, base: &str, entry: AssetEntry) -> String {
        let key = self.resolve_key(base);
        self.entries.insert(key.clone(), entry);
        key
    }

    /// Serialize as pretty-printed JSON with `indent` spaces per level.
    ///
    /// Non-ASCII text is written verbatim. An indent of 0 still breaks lines
    /// but adds no leading whitespace.
    pub fn write_json<W: Write>(&self, writer: W, indent: usize) -> Result<(), CatalogError> {
        let indent = vec![b' '; indent];
        let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut ser)?;
        Ok(())
    }

    /// Write the catalog to `path`, overwriting any existing file.
    pub fn save(&self, path: &Path, indent: usize) -> Result<(), CatalogError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer, indent)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a catalog previously written by [`Catalog::save`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

// A repeated key in the document is an error rather than a silent overwrite.
impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping asset keys to asset entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Catalog, A::Error> {
                let mut entries = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, entry)) = access.next_entry::<String, AssetEntry>()? {
                    if entries.insert(key.clone(), entry).is_some() {
                        return Err(A::Error::custom(format_args!("duplicate asset key `{key}`")));
                    }
                }
                Ok(Catalog { entries })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
