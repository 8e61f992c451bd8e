//! Catalog of declaration bundles.
//!
//! The catalog is derived from the type-checker's library map in three steps:
//!
//! 1. Upstream entries, deduplicated by name. A repeated name keeps its first
//!    position and takes the later file name.
//! 2. A `<name>.full` variant right after every yearly base (`es2016`, `esnext`, ...).
//!    `es2015` has none: its full library ships under the separate `es6` name.
//! 3. The root bundle `lib`, always last.
//!
//! The resulting order is embedded into generated output, so it never depends on
//! anything but the input table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the synthetic bundle used when no target library is configured.
pub const ROOT_BUNDLE: &str = "lib";

const ROOT_FILE: &str = "lib.d.ts";

/// Yearly base that must not get a derived full variant.
const LEGACY_FULL_EXCLUSION: &str = "es2015";

/// Library map of the TypeScript compiler, in declaration order.
///
/// Some names appear twice (`esnext.array`, `esnext.string`, `esnext.promise`);
/// the later entry wins, as it does in the compiler's own map.
pub const TYPESCRIPT_LIBS: &[(&str, &str)] = &[
    // JavaScript only
    ("es5", "lib.es5.d.ts"),
    ("es6", "lib.es2015.d.ts"),
    ("es2015", "lib.es2015.d.ts"),
    ("es7", "lib.es2016.d.ts"),
    ("es2016", "lib.es2016.d.ts"),
    ("es2017", "lib.es2017.d.ts"),
    ("es2018", "lib.es2018.d.ts"),
    ("es2019", "lib.es2019.d.ts"),
    ("es2020", "lib.es2020.d.ts"),
    ("es2021", "lib.es2021.d.ts"),
    ("es2022", "lib.es2022.d.ts"),
    ("es2023", "lib.es2023.d.ts"),
    ("es2024", "lib.es2024.d.ts"),
    ("esnext", "lib.esnext.d.ts"),
    // Host only
    ("dom", "lib.dom.d.ts"),
    ("dom.iterable", "lib.dom.iterable.d.ts"),
    ("dom.asynciterable", "lib.dom.asynciterable.d.ts"),
    ("webworker", "lib.webworker.d.ts"),
    ("webworker.importscripts", "lib.webworker.importscripts.d.ts"),
    ("webworker.iterable", "lib.webworker.iterable.d.ts"),
    ("webworker.asynciterable", "lib.webworker.asynciterable.d.ts"),
    ("scripthost", "lib.scripthost.d.ts"),
    // By-feature options
    ("es2015.core", "lib.es2015.core.d.ts"),
    ("es2015.collection", "lib.es2015.collection.d.ts"),
    ("es2015.generator", "lib.es2015.generator.d.ts"),
    ("es2015.iterable", "lib.es2015.iterable.d.ts"),
    ("es2015.promise", "lib.es2015.promise.d.ts"),
    ("es2015.proxy", "lib.es2015.proxy.d.ts"),
    ("es2015.reflect", "lib.es2015.reflect.d.ts"),
    ("es2015.symbol", "lib.es2015.symbol.d.ts"),
    ("es2015.symbol.wellknown", "lib.es2015.symbol.wellknown.d.ts"),
    ("es2016.array.include", "lib.es2016.array.include.d.ts"),
    ("es2016.intl", "lib.es2016.intl.d.ts"),
    ("es2017.arraybuffer", "lib.es2017.arraybuffer.d.ts"),
    ("es2017.date", "lib.es2017.date.d.ts"),
    ("es2017.object", "lib.es2017.object.d.ts"),
    ("es2017.sharedmemory", "lib.es2017.sharedmemory.d.ts"),
    ("es2017.string", "lib.es2017.string.d.ts"),
    ("es2017.intl", "lib.es2017.intl.d.ts"),
    ("es2017.typedarrays", "lib.es2017.typedarrays.d.ts"),
    ("es2018.asyncgenerator", "lib.es2018.asyncgenerator.d.ts"),
    ("es2018.asynciterable", "lib.es2018.asynciterable.d.ts"),
    ("es2018.intl", "lib.es2018.intl.d.ts"),
    ("es2018.promise", "lib.es2018.promise.d.ts"),
    ("es2018.regexp", "lib.es2018.regexp.d.ts"),
    ("es2019.array", "lib.es2019.array.d.ts"),
    ("es2019.object", "lib.es2019.object.d.ts"),
    ("es2019.string", "lib.es2019.string.d.ts"),
    ("es2019.symbol", "lib.es2019.symbol.d.ts"),
    ("es2019.intl", "lib.es2019.intl.d.ts"),
    ("es2020.bigint", "lib.es2020.bigint.d.ts"),
    ("es2020.date", "lib.es2020.date.d.ts"),
    ("es2020.promise", "lib.es2020.promise.d.ts"),
    ("es2020.sharedmemory", "lib.es2020.sharedmemory.d.ts"),
    ("es2020.string", "lib.es2020.string.d.ts"),
    ("es2020.symbol.wellknown", "lib.es2020.symbol.wellknown.d.ts"),
    ("es2020.intl", "lib.es2020.intl.d.ts"),
    ("es2020.number", "lib.es2020.number.d.ts"),
    ("es2021.promise", "lib.es2021.promise.d.ts"),
    ("es2021.string", "lib.es2021.string.d.ts"),
    ("es2021.weakref", "lib.es2021.weakref.d.ts"),
    ("es2021.intl", "lib.es2021.intl.d.ts"),
    ("es2022.array", "lib.es2022.array.d.ts"),
    ("es2022.error", "lib.es2022.error.d.ts"),
    ("es2022.intl", "lib.es2022.intl.d.ts"),
    ("es2022.object", "lib.es2022.object.d.ts"),
    ("es2022.string", "lib.es2022.string.d.ts"),
    ("es2022.regexp", "lib.es2022.regexp.d.ts"),
    ("es2023.array", "lib.es2023.array.d.ts"),
    ("es2023.collection", "lib.es2023.collection.d.ts"),
    ("es2023.intl", "lib.es2023.intl.d.ts"),
    ("es2024.arraybuffer", "lib.es2024.arraybuffer.d.ts"),
    ("es2024.collection", "lib.es2024.collection.d.ts"),
    ("es2024.object", "lib.es2024.object.d.ts"),
    ("es2024.promise", "lib.es2024.promise.d.ts"),
    ("es2024.regexp", "lib.es2024.regexp.d.ts"),
    ("es2024.sharedmemory", "lib.es2024.sharedmemory.d.ts"),
    ("es2024.string", "lib.es2024.string.d.ts"),
    ("esnext.array", "lib.es2023.array.d.ts"),
    ("esnext.collection", "lib.esnext.collection.d.ts"),
    ("esnext.symbol", "lib.es2019.symbol.d.ts"),
    ("esnext.asynciterable", "lib.es2018.asynciterable.d.ts"),
    ("esnext.intl", "lib.esnext.intl.d.ts"),
    ("esnext.disposable", "lib.esnext.disposable.d.ts"),
    ("esnext.bigint", "lib.es2020.bigint.d.ts"),
    ("esnext.string", "lib.es2022.string.d.ts"),
    ("esnext.promise", "lib.es2024.promise.d.ts"),
    ("esnext.weakref", "lib.es2021.weakref.d.ts"),
    ("esnext.decorators", "lib.esnext.decorators.d.ts"),
    ("esnext.object", "lib.es2024.object.d.ts"),
    ("esnext.array", "lib.esnext.array.d.ts"),
    ("esnext.regexp", "lib.es2024.regexp.d.ts"),
    ("esnext.string", "lib.es2024.string.d.ts"),
    ("esnext.iterator", "lib.esnext.iterator.d.ts"),
    ("esnext.promise", "lib.esnext.promise.d.ts"),
    ("esnext.float16", "lib.esnext.float16.d.ts"),
    ("decorators", "lib.decorators.d.ts"),
    ("decorators.legacy", "lib.decorators.legacy.d.ts"),
];

/// A single declaration bundle: its catalog name and the file it is read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BundleDescriptor {
    name: String,
    #[serde(rename = "file")]
    source_file_name: String,
}

impl BundleDescriptor {
    pub fn new(name: impl Into<String>, source_file_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_file_name: source_file_name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_file_name(&self) -> &str {
        &self.source_file_name
    }

    /// Whether this is the synthetic root bundle.
    pub fn is_root(&self) -> bool {
        self.name == ROOT_BUNDLE
    }
}

/// Ordered, deduplicated set of bundle descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    bundles: IndexMap<String, BundleDescriptor>,
}

impl Catalog {
    /// Catalog derived from the built-in TypeScript library map.
    pub fn typescript() -> Self {
        Self::from_table(TYPESCRIPT_LIBS.iter().copied())
    }

    /// Derives a catalog from `(name, file)` pairs in upstream order.
    pub fn from_table<N, F>(table: impl IntoIterator<Item = (N, F)>) -> Self
    where
        N: Into<String>,
        F: Into<String>,
    {
        let mut upstream: IndexMap<String, String> = IndexMap::new();
        for (name, file) in table {
            upstream.insert(name.into(), file.into());
        }

        let mut bundles = IndexMap::with_capacity(upstream.len() * 2);
        for (name, file) in upstream {
            let full = has_full_variant(&name).then(|| full_variant(&name));
            bundles.insert(name.clone(), BundleDescriptor::new(name, file));
            if let Some(full) = full {
                bundles.insert(full.name.clone(), full);
            }
        }

        bundles.shift_remove(ROOT_BUNDLE);
        bundles.insert(
            ROOT_BUNDLE.to_string(),
            BundleDescriptor::new(ROOT_BUNDLE, ROOT_FILE),
        );

        Self { bundles }
    }

    /// Derives a catalog from a JSON array of `[name, file]` pairs,
    /// the shape of a serialized library map.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let table: Vec<(String, String)> = serde_json::from_str(json)?;
        Ok(Self::from_table(table))
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&BundleDescriptor> {
        self.bundles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bundles.contains_key(name)
    }

    /// Position of a bundle in catalog order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.bundles.get_index_of(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BundleDescriptor> {
        self.bundles.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    /// Descriptors as a JSON array of `{ "name", "file" }` objects.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!(self.bundles.values().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a BundleDescriptor;
    type IntoIter = indexmap::map::Values<'a, String, BundleDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.bundles.values()
    }
}

/// Whether `name` is a yearly base library with a derived full variant.
///
/// Matches `esNNNN` (four digits) and `esnext`, except the legacy `es2015`.
pub fn has_full_variant(name: &str) -> bool {
    if name == LEGACY_FULL_EXCLUSION {
        return false;
    }
    if name == "esnext" {
        return true;
    }
    name.strip_prefix("es")
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

fn full_variant(base: &str) -> BundleDescriptor {
    BundleDescriptor::new(format!("{base}.full"), format!("lib.{base}.full.d.ts"))
}
