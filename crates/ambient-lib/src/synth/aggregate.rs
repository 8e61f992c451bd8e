//! Barrel of every bundle module plus the closed set of bundle names.

use ambient_core::{Catalog, ROOT_BUNDLE};

use super::bundle::CatalogTable;
use crate::{Error, Result};

/// Local binding of the root bundle's export inside the barrel, whose own
/// export is already named `lib`.
pub const ROOT_ALIAS: &str = "libBase";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateEntry {
    pub bundle: String,
    /// Name the bundle module exports.
    pub export_name: String,
    /// Name the barrel binds that export to.
    pub binding: String,
}

impl AggregateEntry {
    pub fn is_aliased(&self) -> bool {
        self.binding != self.export_name
    }
}

/// Bundle name → binding in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateModule {
    entries: Vec<AggregateEntry>,
}

impl AggregateModule {
    /// Checks that `table` holds exactly the catalog's bundles and lists them in
    /// catalog order.
    pub fn synthesize(catalog: &Catalog, table: &CatalogTable) -> Result<Self> {
        if let Some(missing) = catalog.names().find(|name| !table.contains(name)) {
            return Err(Error::AggregateMismatch {
                detail: format!("no module synthesized for bundle `{missing}`"),
            });
        }
        if let Some(extra) = table.iter().find(|m| !catalog.contains(m.name())) {
            return Err(Error::AggregateMismatch {
                detail: format!("module `{}` is not in the catalog", extra.name()),
            });
        }

        let entries = catalog
            .names()
            .filter_map(|name| table.get(name))
            .map(|module| {
                let export_name = module.export_name().to_owned();
                let binding = if module.name() == ROOT_BUNDLE {
                    ROOT_ALIAS.to_owned()
                } else {
                    export_name.clone()
                };
                AggregateEntry {
                    bundle: module.name().to_owned(),
                    export_name,
                    binding,
                }
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[AggregateEntry] {
        &self.entries
    }

    /// The closed enumeration of bundle names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.bundle.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
