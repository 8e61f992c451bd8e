//! Per-bundle module model and the symbolic merge of referenced bundles.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;

use ambient_core::utils::to_export_ident;
use ambient_core::{BundleDescriptor, Catalog, Classification};

use crate::analyze::{GlobalVariable, ReferenceSet};
use crate::{Error, Result};

/// Identifier → classification, in insertion order.
pub type BundleTable = IndexMap<String, Classification>;

/// Everything needed to emit one bundle's generated module.
///
/// Referenced bundles stay symbolic: the emitted module spreads their exports
/// ahead of its own entries, so no processing order between bundles is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleModule {
    descriptor: BundleDescriptor,
    export_name: String,
    references: ReferenceSet,
    entries: BundleTable,
    used_tags: BTreeSet<Classification>,
}

impl BundleModule {
    /// Builds the module of `descriptor` from its references and classified globals.
    ///
    /// Every reference must name a catalog bundle.
    pub fn synthesize(
        descriptor: &BundleDescriptor,
        references: ReferenceSet,
        globals: impl IntoIterator<Item = GlobalVariable>,
        catalog: &Catalog,
    ) -> Result<Self> {
        if let Some(unknown) = references.iter().find(|r| !catalog.contains(r)) {
            return Err(Error::UnknownReference {
                bundle: descriptor.name().to_owned(),
                reference: unknown.to_owned(),
            });
        }

        let mut entries = BundleTable::new();
        for global in globals {
            entries.insert(global.name, global.classification);
        }
        let used_tags = entries.values().copied().collect();

        tracing::debug!(
            bundle = descriptor.name(),
            references = references.len(),
            entries = entries.len(),
            "synthesized bundle module"
        );

        Ok(Self {
            descriptor: descriptor.clone(),
            export_name: to_export_ident(descriptor.name()),
            references,
            entries,
            used_tags,
        })
    }

    pub fn descriptor(&self) -> &BundleDescriptor {
        &self.descriptor
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// Identifier the generated module exports its table under.
    pub fn export_name(&self) -> &str {
        &self.export_name
    }

    pub fn references(&self) -> &ReferenceSet {
        &self.references
    }

    /// The bundle's own entries, without referenced bundles.
    pub fn entries(&self) -> &BundleTable {
        &self.entries
    }

    /// Distinct classifications among the own entries, sorted by tag name.
    pub fn used_tags(&self) -> &BTreeSet<Classification> {
        &self.used_tags
    }
}

/// Every synthesized bundle module, keyed by bundle name.
#[derive(Debug, Clone, Default)]
pub struct CatalogTable {
    modules: IndexMap<String, BundleModule>,
}

impl CatalogTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if a module for the same bundle was replaced.
    pub fn insert(&mut self, module: BundleModule) -> bool {
        self.modules
            .insert(module.name().to_owned(), module)
            .is_none()
    }

    pub fn get(&self, name: &str) -> Option<&BundleModule> {
        self.modules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BundleModule> {
        self.modules.values()
    }

    /// The table a bundle's generated module evaluates to.
    ///
    /// Referenced tables are merged in reference order, then the bundle's own
    /// entries. A later write replaces the value of an existing key, which keeps
    /// its first position.
    pub fn resolve(&self, name: &str) -> Result<BundleTable> {
        let mut stack = Vec::new();
        let mut memo = HashMap::new();
        self.resolve_into(name, &mut stack, &mut memo)
    }

    fn resolve_into(
        &self,
        name: &str,
        stack: &mut Vec<String>,
        memo: &mut HashMap<String, BundleTable>,
    ) -> Result<BundleTable> {
        if let Some(table) = memo.get(name) {
            return Ok(table.clone());
        }
        if let Some(start) = stack.iter().position(|n| n == name) {
            let mut chain = stack[start..].to_vec();
            chain.push(name.to_owned());
            return Err(Error::CyclicReference { chain });
        }
        let module = self
            .get(name)
            .ok_or_else(|| Error::UnknownBundle(name.to_owned()))?;

        stack.push(name.to_owned());
        let mut table = BundleTable::new();
        for reference in module.references().iter() {
            let referenced = self.resolve_into(reference, stack, memo)?;
            table.extend(referenced);
        }
        stack.pop();

        table.extend(module.entries().iter().map(|(k, v)| (k.clone(), *v)));
        memo.insert(name.to_owned(), table.clone());
        Ok(table)
    }
}
