//! Models of the generated modules, independent of how they are printed.

pub mod aggregate;
pub mod bundle;

#[cfg(test)]
mod bundle_tests;

pub use aggregate::{AggregateEntry, AggregateModule, ROOT_ALIAS};
pub use bundle::{BundleModule, BundleTable, CatalogTable};
