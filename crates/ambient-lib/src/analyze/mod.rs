//! Semantic analysis of a parsed bundle.
//!
//! - Scope tree construction (binder, scope)
//! - Lib reference directives (references)
//! - Classification of top-level identifiers (classify)

pub mod binder;
pub mod classify;
pub mod references;
pub mod scope;
pub mod visitor;

#[cfg(test)]
mod binder_tests;
#[cfg(test)]
mod references_tests;

pub use binder::build_scopes;
pub use classify::{GlobalVariable, classify_globals, classify_variable};
pub use references::{ReferenceSet, extract_references, parse_reference_directive};
pub use scope::{Definition, DefinitionKind, Scope, ScopeId, ScopeKind, ScopeTree, Variable};
pub use visitor::{Visitor, walk_module, walk_source_file, walk_statement};
