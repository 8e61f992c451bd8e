//! Classification of a bundle's top-level identifiers.

use ambient_core::Classification;

use super::scope::{ScopeKind, Variable};
use crate::unit::ParsedUnit;
use crate::{Error, Result};

/// A top-level identifier and the namespaces it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalVariable {
    pub name: String,
    pub classification: Classification,
}

/// Classifies every variable of the module scope, in declaration order.
///
/// The module scope is the first child of the global scope. Without one (a
/// script parse, or an empty tree) the unit cannot be classified.
pub fn classify_globals(unit: &ParsedUnit) -> Result<Vec<GlobalVariable>> {
    let scopes = unit.scopes();
    let module = scopes
        .global()
        .children()
        .first()
        .map(|&id| scopes.get(id))
        .filter(|scope| scope.kind() == ScopeKind::Module)
        .ok_or(Error::MissingModuleScope)?;

    module.variables().map(classify_variable).collect()
}

pub fn classify_variable(variable: &Variable) -> Result<GlobalVariable> {
    let classification = variable
        .classification()
        .ok_or_else(|| Error::UnclassifiableVariable {
            name: variable.name().to_owned(),
        })?;
    Ok(GlobalVariable {
        name: variable.name().to_owned(),
        classification,
    })
}
