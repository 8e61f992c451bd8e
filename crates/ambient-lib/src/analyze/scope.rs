//! Scope tree: which names each scope declares, and in which namespaces.
//!
//! Scopes live in an arena indexed by [`ScopeId`]. The global scope is always
//! [`ScopeId::GLOBAL`]; a module source file adds one `Module` scope under it
//! that holds every top-level declaration.

use std::fmt::Write;

use indexmap::IndexMap;
use rowan::TextRange;

use ambient_core::Classification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u32);

impl ScopeId {
    pub const GLOBAL: ScopeId = ScopeId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Module,
    Namespace,
    Class,
    Function,
    /// Type parameters of an interface or type alias.
    Type,
    Enum,
}

/// What introduced a definition. Decides the namespaces the name occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    ClassName,
    FunctionName,
    Variable,
    EnumName,
    EnumMember,
    NamespaceName,
    /// `interface` or `type` alias.
    TypeName,
    ImportBinding,
    TypeImportBinding,
    Parameter,
    TypeParameter,
    /// Seeded into the global scope before binding.
    ImplicitGlobal(Classification),
}

impl DefinitionKind {
    pub fn is_type(self) -> bool {
        match self {
            Self::ClassName
            | Self::EnumName
            | Self::NamespaceName
            | Self::TypeName
            | Self::ImportBinding
            | Self::TypeImportBinding
            | Self::TypeParameter => true,
            Self::FunctionName | Self::Variable | Self::EnumMember | Self::Parameter => false,
            Self::ImplicitGlobal(c) => c.is_type(),
        }
    }

    pub fn is_value(self) -> bool {
        match self {
            Self::ClassName
            | Self::FunctionName
            | Self::Variable
            | Self::EnumName
            | Self::EnumMember
            | Self::NamespaceName
            | Self::ImportBinding
            | Self::Parameter => true,
            Self::TypeName | Self::TypeImportBinding | Self::TypeParameter => false,
            Self::ImplicitGlobal(c) => c.is_value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Definition {
    pub kind: DefinitionKind,
    /// Range of the defining name (or of the whole declaration for implicit globals).
    pub range: TextRange,
}

/// A name declared in one scope, with every declaration that contributed to it.
///
/// Declaration merging (`interface X` + `declare var X`) shows up as one
/// variable with several definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    defs: Vec<Definition>,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defs(&self) -> &[Definition] {
        &self.defs
    }

    pub fn is_type_variable(&self) -> bool {
        self.defs.iter().any(|d| d.kind.is_type())
    }

    pub fn is_value_variable(&self) -> bool {
        self.defs.iter().any(|d| d.kind.is_value())
    }

    /// `None` only for a variable without any type or value definition.
    pub fn classification(&self) -> Option<Classification> {
        Classification::from_flags(self.is_type_variable(), self.is_value_variable())
    }
}

#[derive(Debug, Clone)]
pub struct Scope {
    kind: ScopeKind,
    parent: Option<ScopeId>,
    children: Vec<ScopeId>,
    variables: IndexMap<String, Variable>,
    range: TextRange,
}

impl Scope {
    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    /// Variables in first-declaration order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.values()
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Arena of scopes rooted at the global scope.
#[derive(Debug, Clone)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl ScopeTree {
    pub fn new(range: TextRange) -> Self {
        Self {
            scopes: vec![Scope {
                kind: ScopeKind::Global,
                parent: None,
                children: Vec::new(),
                variables: IndexMap::new(),
                range,
            }],
        }
    }

    pub fn global(&self) -> &Scope {
        &self.scopes[ScopeId::GLOBAL.index()]
    }

    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Scopes in creation order, global first.
    pub fn iter(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes
            .iter()
            .enumerate()
            .map(|(i, s)| (ScopeId(i as u32), s))
    }

    pub fn push_scope(&mut self, parent: ScopeId, kind: ScopeKind, range: TextRange) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            variables: IndexMap::new(),
            range,
        });
        self.scopes[parent.index()].children.push(id);
        id
    }

    /// Adds a definition for `name`, merging with an existing variable of that name.
    pub fn define(&mut self, scope: ScopeId, name: &str, def: Definition) {
        let variables = &mut self.scopes[scope.index()].variables;
        match variables.get_mut(name) {
            Some(variable) => variable.defs.push(def),
            None => {
                variables.insert(
                    name.to_owned(),
                    Variable {
                        name: name.to_owned(),
                        defs: vec![def],
                    },
                );
            }
        }
    }

    /// Indented outline of scopes and the namespaces of their variables.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_scope(ScopeId::GLOBAL, 0, &mut out);
        out
    }

    fn dump_scope(&self, id: ScopeId, indent: usize, out: &mut String) {
        let scope = self.get(id);
        let prefix = "  ".repeat(indent);
        let _ = writeln!(out, "{prefix}{:?}", scope.kind);
        for variable in scope.variables() {
            let facts = match variable.classification() {
                Some(c) => c.export_name(),
                None => "?",
            };
            let _ = writeln!(out, "{prefix}  {} {facts}", variable.name);
        }
        for &child in &scope.children {
            self.dump_scope(child, indent + 1, out);
        }
    }
}
