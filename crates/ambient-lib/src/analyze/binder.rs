//! Builds the scope tree of a parsed declaration file.
//!
//! Names land in the scope of the statement that declares them; declarations
//! with their own names inside (type parameters, parameters, enum members,
//! namespace bodies) open a child scope for those.

use rowan::TextRange;

use ambient_core::Classification;

use super::scope::{Definition, DefinitionKind, ScopeId, ScopeKind, ScopeTree};
use super::visitor::{Visitor, walk_module};
use crate::parser::ast::{
    ClassDeclaration, EnumDeclaration, FunctionDeclaration, ImportDeclaration, ImportEquals,
    InterfaceDeclaration, ModuleDeclaration, Name, SourceFile, TypeAliasDeclaration,
    TypeParameterList, VariableStatement,
};
use crate::unit::SourceType;

/// Binds every declaration of `root`.
///
/// `implicit_globals` are defined in the global scope first. With
/// [`SourceType::Module`] top-level declarations go into a `Module` scope under
/// the global scope; with [`SourceType::Script`] they go into the global scope.
pub fn build_scopes(
    root: &SourceFile,
    source_type: SourceType,
    implicit_globals: &[(String, Classification)],
) -> ScopeTree {
    let range = root.as_cst().text_range();
    let mut tree = ScopeTree::new(range);

    for (name, classification) in implicit_globals {
        let def = Definition {
            kind: DefinitionKind::ImplicitGlobal(*classification),
            range: TextRange::empty(range.start()),
        };
        tree.define(ScopeId::GLOBAL, name, def);
    }

    let current = match source_type {
        SourceType::Module => tree.push_scope(ScopeId::GLOBAL, ScopeKind::Module, range),
        SourceType::Script => ScopeId::GLOBAL,
    };

    let mut binder = Binder { tree, current };
    binder.visit_source_file(root);
    binder.tree
}

struct Binder {
    tree: ScopeTree,
    current: ScopeId,
}

impl Binder {
    fn define(&mut self, name: Option<Name>, kind: DefinitionKind) {
        let Some(name) = name else {
            return;
        };
        let text = name.text();
        if text.is_empty() {
            return;
        }
        let def = Definition {
            kind,
            range: name.as_cst().text_range(),
        };
        self.tree.define(self.current, &text, def);
    }

    /// Runs `f` with a fresh child scope as the current scope.
    fn in_scope(&mut self, kind: ScopeKind, range: TextRange, f: impl FnOnce(&mut Self)) {
        let saved = self.current;
        self.current = self.tree.push_scope(saved, kind, range);
        f(self);
        self.current = saved;
    }

    fn define_type_parameters(&mut self, list: Option<TypeParameterList>) {
        let Some(list) = list else {
            return;
        };
        for param in list.params() {
            self.define(param.name(), DefinitionKind::TypeParameter);
        }
    }
}

impl Visitor for Binder {
    fn visit_variable_statement(&mut self, statement: &VariableStatement) {
        for declarator in statement.declarators() {
            for name in declarator.bound_names() {
                self.define(Some(name), DefinitionKind::Variable);
            }
        }
    }

    fn visit_function(&mut self, function: &FunctionDeclaration) {
        self.define(function.name(), DefinitionKind::FunctionName);
        self.in_scope(ScopeKind::Function, function.as_cst().text_range(), |this| {
            this.define_type_parameters(function.type_parameters());
            let Some(list) = function.parameters() else {
                return;
            };
            for param in list.params() {
                for name in param.bound_names() {
                    this.define(Some(name), DefinitionKind::Parameter);
                }
            }
        });
    }

    fn visit_class(&mut self, class: &ClassDeclaration) {
        self.define(class.name(), DefinitionKind::ClassName);
        self.in_scope(ScopeKind::Class, class.as_cst().text_range(), |this| {
            this.define_type_parameters(class.type_parameters());
        });
    }

    fn visit_interface(&mut self, interface: &InterfaceDeclaration) {
        self.define(interface.name(), DefinitionKind::TypeName);
        self.in_scope(ScopeKind::Type, interface.as_cst().text_range(), |this| {
            this.define_type_parameters(interface.type_parameters());
        });
    }

    fn visit_type_alias(&mut self, alias: &TypeAliasDeclaration) {
        self.define(alias.name(), DefinitionKind::TypeName);
        self.in_scope(ScopeKind::Type, alias.as_cst().text_range(), |this| {
            this.define_type_parameters(alias.type_parameters());
        });
    }

    fn visit_enum(&mut self, enumeration: &EnumDeclaration) {
        self.define(enumeration.name(), DefinitionKind::EnumName);
        self.in_scope(ScopeKind::Enum, enumeration.as_cst().text_range(), |this| {
            for member in enumeration.members() {
                this.define(member.name(), DefinitionKind::EnumMember);
            }
        });
    }

    fn visit_module(&mut self, module: &ModuleDeclaration) {
        let range = module
            .body()
            .map_or(module.as_cst().text_range(), |b| b.as_cst().text_range());

        // `declare global` and `declare module "x"` augment scopes elsewhere and
        // name nothing here.
        if module.is_global() || module.is_ambient_module() {
            if module.body().is_some() {
                self.in_scope(ScopeKind::Namespace, range, |this| walk_module(this, module));
            }
            return;
        }

        let saved = self.current;
        for name in module.names() {
            self.define(Some(name), DefinitionKind::NamespaceName);
            self.current = self.tree.push_scope(self.current, ScopeKind::Namespace, range);
        }
        walk_module(self, module);
        self.current = saved;
    }

    fn visit_import(&mut self, import: &ImportDeclaration) {
        let Some(clause) = import.clause() else {
            return;
        };
        let kind_for = |type_only: bool| {
            if type_only {
                DefinitionKind::TypeImportBinding
            } else {
                DefinitionKind::ImportBinding
            }
        };
        let clause_type_only = clause.is_type_only();

        self.define(clause.default_binding(), kind_for(clause_type_only));
        if let Some(namespace) = clause.namespace_import() {
            self.define(namespace.name(), kind_for(clause_type_only));
        }
        for specifier in clause.specifiers() {
            let kind = kind_for(clause_type_only || specifier.is_type_only());
            self.define(specifier.name(), kind);
        }
    }

    fn visit_import_equals(&mut self, import: &ImportEquals) {
        let kind = if import.is_type_only() {
            DefinitionKind::TypeImportBinding
        } else {
            DefinitionKind::ImportBinding
        };
        self.define(import.name(), kind);
    }
}
