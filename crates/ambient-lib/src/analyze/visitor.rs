//! AST Visitor pattern.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct. Override `visit_*` methods to add logic.
//! Call `walk_*` within your override to continue recursion (or omit it to stop).
//!
//! ```ignore
//! impl Visitor for MyPass {
//!     fn visit_module(&mut self, module: &ModuleDeclaration) {
//!         // Pre-order logic
//!         walk_module(self, module);
//!         // Post-order logic
//!     }
//! }
//! ```

use crate::parser::ast::{
    ClassDeclaration, EnumDeclaration, FunctionDeclaration, ImportDeclaration, ImportEquals,
    InterfaceDeclaration, ModuleDeclaration, SourceFile, Statement, TypeAliasDeclaration,
    VariableStatement,
};

pub trait Visitor: Sized {
    fn visit_source_file(&mut self, file: &SourceFile) {
        walk_source_file(self, file);
    }

    fn visit_statement(&mut self, statement: &Statement) {
        walk_statement(self, statement);
    }

    fn visit_variable_statement(&mut self, _statement: &VariableStatement) {}

    fn visit_function(&mut self, _function: &FunctionDeclaration) {}

    fn visit_class(&mut self, _class: &ClassDeclaration) {}

    fn visit_interface(&mut self, _interface: &InterfaceDeclaration) {}

    fn visit_type_alias(&mut self, _alias: &TypeAliasDeclaration) {}

    fn visit_enum(&mut self, _enumeration: &EnumDeclaration) {}

    fn visit_module(&mut self, module: &ModuleDeclaration) {
        walk_module(self, module);
    }

    fn visit_import(&mut self, _import: &ImportDeclaration) {}

    fn visit_import_equals(&mut self, _import: &ImportEquals) {}
}

pub fn walk_source_file<V: Visitor>(visitor: &mut V, file: &SourceFile) {
    for statement in file.statements() {
        visitor.visit_statement(&statement);
    }
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, statement: &Statement) {
    match statement {
        Statement::Variable(s) => visitor.visit_variable_statement(s),
        Statement::Function(f) => visitor.visit_function(f),
        Statement::Class(c) => visitor.visit_class(c),
        Statement::Interface(i) => visitor.visit_interface(i),
        Statement::TypeAlias(t) => visitor.visit_type_alias(t),
        Statement::Enum(e) => visitor.visit_enum(e),
        Statement::Module(m) => visitor.visit_module(m),
        Statement::Import(i) => visitor.visit_import(i),
        Statement::ImportEquals(i) => visitor.visit_import_equals(i),
        // Export lists and assignments refer to names, they declare none.
        Statement::Export(_)
        | Statement::ExportAssignment(_)
        | Statement::NamespaceExport(_)
        | Statement::Empty(_) => {}
    }
}

pub fn walk_module<V: Visitor>(visitor: &mut V, module: &ModuleDeclaration) {
    let Some(body) = module.body() else {
        return;
    };
    for statement in body.statements() {
        visitor.visit_statement(&statement);
    }
}
