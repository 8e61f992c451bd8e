//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(SourceFile, SourceFile);
ast_node!(VariableStatement, VariableStatement);
ast_node!(VariableDeclarator, VariableDeclarator);
ast_node!(BindingPattern, BindingPattern);
ast_node!(FunctionDeclaration, FunctionDeclaration);
ast_node!(ClassDeclaration, ClassDeclaration);
ast_node!(InterfaceDeclaration, InterfaceDeclaration);
ast_node!(TypeAliasDeclaration, TypeAliasDeclaration);
ast_node!(EnumDeclaration, EnumDeclaration);
ast_node!(EnumMember, EnumMember);
ast_node!(ModuleDeclaration, ModuleDeclaration);
ast_node!(ModuleBlock, ModuleBlock);
ast_node!(ImportDeclaration, ImportDeclaration);
ast_node!(ImportClause, ImportClause);
ast_node!(NamespaceImport, NamespaceImport);
ast_node!(ImportSpecifier, ImportSpecifier);
ast_node!(ImportEquals, ImportEquals);
ast_node!(ExportDeclaration, ExportDeclaration);
ast_node!(ExportAssignment, ExportAssignment);
ast_node!(NamespaceExport, NamespaceExport);
ast_node!(EmptyStatement, EmptyStatement);
ast_node!(Name, Name);
ast_node!(TypeParameterList, TypeParameterList);
ast_node!(TypeParameter, TypeParameter);
ast_node!(ParameterList, ParameterList);
ast_node!(Parameter, Parameter);

/// Top-level or block-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Variable(VariableStatement),
    Function(FunctionDeclaration),
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    TypeAlias(TypeAliasDeclaration),
    Enum(EnumDeclaration),
    Module(ModuleDeclaration),
    Import(ImportDeclaration),
    ImportEquals(ImportEquals),
    Export(ExportDeclaration),
    ExportAssignment(ExportAssignment),
    NamespaceExport(NamespaceExport),
    Empty(EmptyStatement),
}

impl Statement {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::VariableStatement => VariableStatement::cast(node).map(Self::Variable),
            SyntaxKind::FunctionDeclaration => FunctionDeclaration::cast(node).map(Self::Function),
            SyntaxKind::ClassDeclaration => ClassDeclaration::cast(node).map(Self::Class),
            SyntaxKind::InterfaceDeclaration => {
                InterfaceDeclaration::cast(node).map(Self::Interface)
            }
            SyntaxKind::TypeAliasDeclaration => {
                TypeAliasDeclaration::cast(node).map(Self::TypeAlias)
            }
            SyntaxKind::EnumDeclaration => EnumDeclaration::cast(node).map(Self::Enum),
            SyntaxKind::ModuleDeclaration => ModuleDeclaration::cast(node).map(Self::Module),
            SyntaxKind::ImportDeclaration => ImportDeclaration::cast(node).map(Self::Import),
            SyntaxKind::ImportEquals => ImportEquals::cast(node).map(Self::ImportEquals),
            SyntaxKind::ExportDeclaration => ExportDeclaration::cast(node).map(Self::Export),
            SyntaxKind::ExportAssignment => {
                ExportAssignment::cast(node).map(Self::ExportAssignment)
            }
            SyntaxKind::NamespaceExport => NamespaceExport::cast(node).map(Self::NamespaceExport),
            SyntaxKind::EmptyStatement => EmptyStatement::cast(node).map(Self::Empty),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Self::Variable(n) => n.as_cst(),
            Self::Function(n) => n.as_cst(),
            Self::Class(n) => n.as_cst(),
            Self::Interface(n) => n.as_cst(),
            Self::TypeAlias(n) => n.as_cst(),
            Self::Enum(n) => n.as_cst(),
            Self::Module(n) => n.as_cst(),
            Self::Import(n) => n.as_cst(),
            Self::ImportEquals(n) => n.as_cst(),
            Self::Export(n) => n.as_cst(),
            Self::ExportAssignment(n) => n.as_cst(),
            Self::NamespaceExport(n) => n.as_cst(),
            Self::Empty(n) => n.as_cst(),
        }
    }

    pub fn is_exported(&self) -> bool {
        has_token(self.as_cst(), SyntaxKind::KwExport)
    }

    pub fn is_declared(&self) -> bool {
        has_token(self.as_cst(), SyntaxKind::KwDeclare)
    }
}

fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .any(|t| t.kind() == kind)
}

impl SourceFile {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

impl Name {
    pub fn token(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| !t.kind().is_trivia())
    }

    /// Identifier text, or the contents of a string-literal name.
    pub fn text(&self) -> String {
        let Some(token) = self.token() else {
            return String::new();
        };
        let text = token.text();
        if token.kind() == SyntaxKind::StringLiteral && text.len() >= 2 {
            return text[1..text.len() - 1].to_string();
        }
        text.to_string()
    }

    pub fn is_string(&self) -> bool {
        self.token()
            .is_some_and(|t| t.kind() == SyntaxKind::StringLiteral)
    }
}

impl VariableStatement {
    /// `KwVar`, `KwLet` or `KwConst`.
    pub fn keyword(&self) -> Option<SyntaxKind> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .map(|t| t.kind())
            .find(|k| matches!(k, SyntaxKind::KwVar | SyntaxKind::KwLet | SyntaxKind::KwConst))
    }

    pub fn declarators(&self) -> impl Iterator<Item = VariableDeclarator> + '_ {
        self.0.children().filter_map(VariableDeclarator::cast)
    }
}

impl VariableDeclarator {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn pattern(&self) -> Option<BindingPattern> {
        self.0.children().find_map(BindingPattern::cast)
    }

    /// Every identifier this declarator introduces.
    pub fn bound_names(&self) -> Vec<Name> {
        match self.pattern() {
            Some(pattern) => pattern.names().collect(),
            None => self.name().into_iter().collect(),
        }
    }
}

impl BindingPattern {
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.0.descendants().filter_map(Name::cast)
    }
}

impl FunctionDeclaration {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn type_parameters(&self) -> Option<TypeParameterList> {
        self.0.children().find_map(TypeParameterList::cast)
    }

    pub fn parameters(&self) -> Option<ParameterList> {
        self.0.children().find_map(ParameterList::cast)
    }
}

impl ClassDeclaration {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn type_parameters(&self) -> Option<TypeParameterList> {
        self.0.children().find_map(TypeParameterList::cast)
    }

    pub fn is_abstract(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwAbstract)
    }
}

impl InterfaceDeclaration {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn type_parameters(&self) -> Option<TypeParameterList> {
        self.0.children().find_map(TypeParameterList::cast)
    }
}

impl TypeAliasDeclaration {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn type_parameters(&self) -> Option<TypeParameterList> {
        self.0.children().find_map(TypeParameterList::cast)
    }
}

impl EnumDeclaration {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn is_const(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwConst)
    }

    pub fn members(&self) -> impl Iterator<Item = EnumMember> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::EnumBody)
            .flat_map(|body| body.children().filter_map(EnumMember::cast))
    }
}

impl EnumMember {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

impl ModuleDeclaration {
    /// Name segments: `A.B.C` yields three, `"mod"` and `global` yield one or none.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.0.children().filter_map(Name::cast)
    }

    pub fn is_global(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwGlobal)
    }

    /// `declare module "name"`.
    pub fn is_ambient_module(&self) -> bool {
        self.names().next().is_some_and(|n| n.is_string())
    }

    pub fn body(&self) -> Option<ModuleBlock> {
        self.0.children().find_map(ModuleBlock::cast)
    }
}

impl ModuleBlock {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

impl ImportDeclaration {
    pub fn clause(&self) -> Option<ImportClause> {
        self.0.children().find_map(ImportClause::cast)
    }

    pub fn module_specifier(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| t.kind() == SyntaxKind::StringLiteral)
    }
}

impl ImportClause {
    /// `import type ..`
    pub fn is_type_only(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwType)
    }

    pub fn default_binding(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }

    pub fn namespace_import(&self) -> Option<NamespaceImport> {
        self.0.children().find_map(NamespaceImport::cast)
    }

    pub fn specifiers(&self) -> impl Iterator<Item = ImportSpecifier> + '_ {
        self.0
            .children()
            .filter(|n| n.kind() == SyntaxKind::NamedImports)
            .flat_map(|list| list.children().filter_map(ImportSpecifier::cast))
    }
}

impl NamespaceImport {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

impl ImportSpecifier {
    pub fn is_type_only(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwType)
    }

    /// Local binding: the name after `as`, if present.
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

impl ImportEquals {
    pub fn is_type_only(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwType)
    }

    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

impl NamespaceExport {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

impl TypeParameterList {
    pub fn params(&self) -> impl Iterator<Item = TypeParameter> + '_ {
        self.0.children().filter_map(TypeParameter::cast)
    }
}

impl TypeParameter {
    pub fn name(&self) -> Option<Name> {
        self.0.children().find_map(Name::cast)
    }
}

impl ParameterList {
    pub fn params(&self) -> impl Iterator<Item = Parameter> + '_ {
        self.0.children().filter_map(Parameter::cast)
    }
}

impl Parameter {
    pub fn bound_names(&self) -> Vec<Name> {
        if let Some(pattern) = self.0.children().find_map(BindingPattern::cast) {
            return pattern.names().collect();
        }
        self.0.children().find_map(Name::cast).into_iter().collect()
    }
}
