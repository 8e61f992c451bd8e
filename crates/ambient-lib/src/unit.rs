//! One parsed bundle: syntax tree plus scope tree.

use ambient_core::Classification;

use crate::analyze::binder::build_scopes;
use crate::analyze::scope::ScopeTree;
use crate::diagnostics::Diagnostics;
use crate::parser::cst::{SyntaxKind, SyntaxToken};
use crate::parser::{CstPrinter, SourceFile, parse_with_fuel};
use crate::{Error, Result};

/// Whether top-level declarations live in a module scope or directly in the global scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceType {
    #[default]
    Module,
    Script,
}

/// Parser and scope-analysis options for one bundle.
///
/// The defaults describe how bundles are analyzed during generation: comments
/// kept, module source type, and no implicit globals seeded into the global scope.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub include_comments: bool,
    pub source_type: SourceType,
    /// Names pre-declared in the global scope before binding.
    pub implicit_globals: Vec<(String, Classification)>,
    pub exec_fuel: Option<u32>,
    pub recursion_fuel: Option<u32>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_comments: true,
            source_type: SourceType::Module,
            implicit_globals: Vec::new(),
            exec_fuel: None,
            recursion_fuel: Some(512),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_comments(mut self, value: bool) -> Self {
        self.include_comments = value;
        self
    }

    pub fn source_type(mut self, value: SourceType) -> Self {
        self.source_type = value;
        self
    }

    pub fn implicit_global(mut self, name: impl Into<String>, kind: Classification) -> Self {
        self.implicit_globals.push((name.into(), kind));
        self
    }

    pub fn exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    pub fn recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }
}

/// Syntax errors of a bundle that failed to parse, kept with the text they point into.
#[derive(Debug)]
pub struct ParseFailure {
    file_name: Option<String>,
    text: String,
    diagnostics: Diagnostics,
}

impl ParseFailure {
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Attaches the file the text was read from.
    pub fn in_file(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn summary(&self) -> String {
        let count = self.diagnostics.len();
        let noun = if count == 1 { "error" } else { "errors" };
        match &self.file_name {
            Some(name) => format!("{name}: declaration parsing failed with {count} {noun}"),
            None => format!("declaration parsing failed with {count} {noun}"),
        }
    }

    pub fn render(&self, colored: bool) -> String {
        let printer = self.diagnostics.printer().source(&self.text).colored(colored);
        match &self.file_name {
            Some(name) => printer.path(name).render(),
            None => printer.render(),
        }
    }
}

/// A bundle's syntax tree and scope tree.
#[derive(Debug)]
pub struct ParsedUnit {
    root: SourceFile,
    scopes: ScopeTree,
    include_comments: bool,
}

impl ParsedUnit {
    pub fn root(&self) -> &SourceFile {
        &self.root
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    /// Comment tokens in source order; empty when comments were not requested.
    pub fn comments(&self) -> Vec<SyntaxToken> {
        if !self.include_comments {
            return Vec::new();
        }
        self.root
            .as_cst()
            .descendants_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| matches!(t.kind(), SyntaxKind::LineComment | SyntaxKind::BlockComment))
            .collect()
    }

    /// Text of every line comment after the leading `//`, in source order.
    pub fn line_comments(&self) -> Vec<String> {
        self.comments()
            .into_iter()
            .filter(|t| t.kind() == SyntaxKind::LineComment)
            .map(|t| t.text()[2..].to_string())
            .collect()
    }

    pub fn dump_cst(&self) -> String {
        CstPrinter::new(self.root.as_cst()).dump()
    }

    pub fn dump_cst_full(&self) -> String {
        CstPrinter::new(self.root.as_cst()).with_trivia(true).dump()
    }
}

/// Parses declaration text and builds its scope tree.
///
/// Syntax errors are fatal: they come back as [`Error::Parse`] with every
/// (filtered) diagnostic attached.
pub fn parse_unit(text: &str, options: &ParseOptions) -> Result<ParsedUnit> {
    let result = parse_with_fuel(text, options.exec_fuel, options.recursion_fuel)?;
    let diagnostics = result.diagnostics.filtered();

    if !diagnostics.is_empty() {
        return Err(Error::Parse(Box::new(ParseFailure {
            file_name: None,
            text: text.to_string(),
            diagnostics,
        })));
    }

    let scopes = build_scopes(&result.root, options.source_type, &options.implicit_globals);
    Ok(ParsedUnit {
        root: result.root,
        scopes,
        include_comments: options.include_comments,
    })
}
