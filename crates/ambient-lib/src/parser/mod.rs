//! Parser for TypeScript declaration files (`.d.ts`).
//!
//! The output is a lossless rowan tree: every byte of the input, comments
//! included, is a token somewhere in it. Declaration heads (names, modifiers,
//! import and export clauses) are parsed precisely. Type expressions,
//! initializers and member bodies are kept as balanced token runs because
//! binding never looks inside them.
//!
//! Keywords lex as `Ident` and become keyword tokens only where the grammar
//! expects one, so `declare var type: number;` parses.
//!
//! Syntax errors do not stop the parse. Stray tokens are wrapped in `Error`
//! nodes up to the next statement, a missing `;` is accepted at a line break,
//! before `}` and at end of input, and a type expression ends where the next
//! declaration begins. Running out of token or nesting budget is the one
//! exception and aborts with an error.

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;
mod printer;

#[cfg(test)]
mod grammar_tests;
#[cfg(test)]
mod lexer_tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{Name, SourceFile, Statement};

pub use core::{ParseResult, Parser};
pub use printer::CstPrinter;

use crate::Result;
use lexer::lex;

/// Parses `source` without budgets.
pub fn parse(source: &str) -> Result<ParseResult> {
    Parser::new(source, lex(source)).parse()
}

/// Parses with token (`exec_fuel`) and nesting (`recursion_fuel`) budgets.
pub fn parse_with_fuel(
    source: &str,
    exec_fuel: Option<u32>,
    recursion_fuel: Option<u32>,
) -> Result<ParseResult> {
    Parser::new(source, lex(source))
        .with_exec_fuel(exec_fuel)
        .with_recursion_fuel(recursion_fuel)
        .parse()
}
