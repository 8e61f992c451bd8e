use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{BINDING_START, CLOSERS, OPENERS};

impl Parser<'_> {
    pub(crate) fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SourceFile);

        while !self.at_end() {
            self.parse_statement();
        }

        self.eat_trivia();
        self.finish_node();
    }

    /// Statements inside `{ ... }` of a namespace, module or `declare global`.
    pub(super) fn parse_statements_until_brace(&mut self) {
        while !self.at_end() && !self.currently_is(SyntaxKind::BraceClose) {
            self.parse_statement();
        }
    }

    pub(super) fn parse_statement(&mut self) {
        let checkpoint = self.checkpoint();

        if self.currently_is(SyntaxKind::Semicolon) {
            self.start_node(SyntaxKind::EmptyStatement);
            self.bump();
            self.finish_node();
            return;
        }

        if self.at_word("export") && self.try_parse_export_form(checkpoint) {
            return;
        }

        let mut has_modifiers = false;
        let mut is_default = false;
        loop {
            if self.at_word("export") {
                self.bump_remap(SyntaxKind::KwExport);
            } else if self.at_word("default") && has_modifiers {
                self.bump_remap(SyntaxKind::KwDefault);
                is_default = true;
            } else if self.at_word("declare") && self.next_is(SyntaxKind::Ident) {
                self.bump_remap(SyntaxKind::KwDeclare);
            } else if self.at_word("abstract") && self.nth_is_word(1, "class") {
                self.bump_remap(SyntaxKind::KwAbstract);
            } else {
                break;
            }
            has_modifiers = true;
        }

        if self.parse_declaration(checkpoint, is_default) {
            return;
        }

        if is_default {
            self.parse_export_default_expression(checkpoint);
            return;
        }

        self.recover_statement(checkpoint, has_modifiers);
    }

    /// Dispatches on the declaration keyword. Returns `false` when none is present.
    fn parse_declaration(&mut self, checkpoint: Checkpoint, is_default: bool) -> bool {
        if self.current() != SyntaxKind::Ident {
            return false;
        }
        match self.current_text() {
            "const" if self.nth_is_word(1, "enum") => self.parse_enum(checkpoint),
            "var" | "let" | "const" if BINDING_START.contains(self.nth(1)) => {
                self.parse_variable_statement(checkpoint)
            }
            "function" => self.parse_function(checkpoint, is_default),
            "class" => self.parse_class(checkpoint, is_default),
            "interface" if self.next_is(SyntaxKind::Ident) => self.parse_interface(checkpoint),
            "type" if self.next_is(SyntaxKind::Ident) => self.parse_type_alias(checkpoint),
            "enum" if self.next_is(SyntaxKind::Ident) => self.parse_enum(checkpoint),
            "namespace" if self.next_is(SyntaxKind::Ident) => {
                self.parse_module_declaration(checkpoint)
            }
            "module"
                if matches!(self.nth(1), SyntaxKind::Ident | SyntaxKind::StringLiteral) =>
            {
                self.parse_module_declaration(checkpoint)
            }
            "global" if self.next_is(SyntaxKind::BraceOpen) => self.parse_global(checkpoint),
            "import" if !is_default => self.parse_import(checkpoint),
            _ => return false,
        }
        true
    }

    /// Whether the current token can begin a statement. Drives recovery and
    /// stops type expressions that are missing their `;`.
    pub(super) fn at_statement_start(&mut self) -> bool {
        if self.current() != SyntaxKind::Ident {
            return false;
        }
        match self.current_text() {
            "export" => true,
            "declare" | "interface" | "enum" | "type" | "namespace" | "class" => {
                self.next_is(SyntaxKind::Ident)
            }
            "var" | "let" | "const" => BINDING_START.contains(self.nth(1)),
            "function" => matches!(self.nth(1), SyntaxKind::Ident | SyntaxKind::ParenOpen),
            "abstract" => self.nth_is_word(1, "class"),
            "module" => matches!(self.nth(1), SyntaxKind::Ident | SyntaxKind::StringLiteral),
            "global" => self.next_is(SyntaxKind::BraceOpen),
            "import" => matches!(
                self.nth(1),
                SyntaxKind::Ident
                    | SyntaxKind::StringLiteral
                    | SyntaxKind::BraceOpen
                    | SyntaxKind::Star
            ),
            _ => false,
        }
    }

    /// Consumes a terminating `;`, applying automatic semicolon insertion.
    pub(super) fn expect_semicolon(&mut self) {
        if self.eat_token(SyntaxKind::Semicolon) {
            return;
        }
        if self.at_end() || self.currently_is(SyntaxKind::BraceClose) || self.preceded_by_newline()
        {
            return;
        }
        self.error_missing_semicolon();
    }

    /// Wraps everything up to the next statement in an `Error` node.
    fn recover_statement(&mut self, checkpoint: Checkpoint, has_modifiers: bool) {
        if self.currently_is(SyntaxKind::Garbage) {
            self.error(DiagnosticKind::InvalidCharacter);
        } else if has_modifiers {
            self.error(DiagnosticKind::ExpectedDeclaration);
        } else if CLOSERS.contains(self.current()) {
            let text = self.current_text().to_string();
            self.error_msg(DiagnosticKind::MismatchedDelimiter, text);
        } else {
            let text = self.current_text().to_string();
            self.error_msg(
                DiagnosticKind::ExpectedDeclaration,
                format!("found `{text}`"),
            );
        }

        self.start_node_at(checkpoint, SyntaxKind::Error);
        let in_block = self.in_block();
        let mut depth = 0usize;
        let mut first = true;
        while !self.at_end() {
            let kind = self.current();
            if !first && depth == 0 {
                if kind == SyntaxKind::BraceClose && in_block {
                    break;
                }
                if self.at_statement_start() {
                    break;
                }
            }
            if OPENERS.contains(kind) {
                depth += 1;
            } else if CLOSERS.contains(kind) {
                depth = depth.saturating_sub(1);
            }
            self.bump();
            first = false;
            if depth == 0 && kind == SyntaxKind::Semicolon {
                break;
            }
        }
        self.finish_node();
    }
}
