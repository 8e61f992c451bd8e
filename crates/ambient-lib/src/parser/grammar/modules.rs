use rowan::Checkpoint;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::STATEMENT_END;

impl Parser<'_> {
    /// `export { .. }`, `export * ..`, `export = ..`, `export as namespace ..`
    /// and `export default <expression>`. Returns `false` when `export` is only
    /// a modifier on a declaration.
    pub(super) fn try_parse_export_form(&mut self, checkpoint: Checkpoint) -> bool {
        self.assert_word("export");

        let next = self.nth(1);
        if matches!(next, SyntaxKind::BraceOpen | SyntaxKind::Star)
            || (self.nth_is_word(1, "type") && self.nth(2) == SyntaxKind::BraceOpen)
        {
            self.parse_export_declaration(checkpoint);
            return true;
        }
        if next == SyntaxKind::Equals {
            self.start_node_at(checkpoint, SyntaxKind::ExportAssignment);
            self.bump_remap(SyntaxKind::KwExport);
            self.bump();
            self.parse_expression_tail();
            self.finish_node();
            return true;
        }
        if self.nth_is_word(1, "as") && self.nth_is_word(2, "namespace") {
            self.start_node_at(checkpoint, SyntaxKind::NamespaceExport);
            self.bump_remap(SyntaxKind::KwExport);
            self.bump_remap(SyntaxKind::KwAs);
            self.bump_remap(SyntaxKind::KwNamespace);
            self.parse_name();
            self.expect_semicolon();
            self.finish_node();
            return true;
        }
        false
    }

    /// `export default <expression>;` once no declaration followed the modifiers.
    pub(super) fn parse_export_default_expression(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ExportAssignment);
        self.parse_expression_tail();
        self.finish_node();
    }

    fn parse_expression_tail(&mut self) {
        self.start_node(SyntaxKind::TypeExpr);
        if !self.skip_expression(STATEMENT_END) {
            self.error(DiagnosticKind::ExpectedExpression);
        }
        self.finish_node();
        self.expect_semicolon();
    }

    fn parse_export_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ExportDeclaration);
        self.bump_remap(SyntaxKind::KwExport);
        self.eat_keyword("type", SyntaxKind::KwType);

        if self.eat_token(SyntaxKind::Star) {
            if self.eat_keyword("as", SyntaxKind::KwAs)
                && !self.eat_token(SyntaxKind::StringLiteral)
            {
                self.parse_name();
            }
        } else {
            self.parse_braced_body(SyntaxKind::NamedExports);
        }

        if self.eat_keyword("from", SyntaxKind::KwFrom) {
            self.expect_module_specifier();
        }
        self.expect_semicolon();
        self.finish_node();
    }

    /// `namespace A.B.C { .. }`, `module A { .. }`, `module "x" { .. }` or `module "x";`.
    pub(super) fn parse_module_declaration(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ModuleDeclaration);
        self.bump_keyword();

        if self.currently_is(SyntaxKind::StringLiteral) {
            self.start_node(SyntaxKind::Name);
            self.bump();
            self.finish_node();
        } else {
            self.parse_name();
            while self.eat_token(SyntaxKind::Dot) {
                self.parse_name();
            }
        }

        if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_module_block();
        } else {
            self.expect_semicolon();
        }
        self.finish_node();
    }

    /// `declare global { .. }`
    pub(super) fn parse_global(&mut self, checkpoint: Checkpoint) {
        self.start_node_at(checkpoint, SyntaxKind::ModuleDeclaration);
        self.bump_remap(SyntaxKind::KwGlobal);
        self.parse_module_block();
        self.finish_node();
    }

    fn parse_module_block(&mut self) {
        self.assert_current(SyntaxKind::BraceOpen);
        if !self.enter_recursion() {
            return;
        }

        self.start_node(SyntaxKind::ModuleBlock);
        let open = self.current_span();
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        self.parse_statements_until_brace();

        self.pop_delimiter();
        if !self.eat_token(SyntaxKind::BraceClose) && !self.has_fatal_error() {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedBrace,
                "block opened here",
                open,
            );
        }
        self.finish_node();
        self.exit_recursion();
    }

    pub(super) fn parse_import(&mut self, checkpoint: Checkpoint) {
        let is_import_equals = (self.next_is(SyntaxKind::Ident)
            && self.nth(2) == SyntaxKind::Equals)
            || (self.nth_is_word(1, "type")
                && self.nth(2) == SyntaxKind::Ident
                && self.nth(3) == SyntaxKind::Equals);

        if is_import_equals {
            self.start_node_at(checkpoint, SyntaxKind::ImportEquals);
            self.bump_remap(SyntaxKind::KwImport);
            self.parse_import_equals_tail();
        } else {
            self.start_node_at(checkpoint, SyntaxKind::ImportDeclaration);
            self.bump_remap(SyntaxKind::KwImport);
            self.parse_import_declaration_tail();
        }
        self.finish_node();
    }

    /// `[type] X = require("x");` or `[type] X = A.B;`
    fn parse_import_equals_tail(&mut self) {
        if self.at_word("type") && self.next_is(SyntaxKind::Ident) {
            self.bump_remap(SyntaxKind::KwType);
        }
        self.parse_name();
        self.expect(SyntaxKind::Equals, "`=`");

        self.start_node(SyntaxKind::ModuleReference);
        if self.at_word("require") && self.next_is(SyntaxKind::ParenOpen) {
            self.bump_remap(SyntaxKind::KwRequire);
            self.bump();
            self.expect_module_specifier();
            self.expect(SyntaxKind::ParenClose, "`)`");
        } else if self.eat_token(SyntaxKind::Ident) {
            while self.eat_token(SyntaxKind::Dot) {
                if !self.eat_token(SyntaxKind::Ident) {
                    self.error(DiagnosticKind::ExpectedName);
                    break;
                }
            }
        } else {
            self.error(DiagnosticKind::ExpectedName);
        }
        self.finish_node();
        self.expect_semicolon();
    }

    fn parse_import_declaration_tail(&mut self) {
        if self.eat_token(SyntaxKind::StringLiteral) {
            self.expect_semicolon();
            return;
        }

        self.start_node(SyntaxKind::ImportClause);
        let type_only = self.at_word("type")
            && match self.nth(1) {
                SyntaxKind::BraceOpen | SyntaxKind::Star => true,
                SyntaxKind::Ident => {
                    !(self.nth_is_word(1, "from") && self.nth(2) == SyntaxKind::StringLiteral)
                }
                _ => false,
            };
        if type_only {
            self.bump_remap(SyntaxKind::KwType);
        }

        let mut bindings = 0;
        if self.currently_is(SyntaxKind::Ident) && !self.at_word("from") {
            self.parse_name();
            bindings += 1;
            self.eat_token(SyntaxKind::Comma);
        }
        if self.currently_is(SyntaxKind::Star) {
            self.parse_namespace_import();
            bindings += 1;
        } else if self.currently_is(SyntaxKind::BraceOpen) {
            self.parse_named_imports();
            bindings += 1;
        }
        if bindings == 0 {
            self.error(DiagnosticKind::ExpectedName);
        }
        self.finish_node();

        if self.eat_keyword("from", SyntaxKind::KwFrom) {
            self.expect_module_specifier();
        } else {
            self.expect(SyntaxKind::Ident, "`from`");
        }

        if (self.at_word("with") || self.at_word("assert")) && self.next_is(SyntaxKind::BraceOpen)
        {
            self.bump();
            self.parse_braced_body(SyntaxKind::ImportAttributes);
        }
        self.expect_semicolon();
    }

    /// `* as X`
    fn parse_namespace_import(&mut self) {
        self.start_node(SyntaxKind::NamespaceImport);
        self.bump();
        if !self.eat_keyword("as", SyntaxKind::KwAs) {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `as`");
        }
        self.parse_name();
        self.finish_node();
    }

    /// `{ a, b as c, type D }`
    fn parse_named_imports(&mut self) {
        self.start_node(SyntaxKind::NamedImports);
        let open = self.current_span();
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        while !self.at_end() && !self.currently_is(SyntaxKind::BraceClose) {
            if !matches!(
                self.current(),
                SyntaxKind::Ident | SyntaxKind::StringLiteral
            ) {
                self.error_and_bump_msg(DiagnosticKind::ExpectedName, "in import list");
                continue;
            }
            self.parse_import_specifier();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.pop_delimiter();
        if !self.eat_token(SyntaxKind::BraceClose) {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedBrace,
                "import list opened here",
                open,
            );
        }
        self.finish_node();
    }

    fn parse_import_specifier(&mut self) {
        self.start_node(SyntaxKind::ImportSpecifier);
        if self.at_word("type")
            && matches!(self.nth(1), SyntaxKind::Ident | SyntaxKind::StringLiteral)
            && !(self.nth_is_word(1, "as") && self.nth(2) != SyntaxKind::Ident)
        {
            self.bump_remap(SyntaxKind::KwType);
        }

        let renamed = self.nth_is_word(1, "as");
        if renamed || self.currently_is(SyntaxKind::StringLiteral) {
            // Imported name; the local binding follows `as`.
            self.bump();
            if self.eat_keyword("as", SyntaxKind::KwAs) {
                self.parse_name();
            } else {
                self.error_msg(DiagnosticKind::UnexpectedToken, "expected `as`");
            }
        } else {
            self.parse_name();
        }
        self.finish_node();
    }

    pub(super) fn expect_module_specifier(&mut self) {
        if !self.eat_token(SyntaxKind::StringLiteral) {
            self.error(DiagnosticKind::ExpectedModuleSpecifier);
        }
    }
}
