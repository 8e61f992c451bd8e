use rowan::TextRange;

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{
    BINDING_START, CLOSERS, LIST_ITEM_END, PARAM_TYPE_END, TYPE_PARAM_CONSTRAINT_END,
};
use crate::parser::cst::{SyntaxKind, TokenSet};

/// How `skip_balanced` treats the tokens it walks over.
#[derive(Debug, Clone, Copy)]
struct SkipMode {
    /// Treat `<` and `>` as brackets (type context).
    angles: bool,
    /// Stop at depth zero where a declaration begins.
    statement_boundary: bool,
}

const TYPE_MODE: SkipMode = SkipMode {
    angles: true,
    statement_boundary: true,
};
const EXPRESSION_MODE: SkipMode = SkipMode {
    angles: false,
    statement_boundary: true,
};
const BODY_MODE: SkipMode = SkipMode {
    angles: false,
    statement_boundary: false,
};

impl Parser<'_> {
    pub(super) fn parse_name(&mut self) {
        if self.currently_is(SyntaxKind::Ident) {
            self.start_node(SyntaxKind::Name);
            self.bump();
            self.finish_node();
        } else {
            self.error(DiagnosticKind::ExpectedName);
        }
    }

    /// Identifier or destructuring pattern.
    pub(super) fn parse_binding(&mut self) {
        match self.current() {
            SyntaxKind::BraceOpen | SyntaxKind::BracketOpen => self.parse_binding_pattern(),
            _ => self.parse_name(),
        }
    }

    /// `{ a, b: c, ...rest }` or `[a, , b = 1]`
    fn parse_binding_pattern(&mut self) {
        if !self.enter_recursion() {
            return;
        }
        let (open_kind, close_kind, unclosed) = if self.currently_is(SyntaxKind::BraceOpen) {
            (
                SyntaxKind::BraceOpen,
                SyntaxKind::BraceClose,
                DiagnosticKind::UnclosedBrace,
            )
        } else {
            (
                SyntaxKind::BracketOpen,
                SyntaxKind::BracketClose,
                DiagnosticKind::UnclosedBracket,
            )
        };

        self.start_node(SyntaxKind::BindingPattern);
        let open = self.current_span();
        self.push_delimiter(open_kind);
        self.bump();

        while !self.at_end() && !self.currently_is(close_kind) {
            if self.eat_token(SyntaxKind::Comma) {
                // Array holes.
                continue;
            }
            self.eat_token(SyntaxKind::DotDotDot);
            if open_kind == SyntaxKind::BraceOpen
                && matches!(
                    self.current(),
                    SyntaxKind::Ident | SyntaxKind::StringLiteral | SyntaxKind::Number
                )
                && self.next_is(SyntaxKind::Colon)
            {
                // Property key, then the bound target.
                self.bump();
                self.bump();
            }
            if !self.currently_is_one_of(BINDING_START) {
                self.error_and_bump_msg(DiagnosticKind::ExpectedName, "in binding pattern");
                continue;
            }
            self.parse_binding();
            if self.currently_is(SyntaxKind::Equals) {
                self.parse_initializer(LIST_ITEM_END);
            }
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.pop_delimiter();
        if !self.eat_token(close_kind) {
            self.error_unclosed_delimiter(unclosed, "pattern opened here", open);
        }
        self.finish_node();
        self.exit_recursion();
    }

    /// `: <type>`
    pub(super) fn parse_type_annotation(&mut self, stop: TokenSet) {
        self.assert_current(SyntaxKind::Colon);
        self.start_node(SyntaxKind::TypeAnnotation);
        self.bump();
        self.parse_type_expr(stop);
        self.finish_node();
    }

    pub(super) fn parse_type_expr(&mut self, stop: TokenSet) {
        self.start_node(SyntaxKind::TypeExpr);
        if !self.skip_balanced(stop, TYPE_MODE) {
            self.error(DiagnosticKind::ExpectedType);
        }
        self.finish_node();
    }

    /// `= <expression>`
    pub(super) fn parse_initializer(&mut self, stop: TokenSet) {
        self.assert_current(SyntaxKind::Equals);
        self.start_node(SyntaxKind::Initializer);
        self.bump();
        if !self.skip_expression(stop) {
            self.error(DiagnosticKind::ExpectedExpression);
        }
        self.finish_node();
    }

    /// `<T, in out U extends K = D>`
    pub(super) fn parse_type_parameters(&mut self) {
        self.assert_current(SyntaxKind::LAngle);
        self.start_node(SyntaxKind::TypeParameterList);
        let open = self.current_span();
        self.push_delimiter(SyntaxKind::LAngle);
        self.bump();

        while !self.at_end() && !self.currently_is(SyntaxKind::RAngle) {
            self.start_node(SyntaxKind::TypeParameter);
            while (self.at_word("in") || self.at_word("out") || self.at_word("const"))
                && self.next_is(SyntaxKind::Ident)
            {
                self.bump();
            }
            self.parse_name();
            if self.at_word("extends") {
                self.bump_remap(SyntaxKind::KwExtends);
                self.parse_type_expr(TYPE_PARAM_CONSTRAINT_END);
            }
            if self.eat_token(SyntaxKind::Equals) {
                self.parse_type_expr(LIST_ITEM_END);
            }
            self.finish_node();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.pop_delimiter();
        if !self.eat_token(SyntaxKind::RAngle) {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedAngle,
                "type parameters opened here",
                open,
            );
        }
        self.finish_node();
    }

    /// `(a: T, b?: U, ...rest: V[])`
    pub(super) fn parse_parameters(&mut self) {
        self.assert_current(SyntaxKind::ParenOpen);
        self.start_node(SyntaxKind::ParameterList);
        let open = self.current_span();
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();

        while !self.at_end() && !self.currently_is(SyntaxKind::ParenClose) {
            if !self.currently_is_one_of(BINDING_START)
                && !self.currently_is(SyntaxKind::DotDotDot)
            {
                self.error_and_bump_msg(DiagnosticKind::ExpectedName, "parameter");
                continue;
            }
            self.parse_parameter();
            if !self.eat_token(SyntaxKind::Comma) {
                break;
            }
        }

        self.pop_delimiter();
        if !self.eat_token(SyntaxKind::ParenClose) {
            self.error_unclosed_delimiter(
                DiagnosticKind::UnclosedParen,
                "parameter list opened here",
                open,
            );
        }
        self.finish_node();
    }

    fn parse_parameter(&mut self) {
        self.start_node(SyntaxKind::Parameter);
        self.eat_token(SyntaxKind::DotDotDot);
        self.parse_binding();
        self.eat_token(SyntaxKind::Question);
        if self.currently_is(SyntaxKind::Colon) {
            self.parse_type_annotation(PARAM_TYPE_END);
        }
        if self.currently_is(SyntaxKind::Equals) {
            self.parse_initializer(LIST_ITEM_END);
        }
        self.finish_node();
    }

    /// `{ .. }` whose contents are kept as an opaque balanced token run.
    pub(super) fn parse_braced_body(&mut self, kind: SyntaxKind) {
        if !self.currently_is(SyntaxKind::BraceOpen) {
            self.error_msg(DiagnosticKind::UnexpectedToken, "expected `{`");
            return;
        }
        self.start_node(kind);
        let open = self.current_span();
        self.push_delimiter(SyntaxKind::BraceOpen);
        self.bump();

        loop {
            self.skip_balanced(TokenSet::EMPTY, BODY_MODE);
            let current = self.current();
            if self.at_end() || current == SyntaxKind::BraceClose {
                break;
            }
            // A stray `)` or `]` at body level.
            let text = self.current_text().to_string();
            self.error_and_bump_msg(DiagnosticKind::MismatchedDelimiter, text);
        }

        self.pop_delimiter();
        if !self.eat_token(SyntaxKind::BraceClose) && !self.has_fatal_error() {
            self.error_unclosed_delimiter(DiagnosticKind::UnclosedBrace, "body opened here", open);
        }
        self.finish_node();
    }

    pub(super) fn skip_expression(&mut self, stop: TokenSet) -> bool {
        self.skip_balanced(stop, EXPRESSION_MODE)
    }

    /// Consumes tokens up to a `stop` token, an unmatched closer, or (per `mode`)
    /// the start of the next declaration, keeping brackets balanced.
    /// Returns whether anything was consumed.
    fn skip_balanced(&mut self, stop: TokenSet, mode: SkipMode) -> bool {
        let mut stack: Vec<(SyntaxKind, TextRange)> = Vec::new();
        let mut consumed = false;

        while !self.at_end() {
            let kind = self.current();
            if stack.is_empty() {
                if stop.contains(kind) || CLOSERS.contains(kind) {
                    break;
                }
                if mode.angles && kind == SyntaxKind::RAngle {
                    break;
                }
                if mode.statement_boundary && consumed && self.at_statement_start() {
                    break;
                }
            }

            match kind {
                SyntaxKind::ParenOpen | SyntaxKind::BracketOpen | SyntaxKind::BraceOpen => {
                    stack.push((kind, self.current_span()));
                    self.bump();
                }
                SyntaxKind::LAngle if mode.angles => {
                    stack.push((kind, self.current_span()));
                    self.bump();
                }
                SyntaxKind::RAngle if mode.angles => {
                    if stack.last().is_some_and(|(k, _)| *k == SyntaxKind::LAngle) {
                        stack.pop();
                    }
                    self.bump();
                }
                SyntaxKind::ParenClose | SyntaxKind::BracketClose | SyntaxKind::BraceClose => {
                    let opener = opener_of(kind);
                    // Stray `<` that never closed were comparisons, not brackets.
                    while stack.last().is_some_and(|(k, _)| *k == SyntaxKind::LAngle) {
                        stack.pop();
                    }
                    match stack.last() {
                        Some((k, _)) if *k == opener => {
                            stack.pop();
                            self.bump();
                        }
                        Some(_) => {
                            let text = self.current_text().to_string();
                            self.error_and_bump_msg(DiagnosticKind::MismatchedDelimiter, text);
                        }
                        None => break,
                    }
                }
                SyntaxKind::Garbage => {
                    self.error(DiagnosticKind::InvalidCharacter);
                    self.bump_as_error();
                }
                _ => self.bump(),
            }
            consumed = true;
        }

        if let Some(&(kind, open)) = stack.iter().rev().find(|(k, _)| *k != SyntaxKind::LAngle) {
            let diagnostic = match kind {
                SyntaxKind::ParenOpen => DiagnosticKind::UnclosedParen,
                SyntaxKind::BracketOpen => DiagnosticKind::UnclosedBracket,
                _ => DiagnosticKind::UnclosedBrace,
            };
            self.error_unclosed_delimiter(diagnostic, "opened here", open);
        } else if let Some(&(_, open)) = stack.last() {
            self.error_unclosed_delimiter(DiagnosticKind::UnclosedAngle, "opened here", open);
        }

        consumed
    }
}

fn opener_of(closer: SyntaxKind) -> SyntaxKind {
    match closer {
        SyntaxKind::ParenClose => SyntaxKind::ParenOpen,
        SyntaxKind::BracketClose => SyntaxKind::BracketOpen,
        _ => SyntaxKind::BraceOpen,
    }
}
