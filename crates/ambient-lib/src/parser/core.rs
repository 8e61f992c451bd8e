//! Parser state: token cursor, green tree builder, budgets and error reporting.
//!
//! Trivia is never emitted eagerly. It collects in `pending_trivia` while the
//! cursor skips it and is flushed into whichever node or token comes next, so
//! comments end up as leading trivia of the declaration they precede.

use std::cell::Cell;

use rowan::{Checkpoint, GreenNodeBuilder, TextRange, TextSize};

use super::ast::SourceFile;
use super::cst::{SyntaxKind, SyntaxNode, TokenSet, keyword_kind};
use super::lexer::{Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Lookaheads allowed between two consumed tokens before the parser is
/// considered stuck.
const LOOKAHEAD_LIMIT: u32 = 256;

#[derive(Debug)]
pub struct ParseResult {
    pub root: SourceFile,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Token and nesting limits. Running out of either aborts the parse.
#[derive(Debug, Default)]
struct Budget {
    tokens_left: Option<u32>,
    max_depth: Option<u32>,
    depth: u32,
}

impl Budget {
    fn spend_token(&mut self) -> Result<(), Error> {
        match &mut self.tokens_left {
            Some(0) => Err(Error::ExecFuelExhausted),
            Some(left) => {
                *left -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn descend(&mut self) -> Result<(), Error> {
        if self.max_depth.is_some_and(|max| self.depth >= max) {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

pub struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    pending_trivia: Vec<Token>,
    builder: GreenNodeBuilder<'static>,
    diagnostics: Diagnostics,
    last_error_at: Option<TextSize>,
    open_blocks: Vec<OpenDelimiter>,
    budget: Budget,
    pub(super) lookahead_guard: Cell<u32>,
    fatal: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            pending_trivia: Vec::new(),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            last_error_at: None,
            open_blocks: Vec::new(),
            budget: Budget::default(),
            lookahead_guard: Cell::new(LOOKAHEAD_LIMIT),
            fatal: None,
        }
    }

    /// Caps the number of tokens the parser may consume.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.budget.tokens_left = limit;
        self
    }

    /// Caps the nesting depth of namespaces and bracketed types.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.budget.max_depth = limit;
        self
    }

    pub fn parse(mut self) -> Result<ParseResult, Error> {
        self.parse_source_file();
        self.flush_trivia();
        if let Some(err) = self.fatal {
            return Err(err);
        }
        let green = self.builder.finish();
        let root = SourceFile::cast(SyntaxNode::new_root(green))
            .expect("grammar always wraps the input in a SourceFile node");
        Ok(ParseResult {
            root,
            diagnostics: self.diagnostics,
        })
    }

    fn abort(&mut self, err: Error) {
        self.fatal.get_or_insert(err);
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal.is_some()
    }

    // Cursor

    fn skip_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.pos).copied() {
            if !token.kind.is_trivia() {
                break;
            }
            self.pending_trivia.push(token);
            self.pos += 1;
        }
    }

    fn flush_trivia(&mut self) {
        for token in std::mem::take(&mut self.pending_trivia) {
            self.builder
                .token(token.kind.into(), token_text(self.source, &token));
        }
    }

    /// The current token once trivia is skipped, or `None` at end of input.
    fn peek(&mut self) -> Option<Token> {
        self.skip_trivia();
        self.ensure_progress();
        self.tokens.get(self.pos).copied()
    }

    /// The `n`-th non-trivia token ahead of the cursor.
    fn peek_nth(&mut self, n: usize) -> Option<Token> {
        self.skip_trivia();
        self.ensure_progress();
        self.tokens[self.pos..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .copied()
    }

    fn end_offset(&self) -> TextSize {
        TextSize::of(self.source)
    }

    /// Current token kind; `Error` at end of input.
    pub(super) fn current(&mut self) -> SyntaxKind {
        self.peek().map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        match self.peek() {
            Some(token) => token.span,
            None => TextRange::empty(self.end_offset()),
        }
    }

    /// Source text of the current token; empty at end of input.
    pub(super) fn current_text(&mut self) -> &'src str {
        let source = self.source;
        self.peek().map_or("", |t| token_text(source, &t))
    }

    /// End of input, or a fatal error stopped the parse.
    pub(super) fn at_end(&mut self) -> bool {
        self.skip_trivia();
        self.pos >= self.tokens.len() || self.has_fatal_error()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Whether the current token is the identifier `word`.
    pub(super) fn at_word(&mut self, word: &str) -> bool {
        self.nth_is_word(0, word)
    }

    pub(super) fn nth(&mut self, n: usize) -> SyntaxKind {
        self.peek_nth(n).map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.nth(1) == kind
    }

    pub(super) fn nth_is_word(&mut self, n: usize, word: &str) -> bool {
        let source = self.source;
        self.peek_nth(n)
            .is_some_and(|t| t.kind == SyntaxKind::Ident && token_text(source, &t) == word)
    }

    /// Whether a line break separates the current token from the previous one.
    pub(super) fn preceded_by_newline(&mut self) -> bool {
        self.skip_trivia();
        let source = self.source;
        self.tokens[..self.pos]
            .iter()
            .rev()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| match t.kind {
                SyntaxKind::Newline => true,
                SyntaxKind::BlockComment => token_text(source, t).contains('\n'),
                _ => false,
            })
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rfind(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }

    /// Whether the innermost open delimiter is a `{`, so a `}` ends the
    /// current statement list.
    pub(super) fn in_block(&self) -> bool {
        self.open_blocks
            .last()
            .is_some_and(|open| open.kind == SyntaxKind::BraceOpen)
    }

    // Tree building

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia();
        self.flush_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.eat_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        let kind = self.current();
        self.bump_remap(kind);
    }

    /// Consumes the current token, recording it under `kind`.
    /// Contextual keywords lex as `Ident` and are remapped here.
    pub(super) fn bump_remap(&mut self, kind: SyntaxKind) {
        let token = self.peek().expect("bump past end of input");
        if let Err(err) = self.budget.spend_token() {
            self.abort(err);
        }
        self.lookahead_guard.set(LOOKAHEAD_LIMIT);
        self.flush_trivia();
        self.builder
            .token(kind.into(), token_text(self.source, &token));
        self.pos += 1;
    }

    /// Consumes the current identifier under its keyword kind.
    pub(super) fn bump_keyword(&mut self) {
        let kind = keyword_kind(self.current_text()).unwrap_or(SyntaxKind::Ident);
        self.bump_remap(kind);
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        let matched = self.currently_is(kind);
        if matched {
            self.bump();
        }
        matched
    }

    /// Consumes the identifier `word` as keyword `kind`.
    pub(super) fn eat_keyword(&mut self, word: &str, kind: SyntaxKind) -> bool {
        let matched = self.at_word(word);
        if matched {
            self.bump_remap(kind);
        }
        matched
    }

    /// Reports `what` as missing without consuming anything.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_msg(DiagnosticKind::UnexpectedToken, format!("expected {what}"));
        false
    }

    pub(super) fn bump_as_error(&mut self) {
        if self.peek().is_some() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    // Nesting

    pub(super) fn enter_recursion(&mut self) -> bool {
        match self.budget.descend() {
            Ok(()) => {
                self.lookahead_guard.set(LOOKAHEAD_LIMIT);
                true
            }
            Err(err) => {
                self.abort(err);
                false
            }
        }
    }

    pub(super) fn exit_recursion(&mut self) {
        self.budget.ascend();
        self.lookahead_guard.set(LOOKAHEAD_LIMIT);
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.open_blocks.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.open_blocks.pop()
    }

    // Errors

    /// Span of the current token if no error was reported there yet.
    /// Errors at one position are reported once.
    fn fresh_error_span(&mut self) -> Option<TextRange> {
        let span = self.current_span();
        if self.last_error_at == Some(span.start()) {
            return None;
        }
        self.last_error_at = Some(span.start());
        Some(span)
    }

    /// Follow-up errors inside the innermost open block are suppressed.
    fn suppression(&mut self, span: TextRange) -> TextRange {
        match self.open_blocks.last() {
            Some(open) => TextRange::new(open.span.start(), self.end_offset()),
            None => span,
        }
    }

    fn report_here(
        &mut self,
        kind: DiagnosticKind,
        message: Option<String>,
        fix: Option<(TextRange, &str, &str)>,
    ) {
        let Some(span) = self.fresh_error_span() else {
            return;
        };
        let suppression = self.suppression(span);
        let mut report = self
            .diagnostics
            .report(kind, span)
            .suppression_range(suppression);
        if let Some(message) = message {
            report = report.message(message);
        }
        if let Some((range, description, replacement)) = fix {
            report = report.fix(range, description, replacement);
        }
        report.emit();
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        self.report_here(kind, None, None);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.report_here(kind, Some(message.into()), None);
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_as_error();
    }

    /// Missing `;` between two declarations on the same line.
    pub(super) fn error_missing_semicolon(&mut self) {
        let at = self.last_non_trivia_end().unwrap_or_default();
        self.report_here(
            DiagnosticKind::ExpectedSemicolon,
            None,
            Some((TextRange::empty(at), "insert `;`", ";")),
        );
    }

    /// Reports a block left open; the range runs from the opener to the
    /// current token so later errors inside it are suppressed.
    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let Some(span) = self.fresh_error_span() else {
            return;
        };
        self.diagnostics
            .report(kind, TextRange::new(open_range.start(), span.end()))
            .related_to(related_msg, open_range)
            .emit();
    }
}
