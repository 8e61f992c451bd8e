//! Tokenizer for declaration sources.
//!
//! Tokens carry a kind and a span only; text is sliced from the source on demand.
//! Runs of characters the token rules reject (stray `§`, an unterminated string
//! or block comment) merge into a single `Garbage` token so the parser reports
//! each run once.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for (result, span) in SyntaxKind::lexer(source).spanned() {
        let kind = result.unwrap_or(SyntaxKind::Garbage);
        let span = TextRange::new(offset(span.start), offset(span.end));

        match tokens.last_mut() {
            Some(last)
                if kind == SyntaxKind::Garbage
                    && last.kind == SyntaxKind::Garbage
                    && last.span.end() == span.start() =>
            {
                last.span = last.span.cover(span);
            }
            _ => tokens.push(Token::new(kind, span)),
        }
    }

    tokens
}

fn offset(at: usize) -> TextSize {
    TextSize::try_from(at).expect("declaration sources are smaller than 4 GiB")
}

/// Source text of `token`.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span]
}
