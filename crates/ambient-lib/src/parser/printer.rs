//! Indented text dump of a syntax tree, used by tests and `dump_cst`.

use std::fmt::Write;

use rowan::{NodeOrToken, WalkEvent};

use super::cst::SyntaxNode;

pub struct CstPrinter<'n> {
    root: &'n SyntaxNode,
    trivia: bool,
}

impl<'n> CstPrinter<'n> {
    pub fn new(root: &'n SyntaxNode) -> Self {
        Self { root, trivia: false }
    }

    /// Also print whitespace and comment tokens.
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut depth = 0usize;
        for event in self.root.preorder_with_tokens() {
            match event {
                WalkEvent::Enter(NodeOrToken::Node(node)) => {
                    let _ = writeln!(out, "{:indent$}{:?}", "", node.kind(), indent = depth * 2);
                    depth += 1;
                }
                WalkEvent::Leave(NodeOrToken::Node(_)) => depth -= 1,
                WalkEvent::Enter(NodeOrToken::Token(token))
                    if self.trivia || !token.kind().is_trivia() =>
                {
                    let _ = writeln!(
                        out,
                        "{:indent$}{:?} {:?}",
                        "",
                        token.kind(),
                        token.text(),
                        indent = depth * 2
                    );
                }
                _ => {}
            }
        }
        out
    }
}
