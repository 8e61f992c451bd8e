//! Syntax diagnostics for declaration sources.
//!
//! The parser never stops at the first problem: every error is collected here,
//! cascading noise is filtered out, and the rest is rendered with source snippets.

mod message;
mod printer;


use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, Fix, RelatedInfo};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and span.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    /// Drops follow-up errors that another diagnostic already explains.
    ///
    /// Errors inside the span of an unclosed block are noise once the block is
    /// reported. At a single position, a missing token is the better report
    /// than the unclosed block it leads to.
    pub fn filtered(&self) -> Diagnostics {
        let messages = self
            .messages
            .iter()
            .enumerate()
            .filter(|&(j, inner)| {
                !self
                    .messages
                    .iter()
                    .enumerate()
                    .any(|(i, outer)| i != j && outer.explains(inner))
            })
            .map(|(_, m)| m.clone())
            .collect();
        Diagnostics { messages }
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn suppression_range(mut self, range: TextRange) -> Self {
        self.message.suppression_range = range;
        self
    }

    pub fn fix(
        mut self,
        range: TextRange,
        description: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        self.message.fix = Some(Fix {
            range,
            replacement: replacement.into(),
            description: description.into(),
        });
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
