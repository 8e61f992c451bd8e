//! Rendering of syntax errors.
//!
//! With the source text attached every error becomes an annotated snippet:
//! the primary span, the opening delimiter of an unclosed block as context,
//! and a `help` patch when the parser knows the fix. Without source text the
//! output is one line per error with byte offsets, which parser tests snapshot.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::{DiagnosticMessage, Diagnostics};

pub struct DiagnosticsPrinter<'a> {
    diagnostics: &'a Diagnostics,
    source: Option<&'a str>,
    path: Option<&'a str>,
    colored: bool,
}

impl<'a> DiagnosticsPrinter<'a> {
    pub fn new(diagnostics: &'a Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'a str) -> Self {
        self.source = Some(source);
        self
    }

    /// Bundle file name shown in the snippet header.
    pub fn path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            for (i, diag) in self.diagnostics.iter().enumerate() {
                if i > 0 {
                    w.write_char('\n')?;
                }
                write!(w, "{diag}")?;
            }
            return Ok(());
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&self.report(diag, source)))?;
        }
        Ok(())
    }

    fn report<'r>(&self, diag: &'r DiagnosticMessage, source: &'r str) -> Vec<Group<'r>>
    where
        'a: 'r,
    {
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(
                AnnotationKind::Primary
                    .span(visible_span(diag.range, source.len()))
                    .label(diag.message()),
            );
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in diag.related() {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(visible_span(related.range, source.len()))
                    .label(&related.message),
            );
        }

        let mut groups = vec![Level::ERROR.primary_title(diag.message()).element(snippet)];
        if let Some(fix) = diag.fix() {
            let patch = Patch::new(byte_span(fix.range), &fix.replacement);
            groups.push(
                Level::HELP
                    .secondary_title(&fix.description)
                    .element(Snippet::source(source).line_start(1).patch(patch)),
            );
        }
        groups
    }
}

fn byte_span(range: TextRange) -> Range<usize> {
    range.start().into()..range.end().into()
}

/// Empty ranges (e.g. a missing `;` at end of input) are widened to one byte
/// so the caret has something to point at.
fn visible_span(range: TextRange, limit: usize) -> Range<usize> {
    let span = byte_span(range);
    if span.is_empty() {
        return span.start..(span.start + 1).min(limit);
    }
    span
}
