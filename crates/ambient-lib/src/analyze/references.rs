//! `/// <reference lib="..." />` directives of a bundle.

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex_automata::meta::Regex;

use crate::unit::ParsedUnit;

/// Matched against line-comment text after the leading `//`.
static LIB_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^/ <reference lib="(.+)" />"#).expect("reference directive pattern is valid")
});

/// Bundle names a bundle pulls in, in source order without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceSet(IndexSet<String>);

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if `name` was already present (its position is kept).
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

/// Collects the lib references of every line comment in `unit`.
///
/// Other directive kinds (`path`, `types`) and malformed directives are skipped.
pub fn extract_references(unit: &ParsedUnit) -> ReferenceSet {
    unit.line_comments()
        .iter()
        .filter_map(|text| parse_reference_directive(text))
        .collect()
}

/// The referenced bundle name, if `comment` (text after `//`) is a lib directive.
pub fn parse_reference_directive(comment: &str) -> Option<&str> {
    let mut caps = LIB_REFERENCE.create_captures();
    LIB_REFERENCE.captures(comment, &mut caps);
    let span = caps.get_group(1)?;
    Some(&comment[span.range()])
}
