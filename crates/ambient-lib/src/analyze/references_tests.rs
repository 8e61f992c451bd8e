use indoc::indoc;

use super::references::{ReferenceSet, extract_references, parse_reference_directive};
use crate::{ParseOptions, parse_unit};

fn references(source: &str, options: &ParseOptions) -> Vec<String> {
    let unit = parse_unit(source, options).unwrap();
    extract_references(&unit)
        .iter()
        .map(str::to_string)
        .collect()
}

#[test]
fn directive_text() {
    assert_eq!(
        parse_reference_directive(r#"/ <reference lib="es2015.core" />"#),
        Some("es2015.core")
    );
    assert_eq!(
        parse_reference_directive(r#"/ <reference path="./x.d.ts" />"#),
        None
    );
    assert_eq!(parse_reference_directive(r#"/ <reference lib="" />"#), None);
    assert_eq!(parse_reference_directive(r#" <reference lib="es5" />"#), None);
    assert_eq!(
        parse_reference_directive(r#"/<reference lib="es5" />"#),
        None
    );
}

#[test]
fn source_order_without_duplicates() {
    let input = indoc! {r#"
    /// <reference no-default-lib="true"/>
    /// <reference lib="es2015" />
    /// <reference lib="dom" />
    /// <reference types="node" />
    /// <reference lib="es2015" />
    declare var x: number;
    // <reference lib="not-triple-slash" />
    /* /// <reference lib="block" /> */
    /// <reference lib="scripthost" />
    "#};

    assert_eq!(
        references(input, &ParseOptions::default()),
        vec!["es2015", "dom", "scripthost"]
    );
}

#[test]
fn comments_excluded() {
    let input = "/// <reference lib=\"es5\" />\ndeclare var x: number;\n";
    let options = ParseOptions::default().include_comments(false);

    assert!(references(input, &options).is_empty());
}

#[test]
fn reference_set_keeps_first_position() {
    let mut set: ReferenceSet = ["a", "b"].into_iter().collect();
    assert!(!set.insert("a"));
    assert!(set.insert("c"));

    assert_eq!(set.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert!(set.contains("b"));
    assert_eq!(set.len(), 3);
}
