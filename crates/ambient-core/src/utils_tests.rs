use crate::utils::{is_identifier_name, single_quote, to_export_ident};

#[test]
fn export_ident_replaces_dots() {
    assert_eq!(to_export_ident("es2015.core"), "es2015_core");
    assert_eq!(to_export_ident("esnext.full"), "esnext_full");
    assert_eq!(to_export_ident("dom"), "dom");
}

#[test]
fn identifier_names() {
    assert!(is_identifier_name("NaN"));
    assert!(is_identifier_name("_private"));
    assert!(is_identifier_name("$"));
    assert!(is_identifier_name("Float16Array"));
}

#[test]
fn non_identifier_names() {
    assert!(!is_identifier_name(""));
    assert!(!is_identifier_name("2d"));
    assert!(!is_identifier_name("dom.iterable"));
    assert!(!is_identifier_name("unique symbol"));
    assert!(!is_identifier_name("a-b"));
}

#[test]
fn single_quote_escapes() {
    assert_eq!(single_quote(""), "''");
    assert_eq!(single_quote("dom.iterable"), "'dom.iterable'");
    assert_eq!(single_quote(r"a\b"), r"'a\\b'");
    assert_eq!(single_quote("a'b"), r"'a\'b'");
}
