/// Convert a bundle name to the identifier its generated module exports.
///
/// Dots are not valid in identifiers, so they become underscores.
///
/// # Examples
/// ```
/// use ambient_core::utils::to_export_ident;
/// assert_eq!(to_export_ident("es2015.symbol.wellknown"), "es2015_symbol_wellknown");
/// assert_eq!(to_export_ident("es5"), "es5");
/// ```
pub fn to_export_ident(bundle_name: &str) -> String {
    bundle_name.replace('.', "_")
}

/// Whether `s` can be written as an unquoted property key.
///
/// Accepts ASCII identifier names only: a letter, `_` or `$`, followed by
/// letters, digits, `_` or `$`.
///
/// # Examples
/// ```
/// use ambient_core::utils::is_identifier_name;
/// assert!(is_identifier_name("Array"));
/// assert!(is_identifier_name("$jsx_1"));
/// assert!(!is_identifier_name("es2015.core"));
/// assert!(!is_identifier_name("unique symbol"));
/// ```
pub fn is_identifier_name(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Quote `s` as a single-quoted string literal.
///
/// # Examples
/// ```
/// use ambient_core::utils::single_quote;
/// assert_eq!(single_quote("es5"), "'es5'");
/// assert_eq!(single_quote("it's"), r"'it\'s'");
/// ```
pub fn single_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
