use indoc::indoc;

use super::cst::SyntaxKind;
use super::lexer::{lex, token_text};

fn dump(source: &str) -> String {
    lex(source)
        .iter()
        .filter(|t| t.kind != SyntaxKind::Whitespace)
        .map(|t| format!("{:?} {:?}", t.kind, token_text(source, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn declaration_tokens() {
    insta::assert_snapshot!(dump("declare var NaN: number;"), @r#"
    Ident "declare"
    Ident "var"
    Ident "NaN"
    Colon ":"
    Ident "number"
    Semicolon ";"
    "#);
}

#[test]
fn reference_directive_is_line_comment() {
    let source = indoc! {r#"
        /// <reference lib="es2015.symbol" />
        interface A {}
    "#};

    insta::assert_snapshot!(dump(source), @r#"
    LineComment "/// <reference lib=\"es2015.symbol\" />"
    Newline "\n"
    Ident "interface"
    Ident "A"
    BraceOpen "{"
    BraceClose "}"
    Newline "\n"
    "#);
}

#[test]
fn nested_generics_close_one_at_a_time() {
    insta::assert_snapshot!(dump("A<B<C>>"), @r#"
    Ident "A"
    LAngle "<"
    Ident "B"
    LAngle "<"
    Ident "C"
    RAngle ">"
    RAngle ">"
    "#);
}

#[test]
fn arrow_and_spread() {
    insta::assert_snapshot!(dump("(...args: any[]) => void"), @r#"
    ParenOpen "("
    DotDotDot "..."
    Ident "args"
    Colon ":"
    Ident "any"
    BracketOpen "["
    BracketClose "]"
    ParenClose ")"
    FatArrow "=>"
    Ident "void"
    "#);
}

#[test]
fn literals() {
    insta::assert_snapshot!(dump(r#"'a\'b' "c" `x${y}` 0x1F 1_000n .5 1e-7 #priv"#), @r##"
    StringLiteral "'a\\'b'"
    StringLiteral "\"c\""
    TemplateLiteral "`x${y}`"
    Number "0x1F"
    Number "1_000n"
    Number ".5"
    Number "1e-7"
    PrivateName "#priv"
    "##);
}

#[test]
fn block_comments_with_star_runs() {
    let source = "/*! ****\n * header\n ****/ declare";

    insta::assert_snapshot!(dump(source), @r#"
    BlockComment "/*! ****\n * header\n ****/"
    Ident "declare"
    "#);
}

#[test]
fn crlf_is_single_newline() {
    let kinds: Vec<_> = lex("a\r\nb").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::Ident, SyntaxKind::Newline, SyntaxKind::Ident]
    );
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(dump("a §§ b"), @r#"
    Ident "a"
    Garbage "§§"
    Ident "b"
    "#);
}

#[test]
fn byte_order_mark_is_whitespace() {
    let tokens = lex("\u{FEFF}declare");
    assert_eq!(tokens[0].kind, SyntaxKind::Whitespace);
    assert_eq!(tokens[1].kind, SyntaxKind::Ident);
}
