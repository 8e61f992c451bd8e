use indoc::indoc;

use super::{CstPrinter, parse, parse_with_fuel};

fn dump(source: &str) -> String {
    let result = parse(source).unwrap();
    assert!(
        result.diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        result.diagnostics.printer().render()
    );
    CstPrinter::new(result.root.as_cst()).dump()
}

fn diagnostics(source: &str) -> String {
    let result = parse(source).unwrap();
    result.diagnostics.filtered().printer().render()
}

#[test]
fn declare_var() {
    insta::assert_snapshot!(dump("declare var NaN: number;"), @r#"
    SourceFile
      VariableStatement
        KwDeclare "declare"
        KwVar "var"
        VariableDeclarator
          Name
            Ident "NaN"
          TypeAnnotation
            Colon ":"
            TypeExpr
              Ident "number"
        Semicolon ";"
    "#);
}

#[test]
fn interface_with_heritage() {
    let input = indoc! {r#"
    interface Array<T> extends RelativeIndexable<T> {
        length: number;
    }
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    SourceFile
      InterfaceDeclaration
        KwInterface "interface"
        Name
          Ident "Array"
        TypeParameterList
          LAngle "<"
          TypeParameter
            Name
              Ident "T"
          RAngle ">"
        HeritageClause
          KwExtends "extends"
          TypeExpr
            Ident "RelativeIndexable"
            LAngle "<"
            Ident "T"
            RAngle ">"
        ObjectTypeBody
          BraceOpen "{"
          Ident "length"
          Colon ":"
          Ident "number"
          Semicolon ";"
          BraceClose "}"
    "#);
}

#[test]
fn namespaces_and_modules() {
    let input = indoc! {r#"
    declare namespace Intl.Collator {
        var x: number;
    }
    declare global {
        interface Foo {}
    }
    declare module "fs";
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    SourceFile
      ModuleDeclaration
        KwDeclare "declare"
        KwNamespace "namespace"
        Name
          Ident "Intl"
        Dot "."
        Name
          Ident "Collator"
        ModuleBlock
          BraceOpen "{"
          VariableStatement
            KwVar "var"
            VariableDeclarator
              Name
                Ident "x"
              TypeAnnotation
                Colon ":"
                TypeExpr
                  Ident "number"
            Semicolon ";"
          BraceClose "}"
      ModuleDeclaration
        KwDeclare "declare"
        KwGlobal "global"
        ModuleBlock
          BraceOpen "{"
          InterfaceDeclaration
            KwInterface "interface"
            Name
              Ident "Foo"
            ObjectTypeBody
              BraceOpen "{"
              BraceClose "}"
          BraceClose "}"
      ModuleDeclaration
        KwDeclare "declare"
        KwModule "module"
        Name
          StringLiteral "\"fs\""
        Semicolon ";"
    "#);
}

#[test]
fn import_forms() {
    let input = indoc! {r#"
    import type { A, B as C } from "./a";
    import * as ns from "x";
    import D, { type E } from "y";
    import F = require("f");
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    SourceFile
      ImportDeclaration
        KwImport "import"
        ImportClause
          KwType "type"
          NamedImports
            BraceOpen "{"
            ImportSpecifier
              Name
                Ident "A"
            Comma ","
            ImportSpecifier
              Ident "B"
              KwAs "as"
              Name
                Ident "C"
            BraceClose "}"
        KwFrom "from"
        StringLiteral "\"./a\""
        Semicolon ";"
      ImportDeclaration
        KwImport "import"
        ImportClause
          NamespaceImport
            Star "*"
            KwAs "as"
            Name
              Ident "ns"
        KwFrom "from"
        StringLiteral "\"x\""
        Semicolon ";"
      ImportDeclaration
        KwImport "import"
        ImportClause
          Name
            Ident "D"
          Comma ","
          NamedImports
            BraceOpen "{"
            ImportSpecifier
              KwType "type"
              Name
                Ident "E"
            BraceClose "}"
        KwFrom "from"
        StringLiteral "\"y\""
        Semicolon ";"
      ImportEquals
        KwImport "import"
        Name
          Ident "F"
        Equals "="
        ModuleReference
          KwRequire "require"
          ParenOpen "("
          StringLiteral "\"f\""
          ParenClose ")"
        Semicolon ";"
    "#);
}

#[test]
fn const_enum() {
    insta::assert_snapshot!(dump(r#"declare const enum E { A, B = 1, "c" }"#), @r#"
    SourceFile
      EnumDeclaration
        KwDeclare "declare"
        KwConst "const"
        KwEnum "enum"
        Name
          Ident "E"
        EnumBody
          BraceOpen "{"
          EnumMember
            Name
              Ident "A"
          Comma ","
          EnumMember
            Name
              Ident "B"
            Initializer
              Equals "="
              Number "1"
          Comma ","
          EnumMember
            Name
              StringLiteral "\"c\""
          BraceClose "}"
    "#);
}

#[test]
fn function_signature() {
    let input = "declare function parseInt(string: string, radix?: number): number;";

    insta::assert_snapshot!(dump(input), @r#"
    SourceFile
      FunctionDeclaration
        KwDeclare "declare"
        KwFunction "function"
        Name
          Ident "parseInt"
        ParameterList
          ParenOpen "("
          Parameter
            Name
              Ident "string"
            TypeAnnotation
              Colon ":"
              TypeExpr
                Ident "string"
          Comma ","
          Parameter
            Name
              Ident "radix"
            Question "?"
            TypeAnnotation
              Colon ":"
              TypeExpr
                Ident "number"
          ParenClose ")"
        TypeAnnotation
          Colon ":"
          TypeExpr
            Ident "number"
        Semicolon ";"
    "#);
}

#[test]
fn missing_semicolon_at_line_break() {
    let input = indoc! {r#"
    type A = string | number
    declare var x: A
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    SourceFile
      TypeAliasDeclaration
        KwType "type"
        Name
          Ident "A"
        Equals "="
        TypeExpr
          Ident "string"
          Pipe "|"
          Ident "number"
      VariableStatement
        KwDeclare "declare"
        KwVar "var"
        VariableDeclarator
          Name
            Ident "x"
          TypeAnnotation
            Colon ":"
            TypeExpr
              Ident "A"
    "#);
}

#[test]
fn export_forms() {
    let input = indoc! {r#"
    export = Foo;
    export as namespace Bar;
    export { a as b } from "m";
    export default function (): void;
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    SourceFile
      ExportAssignment
        KwExport "export"
        Equals "="
        TypeExpr
          Ident "Foo"
        Semicolon ";"
      NamespaceExport
        KwExport "export"
        KwAs "as"
        KwNamespace "namespace"
        Name
          Ident "Bar"
        Semicolon ";"
      ExportDeclaration
        KwExport "export"
        NamedExports
          BraceOpen "{"
          Ident "a"
          Ident "as"
          Ident "b"
          BraceClose "}"
        KwFrom "from"
        StringLiteral "\"m\""
        Semicolon ";"
      FunctionDeclaration
        KwExport "export"
        KwDefault "default"
        KwFunction "function"
        ParameterList
          ParenOpen "("
          ParenClose ")"
        TypeAnnotation
          Colon ":"
          TypeExpr
            Ident "void"
        Semicolon ";"
    "#);
}

#[test]
fn generic_types_are_balanced() {
    let input = indoc! {r#"
    declare var m: Map<string, Array<{ a: (x: number) => void }>>;
    "#};

    let result = parse(input).unwrap();
    assert!(result.diagnostics.is_empty());
    let names: Vec<_> = result
        .root
        .statements()
        .filter_map(|s| match s {
            super::Statement::Variable(v) => Some(v),
            _ => None,
        })
        .flat_map(|v| v.declarators().collect::<Vec<_>>())
        .flat_map(|d| d.bound_names())
        .map(|n| n.text())
        .collect();
    assert_eq!(names, vec!["m"]);
}

#[test]
fn keywords_as_names() {
    let input = indoc! {r#"
    declare var type: number;
    interface declare { module: string; function(): void }
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    SourceFile
      VariableStatement
        KwDeclare "declare"
        KwVar "var"
        VariableDeclarator
          Name
            Ident "type"
          TypeAnnotation
            Colon ":"
            TypeExpr
              Ident "number"
        Semicolon ";"
      InterfaceDeclaration
        KwInterface "interface"
        Name
          Ident "declare"
        ObjectTypeBody
          BraceOpen "{"
          Ident "module"
          Colon ":"
          Ident "string"
          Semicolon ";"
          Ident "function"
          ParenOpen "("
          ParenClose ")"
          Colon ":"
          Ident "void"
          BraceClose "}"
    "#);
}

#[test]
fn same_line_declarations_need_semicolon() {
    let input = "declare var a: number declare var b: string;";

    insta::assert_snapshot!(diagnostics(input), @"error at 22..29: expected `;` (fix: insert `;`)");
}

#[test]
fn stray_closing_brace_is_recovered() {
    let input = indoc! {r#"
    declare var x: number;
    }
    interface A {}
    "#};

    let result = parse(input).unwrap();
    insta::assert_snapshot!(
        result.diagnostics.printer().render(),
        @"error at 23..24: mismatched closing delimiter `}`"
    );
    assert_eq!(result.root.statements().count(), 2);
}

#[test]
fn stray_tokens_in_namespace_stop_at_closing_brace() {
    let input = indoc! {r#"
    declare namespace N {
        foo bar
    }
    interface A {}
    "#};

    let result = parse(input).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    let rendered = result.diagnostics.printer().render();
    assert!(!rendered.contains("missing closing"), "{rendered}");
    assert_eq!(result.root.statements().count(), 2);
}

#[test]
fn unclosed_namespace_body() {
    let input = "declare namespace N {\n    var x: number;\n";

    insta::assert_snapshot!(
        diagnostics(input),
        @"error at 20..41: missing closing `}` (related: block opened here at 20..21)"
    );
}

#[test]
fn modifier_without_declaration() {
    insta::assert_snapshot!(diagnostics("declare foo bar;"), @"error at 8..11: expected a declaration");
}

#[test]
fn invalid_character_is_reported() {
    insta::assert_snapshot!(diagnostics("§ interface A {}"), @"error at 0..2: invalid character");
}

#[test]
fn deeply_nested_namespaces_hit_recursion_limit() {
    let depth = 32;
    let mut input = String::new();
    for i in 0..=depth {
        input.push_str(&format!("namespace N{i} {{ "));
    }
    for _ in 0..=depth {
        input.push('}');
    }

    let result = parse_with_fuel(&input, None, Some(depth));
    assert!(
        matches!(result, Err(crate::Error::RecursionLimitExceeded)),
        "expected RecursionLimitExceeded error, got {:?}",
        result.map(|r| r.diagnostics.len())
    );
}

#[test]
fn exec_fuel_exhaustion() {
    let result = parse_with_fuel("declare var a: number; declare var b: number;", Some(3), None);
    assert!(matches!(result, Err(crate::Error::ExecFuelExhausted)));
}
