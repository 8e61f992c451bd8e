use indoc::indoc;

use crate::parser::SyntaxKind;
use crate::{Error, ParseOptions, parse_unit};

#[test]
fn syntax_errors_are_fatal() {
    let input = indoc! {r#"
    declare var x: number;
    }
    interface A {}
    "#};

    let Err(Error::Parse(failure)) = parse_unit(input, &ParseOptions::default()) else {
        panic!("expected a parse failure");
    };
    assert_eq!(failure.diagnostics().len(), 1);
    assert_eq!(failure.file_name(), None);
    insta::assert_snapshot!(failure.summary(), @"declaration parsing failed with 1 error");

    let failure = (*failure).in_file("lib.es5.d.ts");
    insta::assert_snapshot!(
        Error::Parse(Box::new(failure)).to_string(),
        @"lib.es5.d.ts: declaration parsing failed with 1 error"
    );
}

#[test]
fn failure_renders_with_path_and_snippet() {
    let input = "declare var x: number;\n}\n";
    let Err(Error::Parse(failure)) = parse_unit(input, &ParseOptions::default()) else {
        panic!("expected a parse failure");
    };

    let rendered = (*failure).in_file("lib.es5.d.ts").render(false);
    assert!(rendered.contains("mismatched closing delimiter `}`"), "{rendered}");
    assert!(rendered.contains("lib.es5.d.ts"), "{rendered}");
    assert!(!rendered.contains('\x1b'));
}

#[test]
fn comments_in_source_order() {
    let input = indoc! {r#"
    /// <reference lib="es5" />
    /* block */
    declare var x: number; // trailing
    "#};

    let unit = parse_unit(input, &ParseOptions::default()).unwrap();
    let kinds: Vec<_> = unit.comments().iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::LineComment,
            SyntaxKind::BlockComment,
            SyntaxKind::LineComment
        ]
    );
    assert_eq!(
        unit.line_comments(),
        vec![r#"/ <reference lib="es5" />"#, " trailing"]
    );

    let without = parse_unit(input, &ParseOptions::default().include_comments(false)).unwrap();
    assert!(without.comments().is_empty());
    assert!(without.line_comments().is_empty());
}

#[test]
fn cst_dump() {
    let unit = parse_unit("declare var NaN: number;", &ParseOptions::default()).unwrap();

    insta::assert_snapshot!(unit.dump_cst(), @r#"
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
fn fuel_limits_are_fatal() {
    let input = "declare var a: number; declare var b: number;";
    let starved = ParseOptions::default().exec_fuel(Some(3));
    assert!(matches!(
        parse_unit(input, &starved),
        Err(Error::ExecFuelExhausted)
    ));

    let nested = "namespace A { namespace B { namespace C {} } }";
    let shallow = ParseOptions::default().recursion_fuel(Some(2));
    assert!(matches!(
        parse_unit(nested, &shallow),
        Err(Error::RecursionLimitExceeded)
    ));
    assert!(parse_unit(nested, &ParseOptions::default()).is_ok());
}
