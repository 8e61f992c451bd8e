use ambient_core::Classification;
use indoc::indoc;

use super::scope::{DefinitionKind, ScopeId, ScopeKind};
use crate::{ParseOptions, SourceType, parse_unit};

fn scopes(source: &str) -> String {
    parse_unit(source, &ParseOptions::default())
        .unwrap()
        .scopes()
        .dump()
}

#[test]
fn declarations_open_child_scopes() {
    let input = indoc! {r#"
    interface Array<T> {}
    declare var Array: ArrayConstructor;
    declare function parseInt(string: string, radix?: number): number;
    declare namespace Intl {
        interface Collator {}
    }
    "#};

    insta::assert_snapshot!(scopes(input), @r"
    Global
      Module
        Array TYPE_VALUE
        parseInt VALUE
        Intl TYPE_VALUE
        Type
          T TYPE
        Function
          string VALUE
          radix VALUE
        Namespace
          Collator TYPE
          Type
    ");
}

#[test]
fn function_parameters_bind_in_function_scope() {
    let input = "declare function from<T>(items: T[], ...rest: T[]): void;\n";

    insta::assert_snapshot!(scopes(input), @r"
    Global
      Module
        from VALUE
        Function
          T TYPE
          items VALUE
          rest VALUE
    ");
}

#[test]
fn imports_and_augmentations() {
    let input = indoc! {r#"
    import type { A } from "a";
    import B, * as C from "b";
    import { type D, E as F } from "c";
    import G = require("g");
    declare global {
        var H: number;
    }
    declare module "m" {
        export const I: number;
    }
    export { B };
    "#};

    insta::assert_snapshot!(scopes(input), @r"
    Global
      Module
        A TYPE
        B TYPE_VALUE
        C TYPE_VALUE
        D TYPE
        F TYPE_VALUE
        G TYPE_VALUE
        Namespace
          H VALUE
        Namespace
          I VALUE
    ");
}

#[test]
fn dotted_namespace_nests_scopes() {
    let input = "declare namespace A.B.C { const d: number; }";

    insta::assert_snapshot!(scopes(input), @r"
    Global
      Module
        A TYPE_VALUE
        Namespace
          B TYPE_VALUE
          Namespace
            C TYPE_VALUE
            Namespace
              d VALUE
    ");
}

#[test]
fn enums_and_classes() {
    let input = indoc! {r#"
    declare enum E { X, Y = 1 }
    declare class C<T> {}
    "#};

    insta::assert_snapshot!(scopes(input), @r"
    Global
      Module
        E TYPE_VALUE
        C TYPE_VALUE
        Enum
          X VALUE
          Y VALUE
        Class
          T TYPE
    ");
}

#[test]
fn script_declares_into_global_scope() {
    let options = ParseOptions::default()
        .source_type(SourceType::Script)
        .implicit_global("Symbol", Classification::TypeAndValue);
    let unit = parse_unit("declare var x: number;", &options).unwrap();

    insta::assert_snapshot!(unit.scopes().dump(), @r"
    Global
      Symbol TYPE_VALUE
      x VALUE
    ");
}

#[test]
fn merged_declarations_keep_every_definition() {
    let input = indoc! {r#"
    interface PromiseLike<T> {}
    declare var PromiseLike: unknown;
    "#};
    let unit = parse_unit(input, &ParseOptions::default()).unwrap();
    let tree = unit.scopes();

    let module_id = tree.global().children()[0];
    assert_eq!(tree.get(module_id).kind(), ScopeKind::Module);
    assert_eq!(tree.get(module_id).parent(), Some(ScopeId::GLOBAL));

    let variable = tree.get(module_id).variable("PromiseLike").unwrap();
    let kinds: Vec<_> = variable.defs().iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![DefinitionKind::TypeName, DefinitionKind::Variable]
    );
    assert!(variable.is_type_variable());
    assert!(variable.is_value_variable());

    let first = variable.defs()[0].range;
    assert_eq!(&input[first], "PromiseLike");
}
