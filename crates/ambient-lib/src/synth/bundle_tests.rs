use ambient_core::{Catalog, Classification};

use super::bundle::{BundleModule, CatalogTable};
use crate::Error;
use crate::analyze::{GlobalVariable, ReferenceSet};

use Classification::{TypeAndValue, TypeOnly, ValueOnly};

fn catalog() -> Catalog {
    Catalog::from_table([
        ("es5", "lib.es5.d.ts"),
        ("es2015.core", "lib.es2015.core.d.ts"),
        ("es2015", "lib.es2015.d.ts"),
    ])
}

fn globals(entries: &[(&str, Classification)]) -> Vec<GlobalVariable> {
    entries
        .iter()
        .map(|&(name, classification)| GlobalVariable {
            name: name.to_string(),
            classification,
        })
        .collect()
}

fn module(name: &str, refs: &[&str], entries: &[(&str, Classification)]) -> BundleModule {
    let catalog = catalog();
    let descriptor = catalog.get(name).unwrap();
    let references: ReferenceSet = refs.iter().copied().collect();
    BundleModule::synthesize(descriptor, references, globals(entries), &catalog).unwrap()
}

#[test]
fn es5_scenario() {
    let es5 = module(
        "es5",
        &[],
        &[
            ("Array", TypeAndValue),
            ("NaN", ValueOnly),
            ("unique symbol", TypeOnly),
        ],
    );

    let entries: Vec<_> = es5.entries().iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(
        entries,
        vec![
            ("Array", TypeAndValue),
            ("NaN", ValueOnly),
            ("unique symbol", TypeOnly),
        ]
    );
    assert_eq!(
        es5.used_tags().iter().copied().collect::<Vec<_>>(),
        vec![TypeOnly, TypeAndValue, ValueOnly]
    );
    assert!(es5.references().is_empty());
}

#[test]
fn export_name_replaces_dots() {
    let core = module("es2015.core", &[], &[("Map", TypeOnly)]);
    assert_eq!(core.export_name(), "es2015_core");
    assert_eq!(core.descriptor().source_file_name(), "lib.es2015.core.d.ts");
}

#[test]
fn used_tags_only_lists_present_classifications() {
    let m = module("es5", &[], &[("a", ValueOnly), ("b", ValueOnly)]);
    assert_eq!(m.used_tags().iter().copied().collect::<Vec<_>>(), vec![ValueOnly]);
}

#[test]
fn unknown_reference_is_fatal() {
    let catalog = catalog();
    let descriptor = catalog.get("es2015").unwrap();
    let references: ReferenceSet = ["es5", "es2099.magic"].into_iter().collect();

    let err = BundleModule::synthesize(descriptor, references, Vec::new(), &catalog).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"bundle `es2015` references unknown bundle `es2099.magic`");
}

#[test]
fn resolve_merges_references_then_own_entries() {
    let mut table = CatalogTable::new();
    table.insert(module("es5", &[], &[("Symbol", TypeOnly), ("NaN", ValueOnly)]));
    table.insert(module("es2015.core", &[], &[("Map", TypeAndValue)]));
    table.insert(module(
        "es2015",
        &["es5", "es2015.core"],
        &[("Symbol", TypeAndValue), ("Proxy", ValueOnly)],
    ));

    let resolved = table.resolve("es2015").unwrap();
    let entries: Vec<_> = resolved.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(
        entries,
        vec![
            ("Symbol", TypeAndValue),
            ("NaN", ValueOnly),
            ("Map", TypeAndValue),
            ("Proxy", ValueOnly),
        ]
    );
}

#[test]
fn later_reference_shadows_earlier() {
    let mut table = CatalogTable::new();
    table.insert(module("es5", &[], &[("X", TypeOnly)]));
    table.insert(module("es2015.core", &[], &[("X", ValueOnly)]));
    table.insert(module("es2015", &["es5", "es2015.core"], &[]));

    let resolved = table.resolve("es2015").unwrap();
    assert_eq!(resolved.get("X"), Some(&ValueOnly));
    assert_eq!(resolved.len(), 1);
}

#[test]
fn resolve_reports_cycles() {
    let mut table = CatalogTable::new();
    table.insert(module("es5", &["es2015"], &[]));
    table.insert(module("es2015", &["es2015.core"], &[]));
    table.insert(module("es2015.core", &["es5"], &[]));

    let err = table.resolve("es5").unwrap_err();
    assert!(matches!(err, Error::CyclicReference { .. }));
    insta::assert_snapshot!(err.to_string(), @"cyclic bundle references: es5 -> es2015 -> es2015.core -> es5");
}

#[test]
fn resolve_unknown_bundle() {
    let table = CatalogTable::new();
    let err = table.resolve("es5").unwrap_err();
    assert!(matches!(err, Error::UnknownBundle(name) if name == "es5"));
}
