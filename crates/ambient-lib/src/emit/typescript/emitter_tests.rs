use ambient_core::{Catalog, Classification};

use super::{Config, Emitter, bundle_file_name, emit_bundle, emit_index, emit_types};
use crate::analyze::{GlobalVariable, ReferenceSet};
use crate::synth::{AggregateModule, BundleModule, CatalogTable};

fn catalog(names: &[&str]) -> Catalog {
    Catalog::from_table(names.iter().map(|n| (n.to_string(), format!("lib.{n}.d.ts"))))
}

fn module(
    catalog: &Catalog,
    name: &str,
    refs: &[&str],
    entries: &[(&str, Classification)],
) -> BundleModule {
    let globals = entries.iter().map(|&(name, classification)| GlobalVariable {
        name: name.to_string(),
        classification,
    });
    let references: ReferenceSet = refs.iter().copied().collect();
    BundleModule::synthesize(catalog.get(name).unwrap(), references, globals, catalog).unwrap()
}

fn aggregate(catalog: &Catalog) -> AggregateModule {
    let mut table = CatalogTable::new();
    for descriptor in catalog {
        table.insert(module(catalog, descriptor.name(), &[], &[]));
    }
    AggregateModule::synthesize(catalog, &table).unwrap()
}

#[test]
fn bundle_with_references() {
    let catalog = catalog(&["es5", "es2015.core", "es2015"]);
    let es2015 = module(
        &catalog,
        "es2015",
        &["es5", "es2015.core"],
        &[
            ("Symbol", Classification::TypeAndValue),
            ("Proxy", Classification::ValueOnly),
            ("unique symbol", Classification::TypeOnly),
        ],
    );

    assert_eq!(bundle_file_name(&es2015), "es2015.ts");
    insta::assert_snapshot!(emit_bundle(&es2015), @r"
    // THIS CODE WAS AUTOMATICALLY GENERATED
    // DO NOT EDIT THIS CODE BY HAND
    // RUN THE FOLLOWING COMMAND TO REGENERATE:
    // ambient generate

    import type { ImplicitLibVariableOptions } from './base-config';
    import { TYPE, TYPE_VALUE, VALUE } from './base-config';
    import { es5 } from './es5';
    import { es2015_core } from './es2015.core';

    export const es2015 = {
      ...es5,
      ...es2015_core,
      Symbol: TYPE_VALUE,
      Proxy: VALUE,
      'unique symbol': TYPE,
    } as Record<string, ImplicitLibVariableOptions>;
    ");
}

#[test]
fn empty_bundle_without_banner() {
    let catalog = catalog(&["es5"]);
    let root = module(&catalog, "lib", &[], &[]);
    let output = Emitter::new(Config::new().banner(false)).emit_bundle(&root);

    insta::assert_snapshot!(output, @r"
    import type { ImplicitLibVariableOptions } from './base-config';

    export const lib = {} as Record<string, ImplicitLibVariableOptions>;
    ");
}

#[test]
fn bundle_with_only_references() {
    let catalog = catalog(&["es5", "es2016"]);
    let full = module(&catalog, "es2016.full", &["es2016", "es5"], &[]);
    let output = Emitter::new(Config::new().banner(false)).emit_bundle(&full);

    insta::assert_snapshot!(output, @r"
    import type { ImplicitLibVariableOptions } from './base-config';
    import { es2016 } from './es2016';
    import { es5 } from './es5';

    export const es2016_full = {
      ...es2016,
      ...es5,
    } as Record<string, ImplicitLibVariableOptions>;
    ");
}

#[test]
fn index_barrel() {
    let catalog = catalog(&["es5", "es2015.core", "es2016"]);

    insta::assert_snapshot!(emit_index(&aggregate(&catalog)), @r"
    // THIS CODE WAS AUTOMATICALLY GENERATED
    // DO NOT EDIT THIS CODE BY HAND
    // RUN THE FOLLOWING COMMAND TO REGENERATE:
    // ambient generate

    import { es5 } from './es5';
    import { es2015_core } from './es2015.core';
    import { es2016 } from './es2016';
    import { es2016_full } from './es2016.full';
    import { lib as libBase } from './lib';

    const lib = {
      es5,
      'es2015.core': es2015_core,
      es2016,
      'es2016.full': es2016_full,
      lib: libBase,
    } as const;

    export { lib };
    ");
}

#[test]
fn short_union_fits_one_line() {
    let catalog = catalog(&["es5", "es2015.core", "es2016"]);
    let output = Emitter::new(Config::new().banner(false)).emit_types(&aggregate(&catalog));

    insta::assert_snapshot!(output, @r"
    type Lib = 'es5' | 'es2015.core' | 'es2016' | 'es2016.full' | 'lib';

    export { Lib };
    ");
}

#[test]
fn long_union_breaks_per_member() {
    let catalog = catalog(&["es5", "es2015.core", "es2015.collection", "es2016"]);

    insta::assert_snapshot!(emit_types(&aggregate(&catalog)), @r"
    // THIS CODE WAS AUTOMATICALLY GENERATED
    // DO NOT EDIT THIS CODE BY HAND
    // RUN THE FOLLOWING COMMAND TO REGENERATE:
    // ambient generate

    type Lib =
      | 'es5'
      | 'es2015.core'
      | 'es2015.collection'
      | 'es2016'
      | 'es2016.full'
      | 'lib';

    export { Lib };
    ");
}

#[test]
fn base_config() {
    let output = Emitter::new(Config::new().banner(false)).emit_base_config();

    insta::assert_snapshot!(output, @r"
    export interface ImplicitLibVariableOptions {
      readonly implicitGlobalScopeVisibility: 'readonly';
      readonly isTypeVariable: boolean;
      readonly isValueVariable: boolean;
    }

    export const TYPE: ImplicitLibVariableOptions = Object.freeze({
      implicitGlobalScopeVisibility: 'readonly',
      isTypeVariable: true,
      isValueVariable: false,
    });

    export const TYPE_VALUE: ImplicitLibVariableOptions = Object.freeze({
      implicitGlobalScopeVisibility: 'readonly',
      isTypeVariable: true,
      isValueVariable: true,
    });

    export const VALUE: ImplicitLibVariableOptions = Object.freeze({
      implicitGlobalScopeVisibility: 'readonly',
      isTypeVariable: false,
      isValueVariable: true,
    });
    ");
}

#[test]
fn custom_names() {
    let catalog = catalog(&["es5"]);
    let es5 = module(&catalog, "es5", &[], &[("NaN", Classification::ValueOnly)]);
    let config = Config::new()
        .regenerate_command("make tables")
        .base_config_module("shared")
        .record_type("GlobalOptions");

    assert_eq!(config.base_config_file(), "shared.ts");
    insta::assert_snapshot!(Emitter::new(config).emit_bundle(&es5), @r"
    // THIS CODE WAS AUTOMATICALLY GENERATED
    // DO NOT EDIT THIS CODE BY HAND
    // RUN THE FOLLOWING COMMAND TO REGENERATE:
    // make tables

    import type { GlobalOptions } from './shared';
    import { VALUE } from './shared';

    export const es5 = {
      NaN: VALUE,
    } as Record<string, GlobalOptions>;
    ");
}

#[test]
fn output_is_deterministic() {
    let catalog = catalog(&["es5", "es2015.core"]);
    let es5 = module(&catalog, "es5", &[], &[("Array", Classification::TypeAndValue)]);

    assert_eq!(emit_bundle(&es5), emit_bundle(&es5));
    assert_eq!(
        emit_index(&aggregate(&catalog)),
        emit_index(&aggregate(&catalog))
    );
}
