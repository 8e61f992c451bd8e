use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use ambient_core::{Catalog, Classification};
use indoc::indoc;

use crate::emit::typescript::Config;
use crate::output::PostProcessor;
use crate::{Error, GeneratorConfig, Generator, InMemoryLibs, LibDir, Result};

fn catalog() -> Catalog {
    Catalog::from_table([
        ("es5", "lib.es5.d.ts"),
        ("es2015.core", "lib.es2015.core.d.ts"),
        ("es2015", "lib.es2015.d.ts"),
    ])
}

fn sources() -> InMemoryLibs {
    InMemoryLibs::new()
        .with(
            "lib.es5.d.ts",
            indoc! {r#"
            /// <reference no-default-lib="true"/>
            interface Array<T> {
                length: number;
            }
            declare var Array: ArrayConstructor;
            declare var NaN: number;
            "#},
        )
        .with(
            "lib.es2015.core.d.ts",
            indoc! {r#"
            interface Map<K, V> {}
            declare var Map: MapConstructor;
            type NaN = number;
            "#},
        )
        .with(
            "lib.es2015.d.ts",
            indoc! {r#"
            /// <reference lib="es5" />
            /// <reference lib="es2015.core" />
            "#},
        )
        .with("lib.d.ts", "/// <reference lib=\"es2015\" />\n")
}

#[derive(Debug, Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<Vec<PathBuf>>>>,
}

impl PostProcessor for Recorder {
    fn describe(&self) -> String {
        "recorder".to_string()
    }

    fn run(&self, files: &[PathBuf]) -> Result<()> {
        self.calls.lock().unwrap().push(files.to_vec());
        Ok(())
    }
}

#[test]
fn synthesize_catalog() {
    let generator = Generator::new(catalog(), sources());
    let synthesized = generator.synthesize().unwrap();

    assert_eq!(
        synthesized.aggregate.names().collect::<Vec<_>>(),
        vec!["es5", "es2015.core", "es2015", "lib"]
    );

    let es2015 = synthesized.table.get("es2015").unwrap();
    assert_eq!(
        es2015.references().iter().collect::<Vec<_>>(),
        vec!["es5", "es2015.core"]
    );
    assert!(es2015.entries().is_empty());

    let resolved = synthesized.table.resolve("lib").unwrap();
    let entries: Vec<_> = resolved.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(
        entries,
        vec![
            ("Array", Classification::TypeAndValue),
            ("NaN", Classification::TypeOnly),
            ("Map", Classification::TypeAndValue),
        ]
    );
}

#[test]
fn bundle_analysis() {
    let generator = Generator::new(catalog(), sources());
    let es5 = generator.descriptor("es5").unwrap();
    let analysis = generator.analyze_bundle(es5).unwrap();

    assert!(analysis.references.is_empty());
    let globals: Vec<_> = analysis
        .globals
        .iter()
        .map(|g| (g.name.as_str(), g.classification))
        .collect();
    assert_eq!(
        globals,
        vec![
            ("Array", Classification::TypeAndValue),
            ("NaN", Classification::ValueOnly),
        ]
    );

    assert!(matches!(
        generator.descriptor("es1999"),
        Err(Error::UnknownBundle(_))
    ));
}

#[test]
fn generate_writes_every_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out_dir = tmp.path().join("lib");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(out_dir.join("stale.ts"), "").unwrap();

    let recorder = Recorder::default();
    let config = GeneratorConfig::new(&out_dir).post_processor(recorder.clone());
    let report = Generator::new(catalog(), sources())
        .generate(&config)
        .unwrap();

    let names: Vec<_> = report
        .files
        .iter()
        .map(|p| p.strip_prefix(&out_dir).unwrap().display().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "base-config.ts",
            "es5.ts",
            "es2015.core.ts",
            "es2015.ts",
            "lib.ts",
            "index.ts",
            "lib.types.ts",
        ]
    );
    assert_eq!(report.bundles, 4);
    assert_eq!(report.identifiers, 4);
    assert!(!out_dir.join("stale.ts").exists());

    let calls = recorder.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], report.files);

    insta::assert_snapshot!(fs::read_to_string(out_dir.join("es2015.ts")).unwrap(), @r"
    // THIS CODE WAS AUTOMATICALLY GENERATED
    // DO NOT EDIT THIS CODE BY HAND
    // RUN THE FOLLOWING COMMAND TO REGENERATE:
    // ambient generate

    import type { ImplicitLibVariableOptions } from './base-config';
    import { es5 } from './es5';
    import { es2015_core } from './es2015.core';

    export const es2015 = {
      ...es5,
      ...es2015_core,
    } as Record<string, ImplicitLibVariableOptions>;
    ");
}

#[test]
fn generation_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(tmp.path().join("out"));
    let generator = Generator::new(catalog(), sources());

    let read_all = |files: &[PathBuf]| -> Vec<String> {
        files
            .iter()
            .map(|f| fs::read_to_string(f).unwrap())
            .collect()
    };

    let first = generator.generate(&config).unwrap();
    let first_contents = read_all(&first.files);
    let second = generator.generate(&config).unwrap();

    assert_eq!(first.files, second.files);
    assert_eq!(first_contents, read_all(&second.files));
}

#[test]
fn types_file_location() {
    let tmp = tempfile::tempdir().unwrap();
    let elsewhere = tmp.path().join("types").join("lib.ts");
    let config = GeneratorConfig::new(tmp.path().join("out"))
        .types_file(&elsewhere)
        .emit_config(Config::new().banner(false));

    Generator::new(catalog(), sources())
        .generate(&config)
        .unwrap();

    insta::assert_snapshot!(fs::read_to_string(&elsewhere).unwrap(), @r"
    type Lib = 'es5' | 'es2015.core' | 'es2015' | 'lib';

    export { Lib };
    ");
    assert!(!tmp.path().join("out").join("lib.types.ts").exists());
}

#[test]
fn unknown_reference_aborts() {
    let sources = sources().with("lib.d.ts", "/// <reference lib=\"dom\" />\n");
    let err = Generator::new(catalog(), sources)
        .synthesize()
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"bundle `lib` references unknown bundle `dom`");
}

#[test]
fn syntax_error_names_the_file() {
    let sources = sources().with("lib.es2015.core.d.ts", "interface Map<K, V> {\n");
    let err = Generator::new(catalog(), sources)
        .synthesize()
        .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"lib.es2015.core.d.ts: declaration parsing failed with 1 error");
}

#[test]
fn missing_source_file() {
    let tmp = tempfile::tempdir().unwrap();
    let err = Generator::new(catalog(), LibDir::new(tmp.path()))
        .synthesize()
        .unwrap_err();

    let Error::Read { path, .. } = err else {
        panic!("expected a read error");
    };
    assert_eq!(path, tmp.path().join("lib.es5.d.ts"));
}

#[test]
fn lib_dir_reads_files() {
    let tmp = tempfile::tempdir().unwrap();
    for (file, text) in [
        ("lib.es5.d.ts", "declare var NaN: number;\n"),
        ("lib.es2015.core.d.ts", ""),
        ("lib.es2015.d.ts", "/// <reference lib=\"es5\" />\n"),
        ("lib.d.ts", "/// <reference lib=\"es2015\" />\n"),
    ] {
        fs::write(tmp.path().join(file), text).unwrap();
    }

    let generator = Generator::new(catalog(), LibDir::new(tmp.path()));
    let resolved = generator.synthesize().unwrap().table.resolve("lib").unwrap();
    assert_eq!(resolved.get("NaN"), Some(&Classification::ValueOnly));
}
