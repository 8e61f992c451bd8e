//! End-to-end generation: read, parse, classify, synthesize, emit, write.
//!
//! ```text
//! Catalog ─► for each bundle: read ─► parse_unit ─► references + classify ─► BundleModule
//!        └─► AggregateModule ─► emit ─► OutputDir ─► post-processors
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ambient_core::{BundleDescriptor, Catalog};

use crate::analyze::{GlobalVariable, ReferenceSet, classify_globals, extract_references};
use crate::emit::typescript::{self, DEFAULT_TYPES_FILE, Emitter, INDEX_FILE};
use crate::output::{OutputDir, PostProcessor};
use crate::synth::{AggregateModule, BundleModule, CatalogTable};
use crate::unit::{ParseOptions, ParsedUnit, parse_unit};
use crate::{Error, Result};

/// Where bundle sources are read from.
pub trait LibSources {
    /// Full text of the bundle file `file_name` (e.g. `lib.es5.d.ts`).
    fn read(&self, file_name: &str) -> Result<String>;
}

/// Bundle files in a directory, typically the compiler's `lib` folder.
#[derive(Debug, Clone)]
pub struct LibDir {
    root: PathBuf,
}

impl LibDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl LibSources for LibDir {
    fn read(&self, file_name: &str) -> Result<String> {
        let path = self.root.join(file_name);
        fs::read_to_string(&path).map_err(|source| Error::Read { path, source })
    }
}

/// Bundle files held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLibs {
    files: HashMap<String, String>,
}

impl InMemoryLibs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, file_name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(file_name, text);
        self
    }

    pub fn insert(&mut self, file_name: impl Into<String>, text: impl Into<String>) {
        self.files.insert(file_name.into(), text.into());
    }
}

impl LibSources for InMemoryLibs {
    fn read(&self, file_name: &str) -> Result<String> {
        self.files.get(file_name).cloned().ok_or_else(|| Error::Read {
            path: PathBuf::from(file_name),
            source: std::io::ErrorKind::NotFound.into(),
        })
    }
}

/// Output settings of a generation run.
#[derive(Debug)]
pub struct GeneratorConfig {
    out_dir: PathBuf,
    types_file: Option<PathBuf>,
    emit: typescript::Config,
    post_processors: Vec<Box<dyn PostProcessor>>,
}

impl GeneratorConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            types_file: None,
            emit: typescript::Config::default(),
            post_processors: Vec::new(),
        }
    }

    /// Location of the `Lib` union. Relative paths resolve against the output directory.
    pub fn types_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.types_file = Some(path.into());
        self
    }

    pub fn emit_config(mut self, config: typescript::Config) -> Self {
        self.emit = config;
        self
    }

    pub fn post_processor(mut self, processor: impl PostProcessor + 'static) -> Self {
        self.post_processors.push(Box::new(processor));
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path of the `Lib` union relative to the output directory, or absolute.
    pub fn types_path(&self) -> PathBuf {
        self.types_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TYPES_FILE))
    }
}

/// Result of analyzing one bundle.
#[derive(Debug, Clone)]
pub struct BundleAnalysis {
    pub references: ReferenceSet,
    pub globals: Vec<GlobalVariable>,
}

/// Every bundle module plus the aggregate over them.
#[derive(Debug, Clone)]
pub struct Synthesized {
    pub table: CatalogTable,
    pub aggregate: AggregateModule,
}

/// Generated files, in write order, with paths relative to the output directory.
#[derive(Debug, Clone, Default)]
pub struct Rendered {
    pub files: Vec<(PathBuf, String)>,
}

/// What a generation run wrote.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files: Vec<PathBuf>,
    pub bundles: usize,
    pub identifiers: usize,
}

/// Runs the generator over a catalog.
pub struct Generator<S> {
    catalog: Catalog,
    sources: S,
    parse_options: ParseOptions,
}

impl<S: LibSources> Generator<S> {
    pub fn new(catalog: Catalog, sources: S) -> Self {
        Self {
            catalog,
            sources,
            parse_options: ParseOptions::default(),
        }
    }

    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn descriptor(&self, name: &str) -> Result<&BundleDescriptor> {
        self.catalog
            .get(name)
            .ok_or_else(|| Error::UnknownBundle(name.to_owned()))
    }

    /// Reads and parses a bundle; syntax errors name the bundle file.
    pub fn parse_bundle(&self, descriptor: &BundleDescriptor) -> Result<ParsedUnit> {
        let file_name = descriptor.source_file_name();
        let text = self.sources.read(file_name)?;
        parse_unit(&text, &self.parse_options).map_err(|err| match err {
            Error::Parse(failure) => Error::Parse(Box::new((*failure).in_file(file_name))),
            other => other,
        })
    }

    pub fn analyze_bundle(&self, descriptor: &BundleDescriptor) -> Result<BundleAnalysis> {
        let unit = self.parse_bundle(descriptor)?;
        let references = extract_references(&unit);
        let globals = classify_globals(&unit)?;
        tracing::debug!(
            references = references.len(),
            globals = globals.len(),
            "analyzed bundle"
        );
        Ok(BundleAnalysis {
            references,
            globals,
        })
    }

    pub fn synthesize_bundle(&self, descriptor: &BundleDescriptor) -> Result<BundleModule> {
        let _span = tracing::info_span!("bundle", name = descriptor.name()).entered();
        let analysis = self.analyze_bundle(descriptor)?;
        BundleModule::synthesize(
            descriptor,
            analysis.references,
            analysis.globals,
            &self.catalog,
        )
    }

    /// Synthesizes every catalog bundle, then the aggregate.
    pub fn synthesize(&self) -> Result<Synthesized> {
        let mut table = CatalogTable::new();
        for descriptor in &self.catalog {
            table.insert(self.synthesize_bundle(descriptor)?);
        }
        let aggregate = AggregateModule::synthesize(&self.catalog, &table)?;
        Ok(Synthesized { table, aggregate })
    }

    /// Emits every file of a run without touching the filesystem.
    pub fn render(&self, synthesized: &Synthesized, config: &GeneratorConfig) -> Rendered {
        let emitter = || Emitter::new(config.emit.clone());
        let mut files = Vec::with_capacity(synthesized.table.len() + 3);

        files.push((
            PathBuf::from(config.emit.base_config_file()),
            emitter().emit_base_config(),
        ));
        for module in synthesized.table.iter() {
            files.push((
                PathBuf::from(typescript::bundle_file_name(module)),
                emitter().emit_bundle(module),
            ));
        }
        files.push((
            PathBuf::from(INDEX_FILE),
            emitter().emit_index(&synthesized.aggregate),
        ));
        files.push((
            config.types_path(),
            emitter().emit_types(&synthesized.aggregate),
        ));

        Rendered { files }
    }

    /// The full batch run: synthesize, reset the output directory, write, post-process.
    pub fn generate(&self, config: &GeneratorConfig) -> Result<GenerationReport> {
        let _span = tracing::info_span!("generate", out_dir = %config.out_dir.display()).entered();

        let synthesized = self.synthesize()?;
        let rendered = self.render(&synthesized, config);

        let out = OutputDir::new(&config.out_dir);
        out.reset()?;
        let mut written = Vec::with_capacity(rendered.files.len());
        for (path, contents) in &rendered.files {
            written.push(out.write(path, contents)?);
        }

        for processor in &config.post_processors {
            processor.run(&written)?;
        }

        let report = GenerationReport {
            files: written,
            bundles: synthesized.table.len(),
            identifiers: synthesized
                .table
                .iter()
                .map(|m| m.entries().len())
                .sum(),
        };
        tracing::info!(
            files = report.files.len(),
            bundles = report.bundles,
            identifiers = report.identifiers,
            "generation finished"
        );
        Ok(report)
    }
}
