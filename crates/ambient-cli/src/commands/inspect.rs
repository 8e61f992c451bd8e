use std::fmt::Write as _;
use std::path::PathBuf;

use ambient_core::{Classification, Colors};
use ambient_lib::{Generator, LibDir};
use serde::Serialize;

use super::loader::{CliError, exit_with, load_catalog};

pub struct InspectArgs {
    pub catalog: Option<PathBuf>,
    pub lib_dir: PathBuf,
    pub bundle: String,
    pub resolved: bool,
    pub json: bool,
    pub color: bool,
}

/// A bundle's references and its (own or merged) classified globals.
#[derive(Debug, Serialize)]
pub struct BundleReport {
    pub name: String,
    pub file: String,
    pub resolved: bool,
    pub references: Vec<String>,
    pub globals: Vec<GlobalEntry>,
}

#[derive(Debug, Serialize)]
pub struct GlobalEntry {
    pub name: String,
    pub classification: Classification,
}

pub fn run(args: InspectArgs) {
    let report = match inspect(&args) {
        Ok(report) => report,
        Err(err) => exit_with(err, args.color),
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => exit_with(err.into(), args.color),
        }
    } else {
        print!("{}", render_report(&report, Colors::new(args.color)));
    }
}

pub fn inspect(args: &InspectArgs) -> Result<BundleReport, CliError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let generator = Generator::new(catalog, LibDir::new(&args.lib_dir));
    let descriptor = generator.descriptor(&args.bundle)?;

    // The merged view needs every bundle the requested one can reach.
    let (references, table) = if args.resolved {
        let synthesized = generator.synthesize()?;
        let table = synthesized.table.resolve(descriptor.name())?;
        let references = synthesized
            .table
            .get(descriptor.name())
            .map(|module| module.references().iter().map(str::to_owned).collect())
            .unwrap_or_default();
        (references, table)
    } else {
        let module = generator.synthesize_bundle(descriptor)?;
        let references = module.references().iter().map(str::to_owned).collect();
        (references, module.entries().clone())
    };

    Ok(BundleReport {
        name: descriptor.name().to_owned(),
        file: descriptor.source_file_name().to_owned(),
        resolved: args.resolved,
        references,
        globals: table
            .into_iter()
            .map(|(name, classification)| GlobalEntry {
                name,
                classification,
            })
            .collect(),
    })
}

pub fn render_report(report: &BundleReport, colors: Colors) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}{}{} {}{}{}",
        colors.bundle, report.name, colors.reset, colors.dim, report.file, colors.reset
    );

    if report.references.is_empty() {
        let _ = writeln!(out, "references: {}none{}", colors.dim, colors.reset);
    } else {
        let _ = writeln!(out, "references: {}", report.references.join(", "));
    }

    let heading = if report.resolved { "resolved globals" } else { "globals" };
    let _ = writeln!(
        out,
        "{} {}({}){}",
        heading,
        colors.dim,
        report.globals.len(),
        colors.reset
    );

    let width = report.globals.iter().map(|g| g.name.len()).max().unwrap_or(0);
    for global in &report.globals {
        let _ = writeln!(
            out,
            "  {:width$}  {}{}{}",
            global.name,
            colors.tag(global.classification),
            global.classification,
            colors.reset,
        );
    }
    out
}
