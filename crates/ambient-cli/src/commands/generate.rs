use std::path::{Path, PathBuf};

use ambient_core::Colors;
use ambient_lib::emit::typescript::Config;
use ambient_lib::output::CommandPostProcessor;
use ambient_lib::{GenerationReport, Generator, GeneratorConfig, LibDir};

use super::loader::{CliError, exit_with, load_catalog};

pub struct GenerateArgs {
    pub catalog: Option<PathBuf>,
    pub lib_dir: PathBuf,
    pub out_dir: PathBuf,
    pub types_file: Option<PathBuf>,
    pub post_process: Vec<String>,
    pub banner: bool,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let colors = Colors::new(args.color);
    match generate(&args) {
        Ok(report) => println!("{}", render_report(&report, &args.out_dir, colors)),
        Err(err) => exit_with(err, args.color),
    }
}

pub fn generator_config(args: &GenerateArgs) -> Result<GeneratorConfig, CliError> {
    let mut config =
        GeneratorConfig::new(&args.out_dir).emit_config(Config::new().banner(args.banner));
    if let Some(types_file) = &args.types_file {
        config = config.types_file(types_file);
    }
    for line in &args.post_process {
        let processor =
            CommandPostProcessor::from_command_line(line).ok_or(CliError::EmptyPostProcess)?;
        config = config.post_processor(processor);
    }
    Ok(config)
}

fn generate(args: &GenerateArgs) -> Result<GenerationReport, CliError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let config = generator_config(args)?;
    let report = Generator::new(catalog, LibDir::new(&args.lib_dir)).generate(&config)?;
    Ok(report)
}

pub fn render_report(report: &GenerationReport, out_dir: &Path, colors: Colors) -> String {
    format!(
        "wrote {} files for {} bundles ({} identifiers) {}to {}{}",
        report.files.len(),
        report.bundles,
        report.identifiers,
        colors.dim,
        out_dir.display(),
        colors.reset,
    )
}
