use std::path::PathBuf;

use ambient_lib::{Generator, LibDir};

use super::loader::{CliError, exit_with, load_catalog};

pub struct CheckArgs {
    pub catalog: Option<PathBuf>,
    pub lib_dir: PathBuf,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    if let Err(err) = check(&args) {
        exit_with(err, args.color);
    }
    // Silent on success (like cargo check)
}

/// Synthesizes every bundle and the aggregate, writing nothing.
pub fn check(args: &CheckArgs) -> Result<(), CliError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let synthesized = Generator::new(catalog, LibDir::new(&args.lib_dir)).synthesize()?;
    tracing::info!(
        bundles = synthesized.table.len(),
        "every bundle parsed and classified"
    );
    Ok(())
}
