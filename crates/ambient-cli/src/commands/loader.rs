use std::fs;
use std::path::{Path, PathBuf};

use ambient_core::Catalog;

/// Failures of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read catalog '{}': {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid catalog '{}': {source}", .path.display())]
    CatalogFormat {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("--post-process command cannot be empty")]
    EmptyPostProcess,

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Generate(#[from] ambient_lib::Error),
}

/// The built-in TypeScript catalog, or the one derived from a `[name, file]` JSON table.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    let Some(path) = path else {
        return Ok(Catalog::typescript());
    };

    let json = fs::read_to_string(path).map_err(|source| CliError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    Catalog::from_json(&json).map_err(|source| CliError::CatalogFormat {
        path: path.to_path_buf(),
        source,
    })
}

/// Reports `err` on stderr and exits with status 1.
///
/// Syntax errors are shown with their source snippet before the summary line.
pub fn exit_with(err: CliError, color: bool) -> ! {
    if let CliError::Generate(ambient_lib::Error::Parse(failure)) = &err {
        eprintln!("{}", failure.render(color).trim_end());
        eprintln!();
    }
    eprintln!("error: {}", err);
    std::process::exit(1);
}
