//! Writing generated files and handing them to an external post-processor.

mod post_process;


pub use post_process::{CommandPostProcessor, PostProcessor};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Directory all generated files are written into.
#[derive(Debug, Clone)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Removes the directory with everything in it, then recreates it empty.
    ///
    /// A directory that does not exist yet is not an error.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_dir_all(&self.root) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::Write {
                    path: self.root.clone(),
                    source,
                });
            }
        }
        fs::create_dir_all(&self.root).map_err(|source| Error::Write {
            path: self.root.clone(),
            source,
        })?;
        tracing::debug!(dir = %self.root.display(), "output directory reset");
        Ok(())
    }

    /// Writes `contents` to `relative` under the root, creating parent directories.
    pub fn write(&self, relative: impl AsRef<Path>, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, contents).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(path)
    }
}
