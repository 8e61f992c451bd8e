use std::path::PathBuf;
use std::process::Command;

use crate::{Error, Result};

/// Runs once over every written file, e.g. a formatter or a lint autofix.
pub trait PostProcessor: std::fmt::Debug {
    /// Human-readable name used in errors and logs.
    fn describe(&self) -> String;

    fn run(&self, files: &[PathBuf]) -> Result<()>;
}

/// External program invoked with the written files as trailing arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPostProcessor {
    program: String,
    args: Vec<String>,
}

impl CommandPostProcessor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Splits `line` on whitespace into program and arguments. No shell is involved.
    ///
    /// Returns `None` for a blank line.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let program = words.next()?;
        Some(Self {
            program: program.to_owned(),
            args: words.map(str::to_owned).collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl PostProcessor for CommandPostProcessor {
    fn describe(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    fn run(&self, files: &[PathBuf]) -> Result<()> {
        let _span = tracing::info_span!("post_process", command = %self.describe()).entered();

        let status = Command::new(&self.program)
            .args(&self.args)
            .args(files)
            .status()
            .map_err(|e| Error::PostProcess {
                command: self.describe(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(Error::PostProcess {
                command: self.describe(),
                reason: format!("exited with {status}"),
            });
        }
        tracing::debug!(files = files.len(), "post-processing finished");
        Ok(())
    }
}
