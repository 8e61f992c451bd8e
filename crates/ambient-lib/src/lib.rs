//! Ambient: implicit-global tables for TypeScript declaration bundles.
//!
//! Every bundle of the standard library (`lib.es5.d.ts`, `lib.dom.d.ts`, ...) is
//! parsed, its top-level identifiers are classified as type, value or both, and
//! one generated module per bundle is emitted together with an index barrel.
//!
//! # Example
//!
//! ```
//! use ambient_lib::{ParseOptions, parse_unit};
//! use ambient_lib::analyze::classify_globals;
//!
//! let source = "interface Array<T> {}\ndeclare var Array: ArrayConstructor;\n";
//! let unit = parse_unit(source, &ParseOptions::default()).expect("valid declarations");
//! let globals = classify_globals(&unit).expect("module scope");
//! assert_eq!(globals[0].name, "Array");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod emit;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod synth;
pub mod unit;

#[cfg(test)]
mod pipeline_tests;
#[cfg(test)]
mod unit_tests;

use std::path::PathBuf;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter};
pub use pipeline::{
    BundleAnalysis, GenerationReport, Generator, GeneratorConfig, InMemoryLibs, LibDir, LibSources,
    Rendered, Synthesized,
};
pub use unit::{ParseFailure, ParseOptions, ParsedUnit, SourceType, parse_unit};

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("{}", .0.summary())]
    Parse(Box<ParseFailure>),

    /// The first child of the global scope is not a module scope.
    #[error("scope tree has no module scope under the global scope")]
    MissingModuleScope,

    #[error("variable `{name}` is neither a type nor a value")]
    UnclassifiableVariable { name: String },

    #[error("bundle `{bundle}` references unknown bundle `{reference}`")]
    UnknownReference { bundle: String, reference: String },

    #[error("cyclic bundle references: {}", .chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    #[error("aggregate does not match the catalog: {detail}")]
    AggregateMismatch { detail: String },

    #[error("unknown bundle `{0}`")]
    UnknownBundle(String),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("post-process command `{command}` failed: {reason}")]
    PostProcess { command: String, reason: String },
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
