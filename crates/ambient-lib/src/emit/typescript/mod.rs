//! TypeScript emitter for synthesized modules.
//!
//! Output is canonical: two-space indent, single quotes, trailing commas, keys
//! quoted only when they are not identifier names, one trailing newline.

mod config;
mod emitter;
mod render;

#[cfg(test)]
mod emitter_tests;

pub use config::{Config, DEFAULT_REGENERATE_COMMAND};
pub use emitter::Emitter;

use crate::synth::{AggregateModule, BundleModule};

/// File name of the barrel module.
pub const INDEX_FILE: &str = "index.ts";

/// Default location of the `Lib` union, relative to the output directory.
pub const DEFAULT_TYPES_FILE: &str = "lib.types.ts";

/// File name of a bundle's generated module.
pub fn bundle_file_name(module: &BundleModule) -> String {
    format!("{}.ts", module.name())
}

/// Emit a bundle module with the default config.
pub fn emit_bundle(module: &BundleModule) -> String {
    Emitter::new(Config::default()).emit_bundle(module)
}

/// Emit the barrel with the default config.
pub fn emit_index(aggregate: &AggregateModule) -> String {
    Emitter::new(Config::default()).emit_index(aggregate)
}

/// Emit the `Lib` union with the default config.
pub fn emit_types(aggregate: &AggregateModule) -> String {
    Emitter::new(Config::default()).emit_types(aggregate)
}
