//! Core emitter struct and per-file entry points.

use crate::synth::{AggregateModule, BundleModule};

use super::Config;

const BANNER: [&str; 3] = [
    "THIS CODE WAS AUTOMATICALLY GENERATED",
    "DO NOT EDIT THIS CODE BY HAND",
    "RUN THE FOLLOWING COMMAND TO REGENERATE:",
];

/// Renders one generated TypeScript file per call.
pub struct Emitter {
    pub(super) config: Config,
    /// Output buffer
    pub(super) output: String,
}

impl Emitter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// `<bundle>.ts`: the bundle's table, spreading every referenced bundle first.
    pub fn emit_bundle(mut self, module: &BundleModule) -> String {
        self.emit_banner();
        self.render_bundle(module);
        self.finish()
    }

    /// `index.ts`: every bundle table under its bundle name.
    pub fn emit_index(mut self, aggregate: &AggregateModule) -> String {
        self.emit_banner();
        self.render_index(aggregate);
        self.finish()
    }

    /// The `Lib` union of bundle names.
    pub fn emit_types(mut self, aggregate: &AggregateModule) -> String {
        self.emit_banner();
        self.render_types(aggregate);
        self.finish()
    }

    /// The options interface and the three shared tag records.
    pub fn emit_base_config(mut self) -> String {
        self.emit_banner();
        self.render_base_config();
        self.finish()
    }

    fn emit_banner(&mut self) {
        if !self.config.banner {
            return;
        }
        for line in BANNER {
            self.output.push_str("// ");
            self.output.push_str(line);
            self.output.push('\n');
        }
        self.output.push_str("// ");
        self.output.push_str(&self.config.regenerate_command);
        self.output.push_str("\n\n");
    }

    fn finish(mut self) -> String {
        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}
