//! Output rendering methods.

use std::fmt::Write;

use ambient_core::Classification;
use ambient_core::utils::{is_identifier_name, single_quote, to_export_ident};

use crate::synth::{AggregateModule, BundleModule};

use super::Emitter;

/// Widest line the single-line form of the `Lib` union may take.
const PRINT_WIDTH: usize = 80;

impl Emitter {
    pub(super) fn render_bundle(&mut self, module: &BundleModule) {
        let base = single_quote(&format!("./{}", self.config.base_config_module));
        let record_type = self.config.record_type.clone();

        let _ = writeln!(self.output, "import type {{ {record_type} }} from {base};");
        if !module.used_tags().is_empty() {
            let tags: Vec<_> = module
                .used_tags()
                .iter()
                .map(|t| t.export_name())
                .collect();
            let _ = writeln!(self.output, "import {{ {} }} from {base};", tags.join(", "));
        }
        for reference in module.references().iter() {
            let _ = writeln!(
                self.output,
                "import {{ {} }} from {};",
                to_export_ident(reference),
                single_quote(&format!("./{reference}"))
            );
        }
        self.output.push('\n');

        let export_name = module.export_name();
        if module.references().is_empty() && module.entries().is_empty() {
            let _ = writeln!(
                self.output,
                "export const {export_name} = {{}} as Record<string, {record_type}>;"
            );
            return;
        }

        let _ = writeln!(self.output, "export const {export_name} = {{");
        for reference in module.references().iter() {
            let _ = writeln!(
                self.output,
                "  ...{},",
                to_export_ident(reference)
            );
        }
        for (name, classification) in module.entries() {
            self.render_entry(name, *classification);
        }
        let _ = writeln!(self.output, "}} as Record<string, {record_type}>;");
    }

    fn render_entry(&mut self, name: &str, classification: Classification) {
        let _ = writeln!(
            self.output,
            "  {}: {},",
            property_key(name),
            classification.export_name()
        );
    }

    pub(super) fn render_index(&mut self, aggregate: &AggregateModule) {
        for entry in aggregate.entries() {
            let specifier = single_quote(&format!("./{}", entry.bundle));
            if entry.is_aliased() {
                let _ = writeln!(
                    self.output,
                    "import {{ {} as {} }} from {specifier};",
                    entry.export_name, entry.binding
                );
            } else {
                let _ = writeln!(self.output, "import {{ {} }} from {specifier};", entry.binding);
            }
        }
        self.output.push('\n');

        self.output.push_str("const lib = {\n");
        for entry in aggregate.entries() {
            if entry.bundle == entry.binding {
                let _ = writeln!(self.output, "  {},", entry.binding);
            } else {
                let _ = writeln!(
                    self.output,
                    "  {}: {},",
                    property_key(&entry.bundle),
                    entry.binding
                );
            }
        }
        self.output.push_str("} as const;\n\n");
        self.output.push_str("export { lib };\n");
    }

    pub(super) fn render_types(&mut self, aggregate: &AggregateModule) {
        let members: Vec<_> = aggregate.names().map(single_quote).collect();

        if members.is_empty() {
            self.output.push_str("type Lib = never;\n");
        } else {
            let single_line = format!("type Lib = {};", members.join(" | "));
            if single_line.len() <= PRINT_WIDTH {
                self.output.push_str(&single_line);
                self.output.push('\n');
            } else {
                self.output.push_str("type Lib =");
                for member in &members {
                    let _ = write!(self.output, "\n  | {member}");
                }
                self.output.push_str(";\n");
            }
        }

        self.output.push_str("\nexport { Lib };\n");
    }

    pub(super) fn render_base_config(&mut self) {
        let record_type = self.config.record_type.clone();

        let _ = writeln!(self.output, "export interface {record_type} {{");
        self.output
            .push_str("  readonly implicitGlobalScopeVisibility: 'readonly';\n");
        self.output.push_str("  readonly isTypeVariable: boolean;\n");
        self.output.push_str("  readonly isValueVariable: boolean;\n");
        self.output.push_str("}\n");

        for classification in Classification::ALL {
            let _ = write!(
                self.output,
                "\nexport const {}: {record_type} = Object.freeze({{\n",
                classification.export_name()
            );
            self.output
                .push_str("  implicitGlobalScopeVisibility: 'readonly',\n");
            let _ = writeln!(
                self.output,
                "  isTypeVariable: {},",
                classification.is_type()
            );
            let _ = writeln!(
                self.output,
                "  isValueVariable: {},",
                classification.is_value()
            );
            self.output.push_str("});\n");
        }
    }
}

/// Object key as written in generated code: bare when it is an identifier name.
fn property_key(name: &str) -> String {
    if is_identifier_name(name) {
        name.to_string()
    } else {
        single_quote(name)
    }
}
