//! Code generation from synthesized modules.
//!
//! Currently only TypeScript is emitted.
//!
//! # Example
//!
//! ```
//! use ambient_core::Catalog;
//! use ambient_lib::analyze::ReferenceSet;
//! use ambient_lib::emit::typescript;
//! use ambient_lib::synth::BundleModule;
//!
//! let catalog = Catalog::from_table([("es5", "lib.es5.d.ts")]);
//! let es5 = catalog.get("es5").unwrap();
//! let module = BundleModule::synthesize(es5, ReferenceSet::new(), Vec::new(), &catalog).unwrap();
//! assert!(typescript::emit_bundle(&module).ends_with("ImplicitLibVariableOptions>;\n"));
//! ```

pub mod typescript;
