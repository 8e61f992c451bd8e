//! Grammar productions for declaration files.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Only the declaration surface is modeled precisely; type expressions, initializers
//! and class/interface bodies are consumed as balanced token runs.

mod declarations;
mod items;
mod modules;
mod types;
