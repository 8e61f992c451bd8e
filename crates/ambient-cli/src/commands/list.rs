use std::fmt::Write as _;
use std::path::PathBuf;

use ambient_core::{Catalog, Colors};

use super::loader::{exit_with, load_catalog};

pub struct ListArgs {
    pub catalog: Option<PathBuf>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: ListArgs) {
    let catalog = match load_catalog(args.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(err) => exit_with(err, args.color),
    };

    if args.json {
        match serde_json::to_string_pretty(&catalog.to_json()) {
            Ok(json) => println!("{}", json),
            Err(err) => exit_with(err.into(), args.color),
        }
    } else {
        print!("{}", render_catalog(&catalog, Colors::new(args.color)));
    }
}

pub fn render_catalog(catalog: &Catalog, colors: Colors) -> String {
    let width = catalog.names().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "Bundles ({}):", catalog.len());
    for descriptor in catalog {
        let _ = writeln!(
            out,
            "  {}{:width$}{}  {}{}{}",
            colors.bundle,
            descriptor.name(),
            colors.reset,
            colors.dim,
            descriptor.source_file_name(),
            colors.reset,
        );
    }
    out
}
