//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Replacement upstream library table (--catalog).
pub fn catalog_arg() -> Arg {
    Arg::new("catalog")
        .long("catalog")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON array of [name, file] pairs replacing the built-in library table")
}

/// Directory holding the `lib.*.d.ts` bundles (--lib-dir).
pub fn lib_dir_arg() -> Arg {
    Arg::new("lib_dir")
        .long("lib-dir")
        .value_name("DIR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory containing the lib.*.d.ts bundles")
}

/// Directory the generated modules are written into (--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .long("out-dir")
        .value_name("DIR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Output directory (cleared before writing)")
}

/// Location of the `Lib` union module (--types-file).
pub fn types_file_arg() -> Arg {
    Arg::new("types_file")
        .long("types-file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Where to write the Lib union (relative to the output directory)")
}

/// External command run over the written files (--post-process), repeatable.
pub fn post_process_arg() -> Arg {
    Arg::new("post_process")
        .long("post-process")
        .value_name("CMD")
        .action(ArgAction::Append)
        .help("Command run with every written file appended, e.g. 'prettier --write'")
}

/// Omit the generated-code banner (--no-banner).
pub fn no_banner_arg() -> Arg {
    Arg::new("no_banner")
        .long("no-banner")
        .action(ArgAction::SetTrue)
        .help("Don't emit the generated-code banner")
}

/// Bundle name (positional).
pub fn bundle_arg() -> Arg {
    Arg::new("bundle")
        .value_name("BUNDLE")
        .required(true)
        .help("Bundle name, e.g. es2015.core")
}

/// Show the merged table instead of the bundle's own entries (--resolved).
pub fn resolved_arg() -> Arg {
    Arg::new("resolved")
        .long("resolved")
        .action(ArgAction::SetTrue)
        .help("Show the table merged with every referenced bundle")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
