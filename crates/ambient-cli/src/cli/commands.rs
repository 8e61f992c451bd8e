//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("ambient")
        .about("Implicit-global tables for TypeScript declaration bundles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(inspect_command())
        .subcommand(list_command())
}

/// Parse every bundle and write the generated modules.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate one module per bundle plus the index barrel")
        .override_usage(
            "\
  ambient generate --lib-dir <DIR> --out-dir <DIR>
  ambient generate --lib-dir <DIR> --out-dir <DIR> --types-file <FILE>",
        )
        .after_help(
            r#"EXAMPLES:
  ambient generate --lib-dir node_modules/typescript/lib --out-dir src/lib
  ambient generate --lib-dir lib --out-dir out --post-process 'prettier --write'
  ambient generate --lib-dir lib --out-dir out --types-file ../types/lib.ts"#,
        )
        .arg(lib_dir_arg())
        .arg(out_dir_arg())
        .arg(types_file_arg())
        .arg(post_process_arg())
        .arg(no_banner_arg())
        .arg(catalog_arg())
        .arg(color_arg())
}

/// Validate every bundle without writing anything.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Parse, classify and synthesize every bundle without writing")
        .override_usage("  ambient check --lib-dir <DIR>")
        .after_help(
            r#"EXAMPLES:
  ambient check --lib-dir node_modules/typescript/lib
  ambient check --lib-dir lib --catalog libs.json"#,
        )
        .arg(lib_dir_arg())
        .arg(catalog_arg())
        .arg(color_arg())
}

/// Show one bundle's references and classified globals.
pub fn inspect_command() -> Command {
    Command::new("inspect")
        .about("Show a bundle's references and classified globals")
        .override_usage(
            "\
  ambient inspect <BUNDLE> --lib-dir <DIR>
  ambient inspect <BUNDLE> --lib-dir <DIR> --resolved",
        )
        .after_help(
            r#"EXAMPLES:
  ambient inspect es5 --lib-dir lib             # own entries
  ambient inspect es2015 --lib-dir lib --resolved  # merged with references
  ambient inspect dom --lib-dir lib --json"#,
        )
        .arg(bundle_arg())
        .arg(lib_dir_arg())
        .arg(resolved_arg())
        .arg(json_arg())
        .arg(catalog_arg())
        .arg(color_arg())
}

/// Print the bundle catalog.
pub fn list_command() -> Command {
    Command::new("list")
        .about("List every bundle and its source file")
        .arg(json_arg())
        .arg(catalog_arg())
        .arg(color_arg())
}
