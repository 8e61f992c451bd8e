//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::inspect::InspectArgs;
use crate::commands::list::ListArgs;

pub struct GenerateParams {
    pub catalog: Option<PathBuf>,
    pub lib_dir: PathBuf,
    pub out_dir: PathBuf,
    pub types_file: Option<PathBuf>,
    pub post_process: Vec<String>,
    pub no_banner: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            catalog: m.get_one::<PathBuf>("catalog").cloned(),
            lib_dir: required(m, "lib_dir"),
            out_dir: required(m, "out_dir"),
            types_file: m.get_one::<PathBuf>("types_file").cloned(),
            post_process: m
                .get_many::<String>("post_process")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            no_banner: m.get_flag("no_banner"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            catalog: p.catalog,
            lib_dir: p.lib_dir,
            out_dir: p.out_dir,
            types_file: p.types_file,
            post_process: p.post_process,
            banner: !p.no_banner,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub catalog: Option<PathBuf>,
    pub lib_dir: PathBuf,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            catalog: m.get_one::<PathBuf>("catalog").cloned(),
            lib_dir: required(m, "lib_dir"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            catalog: p.catalog,
            lib_dir: p.lib_dir,
            color: p.color.should_colorize(),
        }
    }
}

pub struct InspectParams {
    pub catalog: Option<PathBuf>,
    pub lib_dir: PathBuf,
    pub bundle: String,
    pub resolved: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl InspectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            catalog: m.get_one::<PathBuf>("catalog").cloned(),
            lib_dir: required(m, "lib_dir"),
            bundle: required(m, "bundle"),
            resolved: m.get_flag("resolved"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<InspectParams> for InspectArgs {
    fn from(p: InspectParams) -> Self {
        Self {
            catalog: p.catalog,
            lib_dir: p.lib_dir,
            bundle: p.bundle,
            resolved: p.resolved,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ListParams {
    pub catalog: Option<PathBuf>,
    pub json: bool,
    pub color: ColorChoice,
}

impl ListParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            catalog: m.get_one::<PathBuf>("catalog").cloned(),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<ListParams> for ListArgs {
    fn from(p: ListParams) -> Self {
        Self {
            catalog: p.catalog,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

fn required<T: Clone + Send + Sync + 'static>(m: &ArgMatches, id: &str) -> T {
    m.get_one::<T>(id)
        .cloned()
        .unwrap_or_else(|| unreachable!("clap enforces required arg `{id}`"))
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
