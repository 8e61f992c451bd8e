mod cli;
mod commands;
mod logging;

use cli::{CheckParams, GenerateParams, InspectParams, ListParams, build_cli};

fn main() {
    logging::init_tracing();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("inspect", m)) => {
            let params = InspectParams::from_matches(m);
            commands::inspect::run(params.into());
        }
        Some(("list", m)) => {
            let params = ListParams::from_matches(m);
            commands::list::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
