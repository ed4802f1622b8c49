mod cli;
mod commands;
mod logging;

use cli::{GlobalParams, InfoParams, LoadParams, ParseParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    let global = GlobalParams::from_matches(&matches);
    logging::init(global.verbosity);

    match matches.subcommand() {
        Some(("load", m)) => {
            let params = LoadParams::from_matches(m);
            commands::load::run(params.into(), global.loader_config());
        }
        Some(("info", m)) => {
            let params = InfoParams::from_matches(m);
            commands::info::run(params.into(), global.loader_config());
        }
        Some(("parse", m)) => {
            let params = ParseParams::from_matches(m);
            commands::parse::run(params.into(), global.loader_config());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
