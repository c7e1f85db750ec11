#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! depsolver CLI: three positional JSON documents in, a JSON array of
//! install/uninstall commands on stdout.

mod cli;
mod logging;

use clap::Parser;
use cli::Cli;
use std::process;
use tracing::error;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.debug);

    match depsolver_resolver::run(
        &cli.repository,
        &cli.initial,
        &cli.constraints,
        &cli.solver,
        cli.max_cycle_iterations,
    ) {
        Ok(commands) => {
            let json = serde_json::to_string(&commands).expect("command list is valid UTF-8 JSON");
            println!("{json}");
        }
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}
