// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Application entry point.

use clap::Parser;
use labelkit::cli::Cli;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(error) = labelkit::run(cli) {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
