// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Command dispatch: turns parsed arguments into domain calls and reports results.

pub mod crop;
pub mod label;
pub mod message;
pub mod preview;

use crate::cli::{Cli, Commands};
use crate::config::AppConfig;
use crate::domain::label::FontResolver;
use crate::domain::label::shaping::Shaper;

use self::message::Outcome;

/// Run one command to completion and print what it produced.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::default();

    let outcomes = match cli.command {
        Commands::Crop(args) => {
            let config = config.with_output_dir(args.out_dir.clone());
            crop::run(args, config)?
        }
        Commands::Label(args) => {
            let config = config.with_font(args.font.clone());
            label::run(args, config)?
        }
        Commands::Fonts { font } => {
            list_fonts(&config.with_font(font));
            Vec::new()
        }
    };

    for outcome in &outcomes {
        if *outcome == Outcome::Cancelled {
            log::info!("Cancelled");
        }
        for line in outcome.lines() {
            println!("{line}");
        }
    }

    Ok(())
}

/// Print every font candidate, marking existing files (`+`) and the one in use (`*`).
fn list_fonts(config: &AppConfig) {
    let resolver = FontResolver::standard(config.font_override.as_deref());
    let resolved = resolver.resolve();

    for candidate in resolver.candidates() {
        let mark = if Some(candidate) == resolved {
            '*'
        } else if candidate.path.is_file() {
            '+'
        } else {
            ' '
        };
        println!("{mark} {:<8} {}", candidate.origin, candidate.path.display());
    }

    println!("using: {}", resolver.load().source());
    let shaping = if Shaper::new().is_contextual() {
        "contextual"
    } else {
        "character reversal"
    };
    println!("shaping: {shaping}");
}
