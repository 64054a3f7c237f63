//! `nightshade`: keep the terminal's light/dark theme preference.

mod cli;
mod commands;
mod logging;
mod output;
mod palette;
mod render;
mod term;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    commands::run(cli)
}
