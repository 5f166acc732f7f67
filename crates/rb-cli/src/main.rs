//! Report builder replay CLI.

use std::process::ExitCode;

use clap::Parser;
use rb_cli::logging::init_logging;

mod cli;
mod commands;

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match &cli.command {
        Command::Replay(args) => commands::replay(args),
        Command::Kinds => commands::kinds(),
    }
}
