use std::process::ExitCode;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use rb_cli::replay::{ReplayOptions, run_replay};
use rb_cli::summary::{print_summary, render_json};
use rb_core::message::KINDS;

use crate::cli::{OutputFormatArg, ReplayArgs};

/// Replay the log and print the result; any failure exits non-zero.
pub fn replay(args: &ReplayArgs) -> ExitCode {
    exit_code(replay_and_print(args))
}

/// Print the event kinds table.
pub fn kinds() -> ExitCode {
    println!("{}", kinds_table());
    ExitCode::SUCCESS
}

fn replay_and_print(args: &ReplayArgs) -> Result<()> {
    let options = ReplayOptions {
        events: args.events.clone(),
        settings: args.settings.clone(),
        clock: args.clock,
    };
    let state = run_replay(&options)?;
    match args.format {
        OutputFormatArg::Table => print_summary(&state),
        OutputFormatArg::Json => println!("{}", render_json(&state)?),
    }
    Ok(())
}

fn kinds_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Group", "Kind"]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for &kind in KINDS {
        let (group, name) = kind.split_once('.').unwrap_or((kind, ""));
        table.add_row(vec![group, name]);
    }
    table
}

fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
