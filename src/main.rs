use clap::Parser;

mod cli;
mod commands;
mod domain;
mod exiftool;
mod services;

use cli::{Cli, Commands};
use exiftool::{ExifTool, ExifToolError};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err:#}");
        std::process::exit(exit_code(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let tool = ExifTool::locate(cli.exiftool.as_deref())?;
    match &cli.command {
        Commands::Read {
            files,
            tags,
            params,
            groups,
            iptc,
        } => commands::read::run(&tool, files, tags, params, groups, *iptc),
        Commands::Write {
            file,
            set,
            set_inline,
            params,
        } => commands::write::run(&tool, file, set.as_deref(), set_inline, params),
        Commands::Validate {
            file,
            expect,
            expect_inline,
            params,
            contains,
            unordered,
        } => commands::validate::run(
            &tool,
            file,
            expect.as_deref(),
            expect_inline,
            params,
            *contains,
            *unordered,
        ),
    }
}

/// Backend failures propagate exiftool's own exit status; everything else
/// maps to 1. Validation soft failures exit from the handler with their own
/// status and never reach this path.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ExifToolError>() {
        Some(ExifToolError::Failed { status, .. }) => *status,
        _ => 1,
    }
}
