//! Command-line interface for the `notelink` vault cross-referencer.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // `init` and `inspect` must work even when an existing config file is
    // missing or invalid.
    let context = match &cli.command {
        Commands::Init(_) | Commands::Inspect(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match context {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
