//! Command implementations and dispatch.

pub mod apply;
pub mod check;
pub mod init;
pub mod inspect;
pub mod scan;
mod shared;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Scan(cmd) => scan::run(ctx, &cmd),
        Commands::Apply(cmd) => apply::run(ctx, &cmd),
        Commands::Inspect(cmd) => inspect::run(&cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Check => check::run(ctx),
    }
}
