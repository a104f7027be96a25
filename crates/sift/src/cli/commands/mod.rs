//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod explain;
pub mod init;
pub mod matching;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Match(cmd) => matching::run(ctx, &cmd),
        Commands::Check(cmd) => check::run(&cmd),
        Commands::Explain(cmd) => explain::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
    }
}
