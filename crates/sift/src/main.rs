//! Command-line interface for the `sift` boolean text filter.

use std::process::ExitCode;

use clap::Parser;
use sift::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match &cli.command {
        Commands::Init(_) | Commands::Check(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    let ctx = match ctx {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &ctx)
}
