//! Implementation of `sift config`.

use std::process::ExitCode;

use crate::cli::{context::CommandContext, output::dim};

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;

    if config.sources.is_empty() {
        println!("{}", dim("# no configuration files found; using defaults"));
    } else {
        println!("{}", dim("# merged from (highest precedence first):"));
        for source in &config.sources {
            println!("{}", dim(&format!("#   {}", source.display())));
        }
    }

    print!("{}", config.settings_to_toml());
    ExitCode::SUCCESS
}
