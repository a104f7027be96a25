//! Implementation of `sift explain`.

use std::process::ExitCode;

use sift_query::{CompiledTerm, Query};

use crate::cli::{
    args::ExplainCommand,
    context::{CommandContext, ERROR_EXIT},
    output::{dim, header, indent, subheader},
};

/// Prints how a query is parsed and what each term compiles to.
pub fn run(ctx: &CommandContext, cmd: &ExplainCommand) -> ExitCode {
    let options = cmd.matching.resolve(&ctx.config.matching);

    let query = match Query::with_options(&cmd.query, options) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("{}", e.to_string().trim_end());
            return ExitCode::from(ERROR_EXIT);
        }
    };
    let expr = query.expr();

    println!("{}", header(query.raw()));
    println!();

    println!("{}", subheader("Canonical:"));
    println!("   {}", expr.to_query_string());
    println!();

    println!("{}", subheader("Parsed AST:"));
    println!("{}", indent(&expr.to_string()));
    println!();

    println!("{}", subheader("Compiled terms:"));
    for term in expr.terms() {
        let compiled = CompiledTerm::new(term, &options);
        println!("   {term:?} {} {:?}", dim("->"), compiled.pattern());
    }
    println!();

    println!("{}", subheader("Options:"));
    println!("   ignore_case = {}", options.ignore_case);
    println!("   ignore_accents = {}", options.ignore_accents);
    println!("   whole_words = {}", options.whole_words);

    ExitCode::SUCCESS
}
