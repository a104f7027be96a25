//! Implementation of `sift check`.

use std::process::ExitCode;

use sift_query::{Query, validate_query};

use crate::cli::{
    args::CheckCommand,
    context::ERROR_EXIT,
    output::{JsonCheckOutput, success, warning},
};

/// Validates a query and reports structural issues and parse errors.
///
/// Exits successfully only when the query is structurally valid and parses.
pub fn run(cmd: &CheckCommand) -> ExitCode {
    let validation = validate_query(&cmd.query);
    let parse_error = Query::new(&cmd.query).err();
    let ok = validation.is_valid && parse_error.is_none();

    if cmd.json {
        let output = JsonCheckOutput {
            is_valid: validation.is_valid,
            query_issues: validation.query_issues,
            parse_error: parse_error.as_ref().map(|e| e.message().to_string()),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json_str) => println!("{json_str}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::from(ERROR_EXIT);
            }
        }
    } else {
        for issue in &validation.query_issues {
            println!("{}", warning(&format!("issue: {issue}")));
        }
        if let Some(e) = &parse_error {
            println!("{}", e.to_string().trim_end());
        }
        if ok {
            println!("{}", success("query is valid"));
        }
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
