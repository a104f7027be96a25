//! Implementation of `sift match`.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use sift_query::Query;

use crate::cli::{
    args::MatchCommand,
    context::{CommandContext, ERROR_EXIT},
    output::{JsonMatch, JsonMatchOutput},
};

/// Source name used for standard input.
const STDIN_NAME: &str = "-";

/// A named text read from a file or standard input.
struct Input {
    /// Display name: the path as given, or `-`.
    name: String,
    /// Full contents.
    contents: String,
}

/// A single matching line, or a whole matching input.
#[derive(Debug, PartialEq, Eq)]
struct Hit<'a> {
    /// Name of the input the hit came from.
    source: &'a str,
    /// 1-based line number; `None` for whole-input hits.
    line: Option<usize>,
    /// Matching line; `None` for whole-input hits.
    text: Option<&'a str>,
}

/// Evaluates a query against files or standard input and prints what matched.
pub fn run(ctx: &CommandContext, cmd: &MatchCommand) -> ExitCode {
    let options = cmd.matching.resolve(&ctx.config.matching);

    let query = match Query::with_options(&cmd.query, options) {
        Ok(q) => q,
        Err(e) => {
            eprintln!("{}", e.to_string().trim_end());
            return ExitCode::from(ERROR_EXIT);
        }
    };

    let (inputs, had_errors) = read_inputs(&cmd.files);
    let show_source = inputs.len() > 1;

    let per_input: Vec<Vec<Hit<'_>>> = inputs
        .iter()
        .map(|input| find_hits(&query, input, cmd.whole))
        .collect();
    let total: usize = per_input.iter().map(Vec::len).sum();

    if cmd.json {
        let output = JsonMatchOutput {
            query: query.raw().to_string(),
            options: query.options(),
            matches: per_input
                .iter()
                .flatten()
                .map(|hit| JsonMatch {
                    source: hit.source.to_string(),
                    line: hit.line,
                    text: hit.text.map(str::to_string),
                })
                .collect(),
            total,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json_str) => println!("{json_str}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::from(ERROR_EXIT);
            }
        }
    } else if cmd.count {
        for (input, hits) in inputs.iter().zip(&per_input) {
            if show_source {
                println!("{}:{}", input.name, hits.len());
            } else {
                println!("{}", hits.len());
            }
        }
    } else {
        for hit in per_input.iter().flatten() {
            println!("{}", format_hit(hit, show_source, cmd.line_number));
        }
    }

    if had_errors {
        ExitCode::from(ERROR_EXIT)
    } else if total > 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Reads every named file, or standard input when no files are given.
///
/// Unreadable inputs are reported and skipped; the flag records whether any failed.
fn read_inputs(files: &[PathBuf]) -> (Vec<Input>, bool) {
    if files.is_empty() {
        let mut contents = String::new();
        return match io::stdin().read_to_string(&mut contents) {
            Ok(_) => (
                vec![Input {
                    name: STDIN_NAME.to_string(),
                    contents,
                }],
                false,
            ),
            Err(e) => {
                eprintln!("error: failed to read standard input: {e}");
                (Vec::new(), true)
            }
        };
    }

    let mut inputs = Vec::with_capacity(files.len());
    let mut had_errors = false;
    for path in files {
        match fs::read_to_string(path) {
            Ok(contents) => inputs.push(Input {
                name: path.display().to_string(),
                contents,
            }),
            Err(e) => {
                eprintln!("error: failed to read {}: {e}", path.display());
                had_errors = true;
            }
        }
    }
    (inputs, had_errors)
}

/// Collects the hits for one input, line by line or as a whole.
fn find_hits<'a>(query: &Query, input: &'a Input, whole: bool) -> Vec<Hit<'a>> {
    if whole {
        return if query.is_match(&input.contents) {
            vec![Hit {
                source: &input.name,
                line: None,
                text: None,
            }]
        } else {
            Vec::new()
        };
    }

    input
        .contents
        .lines()
        .enumerate()
        .filter(|(_, line)| query.is_match(line))
        .map(|(idx, line)| Hit {
            source: &input.name,
            line: Some(idx + 1),
            text: Some(line),
        })
        .collect()
}

/// Renders a hit in `source:line:text` form, omitting the parts not requested.
fn format_hit(hit: &Hit<'_>, show_source: bool, line_number: bool) -> String {
    let Some(text) = hit.text else {
        return hit.source.to_string();
    };

    let mut out = String::new();
    if show_source {
        out.push_str(hit.source);
        out.push(':');
    }
    if line_number && let Some(line) = hit.line {
        out.push_str(&line.to_string());
        out.push(':');
    }
    out.push_str(text);
    out
}
