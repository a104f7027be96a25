//! Clap argument definitions for the `sift` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sift_config::MatchSettings;
use sift_query::QueryOptions;

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "sift")]
#[command(about = "Filter text with boolean queries")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the configured matching settings.
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Match letter case exactly
    #[arg(short = 's', long, conflicts_with = "ignore_case")]
    pub case_sensitive: bool,

    /// Ignore letter case even if the configuration disables it
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Treat accented letters as distinct from their base letters
    #[arg(long)]
    pub keep_accents: bool,

    /// Let terms match inside longer words
    #[arg(long)]
    pub substring: bool,
}

impl MatchArgs {
    /// Resolves query options from configured settings and these overrides.
    pub fn resolve(&self, settings: &MatchSettings) -> QueryOptions {
        let ignore_case = if self.case_sensitive {
            false
        } else {
            self.ignore_case || settings.ignore_case
        };

        QueryOptions {
            ignore_case,
            ignore_accents: settings.ignore_accents && !self.keep_accents,
            whole_words: settings.whole_words && !self.substring,
        }
    }
}

/// Arguments for `sift match`.
#[derive(Args, Debug, Clone)]
pub struct MatchCommand {
    /// Query to evaluate
    pub query: String,

    /// Files to read (standard input when none are given)
    pub files: Vec<PathBuf>,

    /// Evaluate each file as a single text and print matching file names
    #[arg(short = 'w', long)]
    pub whole: bool,

    /// Print the number of matches per input instead of the matches
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Prefix matching lines with their line number
    #[arg(short = 'n', long)]
    pub line_number: bool,

    /// Output in JSON format
    #[arg(long, conflicts_with = "count")]
    pub json: bool,

    #[command(flatten)]
    /// Matching overrides.
    pub matching: MatchArgs,
}

/// Arguments for `sift check`.
#[derive(Args, Debug, Clone)]
pub struct CheckCommand {
    /// Query to check
    pub query: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `sift explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainCommand {
    /// Query to explain
    pub query: String,

    #[command(flatten)]
    /// Matching overrides.
    pub matching: MatchArgs,
}

/// Arguments for `sift init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.sift.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `sift` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Print lines (or files) that satisfy a query
    #[command(after_help = "\
QUERY SYNTAX:
  term              Whole word must appear
  two words         Adjacent words, matched as one literal
  \"phrase\"          Quoted text, matched verbatim
  a AND b           Both must appear
  a OR b            Either must appear
  NOT a             Must not appear
  (expr)            Grouping

  AND, OR and NOT are case-insensitive. Quote a term to search for one of them.

EXIT STATUS:
  0 if anything matched, 1 if nothing matched, 2 on error

EXAMPLES:
  sift match 'error AND NOT timeout' app.log
  sift match -w '\"release notes\" OR changelog' docs/*.md
  cat notes.txt | sift match -c 'todo OR fixme'")]
    Match(MatchCommand),

    /// Validate a query and report problems
    Check(CheckCommand),

    /// Show how a query is parsed and compiled
    Explain(ExplainCommand),

    /// Initialize sift configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_apply_on_top_of_settings() {
        let settings = MatchSettings::default();
        let args = MatchArgs {
            case_sensitive: true,
            keep_accents: true,
            ..MatchArgs::default()
        };

        let options = args.resolve(&settings);

        assert!(!options.ignore_case);
        assert!(!options.ignore_accents);
        assert!(options.whole_words);
    }

    #[test]
    fn ignore_case_flag_beats_config() {
        let settings = MatchSettings {
            ignore_case: false,
            ..MatchSettings::default()
        };
        let args = MatchArgs {
            ignore_case: true,
            ..MatchArgs::default()
        };

        assert!(args.resolve(&settings).ignore_case);
        assert!(!MatchArgs::default().resolve(&settings).ignore_case);
    }

    #[test]
    fn case_flags_conflict() {
        let result = Cli::try_parse_from(["sift", "match", "-s", "-i", "q"]);
        assert!(result.is_err());
    }
}
