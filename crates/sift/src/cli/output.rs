//! Terminal styling and JSON records for CLI output.

use serde::Serialize;
use sift_query::QueryOptions;

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    format!("{}{}{}", colors::BOLD, text, colors::RESET)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Indents every line of `content` by three spaces.
pub fn indent(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("   {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One matching line or file in JSON output.
#[derive(Debug, Serialize)]
pub struct JsonMatch {
    /// File path, or `-` for standard input.
    pub source: String,
    /// 1-based line number; absent when whole inputs are matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// Matching line text; absent when whole inputs are matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// JSON output for `sift match`.
#[derive(Debug, Serialize)]
pub struct JsonMatchOutput {
    /// The query as given.
    pub query: String,
    /// Effective matching options.
    pub options: QueryOptions,
    /// Matches in input order.
    pub matches: Vec<JsonMatch>,
    /// Number of matches.
    pub total: usize,
}

/// JSON output for `sift check`.
#[derive(Debug, Serialize)]
pub struct JsonCheckOutput {
    /// True iff no structural issues were found.
    pub is_valid: bool,
    /// Structural issue messages.
    pub query_issues: Vec<String>,
    /// Parser error message, if the query does not parse.
    pub parse_error: Option<String>,
}
