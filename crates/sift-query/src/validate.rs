//! Structural checks over a raw query string.
//!
//! Validation never tokenizes or parses. It only counts delimiters, so it can describe
//! what is wrong with a query that the parser refuses to build.

use std::fmt;

use serde::Serialize;

/// A non-fatal problem found in a raw query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The query is empty or whitespace only.
    NoQuery,
    /// The counts of `(` and `)` differ.
    UnbalancedParentheses,
    /// The count of `"` is odd.
    UnbalancedQuotes,
}

impl ValidationIssue {
    /// The message reported for this issue.
    pub fn message(self) -> &'static str {
        match self {
            Self::NoQuery => "No query provided",
            Self::UnbalancedParentheses => "Number of opening and closing parentheses do not match",
            Self::UnbalancedQuotes => "Number of opening and closing quotation marks do not match",
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of validating a raw query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    /// True iff `query_issues` is empty.
    pub is_valid: bool,
    /// Issue messages, parentheses before quotes.
    pub query_issues: Vec<String>,
}

impl ValidationResult {
    /// Builds a result from the issues found, in report order.
    fn from_issues(issues: &[ValidationIssue]) -> Self {
        Self {
            is_valid: issues.is_empty(),
            query_issues: issues
                .iter()
                .map(|issue| issue.message().to_string())
                .collect(),
        }
    }
}

/// Lists the structural issues in `raw`.
///
/// An empty query reports only [`ValidationIssue::NoQuery`]. Otherwise parentheses are
/// checked before quotes and both may be reported.
pub fn find_issues(raw: &str) -> Vec<ValidationIssue> {
    if raw.trim().is_empty() {
        return vec![ValidationIssue::NoQuery];
    }

    let mut issues = Vec::new();
    let count = |target: char| raw.chars().filter(|&ch| ch == target).count();

    if count('(') != count(')') {
        issues.push(ValidationIssue::UnbalancedParentheses);
    }
    if count('"') % 2 != 0 {
        issues.push(ValidationIssue::UnbalancedQuotes);
    }

    issues
}

/// Validates a raw query string without parsing it.
pub fn validate_query(raw: &str) -> ValidationResult {
    ValidationResult::from_issues(&find_issues(raw))
}
