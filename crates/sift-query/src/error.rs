//! Error types for query tokenizing and parsing.
//!
//! Lexer and parser each report their own error type; both fold into [`QueryError`],
//! the single failure a caller sees when a query cannot be built.

use std::{error, fmt};

use thiserror::Error;

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LexError {
    /// Error message.
    pub message: String,
    /// Byte position in input where error occurred.
    pub position: usize,
    /// The original input string.
    pub input: String,
}

impl LexError {
    /// Creates a new lexer error.
    pub fn new(message: impl Into<String>, position: usize, input: &str) -> Self {
        Self {
            message: message.into(),
            position,
            input: input.to_string(),
        }
    }
}

/// Parse error with position information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Byte position in the query where the error was detected, if known.
    pub position: Option<usize>,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(message: impl Into<String>, position: Option<usize>) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// A unified error type for query construction.
///
/// Renders the original query with a position indicator and, for common mistakes, a
/// hint on how to fix it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    /// The kind of error that occurred.
    pub kind: QueryErrorKind,
    /// The original query string.
    pub query: String,
}

/// The specific kind of query error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryErrorKind {
    /// The query is empty or whitespace only.
    Empty,
    /// Lexer error (tokenization failed).
    Lex {
        /// Error message.
        message: String,
        /// Byte position in input.
        position: usize,
    },
    /// Parser error (invalid syntax).
    Parse {
        /// Error message.
        message: String,
        /// Byte position in input (if available).
        position: Option<usize>,
    },
}

impl QueryError {
    /// Creates an empty-query error.
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            kind: QueryErrorKind::Empty,
            query: query.into(),
        }
    }

    /// Creates a lex error.
    pub fn lex(message: impl Into<String>, position: usize, query: impl Into<String>) -> Self {
        Self {
            kind: QueryErrorKind::Lex {
                message: message.into(),
                position,
            },
            query: query.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(
        message: impl Into<String>,
        position: Option<usize>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            kind: QueryErrorKind::Parse {
                message: message.into(),
                position,
            },
            query: query.into(),
        }
    }

    /// Builds a query error from a parser error and the query it was raised for.
    pub fn from_parse(err: ParseError, query: impl Into<String>) -> Self {
        Self::parse(err.message, err.position, query)
    }

    /// Returns the error message without context.
    pub fn message(&self) -> &str {
        match &self.kind {
            QueryErrorKind::Empty => "no query provided",
            QueryErrorKind::Lex { message, .. } | QueryErrorKind::Parse { message, .. } => {
                message
            }
        }
    }

    /// Returns the byte position the error points at, if known.
    pub fn position(&self) -> Option<usize> {
        match &self.kind {
            QueryErrorKind::Empty => None,
            QueryErrorKind::Lex { position, .. } => Some(*position),
            QueryErrorKind::Parse { position, .. } => *position,
        }
    }

    /// Returns a suggestion for common errors.
    pub fn suggestion(&self) -> Option<&'static str> {
        match &self.kind {
            QueryErrorKind::Empty => Some("Provide at least one term, e.g., 'rust AND golang'"),
            QueryErrorKind::Lex { message, .. } if message.contains("unclosed quote") => {
                Some("Add a closing quote (\") to complete the phrase")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("closing parenthesis") => {
                Some("Add a closing parenthesis ) to match the opening one")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("unexpected ')'") => {
                Some("Remove the extra ) or add a matching (")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("expected AND or OR") => {
                Some("Join terms with AND or OR, or quote them as one phrase")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("expected a term") => {
                Some("Operators need an operand, e.g., 'rust AND NOT golang'")
            }
            QueryErrorKind::Parse { message, .. } if message.contains("empty phrase") => {
                Some("Put some text between the quotes or remove them")
            }
            _ => None,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "query syntax error: {}", self.message())?;

        if !self.query.trim().is_empty() {
            writeln!(f, "  {}", self.query)?;
            if let Some(pos) = self.position() {
                let clamped = pos.min(self.query.len());
                let column = self.query.get(..clamped).map_or(clamped, |s| s.chars().count());
                writeln!(f, "  {}^", " ".repeat(column))?;
            }
        }

        if let Some(suggestion) = self.suggestion() {
            write!(f, "hint: {suggestion}")?;
        }

        Ok(())
    }
}

impl error::Error for QueryError {}

impl From<LexError> for QueryError {
    fn from(err: LexError) -> Self {
        Self {
            kind: QueryErrorKind::Lex {
                message: err.message,
                position: err.position,
            },
            query: err.input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_display() {
        let err = QueryError::lex("unclosed quote", 0, "\"hello world");
        let display = err.to_string();
        assert!(display.contains("unclosed quote"));
        assert!(display.contains("\"hello world"));
        assert!(display.contains("^"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn parse_error_display() {
        let err = QueryError::parse("expected closing parenthesis", Some(5), "(rust");
        let display = err.to_string();
        assert!(display.contains("expected closing parenthesis"));
        assert!(display.contains("(rust"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn caret_counts_characters_not_bytes() {
        let err = QueryError::parse("expected AND or OR, found 'x'", Some(6), "göod x");
        let display = err.to_string();
        assert!(display.contains("\n       ^"), "{display}");
    }

    #[test]
    fn empty_error_skips_query_line() {
        let err = QueryError::empty("   ");
        let display = err.to_string();
        assert!(display.starts_with("query syntax error: no query provided\n"));
        assert!(!display.contains('^'));
    }

    #[test]
    fn lex_error_converts_with_query() {
        let err = QueryError::from(LexError::new("unclosed quote", 4, "ab \"c"));
        assert_eq!(err.query, "ab \"c");
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn message_extraction() {
        let err = QueryError::lex("test message", 0, "query");
        assert_eq!(err.message(), "test message");
    }

    #[test]
    fn missing_operator_suggestion() {
        let err = QueryError::parse("expected AND or OR, found phrase \"x\"", None, "a \"x\"");
        assert!(err.suggestion().unwrap().contains("AND or OR"));
    }

    #[test]
    fn unknown_message_has_no_suggestion() {
        let err = QueryError::parse("something odd", None, "q");
        assert!(err.suggestion().is_none());
    }
}
