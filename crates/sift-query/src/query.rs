//! The `Query` facade: build once, match many texts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    ast::Expr,
    error::QueryError,
    matcher::{CompiledExpr, compile, prepare},
    parser::parse,
    validate::{ValidationResult, validate_query},
};

/// Options controlling how terms are compared with text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Compare without regard to letter case.
    pub ignore_case: bool,
    /// Strip diacritics from patterns and text before comparing.
    pub ignore_accents: bool,
    /// Require terms to start and end on word boundaries.
    pub whole_words: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            ignore_accents: true,
            whole_words: true,
        }
    }
}

/// A compiled boolean query.
///
/// Construction parses the query and compiles its terms; afterwards the query is
/// read-only and can be shared across threads and matched against any number of texts.
#[derive(Debug, Clone)]
pub struct Query {
    /// The query as written.
    raw: String,
    /// Matching options fixed at construction.
    options: QueryOptions,
    /// Parsed tree.
    expr: Expr,
    /// Tree with prepared terms.
    compiled: CompiledExpr,
}

impl Query {
    /// Builds a query with default options (case and accent insensitive, whole words).
    pub fn new(raw: &str) -> Result<Self, QueryError> {
        Self::with_options(raw, QueryOptions::default())
    }

    /// Builds a query with the given options.
    pub fn with_options(raw: &str, options: QueryOptions) -> Result<Self, QueryError> {
        let expr = parse(raw)?;
        let compiled = compile(&expr, &options);
        Ok(Self {
            raw: raw.to_string(),
            options,
            expr,
            compiled,
        })
    }

    /// The query as written.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The options the query was built with.
    pub fn options(&self) -> QueryOptions {
        self.options
    }

    /// The parsed expression tree.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Runs the structural checks over the raw query string.
    pub fn validate_query(&self) -> ValidationResult {
        validate_query(&self.raw)
    }

    /// Returns true if `text` satisfies the query.
    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.evaluate(&prepare(text, &self.options))
    }

    /// Yields the texts that satisfy the query, in order.
    pub fn filter<I, T>(&self, texts: I) -> impl Iterator<Item = T>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        texts
            .into_iter()
            .filter(move |text| self.is_match(text.as_ref()))
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
