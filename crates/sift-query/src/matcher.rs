//! Compilation of query terms into literal matchers, and tree evaluation.
//!
//! Term text is never turned into a regular expression, so characters such as `.`,
//! `*`, `[` or `|` always stand for themselves.

use std::borrow::Cow;

use crate::{
    ast::Expr,
    normalize::{fold_case, normalize},
    query::QueryOptions,
};

/// A term pattern prepared for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTerm {
    /// Trimmed, normalized and (optionally) case-folded pattern text.
    pattern: String,
    /// Whether occurrences must sit on word boundaries.
    whole_words: bool,
}

impl CompiledTerm {
    /// Prepares `pattern` the same way subject text is prepared under `options`.
    pub fn new(pattern: &str, options: &QueryOptions) -> Self {
        Self {
            pattern: prepare(pattern.trim(), options).into_owned(),
            whole_words: options.whole_words,
        }
    }

    /// The prepared pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Checks the term against text already passed through [`prepare`].
    ///
    /// Every occurrence is tried, overlapping ones included, and the first one with a
    /// non-word character (or the text edge) on both sides is accepted.
    pub fn is_match(&self, text: &str) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        if !self.whole_words {
            return text.contains(self.pattern.as_str());
        }

        let mut from = 0;
        while let Some(found) = text[from..].find(self.pattern.as_str()) {
            let start = from + found;
            let end = start + self.pattern.len();
            if on_boundary(text, start, end) {
                return true;
            }
            // Step one character past this occurrence's start.
            from = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }

        false
    }
}

/// Returns true if `ch` counts as part of a word.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Checks that `text[start..end]` has no word character immediately around it.
fn on_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Applies the options' normalization and case folding to `text`.
pub fn prepare<'a>(text: &'a str, options: &QueryOptions) -> Cow<'a, str> {
    let normalized = if options.ignore_accents {
        normalize(text)
    } else {
        Cow::Borrowed(text)
    };

    if options.ignore_case
        && let Cow::Owned(folded) = fold_case(&normalized)
    {
        return Cow::Owned(folded);
    }

    normalized
}

/// A query tree whose leaves are compiled terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledExpr {
    /// Both sides must match.
    And(Box<Self>, Box<Self>),
    /// Either side must match.
    Or(Box<Self>, Box<Self>),
    /// The child must not match.
    Not(Box<Self>),
    /// A literal leaf.
    Term(CompiledTerm),
}

impl CompiledExpr {
    /// Evaluates the tree against prepared text.
    ///
    /// `And` stops at the first false side and `Or` at the first true side.
    pub fn evaluate(&self, text: &str) -> bool {
        match self {
            Self::And(left, right) => left.evaluate(text) && right.evaluate(text),
            Self::Or(left, right) => left.evaluate(text) || right.evaluate(text),
            Self::Not(child) => !child.evaluate(text),
            Self::Term(term) => term.is_match(text),
        }
    }
}

/// Compiles every term in `expr` once, mirroring the tree's shape.
pub fn compile(expr: &Expr, options: &QueryOptions) -> CompiledExpr {
    match expr {
        Expr::And(left, right) => CompiledExpr::And(
            Box::new(compile(left, options)),
            Box::new(compile(right, options)),
        ),
        Expr::Or(left, right) => CompiledExpr::Or(
            Box::new(compile(left, options)),
            Box::new(compile(right, options)),
        ),
        Expr::Not(child) => CompiledExpr::Not(Box::new(compile(child, options))),
        Expr::Term { pattern, .. } => CompiledTerm::new(pattern, options).into(),
    }
}

impl From<CompiledTerm> for CompiledExpr {
    fn from(term: CompiledTerm) -> Self {
        Self::Term(term)
    }
}
