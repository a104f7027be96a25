//! Query abstract syntax tree.
//!
//! Represents a parsed boolean query before its terms are compiled into matchers.

use std::fmt;

/// A parsed query expression.
///
/// The tree is strict: `Not` has exactly one child, `And` and `Or` exactly two.
/// Chains of the same operator nest to the left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Conjunction: both sides must match.
    And(Box<Self>, Box<Self>),

    /// Disjunction: at least one side must match.
    Or(Box<Self>, Box<Self>),

    /// Negation: the child must NOT match.
    Not(Box<Self>),

    /// A literal leaf predicate.
    Term {
        /// Literal text to look for, non-empty after trimming.
        pattern: String,
        /// Whether the term came from a quoted phrase.
        is_phrase: bool,
    },
}

impl Expr {
    /// Creates a conjunction of two expressions.
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Creates a disjunction of two expressions.
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Creates a negation.
    #[allow(clippy::should_implement_trait)]
    pub fn not(child: Self) -> Self {
        Self::Not(Box::new(child))
    }

    /// Creates a term from bare words.
    pub fn term(pattern: impl Into<String>) -> Self {
        Self::Term {
            pattern: pattern.into(),
            is_phrase: false,
        }
    }

    /// Creates a term from a quoted phrase.
    pub fn phrase(pattern: impl Into<String>) -> Self {
        Self::Term {
            pattern: pattern.into(),
            is_phrase: true,
        }
    }

    /// Returns the depth of the tree; a lone term has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Term { .. } => 1,
            Self::Not(child) => 1 + child.depth(),
            Self::And(left, right) | Self::Or(left, right) => 1 + left.depth().max(right.depth()),
        }
    }

    /// Returns the leaf patterns in left-to-right order.
    pub fn terms(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_terms(&mut out);
        out
    }

    /// Pushes leaf patterns onto `out`, left to right.
    fn collect_terms<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Term { pattern, .. } => out.push(pattern),
            Self::Not(child) => child.collect_terms(out),
            Self::And(left, right) | Self::Or(left, right) => {
                left.collect_terms(out);
                right.collect_terms(out);
            }
        }
    }

    /// Formats the expression as a tree structure with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Term {
                pattern,
                is_phrase: false,
            } => writeln!(f, "{prefix}Term({pattern:?})"),
            Self::Term {
                pattern,
                is_phrase: true,
            } => writeln!(f, "{prefix}Phrase({pattern:?})"),
            Self::Not(child) => {
                writeln!(f, "{prefix}Not")?;
                child.fmt_tree(f, indent + 1)
            }
            Self::And(left, right) => {
                writeln!(f, "{prefix}And")?;
                left.fmt_tree(f, indent + 1)?;
                right.fmt_tree(f, indent + 1)
            }
            Self::Or(left, right) => {
                writeln!(f, "{prefix}Or")?;
                left.fmt_tree(f, indent + 1)?;
                right.fmt_tree(f, indent + 1)
            }
        }
    }

    /// Formats the expression as a fully parenthesized query string.
    ///
    /// The output parses back to an identical tree: `(Hello AND (NOT "bad news"))`.
    pub fn to_query_string(&self) -> String {
        match self {
            Self::Term {
                pattern,
                is_phrase: true,
            } => format!("\"{pattern}\""),
            Self::Term { pattern, .. } => pattern.clone(),
            Self::Not(child) => format!("(NOT {})", child.to_query_string()),
            Self::And(left, right) => {
                format!("({} AND {})", left.to_query_string(), right.to_query_string())
            }
            Self::Or(left, right) => {
                format!("({} OR {})", left.to_query_string(), right.to_query_string())
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_counts_levels() {
        let expr = Expr::and(Expr::term("a"), Expr::not(Expr::term("b")));
        assert_eq!(Expr::term("a").depth(), 1);
        assert_eq!(expr.depth(), 3);
    }

    #[test]
    fn terms_in_order() {
        let expr = Expr::or(
            Expr::and(Expr::term("a"), Expr::phrase("b c")),
            Expr::not(Expr::term("d")),
        );
        assert_eq!(expr.terms(), vec!["a", "b c", "d"]);
    }

    #[test]
    fn tree_display() {
        let expr = Expr::and(Expr::term("Hello"), Expr::not(Expr::phrase("bad news")));
        assert_eq!(
            expr.to_string(),
            "And\n  Term(\"Hello\")\n  Not\n    Phrase(\"bad news\")\n"
        );
    }

    #[test]
    fn query_string_parenthesizes_everything() {
        let expr = Expr::or(
            Expr::and(Expr::term("a"), Expr::not(Expr::term("b"))),
            Expr::phrase("c d"),
        );
        assert_eq!(expr.to_query_string(), "((a AND (NOT b)) OR \"c d\")");
    }
}
