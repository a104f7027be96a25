//! Boolean text queries for sift.
//!
//! This crate compiles a small query language and evaluates it against text:
//!
//! - **Terms**: `rust` - whole words that must appear
//! - **Multi-word terms**: `new york` - adjacent words match as one literal
//! - **Phrases**: `"error handling"` - quoted text, matched verbatim
//! - **AND / OR**: `rust AND golang`, `rust OR golang` - case-insensitive keywords
//! - **NOT**: `NOT deprecated` - terms that must not appear
//! - **Grouping**: `(a OR b) AND c` - precedence control
//!
//! Matching is literal (no regular expressions), respects word boundaries, and by
//! default ignores letter case and diacritics.
//!
//! # Example
//!
//! ```
//! use sift_query::Query;
//!
//! let query = Query::new("(Hello AND World) AND NOT Bad").unwrap();
//! assert!(query.is_match("Hello how are you today world?"));
//! assert!(!query.is_match("Hello world, I'm bad"));
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod lexer;
mod matcher;
mod normalize;
mod parser;
mod query;
mod validate;

pub use ast::Expr;
pub use error::{LexError, ParseError, QueryError, QueryErrorKind};
pub use lexer::{Spanned, Token, tokenize, tokenize_spanned};
pub use matcher::{CompiledExpr, CompiledTerm, compile, prepare};
pub use normalize::{fold_case, normalize};
pub use parser::parse;
pub use query::{Query, QueryOptions};
pub use validate::{ValidationIssue, ValidationResult, find_issues, validate_query};
