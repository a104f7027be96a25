//! sift: boolean text filtering.
//!
//! sift evaluates boolean queries (`AND`, `OR`, `NOT`, parentheses and quoted phrases)
//! against lines of text or whole files. Terms match literally on word boundaries and,
//! by default, ignore letter case and accents.

#![warn(missing_docs)]

pub mod cli;
