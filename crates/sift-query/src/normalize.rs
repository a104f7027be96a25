//! Diacritic-stripping Unicode normalization.
//!
//! Patterns and subject text both pass through [`normalize`] so that accents never
//! decide a match: "Good" finds "göod". Case folding is a separate step.

use std::borrow::Cow;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Decomposes `text` canonically (NFD) and drops every combining mark.
///
/// Base letters, digits, punctuation, symbols and emoji are kept unchanged. ASCII
/// input cannot carry combining marks and is returned borrowed.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.nfd().filter(|ch| !is_combining_mark(*ch)).collect())
}

/// Lowercases `text` for case-insensitive comparison.
pub fn fold_case(text: &str) -> Cow<'_, str> {
    if text.is_ascii() && !text.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}
