//! Query lexer (tokenizer).
//!
//! Converts a query string into a stream of tokens for the parser. The lexer never
//! decides whether a word is a keyword: `AND`, `OR` and `NOT` come out as plain
//! [`Token::Word`]s and the parser classifies them by grammar position.

use std::{iter::Peekable, str::CharIndices};

use crate::error::LexError;

/// A token in the query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A bare word: a maximal run of characters other than whitespace, parentheses
    /// and quotation marks.
    Word(String),

    /// A quoted phrase (the quotes are stripped, content preserved verbatim).
    Phrase(String),

    /// Left parenthesis.
    LParen,

    /// Right parenthesis.
    RParen,
}

impl Token {
    /// Returns the word text if this is a bare word.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            _ => None,
        }
    }

    /// Returns true if this is a bare word equal to `keyword`, ignoring ASCII case.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.as_word()
            .is_some_and(|word| word.eq_ignore_ascii_case(keyword))
    }

    /// Short human-readable description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Word(word) => format!("'{word}'"),
            Self::Phrase(text) => format!("phrase \"{text}\""),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
        }
    }
}

/// A token together with the byte offset where it starts in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    /// The token.
    pub token: Token,
    /// Byte offset of the token's first character.
    pub offset: usize,
}

/// Tokenizes a query string.
struct Lexer<'a> {
    /// The original input string.
    input: &'a str,
    /// Character iterator with byte offsets and one-character lookahead.
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Tokenizes the entire input, returning all tokens or an error.
    fn tokenize(mut self) -> Result<Vec<Spanned>, LexError> {
        let mut tokens = Vec::new();

        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Returns the next token, or None if at end of input.
    fn next_token(&mut self) -> Result<Option<Spanned>, LexError> {
        self.skip_whitespace();

        let Some(&(offset, ch)) = self.chars.peek() else {
            return Ok(None);
        };

        let token = match ch {
            '"' => self.read_phrase(offset)?,
            '(' => {
                self.chars.next();
                Token::LParen
            }
            ')' => {
                self.chars.next();
                Token::RParen
            }
            _ => self.read_word(offset),
        };

        Ok(Some(Spanned { token, offset }))
    }

    /// Reads a quoted phrase starting at `start`.
    fn read_phrase(&mut self, start: usize) -> Result<Token, LexError> {
        self.chars.next(); // consume opening quote
        let content_start = start + 1;

        for (offset, ch) in self.chars.by_ref() {
            if ch == '"' {
                return Ok(Token::Phrase(self.input[content_start..offset].to_string()));
            }
        }

        Err(LexError::new("unclosed quote", start, self.input))
    }

    /// Reads a bare word starting at `start`.
    fn read_word(&mut self, start: usize) -> Token {
        let mut end = self.input.len();

        while let Some(&(offset, ch)) = self.chars.peek() {
            if is_word_break(ch) {
                end = offset;
                break;
            }
            self.chars.next();
        }

        Token::Word(self.input[start..end].to_string())
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|&(_, ch)| ch.is_whitespace()).is_some() {}
    }
}

/// Returns true for characters that end a bare word.
fn is_word_break(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '(' | ')' | '"')
}

/// Tokenizes a query string, keeping each token's byte offset.
pub fn tokenize_spanned(input: &str) -> Result<Vec<Spanned>, LexError> {
    Lexer::new(input).tokenize()
}

/// Convenience function to tokenize a query string.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Ok(tokenize_spanned(input)?
        .into_iter()
        .map(|spanned| spanned.token)
        .collect())
}
