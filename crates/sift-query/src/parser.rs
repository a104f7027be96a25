//! Query parser.
//!
//! Parses a token stream into a query AST using recursive descent.
//!
//! # Grammar
//!
//! ```text
//! query      → or_expr
//! or_expr    → and_expr ("OR" and_expr)*
//! and_expr   → unary ("AND" unary)*
//! unary      → "NOT" unary | primary
//! primary    → "(" or_expr ")" | PHRASE | WORD+
//! ```
//!
//! # Precedence (highest to lowest)
//!
//! 1. Grouping: `(...)`
//! 2. Negation: `NOT`
//! 3. `AND`
//! 4. `OR`
//!
//! # Keywords
//!
//! The lexer hands every bare word over unclassified. A word is read as `AND`/`OR`
//! only in operator position (right after a complete operand) and as `NOT` only in
//! operand position. Everywhere else it is literal text, so `and AND not an` parses
//! as `And(Term("and"), Not(Term("an")))`. Adjacent bare words with no operator
//! between them form one multi-word term.

use crate::{
    ast::Expr,
    error::{ParseError, QueryError},
    lexer::{Spanned, Token, tokenize_spanned},
};

/// Recursive descent parser for query expressions.
struct Parser {
    /// Token stream to parse.
    tokens: Vec<Spanned>,
    /// Current position in token stream.
    position: usize,
    /// Byte length of the query, reported for errors at end of input.
    input_len: usize,
}

impl Parser {
    /// Creates a new parser from a token stream.
    fn new(tokens: Vec<Spanned>, input_len: usize) -> Self {
        Self {
            tokens,
            position: 0,
            input_len,
        }
    }

    /// Parses the token stream into a query expression.
    fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_or_expr()?;

        match self.peek() {
            None => Ok(expr),
            Some(Token::RParen) => Err(self.error_here("unexpected ')' without matching '('")),
            Some(token) => {
                let message = format!("expected AND or OR, found {}", token.describe());
                Err(self.error_here(message))
            }
        }
    }

    /// Parses: or_expr → and_expr ("OR" and_expr)*
    fn parse_or_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_and_expr()?;

        while self.check_keyword("or") {
            self.advance(); // consume OR
            self.require_operand("OR")?;
            let right = self.parse_and_expr()?;
            left = Expr::or(left, right);
        }

        Ok(left)
    }

    /// Parses: and_expr → unary ("AND" unary)*
    fn parse_and_expr(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while self.check_keyword("and") {
            self.advance(); // consume AND
            self.require_operand("AND")?;
            let right = self.parse_unary()?;
            left = Expr::and(left, right);
        }

        Ok(left)
    }

    /// Parses: unary → "NOT" unary | primary
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check_keyword("not") {
            self.advance(); // consume NOT
            self.require_operand("NOT")?;
            let child = self.parse_unary()?;
            return Ok(Expr::not(child));
        }

        self.parse_primary()
    }

    /// Parses: primary → "(" or_expr ")" | PHRASE | WORD+
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek().cloned() {
            Some(Token::Word(_)) => Ok(self.parse_words()),
            Some(Token::Phrase(text)) => {
                if text.trim().is_empty() {
                    return Err(self.error_here("empty phrase"));
                }
                self.advance();
                Ok(Expr::phrase(text))
            }
            Some(Token::LParen) => self.parse_group(),
            Some(Token::RParen) => Err(self.error_here("unexpected ')' without matching '('")),
            None => Err(self.error_here("expected a term, found end of query")),
        }
    }

    /// Reads a run of bare words into a single term.
    ///
    /// The run ends at a parenthesis, a phrase, the end of input, or a word that reads
    /// as `AND`/`OR` in the operator position that follows a complete operand.
    fn parse_words(&mut self) -> Expr {
        let mut words: Vec<String> = Vec::new();

        while let Some(Token::Word(word)) = self.peek() {
            if !words.is_empty() && is_infix_keyword(word) {
                break;
            }
            words.push(word.clone());
            self.advance();
        }

        Expr::term(words.join(" "))
    }

    /// Parses a parenthesized group, consuming the surrounding parentheses.
    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        let open = self.offset_here();
        self.advance(); // consume (
        self.require_operand("'('")?;
        let inner = self.parse_or_expr()?;

        if self.check(&Token::RParen) {
            self.advance(); // consume )
            return Ok(inner);
        }

        match self.peek() {
            None => Err(ParseError::new("expected closing parenthesis for '('", Some(open))),
            Some(token) => {
                let message = format!("expected AND or OR, found {}", token.describe());
                Err(self.error_here(message))
            }
        }
    }

    /// Fails unless an operand can start at the current token.
    fn require_operand(&self, after: &str) -> Result<(), ParseError> {
        match self.peek() {
            None => {
                let message = format!("expected a term after {after}, found end of query");
                Err(self.error_here(message))
            }
            Some(Token::RParen) => {
                Err(self.error_here(format!("expected a term after {after}, found ')'")))
            }
            Some(_) => Ok(()),
        }
    }

    /// Returns the current token without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|spanned| &spanned.token)
    }

    /// Checks if the current token matches the given token.
    fn check(&self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    /// Checks if the current token is a bare word spelling `keyword`.
    fn check_keyword(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|token| token.is_keyword(keyword))
    }

    /// Byte offset of the current token, or the end of input.
    fn offset_here(&self) -> usize {
        self.tokens
            .get(self.position)
            .map_or(self.input_len, |spanned| spanned.offset)
    }

    /// Creates an error pointing at the current token.
    fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message, Some(self.offset_here()))
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }
}

/// Returns true for words that act as infix operators in operator position.
fn is_infix_keyword(word: &str) -> bool {
    word.eq_ignore_ascii_case("and") || word.eq_ignore_ascii_case("or")
}

/// Parses a query string into an AST.
///
/// Empty and whitespace-only queries are rejected; every other malformed query yields
/// a [`QueryError`] pointing at the offending position.
pub fn parse(input: &str) -> Result<Expr, QueryError> {
    if input.trim().is_empty() {
        return Err(QueryError::empty(input));
    }

    let tokens = tokenize_spanned(input)?;
    Parser::new(tokens, input.len())
        .parse()
        .map_err(|err| QueryError::from_parse(err, input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryErrorKind;

    fn term(s: &str) -> Expr {
        Expr::term(s)
    }

    fn phrase(s: &str) -> Expr {
        Expr::phrase(s)
    }

    fn not(e: Expr) -> Expr {
        Expr::not(e)
    }

    fn and(l: Expr, r: Expr) -> Expr {
        Expr::and(l, r)
    }

    fn or(l: Expr, r: Expr) -> Expr {
        Expr::or(l, r)
    }

    fn parse_err(input: &str) -> QueryError {
        parse(input).unwrap_err()
    }

    #[test]
    fn empty_query() {
        assert_eq!(parse_err("").kind, QueryErrorKind::Empty);
        assert_eq!(parse_err("   ").kind, QueryErrorKind::Empty);
    }

    #[test]
    fn single_term() {
        assert_eq!(parse("rust").unwrap(), term("rust"));
    }

    #[test]
    fn simple_and() {
        assert_eq!(
            parse("Hello AND World").unwrap(),
            and(term("Hello"), term("World"))
        );
    }

    #[test]
    fn keywords_ignore_case() {
        assert_eq!(
            parse("a and b Or c").unwrap(),
            or(and(term("a"), term("b")), term("c"))
        );
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(
            parse("a OR b AND c").unwrap(),
            or(term("a"), and(term("b"), term("c")))
        );
    }

    #[test]
    fn and_chains_left() {
        assert_eq!(
            parse("a AND b AND c").unwrap(),
            and(and(term("a"), term("b")), term("c"))
        );
    }

    #[test]
    fn or_chains_left() {
        assert_eq!(
            parse("a OR b OR c").unwrap(),
            or(or(term("a"), term("b")), term("c"))
        );
    }

    #[test]
    fn chained_and_not() {
        assert_eq!(
            parse("A AND NOT B AND NOT C").unwrap(),
            and(and(term("A"), not(term("B"))), not(term("C")))
        );
    }

    #[test]
    fn not_binds_one_operand() {
        assert_eq!(
            parse("NOT a AND b").unwrap(),
            and(not(term("a")), term("b"))
        );
    }

    #[test]
    fn double_not() {
        assert_eq!(parse("NOT NOT a").unwrap(), not(not(term("a"))));
    }

    #[test]
    fn not_group_and_not_each_are_distinct() {
        let grouped = parse("NOT (A OR B)").unwrap();
        let separate = parse("(NOT A) AND (NOT B)").unwrap();

        assert_eq!(grouped, not(or(term("A"), term("B"))));
        assert_eq!(separate, and(not(term("A")), not(term("B"))));
        assert_ne!(grouped, separate);
    }

    #[test]
    fn nested_groups() {
        assert_eq!(
            parse("((Hello AND World) AND NOT (Bad)) AND (Good)").unwrap(),
            and(
                and(and(term("Hello"), term("World")), not(term("Bad"))),
                term("Good")
            )
        );
    }

    #[test]
    fn group_overrides_precedence() {
        assert_eq!(
            parse("(a OR b) AND c").unwrap(),
            and(or(term("a"), term("b")), term("c"))
        );
    }

    #[test]
    fn leading_and_is_a_term() {
        assert_eq!(
            parse("and AND not an").unwrap(),
            and(term("and"), not(term("an")))
        );
    }

    #[test]
    fn lone_keyword_words_are_terms() {
        assert_eq!(parse("and").unwrap(), term("and"));
        assert_eq!(parse("OR").unwrap(), term("OR"));
    }

    #[test]
    fn adjacent_words_form_one_term() {
        assert_eq!(parse("hello world").unwrap(), term("hello world"));
        assert_eq!(
            parse("new york AND big apple").unwrap(),
            and(term("new york"), term("big apple"))
        );
    }

    #[test]
    fn not_inside_word_run_is_literal() {
        assert_eq!(parse("hello not world").unwrap(), term("hello not world"));
    }

    #[test]
    fn not_after_operator_needs_operand() {
        let err = parse_err("to be or not");
        assert!(err.message().contains("expected a term after NOT"));
    }

    #[test]
    fn phrases_are_verbatim() {
        assert_eq!(
            parse("\"hello AND world\" OR \"(x)\"").unwrap(),
            or(phrase("hello AND world"), phrase("(x)"))
        );
    }

    #[test]
    fn quoted_keyword_is_literal() {
        assert_eq!(parse("\"not\"").unwrap(), phrase("not"));
        assert_eq!(
            parse("a AND \"not\"").unwrap(),
            and(term("a"), phrase("not"))
        );
    }

    #[test]
    fn quoted_groups() {
        assert_eq!(
            parse("((\"hello\" OR \"hi\") AND (\"world\" OR \"earth\"))").unwrap(),
            and(
                or(phrase("hello"), phrase("hi")),
                or(phrase("world"), phrase("earth"))
            )
        );
    }

    #[test]
    fn metacharacters_are_terms() {
        assert_eq!(parse("[A|B]").unwrap(), term("[A|B]"));
    }

    #[test]
    fn unclosed_paren_error() {
        let err = parse_err("(Hello) AND (World");
        assert!(err.message().contains("closing parenthesis"));
        assert_eq!(err.position(), Some(12));
    }

    #[test]
    fn extra_rparen_error() {
        let err = parse_err("a)");
        assert!(err.message().contains("unexpected ')'"));
        assert_eq!(err.position(), Some(1));
    }

    #[test]
    fn unclosed_quote_error() {
        let err = parse_err("(\"Hello\") AND (\"World)");
        assert!(matches!(err.kind, QueryErrorKind::Lex { .. }));
        assert!(err.message().contains("unclosed quote"));
    }

    #[test]
    fn missing_operator_error() {
        let err = parse_err("\"a b\" c");
        assert!(err.message().contains("expected AND or OR"));
        assert_eq!(err.position(), Some(6));
    }

    #[test]
    fn missing_operator_inside_group() {
        let err = parse_err("(a \"b\")");
        assert!(err.message().contains("expected AND or OR"));
    }

    #[test]
    fn dangling_operators() {
        for input in ["a AND", "a OR", "NOT", "a AND NOT", "()", "(NOT)", "a OR )"] {
            let err = parse_err(input);
            assert!(
                err.message().contains("expected a term"),
                "{input}: {}",
                err.message()
            );
        }
    }

    #[test]
    fn dangling_open_paren() {
        let err = parse_err("a AND (");
        assert!(err.message().contains("expected a term after '('"));
    }

    #[test]
    fn empty_phrase_error() {
        let err = parse_err("a OR \"  \"");
        assert!(err.message().contains("empty phrase"));
        assert_eq!(err.position(), Some(5));
    }

    #[test]
    fn nesting_depth_tracks_input() {
        let input = format!("{}x{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(parse(&input).unwrap(), term("x"));

        let input = format!("{}x", "NOT ".repeat(50));
        assert_eq!(parse(&input).unwrap().depth(), 51);
    }

    #[test]
    fn query_string_round_trips() {
        for input in [
            "Hello AND NOT world AND NOT how",
            "((Hello OR World) AND NOT (Bad)) AND (Good)",
            "\"a b\" OR c d",
            "NOT (A OR B)",
        ] {
            let expr = parse(input).unwrap();
            assert_eq!(parse(&expr.to_query_string()).unwrap(), expr, "{input}");
        }
    }
}
