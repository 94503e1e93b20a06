//! Lexer for the Skiff language.
//!
//! Handles tokenization including:
//! - Keywords and identifiers (reserved words always win — the maximal-keyword rule)
//! - Word-operator aliases (`plus`, `times`, `greater_than`, ...) resolved to operator tokens
//! - Numeric, string, and char literals
//! - `?` line comments vs the `??` ternary operator
//! - Newline tokens (statement separators for the parser), suppressed inside `(...)`,
//!   `[...]`, and `{...}` so bracketed constructs can span lines
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::ast::Span;
use crate::diagnostics::LexError;
use skiff_core::lang::dialect::Dialect;
use skiff_core::lang::operators::{self, OperatorId};
use skiff_core::lang::punctuation::PunctId;

/// Lexer for Skiff source code.
///
/// Converts source text into a stream of tokens. Keyword spellings are resolved through the
/// active [`Dialect`], so earlier grammar revisions tokenize with the same scanner.
///
/// The first invalid input aborts the scan with a [`LexError`]; there is no error collection.
pub struct Lexer<'a> {
    source: &'a str,
    dialect: &'a Dialect,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: u32,
    column: u32,
    /// Bracket depth for implicit line continuation (parens, brackets, braces).
    bracket_depth: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer for the canonical (R3) dialect.
    pub fn new(source: &'a str) -> Self {
        Self::with_dialect(source, Dialect::canonical())
    }

    /// Create a lexer for a specific grammar revision.
    pub fn with_dialect(source: &'a str, dialect: &'a Dialect) -> Self {
        Self {
            source,
            dialect,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            bracket_depth: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source text.
    ///
    /// Returns the token stream on success; the stream always ends with an `Eof` token.
    ///
    /// ## Errors
    /// Fails with a [`LexError`] at the first invalid character, unterminated string/char
    /// literal, or malformed number.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }

        let (line, column) = (self.line, self.column);
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
            line,
            column,
        ));
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexError> {
        let start = self.current_pos;
        let (line, column) = (self.line, self.column);

        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            // Whitespace (newlines are tokens, handled below)
            ' ' | '\t' | '\r' => {}

            '\n' => {
                // Implicit line continuation: no separator tokens inside brackets
                if self.bracket_depth == 0 {
                    self.add_token(TokenKind::Newline, start, line, column);
                }
            }

            // `??` is the ternary opener; a lone `?` introduces a line comment
            '?' => {
                if self.match_char('?') {
                    self.add_op(OperatorId::Query, start, line, column);
                } else {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
            }

            // Punctuation
            ':' => {
                if self.match_char(':') {
                    self.add_punct(PunctId::ColonColon, start, line, column);
                } else {
                    self.add_punct(PunctId::Colon, start, line, column);
                }
            }
            ';' => self.add_punct(PunctId::Semicolon, start, line, column),
            ',' => self.add_punct(PunctId::Comma, start, line, column),
            '.' => self.add_punct(PunctId::Dot, start, line, column),
            '|' => self.add_punct(PunctId::Pipe, start, line, column),
            '$' => self.add_punct(PunctId::Terminator, start, line, column),
            '(' => self.open_bracket(PunctId::LParen, start, line, column),
            ')' => self.close_bracket(PunctId::RParen, start, line, column),
            '[' => self.open_bracket(PunctId::LBracket, start, line, column),
            ']' => self.close_bracket(PunctId::RBracket, start, line, column),
            '{' => self.open_bracket(PunctId::LBrace, start, line, column),
            '}' => self.close_bracket(PunctId::RBrace, start, line, column),

            // Operators
            '+' => self.add_op(OperatorId::Plus, start, line, column),
            '-' => self.add_op(OperatorId::Minus, start, line, column),
            '*' => self.add_op(OperatorId::Star, start, line, column),
            '/' => self.add_op(OperatorId::Slash, start, line, column),
            '%' => self.add_op(OperatorId::Percent, start, line, column),
            '<' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::LtEq, start, line, column);
                } else {
                    self.add_op(OperatorId::Lt, start, line, column);
                }
            }
            '>' => {
                if self.match_char('=') {
                    self.add_op(OperatorId::GtEq, start, line, column);
                } else {
                    self.add_op(OperatorId::Gt, start, line, column);
                }
            }

            // Literals
            '"' => self.scan_string(start, line, column)?,
            '\'' => self.scan_char(start, line, column)?,
            '0'..='9' => self.scan_number(start, line, column)?,

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start, line, column),

            _ => {
                return Err(LexError::new(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                    line,
                    column,
                ));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize, line: u32, column: u32) {
        self.tokens
            .push(Token::new(kind, Span::new(start, self.current_pos), line, column));
    }

    fn add_op(&mut self, id: OperatorId, start: usize, line: u32, column: u32) {
        self.add_token(TokenKind::Operator(id), start, line, column);
    }

    fn add_punct(&mut self, id: PunctId, start: usize, line: u32, column: u32) {
        self.add_token(TokenKind::Punct(id), start, line, column);
    }

    /// Emit a bracket token and track depth for newline suppression.
    fn open_bracket(&mut self, kind: PunctId, start: usize, line: u32, column: u32) {
        self.bracket_depth += 1;
        self.add_punct(kind, start, line, column);
    }

    /// Emit a closing bracket token. Unbalanced closers are left for the parser to reject so
    /// the error carries grammar context, not just "unmatched bracket".
    fn close_bracket(&mut self, kind: PunctId, start: usize, line: u32, column: u32) {
        self.bracket_depth = self.bracket_depth.saturating_sub(1);
        self.add_punct(kind, start, line, column);
    }

    // ========================================================================
    // Literal scanning
    // ========================================================================

    /// Scan a `"`-delimited string. Backslash escapes are carried through verbatim; only the
    /// delimiter handling cares about them here.
    fn scan_string(&mut self, start: usize, line: u32, column: u32) -> Result<(), LexError> {
        loop {
            match self.advance() {
                None => {
                    return Err(LexError::new(
                        "Unterminated string literal",
                        Span::new(start, self.current_pos),
                        line,
                        column,
                    ));
                }
                Some('"') => break,
                Some('\\') => {
                    if self.advance().is_none() {
                        return Err(LexError::new(
                            "Unterminated string literal",
                            Span::new(start, self.current_pos),
                            line,
                            column,
                        ));
                    }
                }
                Some(_) => {}
            }
        }
        let content = self.source[start + 1..self.current_pos - 1].to_string();
        self.add_token(TokenKind::Str(content), start, line, column);
        Ok(())
    }

    /// Scan a `'`-delimited char literal: exactly one (possibly escaped) character.
    fn scan_char(&mut self, start: usize, line: u32, column: u32) -> Result<(), LexError> {
        let err = |lexer: &Self, message: &str| {
            LexError::new(message, Span::new(start, lexer.current_pos), line, column)
        };

        let content_start = self.current_pos;
        match self.advance() {
            None => return Err(err(self, "Unterminated char literal")),
            Some('\'') => return Err(err(self, "Empty char literal")),
            Some('\n') => return Err(err(self, "Unterminated char literal")),
            Some('\\') => {
                if self.advance().is_none() {
                    return Err(err(self, "Unterminated char literal"));
                }
            }
            Some(_) => {}
        }
        let content_end = self.current_pos;

        match self.advance() {
            Some('\'') => {
                let content = self.source[content_start..content_end].to_string();
                self.add_token(TokenKind::Char(content), start, line, column);
                Ok(())
            }
            Some(_) => Err(err(self, "Char literal must contain exactly one character")),
            None => Err(err(self, "Unterminated char literal")),
        }
    }

    /// Scan an int or float literal. A trailing bare `.` is not part of the number: `12.`
    /// lexes as the int `12` followed by a `.` token.
    fn scan_number(&mut self, start: usize, line: u32, column: u32) -> Result<(), LexError> {
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
        }

        let is_float = self.peek() == Some('.') && matches!(self.peek_next(), Some('0'..='9'));
        if is_float {
            self.advance(); // '.'
            while matches!(self.peek(), Some('0'..='9')) {
                self.advance();
            }
        }

        let lexeme = &self.source[start..self.current_pos];
        if is_float {
            let value: f64 = lexeme.parse().map_err(|_| {
                LexError::new(
                    format!("Malformed float literal '{}'", lexeme),
                    Span::new(start, self.current_pos),
                    line,
                    column,
                )
            })?;
            self.add_token(TokenKind::Float(value), start, line, column);
        } else {
            let value: i64 = lexeme.parse().map_err(|_| {
                LexError::new(
                    format!("Integer literal '{}' is out of range", lexeme),
                    Span::new(start, self.current_pos),
                    line,
                    column,
                )
            })?;
            self.add_token(TokenKind::Int(value), start, line, column);
        }
        Ok(())
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, line: u32, column: u32) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // Reserved words win over identifiers (dialect-aware); word-operator aliases come
        // next so `plus` and `+` reach the parser as the same token kind.
        if let Some(id) = self.dialect.keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start, line, column);
        } else if let Some(id) = operators::word_alias(spelling) {
            self.add_token(TokenKind::Operator(id), start, line, column);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start, line, column);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string with the canonical dialect.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Lex a source string under a specific grammar revision.
#[tracing::instrument(skip_all, fields(source_len = source.len(), revision = ?dialect.revision))]
pub fn lex_with_dialect<'a>(source: &'a str, dialect: &'a Dialect) -> Result<Vec<Token>, LexError> {
    Lexer::with_dialect(source, dialect).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use skiff_core::lang::dialect;
    use skiff_core::lang::keywords::KeywordId;

    #[test]
    fn test_keywords() {
        let tokens = lex("loop till when anif halt next").unwrap();
        assert!(matches!(tokens[0].kind, TokenKind::Keyword(KeywordId::Loop)));
        assert!(matches!(tokens[1].kind, TokenKind::Keyword(KeywordId::Till)));
        assert!(matches!(tokens[2].kind, TokenKind::Keyword(KeywordId::When)));
        assert!(matches!(tokens[3].kind, TokenKind::Keyword(KeywordId::Anif)));
        assert!(matches!(tokens[4].kind, TokenKind::Keyword(KeywordId::Halt)));
        assert!(matches!(tokens[5].kind, TokenKind::Keyword(KeywordId::Next)));
    }

    #[test]
    fn test_keyword_registry_parity() {
        use skiff_core::lang::keywords;

        for k in keywords::KEYWORDS {
            let tokens = lex(k.canonical).unwrap_or_else(|e| panic!("lex({:?}) failed: {e}", k.canonical));
            assert_eq!(tokens.len(), 2, "expected token + EOF for keyword {:?}", k.id);
            assert!(tokens[0].kind.is_keyword(k.id), "keyword {:?} mis-lexed", k.id);
            assert!(matches!(tokens[1].kind, TokenKind::Eof));
        }
    }

    #[test]
    fn test_word_operator_aliases() {
        use skiff_core::lang::operators::OperatorId;

        let tokens = lex("plus minus times div mod greater_than less_than").unwrap();
        let expected = [
            OperatorId::Plus,
            OperatorId::Minus,
            OperatorId::Star,
            OperatorId::Slash,
            OperatorId::Percent,
            OperatorId::Gt,
            OperatorId::Lt,
        ];
        for (tok, id) in tokens.iter().zip(expected) {
            assert!(tok.kind.is_operator(id), "expected {:?}, got {:?}", id, tok.kind);
        }
    }

    #[test]
    fn test_operators_and_punctuation() {
        use skiff_core::lang::operators::OperatorId;

        let tokens = lex(":: : ; | $ ?? <= >= < >").unwrap();
        assert!(tokens[0].kind.is_punct(PunctId::ColonColon));
        assert!(tokens[1].kind.is_punct(PunctId::Colon));
        assert!(tokens[2].kind.is_punct(PunctId::Semicolon));
        assert!(tokens[3].kind.is_punct(PunctId::Pipe));
        assert!(tokens[4].kind.is_punct(PunctId::Terminator));
        assert!(tokens[5].kind.is_operator(OperatorId::Query));
        assert!(tokens[6].kind.is_operator(OperatorId::LtEq));
        assert!(tokens[7].kind.is_operator(OperatorId::GtEq));
        assert!(tokens[8].kind.is_operator(OperatorId::Lt));
        assert!(tokens[9].kind.is_operator(OperatorId::Gt));
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("42 12.5").unwrap();
        assert!(matches!(tokens[0].kind, TokenKind::Int(42)));
        assert!(matches!(tokens[1].kind, TokenKind::Float(f) if (f - 12.5).abs() < 1e-9));
    }

    #[test]
    fn test_trailing_dot_is_not_part_of_number() {
        let tokens = lex("12.").unwrap();
        assert!(matches!(tokens[0].kind, TokenKind::Int(12)));
        assert!(tokens[1].kind.is_punct(PunctId::Dot));
    }

    #[test]
    fn test_strings_keep_escapes_verbatim() {
        let tokens = lex(r#""say \"hi\"\n""#).unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Str(s) if s == r#"say \"hi\"\n"#));
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex("\"oops").unwrap_err();
        assert!(err.message.contains("Unterminated string"));
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn test_char_literals() {
        let tokens = lex(r"'a' '\n'").unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Char(c) if c == "a"));
        assert!(matches!(&tokens[1].kind, TokenKind::Char(c) if c == r"\n"));
    }

    #[test]
    fn test_char_literal_errors() {
        assert!(lex("'ab'").unwrap_err().message.contains("exactly one"));
        assert!(lex("''").unwrap_err().message.contains("Empty"));
        assert!(lex("'a").unwrap_err().message.contains("Unterminated"));
    }

    #[test]
    fn test_comment_vs_ternary() {
        // A lone `?` opens a comment to end of line; `??` is the ternary operator.
        let tokens = lex("x ? this is ignored\ny").unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "x"));
        assert!(matches!(tokens[1].kind, TokenKind::Newline));
        assert!(matches!(&tokens[2].kind, TokenKind::Ident(s) if s == "y"));

        let tokens = lex("a ?? b : c").unwrap();
        assert!(tokens[1].kind.is_operator(skiff_core::lang::operators::OperatorId::Query));
    }

    #[test]
    fn test_newlines_inside_brackets_are_suppressed() {
        let tokens = lex("[1,\n2]").unwrap();
        assert!(!tokens.iter().any(|t| matches!(t.kind, TokenKind::Newline)));

        let tokens = lex("{\"a\": 1,\n\"b\": 2}").unwrap();
        assert!(!tokens.iter().any(|t| matches!(t.kind, TokenKind::Newline)));
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("x @ y").unwrap_err();
        assert!(err.message.contains("Unexpected character"));
        assert_eq!((err.line, err.column), (1, 3));
    }

    #[test]
    fn test_line_and_column_tracking() {
        let tokens = lex("a\n  b").unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        // Newline token sits at the end of line 1.
        assert_eq!(tokens[1].line, 1);
        assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
    }

    #[test]
    fn test_dialect_respellings() {
        let tokens = lex_with_dialect("until till", &dialect::R1).unwrap();
        assert!(tokens[0].kind.is_keyword(KeywordId::Till));
        assert!(matches!(&tokens[1].kind, TokenKind::Ident(s) if s == "till"));

        // Canonical dialect: the reverse.
        let tokens = lex("until till").unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "until"));
        assert!(tokens[1].kind.is_keyword(KeywordId::Till));
    }

    #[test]
    fn test_wildcard_is_an_identifier() {
        let tokens = lex("_").unwrap();
        assert!(matches!(&tokens[0].kind, TokenKind::Ident(s) if s == "_"));
    }
}
