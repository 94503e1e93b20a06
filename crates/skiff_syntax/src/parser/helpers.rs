/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_next`, `peek_at`, `advance`)
/// - Matching / expecting keywords, operators, and punctuation
/// - Separator handling (`check_separator`, `skip_separators`, `expect_statement_break`)
/// - Error construction (`err_expected`)
///
/// Most functions in this file are internal (`fn`) and are documented primarily to aid
/// maintenance and onboarding.
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        self.peek_at(1)
    }

    /// Return the token `n` positions ahead without consuming anything; saturates at `Eof`.
    fn peek_at(&self, n: usize) -> &Token {
        if self.pos + n < self.tokens.len() {
            &self.tokens[self.pos + n]
        } else {
            &self.tokens[self.tokens.len() - 1]
        }
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        &self.tokens[self.pos - 1]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctId) -> bool {
        self.peek().kind.is_punct(id)
    }

    /// Return `true` if the current token is the given operator.
    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    /// Return `true` if the *next* token is the given punctuation.
    fn next_is_punct(&self, id: PunctId) -> bool {
        self.peek_next().kind.is_punct(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> Result<&Token, SyntaxError> {
        if self.check_keyword(id) {
            Ok(self.advance())
        } else {
            Err(self.err_expected(msg, &[self.dialect.keyword_str(id)]))
        }
    }

    fn expect_punct(&mut self, id: PunctId, msg: &str) -> Result<&Token, SyntaxError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.err_expected(msg, &[punctuation::as_str(id)]))
        }
    }

    // ========================================================================
    // Separators
    // ========================================================================

    /// Return `true` if the current token separates statements (`;` or end of line).
    fn check_separator(&self) -> bool {
        self.peek().kind.is_separator()
    }

    fn skip_separators(&mut self) {
        while self.check_separator() {
            self.advance();
        }
    }

    /// Require at least one separator between statements, unless the unit has ended.
    fn expect_statement_break(&mut self) -> Result<(), SyntaxError> {
        if self.is_at_end() {
            return Ok(());
        }
        if !self.check_separator() {
            return Err(self.err_expected("Expected end of statement", &[";", "newline"]));
        }
        self.skip_separators();
        Ok(())
    }

    // ========================================================================
    // Error construction
    // ========================================================================

    /// Build a [`SyntaxError`] at the current token, naming what was found and what would
    /// have been accepted.
    fn err_expected(&self, message: &str, expected: &[&'static str]) -> SyntaxError {
        let tok = self.peek();
        SyntaxError::new(
            format!("{}, found {}", message, tok.kind.describe()),
            expected.to_vec(),
            tok.span,
            tok.line,
            tok.column,
        )
    }

    /// Span from a recorded start offset to the end of the previously consumed token.
    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.prev_end())
    }

    /// End offset of the previously consumed token.
    fn prev_end(&self) -> usize {
        self.tokens[self.pos.saturating_sub(1)].span.end
    }

    fn current_span(&self) -> Span {
        self.peek().span
    }

    // ========================================================================
    // Lookahead classification
    // ========================================================================

    /// Check if the current token can start an expression.
    fn is_at_expr_start(&self) -> bool {
        self.token_starts_expr(&self.peek().kind)
    }

    fn token_starts_expr(&self, kind: &TokenKind) -> bool {
        match kind {
            TokenKind::Ident(_)
            | TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Str(_)
            | TokenKind::Char(_) => true,
            TokenKind::Keyword(KeywordId::True)
            | TokenKind::Keyword(KeywordId::False)
            | TokenKind::Keyword(KeywordId::Not) => true,
            TokenKind::Operator(OperatorId::Minus) => true,
            // `<` opens an object literal (R3) or an array literal (R1/R2).
            TokenKind::Operator(OperatorId::Lt) => {
                self.dialect.object_literals || self.dialect.array_literal == DelimPair::Angle
            }
            TokenKind::Punct(PunctId::LParen) | TokenKind::Punct(PunctId::LBrace) => true,
            TokenKind::Punct(PunctId::LBracket) => self.dialect.array_literal == DelimPair::Square,
            _ => false,
        }
    }

    /// Decide whether a `|` at the current position opens a call argument list.
    ///
    /// The pipe is both the opening and the closing delimiter, so inside an argument list a
    /// bare `ident |` is ambiguous. The rule: it opens a nested call iff the token after the
    /// pipe can begin an expression or is itself a `|` (an empty-argument call). Otherwise it
    /// closes the enclosing list.
    fn at_call_pipe(&self) -> bool {
        self.check_punct(PunctId::Pipe)
            && (self.next_is_punct(PunctId::Pipe) || self.token_starts_expr(&self.peek_next().kind))
    }
}
