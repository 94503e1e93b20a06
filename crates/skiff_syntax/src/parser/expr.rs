/// Expression parsing methods.
///
/// This chunk implements the expression grammar using a precedence ladder:
/// ternary → `or` → `and` → comparison → additive → multiplicative → unary → postfix → primary.
///
/// ## Notes
/// - Operator identities are carried by [`TokenKind::Operator`] / [`OperatorId`] rather than
///   string spellings, so word aliases (`plus`, `times`, ...) need no handling here at all.
/// - The postfix chain binds tightest and left-associates: `a.b|x|.c[0]` applies the
///   operations left to right.
/// - `Ident <` is a typed-object literal only when the token after the `<` is `>` or an
///   identifier followed by `:`; otherwise `<` is the comparison operator.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parse a full expression, starting at the ternary level.
    ///
    /// `cond ?? then : else` is right-associative and binds loosest; the consequence re-enters
    /// at this level, so a nested ternary owns its own `:` before the outer one is consumed.
    fn expression(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let condition = self.or_expr()?;

        if self.match_op(OperatorId::Query) {
            let consequence = self.expression()?;
            self.expect_punct(PunctId::Colon, "Expected ':' in ternary expression")?;
            let alternative = self.expression()?;
            let span = condition.span.merge(alternative.span);
            return Ok(Spanned::new(
                Expr::Ternary {
                    condition: Box::new(condition),
                    consequence: Box::new(consequence),
                    alternative: Box::new(alternative),
                },
                span,
            ));
        }

        Ok(condition)
    }

    fn or_expr(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let mut left = self.and_expr()?;
        while self.match_keyword(KeywordId::Or) {
            let right = self.and_expr()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), BinaryOp::Or, Box::new(right)), span);
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let mut left = self.comparison()?;
        while self.match_keyword(KeywordId::And) {
            let right = self.comparison()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), BinaryOp::And, Box::new(right)), span);
        }
        Ok(left)
    }

    fn comparison(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let mut left = self.additive()?;

        loop {
            let op = if self.match_keyword(KeywordId::Is) {
                BinaryOp::Is
            } else if self.angle_depth == 0 && self.match_op(OperatorId::Gt) {
                // Inside `<...>` a bare `>` closes the literal; parenthesize to compare.
                BinaryOp::Gt
            } else if self.match_op(OperatorId::Lt) {
                BinaryOp::Lt
            } else if self.match_op(OperatorId::GtEq) {
                BinaryOp::GtEq
            } else if self.match_op(OperatorId::LtEq) {
                BinaryOp::LtEq
            } else {
                break;
            };

            let right = self.additive()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }

        Ok(left)
    }

    fn additive(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let mut left = self.multiplicative()?;

        loop {
            let op = if self.match_op(OperatorId::Plus) {
                BinaryOp::Add
            } else if self.match_op(OperatorId::Minus) {
                BinaryOp::Sub
            } else {
                break;
            };

            let right = self.multiplicative()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }

        Ok(left)
    }

    fn multiplicative(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let mut left = self.unary()?;

        loop {
            let op = if self.match_op(OperatorId::Star) {
                BinaryOp::Mul
            } else if self.match_op(OperatorId::Slash) {
                BinaryOp::Div
            } else if self.match_op(OperatorId::Percent) {
                BinaryOp::Mod
            } else {
                break;
            };

            let right = self.unary()?;
            let span = left.span.merge(right.span);
            left = Spanned::new(Expr::Binary(Box::new(left), op, Box::new(right)), span);
        }

        Ok(left)
    }

    fn unary(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        if self.check_keyword(KeywordId::Not) {
            let start = self.current_span().start;
            self.advance();
            let operand = self.unary()?;
            let span = Span::new(start, operand.span.end);
            return Ok(Spanned::new(Expr::Unary(UnaryOp::Not, Box::new(operand)), span));
        }
        if self.check_op(OperatorId::Minus) {
            let start = self.current_span().start;
            self.advance();
            let operand = self.unary()?;
            let span = Span::new(start, operand.span.end);
            return Ok(Spanned::new(Expr::Unary(UnaryOp::Neg, Box::new(operand)), span));
        }
        self.postfix()
    }

    // ========================================================================
    // Postfix chain
    // ========================================================================

    fn postfix(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let mut expr = self.primary()?;

        loop {
            if self.match_punct(PunctId::Dot) {
                let name = self.identifier()?;
                if self.at_call_pipe() {
                    let args = self.pipe_args()?;
                    let span = Span::new(expr.span.start, self.prev_end());
                    expr = Spanned::new(Expr::MethodCall(Box::new(expr), name, args), span);
                } else {
                    let span = Span::new(expr.span.start, self.prev_end());
                    expr = Spanned::new(Expr::Member(Box::new(expr), name), span);
                }
            } else if self.check_punct(PunctId::LBracket) {
                self.advance();
                let saved = std::mem::take(&mut self.angle_depth);
                let index = self.expression()?;
                self.angle_depth = saved;
                self.expect_punct(PunctId::RBracket, "Expected ']' after index")?;
                let span = Span::new(expr.span.start, self.prev_end());
                expr = Spanned::new(Expr::Index(Box::new(expr), Box::new(index)), span);
            } else if self.check_punct(PunctId::LBrace) {
                // Dict index: `{` after a bindable expression takes a string-literal key.
                self.advance();
                let key = self.string_literal()?;
                self.expect_punct(PunctId::RBrace, "Expected '}' after dict key")?;
                let span = Span::new(expr.span.start, self.prev_end());
                expr = Spanned::new(Expr::DictIndex(Box::new(expr), key), span);
            } else if matches!(expr.node, Expr::Ident(_)) && self.at_call_pipe() {
                // A bare identifier followed by `|` is always a call.
                let args = self.pipe_args()?;
                let span = Span::new(expr.span.start, self.prev_end());
                let Expr::Ident(name) = expr.node else { unreachable!() };
                expr = Spanned::new(Expr::Call(name, args), span);
            } else {
                break;
            }
        }

        Ok(expr)
    }

    /// Parse a `|`-delimited argument list (both pipes consumed).
    fn pipe_args(&mut self) -> Result<Vec<Spanned<Expr>>, SyntaxError> {
        self.expect_punct(PunctId::Pipe, "Expected '|' to open arguments")?;
        let saved = std::mem::take(&mut self.angle_depth);
        let mut args = Vec::new();
        if !self.check_punct(PunctId::Pipe) {
            loop {
                args.push(self.expression()?);
                if !self.match_punct(PunctId::Comma) {
                    break;
                }
            }
        }
        self.angle_depth = saved;
        self.expect_punct(PunctId::Pipe, "Expected '|' after arguments")?;
        Ok(args)
    }

    // ========================================================================
    // Primary expressions
    // ========================================================================

    fn primary(&mut self) -> Result<Spanned<Expr>, SyntaxError> {
        let start = self.current_span().start;

        // Parenthesized expression
        if self.match_punct(PunctId::LParen) {
            let saved = std::mem::take(&mut self.angle_depth);
            let inner = self.expression()?;
            self.angle_depth = saved;
            self.expect_punct(PunctId::RParen, "Expected ')' after expression")?;
            return Ok(Spanned::new(inner.node, self.span_from(start)));
        }

        // Array literal (square brackets in R3)
        if self.check_punct(PunctId::LBracket) && self.dialect.array_literal == DelimPair::Square {
            self.advance();
            let saved = std::mem::take(&mut self.angle_depth);
            let elements = self.expr_list_until(|p| p.check_punct(PunctId::RBracket))?;
            self.angle_depth = saved;
            self.expect_punct(PunctId::RBracket, "Expected ']' after array elements")?;
            return Ok(Spanned::new(Expr::Array(elements), self.span_from(start)));
        }

        // Dict literal
        if self.match_punct(PunctId::LBrace) {
            let saved = std::mem::take(&mut self.angle_depth);
            let mut pairs = Vec::new();
            if !self.check_punct(PunctId::RBrace) {
                loop {
                    let key = self.string_literal()?;
                    self.expect_punct(PunctId::Colon, "Expected ':' after dict key")?;
                    let value = self.expression()?;
                    pairs.push(DictPair { key, value });
                    if !self.match_punct(PunctId::Comma) {
                        break;
                    }
                }
            }
            self.angle_depth = saved;
            self.expect_punct(PunctId::RBrace, "Expected '}' after dict entries")?;
            return Ok(Spanned::new(Expr::Dict(pairs), self.span_from(start)));
        }

        // `<...>`: object literal in R3, array literal in the angle-bracket revisions
        if self.check_op(OperatorId::Lt) {
            if self.dialect.object_literals {
                self.advance();
                let pairs = self.object_pairs()?;
                return Ok(Spanned::new(Expr::Object(pairs), self.span_from(start)));
            }
            if self.dialect.array_literal == DelimPair::Angle {
                self.advance();
                self.angle_depth += 1;
                let elements = self.expr_list_until(|p| p.check_op(OperatorId::Gt))?;
                self.angle_depth -= 1;
                if !self.match_op(OperatorId::Gt) {
                    return Err(self.err_expected("Expected '>' after array elements", &[">"]));
                }
                return Ok(Spanned::new(Expr::Array(elements), self.span_from(start)));
            }
        }

        // Typed object literal: `Name<k: v, ...>`. The literal interpretation is tried first
        // (most-specific shape); if it does not complete, the `<` is a comparison operator
        // and the identifier stands alone.
        if self.at_typed_object_start() {
            let checkpoint = self.pos;
            let saved_depth = self.angle_depth;
            match self.typed_object(start) {
                Ok(expr) => return Ok(expr),
                Err(_) => {
                    self.pos = checkpoint;
                    self.angle_depth = saved_depth;
                }
            }
        }

        // Identifier (calls are formed by the postfix chain)
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            return Ok(Spanned::new(Expr::Ident(name), self.span_from(start)));
        }

        // Literals
        if let Some(lit) = self.try_literal() {
            return Ok(Spanned::new(Expr::Literal(lit), self.span_from(start)));
        }

        Err(self.err_expected("Expected expression", &["literal", "identifier", "(", "unary operator"]))
    }

    fn try_literal(&mut self) -> Option<Literal> {
        let lit = match &self.peek().kind {
            TokenKind::Int(n) => Literal::Int(*n),
            TokenKind::Float(f) => Literal::Float(*f),
            TokenKind::Str(s) => Literal::Str(s.clone()),
            TokenKind::Char(c) => Literal::Char(c.clone()),
            TokenKind::Keyword(KeywordId::True) => Literal::Bool(true),
            TokenKind::Keyword(KeywordId::False) => Literal::Bool(false),
            _ => return None,
        };
        self.advance();
        Some(lit)
    }

    fn typed_object(&mut self, start: usize) -> Result<Spanned<Expr>, SyntaxError> {
        let name = self.identifier()?;
        self.advance(); // '<'
        let pairs = self.object_pairs()?;
        Ok(Spanned::new(Expr::TypedObject(name, pairs), self.span_from(start)))
    }

    /// `Ident <` may begin a typed-object literal when the token after the `<` is `>` (empty
    /// literal) or an identifier followed by `:` (first pair). This guard keeps the trial in
    /// `primary` from firing on ordinary comparisons like `a < b + 1`.
    fn at_typed_object_start(&self) -> bool {
        if !self.dialect.object_literals {
            return false;
        }
        if !matches!(self.peek().kind, TokenKind::Ident(_)) || !self.peek_next().kind.is_operator(OperatorId::Lt) {
            return false;
        }
        self.peek_at(2).kind.is_operator(OperatorId::Gt)
            || (matches!(self.peek_at(2).kind, TokenKind::Ident(_)) && self.peek_at(3).kind.is_punct(PunctId::Colon))
    }

    /// Parse `key: value` pairs up to a closing `>` (consumed).
    fn object_pairs(&mut self) -> Result<Vec<ObjectPair>, SyntaxError> {
        let mut pairs = Vec::new();
        self.angle_depth += 1;
        if !self.check_op(OperatorId::Gt) {
            loop {
                let key = self.identifier()?;
                self.expect_punct(PunctId::Colon, "Expected ':' after object key")?;
                let value = self.expression()?;
                pairs.push(ObjectPair { key, value });
                if !self.match_punct(PunctId::Comma) {
                    break;
                }
            }
        }
        self.angle_depth -= 1;
        if !self.match_op(OperatorId::Gt) {
            return Err(self.err_expected("Expected '>' after object entries", &[">"]));
        }
        Ok(pairs)
    }

    /// Parse a possibly empty comma-separated expression list; stops before the closing
    /// token identified by `at_close`.
    fn expr_list_until(
        &mut self,
        at_close: impl Fn(&Self) -> bool,
    ) -> Result<Vec<Spanned<Expr>>, SyntaxError> {
        let mut elements = Vec::new();
        if !at_close(self) {
            loop {
                elements.push(self.expression()?);
                if !self.match_punct(PunctId::Comma) {
                    break;
                }
            }
        }
        Ok(elements)
    }
}
