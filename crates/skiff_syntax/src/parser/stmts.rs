/// Statement parsing methods.
///
/// This chunk owns statement dispatch, the control statements (`if`/`anif`/`else`, `switch`,
/// `loop`, `when`), assignments, and `$`-terminated block parsing.
///
/// ## Notes
/// - Single-line vs multi-line selection: `:` always opens a multi-line body; `then`/`do`
///   open one iff a separator follows, otherwise the body is exactly one call statement.
///   Multi-line bodies tolerate missing leading separators and are closed by one `$`.
/// - Loop header shapes are tried in a fixed order with committed lookahead — once a shape's
///   distinguishing token is consumed there is no backtracking across shapes.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statement dispatch
    // ========================================================================

    fn statement(&mut self) -> Result<Spanned<Statement>, SyntaxError> {
        let start = self.current_span().start;

        let stmt = if let Some(k) = self.peek().keyword_id() {
            match k {
                KeywordId::Import => self.import_stmt()?,
                KeywordId::Struct => self.struct_decl()?,
                KeywordId::Enum => self.enum_decl()?,
                KeywordId::If => self.if_stmt()?,
                KeywordId::Switch => self.switch_stmt()?,
                KeywordId::Loop => self.loop_stmt()?,
                KeywordId::When => self.when_stmt()?,
                KeywordId::Return => self.return_stmt()?,
                KeywordId::Halt => {
                    self.advance();
                    Statement::Halt
                }
                KeywordId::Next => {
                    self.advance();
                    Statement::Next
                }
                _ => return Err(self.err_expected("Expected a statement", STATEMENT_STARTS)),
            }
        } else if matches!(self.peek().kind, TokenKind::Ident(_)) {
            // An identifier-led statement is resolved by one token of lookahead.
            if self.next_is_punct(PunctId::ColonColon) {
                self.function_or_constant()?
            } else if self.next_is_punct(PunctId::Comma) {
                self.tuple_assign()?
            } else if self.next_is_punct(PunctId::Colon) {
                self.variable_decl()?
            } else if self.next_is_punct(PunctId::Pipe) || self.next_is_punct(PunctId::Dot) {
                return self.call_statement();
            } else {
                return Err(self.err_expected(
                    "Expected a declaration, assignment, or call after identifier",
                    &["::", ":", ",", "|", "."],
                ));
            }
        } else {
            return Err(self.err_expected("Expected a statement", STATEMENT_STARTS));
        };

        Ok(Spanned::new(stmt, self.span_from(start)))
    }

    /// Parse an expression statement and require it to be a call or method-call chain — the
    /// only expressions the grammar admits in statement position.
    fn call_statement(&mut self) -> Result<Spanned<Statement>, SyntaxError> {
        let tok_line = self.peek().line;
        let tok_column = self.peek().column;
        let expr = self.expression()?;
        if !matches!(expr.node, Expr::Call(..) | Expr::MethodCall(..)) {
            return Err(SyntaxError::new(
                "Only call and method-call expressions may stand as statements".to_string(),
                vec!["call"],
                expr.span,
                tok_line,
                tok_column,
            ));
        }
        let span = expr.span;
        Ok(Spanned::new(Statement::Expr(expr), span))
    }

    // ========================================================================
    // Blocks
    // ========================================================================

    /// Parse a multi-line statement block. Stops *before* its closing token (`$`, and for
    /// if-clause bodies also `anif`/`else`); the caller consumes the closer so an
    /// unterminated block reports against end of input.
    fn block(&mut self, ctx: BlockCtx) -> Result<Vec<Spanned<Statement>>, SyntaxError> {
        let mut stmts = Vec::new();
        self.skip_separators();
        while !self.at_block_stop(ctx) {
            stmts.push(self.statement()?);
            if self.at_block_stop(ctx) {
                break;
            }
            if !self.check_separator() {
                return Err(self.err_expected("Expected end of statement", &[";", "newline"]));
            }
            self.skip_separators();
        }
        Ok(stmts)
    }

    fn at_block_stop(&self, ctx: BlockCtx) -> bool {
        if self.check_punct(PunctId::Terminator) || self.is_at_end() {
            return true;
        }
        ctx == BlockCtx::IfClause && (self.check_keyword(KeywordId::Anif) || self.check_keyword(KeywordId::Else))
    }

    // ========================================================================
    // Assignments
    // ========================================================================

    fn variable_decl(&mut self) -> Result<Statement, SyntaxError> {
        let name = self.identifier()?;
        self.expect_punct(PunctId::Colon, "Expected ':' after variable name")?;
        let value = self.expression()?;
        Ok(Statement::Variable(VariableDecl { name, value }))
    }

    fn tuple_assign(&mut self) -> Result<Statement, SyntaxError> {
        let mut targets = vec![self.identifier_spanned()?];
        while self.match_punct(PunctId::Comma) {
            targets.push(self.identifier_spanned()?);
        }
        self.expect_punct(PunctId::Colon, "Expected ':' after assignment targets")?;

        let mut values = vec![self.expression()?];
        while self.match_punct(PunctId::Comma) {
            values.push(self.expression()?);
        }
        if values.len() < 2 {
            // The grammar demands a value list; arity *equality* is left to validation.
            return Err(self.err_expected("Expected a list of values in tuple assignment", &[","]));
        }
        Ok(Statement::TupleAssign(TupleAssign { targets, values }))
    }

    // ========================================================================
    // If / anif / else
    // ========================================================================

    fn if_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::If, "Expected 'if'")?;
        let condition = self.expression()?;

        let multiline = if self.match_punct(PunctId::Colon) {
            true
        } else {
            self.expect_keyword(KeywordId::Then, "Expected 'then' or ':' after if condition")?;
            self.check_separator()
        };

        if multiline {
            let consequence = self.block(BlockCtx::IfClause)?;
            let mut alternatives = Vec::new();
            loop {
                if self.match_keyword(KeywordId::Anif) {
                    let cond = self.expression()?;
                    if !self.match_punct(PunctId::Colon) {
                        self.expect_keyword(KeywordId::Then, "Expected 'then' or ':' after anif condition")?;
                    }
                    let body = self.block(BlockCtx::IfClause)?;
                    alternatives.push(IfClause { condition: Some(cond), body });
                } else if self.match_keyword(KeywordId::Else) {
                    if !self.match_punct(PunctId::Colon) {
                        self.match_keyword(KeywordId::Then);
                    }
                    let body = self.block(BlockCtx::IfClause)?;
                    alternatives.push(IfClause { condition: None, body });
                    self.expect_punct(PunctId::Terminator, "Expected '$' to close if statement")?;
                    return Ok(Statement::If(IfStmt { condition, consequence, alternatives }));
                } else {
                    self.expect_punct(PunctId::Terminator, "Expected '$' to close if statement")?;
                    return Ok(Statement::If(IfStmt { condition, consequence, alternatives }));
                }
            }
        }

        // Single-line form: each body is exactly one call statement, no terminator.
        let consequence = vec![self.call_statement()?];
        let mut alternatives = Vec::new();
        while self.match_keyword(KeywordId::Anif) {
            let cond = self.expression()?;
            self.expect_keyword(KeywordId::Then, "Expected 'then' after anif condition")?;
            alternatives.push(IfClause {
                condition: Some(cond),
                body: vec![self.call_statement()?],
            });
        }
        if self.match_keyword(KeywordId::Else) {
            alternatives.push(IfClause {
                condition: None,
                body: vec![self.call_statement()?],
            });
        }
        Ok(Statement::If(IfStmt { condition, consequence, alternatives }))
    }

    // ========================================================================
    // Switch / case
    // ========================================================================

    fn switch_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Switch, "Expected 'switch'")?;
        let subject = self.expression()?;
        if !self.match_punct(PunctId::Colon) && !self.match_keyword(KeywordId::Then) {
            self.expect_keyword(KeywordId::On, "Expected 'then', 'on', or ':' after switch subject")?;
        }

        let mut cases = Vec::new();
        self.skip_separators();
        loop {
            if self.check_punct(PunctId::Terminator) {
                if cases.is_empty() {
                    return Err(self.err_expected("Expected at least one case", &["expression", "_"]));
                }
                self.advance();
                break;
            }
            if self.is_at_end() {
                return Err(self.err_expected("Expected '$' to close switch statement", &["$"]));
            }

            let start = self.current_span().start;
            let patterns = self.case_patterns()?;
            self.expect_punct(PunctId::Colon, "Expected ':' after case pattern")?;
            let body = if self.check_separator() {
                self.case_block()?
            } else {
                vec![self.call_statement()?]
            };
            cases.push(Spanned::new(CaseClause { patterns, body }, self.span_from(start)));
            self.skip_separators();
        }

        Ok(Statement::Switch(SwitchStmt { subject, cases }))
    }

    fn case_patterns(&mut self) -> Result<CasePatterns, SyntaxError> {
        if let TokenKind::Ident(name) = &self.peek().kind {
            if name == "_" && self.next_is_punct(PunctId::Colon) {
                self.advance();
                return Ok(CasePatterns::Wildcard);
            }
        }
        let mut exprs = vec![self.expression()?];
        while self.match_punct(PunctId::Comma) {
            exprs.push(self.expression()?);
        }
        Ok(CasePatterns::Exprs(exprs))
    }

    /// Parse a multi-line case body: statements up to the next case header, the closing `$`,
    /// or end of input.
    fn case_block(&mut self) -> Result<Vec<Spanned<Statement>>, SyntaxError> {
        let mut stmts = Vec::new();
        self.skip_separators();
        loop {
            if self.check_punct(PunctId::Terminator) || self.is_at_end() || self.at_case_header() {
                break;
            }
            stmts.push(self.statement()?);
            if self.check_punct(PunctId::Terminator) {
                break;
            }
            if !self.check_separator() {
                return Err(self.err_expected("Expected end of statement", &[";", "newline"]));
            }
            self.skip_separators();
        }
        Ok(stmts)
    }

    /// Decide whether the current position begins a new case header rather than another
    /// statement of the current case body. The case interpretation is tried first (the
    /// most-specific-shape rule); the trial is fully rewound either way.
    fn at_case_header(&mut self) -> bool {
        let checkpoint = self.pos;
        let saved_depth = self.angle_depth;
        let is_header = self.try_case_header();
        self.pos = checkpoint;
        self.angle_depth = saved_depth;
        is_header
    }

    fn try_case_header(&mut self) -> bool {
        if let TokenKind::Ident(name) = &self.peek().kind {
            if name == "_" && self.next_is_punct(PunctId::Colon) {
                return true;
            }
        }
        loop {
            if self.expression().is_err() {
                return false;
            }
            if self.match_punct(PunctId::Comma) {
                continue;
            }
            break;
        }
        if !self.match_punct(PunctId::Colon) {
            return false;
        }
        // A real case header is followed by a block separator or a single-line call body.
        // `x: 5` fails this test and stays a variable declaration of the current body.
        self.check_separator()
            || (matches!(self.peek().kind, TokenKind::Ident(_))
                && (self.next_is_punct(PunctId::Pipe) || self.next_is_punct(PunctId::Dot)))
    }

    // ========================================================================
    // Loops
    // ========================================================================

    fn loop_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Loop, "Expected 'loop'")?;
        let header = self.loop_header()?;

        let multiline = if self.match_punct(PunctId::Colon) {
            true
        } else {
            self.expect_keyword(KeywordId::Do, "Expected 'do' or ':' after loop header")?;
            self.check_separator()
        };

        let body = if multiline {
            let body = self.block(BlockCtx::Plain)?;
            self.expect_punct(PunctId::Terminator, "Expected '$' to close loop body")?;
            body
        } else {
            vec![self.call_statement()?]
        };

        Ok(Statement::Loop(LoopStmt { header, body }))
    }

    /// Select one of the seven loop header shapes. The checks run in a fixed order and each
    /// consumed token commits to a shape family — there is no backtracking here.
    fn loop_header(&mut self) -> Result<LoopHeader, SyntaxError> {
        // `loop till c`
        if self.match_keyword(KeywordId::Till) {
            return Ok(LoopHeader::Till { condition: self.expression()? });
        }
        // `loop do ...` / `loop: ...`
        if self.check_keyword(KeywordId::Do) || self.check_punct(PunctId::Colon) {
            return Ok(LoopHeader::Forever { counter: None });
        }

        if !matches!(self.peek().kind, TokenKind::Ident(_)) {
            return Err(self.err_expected("Expected a loop header", &["till", "do", ":", "identifier"]));
        }
        let variable = self.identifier()?;

        // `loop k, v in table`
        if self.match_punct(PunctId::Comma) {
            let value = self.identifier()?;
            self.expect_keyword(KeywordId::In, "Expected 'in' after loop variables")?;
            return Ok(LoopHeader::Entries {
                key: variable,
                value,
                iterable: self.expression()?,
            });
        }
        // `loop x in items`
        if self.match_keyword(KeywordId::In) {
            return Ok(LoopHeader::Each {
                element: variable,
                iterable: self.expression()?,
            });
        }
        // `loop i to 10`
        if self.match_keyword(KeywordId::To) {
            return Ok(LoopHeader::RangeTo {
                variable,
                end: self.expression()?,
            });
        }
        // `loop i till c`
        if self.match_keyword(KeywordId::Till) {
            return Ok(LoopHeader::TillWith {
                variable,
                start: None,
                condition: self.expression()?,
            });
        }
        // `loop i:start ...` — counted range, counted till, or counted forever.
        if self.match_punct(PunctId::Colon) {
            let start = self.expression()?;
            if self.match_keyword(KeywordId::To) {
                return Ok(LoopHeader::Range {
                    variable,
                    start,
                    end: self.expression()?,
                });
            }
            if self.match_keyword(KeywordId::Till) {
                return Ok(LoopHeader::TillWith {
                    variable,
                    start: Some(start),
                    condition: self.expression()?,
                });
            }
            return Ok(LoopHeader::Forever {
                counter: Some((variable, start)),
            });
        }

        Err(self.err_expected("Expected a loop header", &[",", "in", "to", "till", ":"]))
    }

    // ========================================================================
    // When
    // ========================================================================

    /// `when flag then body $` — structure only; the guard is evaluated by a later phase.
    fn when_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::When, "Expected 'when'")?;
        let condition_name = self.identifier()?;
        self.expect_keyword(KeywordId::Then, "Expected 'then' after when condition")?;
        let body = self.block(BlockCtx::Plain)?;
        self.expect_punct(PunctId::Terminator, "Expected '$' to close when body")?;
        Ok(Statement::When(WhenStmt { condition_name, body }))
    }

    // ========================================================================
    // Return
    // ========================================================================

    fn return_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Return, "Expected 'return'")?;
        let mut values = Vec::new();
        if self.is_at_expr_start() {
            loop {
                values.push(self.expression()?);
                if !self.match_punct(PunctId::Comma) {
                    break;
                }
            }
        }
        Ok(Statement::Return(ReturnStmt { values }))
    }
}

/// Alternatives named when statement dispatch fails outright.
const STATEMENT_STARTS: &[&str] = &[
    "import", "struct", "enum", "if", "switch", "loop", "when", "return", "halt", "next", "identifier",
];
