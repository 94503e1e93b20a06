/// Declaration parsing methods.
///
/// This chunk parses `import`, `name :: ...` function/constant declarations, and
/// struct/enum declarations with their single-line and multi-line bodies.
///
/// ## Notes
/// - `name ::` is resolved by one token of lookahead after the `::`: a `|` starts a function,
///   anything else is a constant initializer.
/// - Single-line struct/enum bodies use `;` as the only in-body separator and end at the
///   first end-of-line token; multi-line bodies are entered when a separator directly follows
///   the `:` and run to a `$`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Imports
    // ========================================================================

    fn import_stmt(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Import, "Expected 'import'")?;
        let path = self.string_literal()?;
        Ok(Statement::Import(ImportStmt { path }))
    }

    // ========================================================================
    // Functions and constants
    // ========================================================================

    /// Parse `name :: |params| ret? : body $` or `name :: expr`.
    fn function_or_constant(&mut self) -> Result<Statement, SyntaxError> {
        let name = self.identifier()?;
        self.expect_punct(PunctId::ColonColon, "Expected '::' after declaration name")?;

        if !self.check_punct(PunctId::Pipe) {
            let value = self.expression()?;
            return Ok(Statement::Constant(ConstantDecl { name, value }));
        }

        self.advance(); // opening '|'
        let mut params = Vec::new();
        if !self.check_punct(PunctId::Pipe) {
            loop {
                let start = self.current_span().start;
                let pname = self.identifier()?;
                self.expect_punct(PunctId::Colon, "Expected ':' after parameter name")?;
                let ty = self.type_expr()?;
                params.push(Spanned::new(Param { name: pname, ty }, self.span_from(start)));
                if !self.match_punct(PunctId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctId::Pipe, "Expected '|' after parameters")?;

        let mut return_types = Vec::new();
        if !self.check_punct(PunctId::Colon) {
            loop {
                return_types.push(self.type_expr()?);
                if !self.match_punct(PunctId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctId::Colon, "Expected ':' before function body")?;

        let body = self.block(BlockCtx::Plain)?;
        self.expect_punct(PunctId::Terminator, "Expected '$' to close function body")?;

        Ok(Statement::Function(FunctionDecl {
            name,
            params,
            return_types,
            body,
        }))
    }

    // ========================================================================
    // Structs
    // ========================================================================

    fn struct_decl(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Struct, "Expected 'struct'")?;
        let name = if matches!(self.peek().kind, TokenKind::Ident(_)) {
            Some(self.identifier()?)
        } else {
            None
        };
        self.expect_punct(PunctId::Colon, "Expected ':' after struct header")?;

        let fields = if self.check_separator() {
            if !self.dialect.multiline_type_bodies {
                return Err(self.err_expected(
                    "Struct bodies are single-line in this grammar revision",
                    &["identifier", "type"],
                ));
            }
            let fields = self.struct_fields_multiline()?;
            self.expect_punct(PunctId::Terminator, "Expected '$' to close struct body")?;
            fields
        } else {
            self.struct_fields_oneline()?
        };

        Ok(Statement::Struct(StructDecl { name, fields }))
    }

    /// Single-line struct body: `;`-separated fields, ends at end of line. A nested
    /// `type Name: ...` group is greedy — it owns every field to the end of the body.
    fn struct_fields_oneline(&mut self) -> Result<Vec<Spanned<StructField>>, SyntaxError> {
        let mut fields = Vec::new();
        loop {
            let start = self.current_span().start;
            if self.match_keyword(KeywordId::Type) {
                let name = self.identifier()?;
                self.expect_punct(PunctId::Colon, "Expected ':' after nested struct name")?;
                let inner = self.struct_fields_oneline()?;
                fields.push(Spanned::new(
                    StructField::Nested(NestedStruct { name, fields: inner }),
                    self.span_from(start),
                ));
                return Ok(fields);
            }

            let name = self.identifier()?;
            self.expect_punct(PunctId::Colon, "Expected ':' after field name")?;
            let ty = self.type_expr()?;
            fields.push(Spanned::new(
                StructField::Field(FieldDef { name, ty, default: None }),
                self.span_from(start),
            ));

            if !self.match_punct(PunctId::Semicolon) {
                break;
            }
            // Tolerate a trailing `;` before the end of the line.
            if !(matches!(self.peek().kind, TokenKind::Ident(_)) || self.check_keyword(KeywordId::Type)) {
                break;
            }
        }
        Ok(fields)
    }

    /// Multi-line struct body: separator-separated fields up to the enclosing `$`. A nested
    /// `type Name:` group has no end marker of its own — it owns every field up to that `$`.
    fn struct_fields_multiline(&mut self) -> Result<Vec<Spanned<StructField>>, SyntaxError> {
        let mut fields = Vec::new();
        self.skip_separators();
        while !self.check_punct(PunctId::Terminator) && !self.is_at_end() {
            let start = self.current_span().start;
            if self.match_keyword(KeywordId::Type) {
                let name = self.identifier()?;
                self.expect_punct(PunctId::Colon, "Expected ':' after nested struct name")?;
                self.skip_separators();
                let inner = self.struct_fields_multiline()?;
                fields.push(Spanned::new(
                    StructField::Nested(NestedStruct { name, fields: inner }),
                    self.span_from(start),
                ));
                return Ok(fields);
            }

            fields.push(self.struct_field_with_default()?);

            if self.check_punct(PunctId::Terminator) {
                break;
            }
            if !self.check_separator() {
                return Err(self.err_expected("Expected end of field", &[";", "newline", "$"]));
            }
            self.skip_separators();
        }
        Ok(fields)
    }

    /// One multi-line field: `name:type`, optionally preceded by a default expression
    /// (`10 x:int`). A leading `ident :` is always the field itself, never a default.
    fn struct_field_with_default(&mut self) -> Result<Spanned<StructField>, SyntaxError> {
        let start = self.current_span().start;
        let default = if matches!(self.peek().kind, TokenKind::Ident(_)) && self.next_is_punct(PunctId::Colon) {
            None
        } else {
            Some(self.expression()?)
        };
        let name = self.identifier()?;
        self.expect_punct(PunctId::Colon, "Expected ':' after field name")?;
        let ty = self.type_expr()?;
        Ok(Spanned::new(
            StructField::Field(FieldDef { name, ty, default }),
            self.span_from(start),
        ))
    }

    // ========================================================================
    // Enums
    // ========================================================================

    fn enum_decl(&mut self) -> Result<Statement, SyntaxError> {
        self.expect_keyword(KeywordId::Enum, "Expected 'enum'")?;
        let name = self.identifier()?;
        self.expect_punct(PunctId::Colon, "Expected ':' after enum name")?;

        let members = if self.check_separator() {
            if !self.dialect.multiline_type_bodies {
                return Err(self.err_expected(
                    "Enum bodies are single-line in this grammar revision",
                    &["identifier", "number"],
                ));
            }
            let members = self.enum_members_multiline()?;
            self.expect_punct(PunctId::Terminator, "Expected '$' to close enum body")?;
            members
        } else {
            self.enum_members_oneline()?
        };

        Ok(Statement::Enum(EnumDecl { name, members }))
    }

    fn enum_members_oneline(&mut self) -> Result<Vec<Spanned<EnumMember>>, SyntaxError> {
        let mut members = vec![self.enum_member()?];
        while self.match_punct(PunctId::Semicolon) {
            // Tolerate a trailing `;` before the end of the line.
            if !(matches!(self.peek().kind, TokenKind::Ident(_) | TokenKind::Int(_))) {
                break;
            }
            members.push(self.enum_member()?);
        }
        Ok(members)
    }

    fn enum_members_multiline(&mut self) -> Result<Vec<Spanned<EnumMember>>, SyntaxError> {
        let mut members = Vec::new();
        self.skip_separators();
        while !self.check_punct(PunctId::Terminator) && !self.is_at_end() {
            members.push(self.enum_member()?);
            if self.check_punct(PunctId::Terminator) {
                break;
            }
            if !self.check_separator() {
                return Err(self.err_expected("Expected end of enum member", &[";", "newline", "$"]));
            }
            self.skip_separators();
        }
        Ok(members)
    }

    /// One member: `name` or `<value> name` (the explicit value precedes the name).
    fn enum_member(&mut self) -> Result<Spanned<EnumMember>, SyntaxError> {
        let start = self.current_span().start;
        let value = if let TokenKind::Int(n) = self.peek().kind {
            self.advance();
            Some(n)
        } else {
            None
        };
        let name = self.identifier()?;
        Ok(Spanned::new(EnumMember { name, value }, self.span_from(start)))
    }
}
