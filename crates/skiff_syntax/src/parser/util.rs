/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into “decl”,
/// “stmt”, or “expr” (identifier parsing, string literal handling, type annotations).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self) -> Result<Ident, SyntaxError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.err_expected("Expected identifier", &["identifier"])),
        }
    }

    fn identifier_spanned(&mut self) -> Result<Spanned<Ident>, SyntaxError> {
        match &self.peek().kind {
            TokenKind::Ident(name) => {
                let span = self.current_span();
                let name = name.clone();
                self.advance();
                Ok(Spanned::new(name, span))
            }
            _ => Err(self.err_expected("Expected identifier", &["identifier"])),
        }
    }

    fn string_literal(&mut self) -> Result<String, SyntaxError> {
        match &self.peek().kind {
            TokenKind::Str(s) => {
                let s = s.clone();
                self.advance();
                Ok(s)
            }
            _ => Err(self.err_expected("Expected string literal", &["string"])),
        }
    }

    /// Parse a type annotation: a builtin type keyword or a user-defined type name.
    fn type_expr(&mut self) -> Result<Spanned<Type>, SyntaxError> {
        let span = self.current_span();
        if let Some(k) = self.peek().keyword_id() {
            if let Some(ty) = types::from_keyword(k) {
                self.advance();
                return Ok(Spanned::new(Type::Builtin(ty), span));
            }
        }
        if let TokenKind::Ident(name) = &self.peek().kind {
            let name = name.clone();
            self.advance();
            return Ok(Spanned::new(Type::Named(name), span));
        }
        Err(self.err_expected("Expected type", &["type name", "identifier"]))
    }
}
