/// Public parsing entrypoints.

/// Parse a token stream into an AST [`Program`] using the canonical (R3) dialect.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `skiff_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`SyntaxError`]; parsing aborts immediately, with no partial tree.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Parse a token stream under a specific grammar revision.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), revision = ?dialect.revision))]
pub fn parse_with_dialect(tokens: &[Token], dialect: &Dialect) -> Result<Program, SyntaxError> {
    Parser::with_dialect(tokens, dialect).parse()
}

/// Lex and parse one source unit in a single call.
///
/// ## Errors
/// Returns a [`ParseError`] wrapping whichever stage failed first.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = crate::lexer::lex(source)?;
    Ok(parse(&tokens)?)
}

/// Lex and parse one source unit under a specific grammar revision.
pub fn parse_source_with_dialect(source: &str, dialect: &Dialect) -> Result<Program, ParseError> {
    let tokens = crate::lexer::lex_with_dialect(source, dialect)?;
    Ok(parse_with_dialect(&tokens, dialect)?)
}
