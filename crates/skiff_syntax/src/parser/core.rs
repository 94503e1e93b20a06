/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a single
///   module while avoiding one “god file”.
/// - The parser is single-pass and aborts on the first syntax violation: there is no error
///   recovery or partial AST in this core.

/// Block context: which tokens may close the current multi-line body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockCtx {
    /// Closed by `$` only (function/loop/when bodies).
    Plain,
    /// Closed by `$`, `anif`, or `else` (if-statement clause bodies).
    IfClause,
}

/// Parser state.
///
/// ## Notes
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
/// - The dialect is consulted for literal bracket roles and feature gates; it never changes
///   mid-parse.
pub struct Parser<'a> {
    tokens: &'a [Token],
    dialect: &'a Dialect,
    pos: usize,
    /// Nesting depth of `<...>` literals. While inside one, a bare `>` closes the literal
    /// instead of acting as the greater-than operator; other delimiters (`(...)`, `[...]`,
    /// `{...}`, `|...|`) reset the depth so comparisons inside them work normally.
    angle_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream, using the canonical (R3) dialect.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `skiff_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_dialect(tokens, Dialect::canonical())
    }

    /// Create a new parser for a specific grammar revision.
    pub fn with_dialect(tokens: &'a [Token], dialect: &'a Dialect) -> Self {
        Self {
            tokens,
            dialect,
            pos: 0,
            angle_depth: 0,
        }
    }

    /// Parse the entire token stream into a [`Program`].
    ///
    /// ## Errors
    /// Returns a [`SyntaxError`] for the first grammar violation. Parsing is not resumable;
    /// the error identifies the offending token, its position, and the accepted alternatives.
    pub fn parse(mut self) -> Result<Program, SyntaxError> {
        self.skip_separators();

        // Optional `program <name>` header. Descriptive metadata only; nothing downstream in
        // the parser depends on it.
        let name = if self.match_keyword(KeywordId::Program) {
            let name = self.identifier()?;
            self.expect_statement_break()?;
            Some(name)
        } else {
            None
        };

        let mut statements = Vec::new();
        self.skip_separators();
        while !self.is_at_end() {
            statements.push(self.statement()?);
            self.expect_statement_break()?;
        }

        Ok(Program { name, statements })
    }
}
