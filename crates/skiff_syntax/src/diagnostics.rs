//! Position-carrying error values for the Skiff frontend.
//!
//! Two error families exist: [`LexError`] (invalid character, unterminated string/char
//! literal, malformed number) and [`SyntaxError`] (unexpected token, missing block
//! terminator, unbalanced bracket, exhausted loop-shape lookahead). Both carry the exact
//! source position and, for syntax errors, the set of alternatives that would have been
//! accepted.
//!
//! ## Notes
//! - The first violation aborts the parse. There is no recovery, partial tree, or multi-error
//!   collection in this core; callers own presentation and retry.
//! - Errors are `miette` diagnostics: attach the source with
//!   `miette::Report::new(err).with_source_code(src)` to get annotated output.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end.saturating_sub(span.start)).into()
    }
}

/// Tokenization failure.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(skiff::syntax::lex))]
pub struct LexError {
    pub message: String,
    /// 1-based source position of the offending input.
    pub line: u32,
    pub column: u32,
    #[label("here")]
    pub at: SourceSpan,
}

impl LexError {
    pub fn new(message: impl Into<String>, span: Span, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
            at: span.into(),
        }
    }
}

/// Parse failure: the token stream diverged from the grammar.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(skiff::syntax::parse))]
pub struct SyntaxError {
    pub message: String,
    /// Human-readable descriptions of the token kinds that were acceptable here.
    pub expected: Vec<&'static str>,
    /// 1-based source position of the unexpected token.
    pub line: u32,
    pub column: u32,
    #[label("unexpected")]
    pub at: SourceSpan,
    #[help]
    pub help: Option<String>,
}

impl SyntaxError {
    pub fn new(
        message: impl Into<String>,
        expected: Vec<&'static str>,
        span: Span,
        line: u32,
        column: u32,
    ) -> Self {
        let help = if expected.is_empty() {
            None
        } else {
            Some(format!("expected {}", expected.join(" or ")))
        };
        Self {
            message: message.into(),
            expected,
            line,
            column,
            at: span.into(),
            help,
        }
    }
}

/// Either failure mode, for entrypoints that run the whole pipeline.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ParseError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}
