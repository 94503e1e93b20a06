//! Token types for the Skiff lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including word operators like `and`)
//! - `Operator(OperatorId)` for symbol operators and their word aliases (`plus`, `times`, ...)
//! - `Punct(PunctId)` for punctuation tokens
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the parser.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.
//! - String/char payloads keep escape sequences verbatim; interpretation is a later phase.

use crate::ast::Span;
use skiff_core::lang::keywords::KeywordId;
use skiff_core::lang::operators::OperatorId;
use skiff_core::lang::punctuation::PunctId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punct(PunctId),

    // ========== Identifiers and literals ==========
    Ident(String),
    Int(i64),
    Float(f64),
    Str(String),
    Char(String),

    // ========== Layout ==========
    /// End of line. The parser treats this as a statement separator equivalent to `;`,
    /// except inside single-line struct/enum bodies where it terminates the body.
    Newline,

    // ========== Special ==========
    Eof,
}

/// A token with its kind, byte span, and 1-based line/column.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
    pub column: u32,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, line: u32, column: u32) -> Self {
        Self { kind, span, line, column }
    }
}
