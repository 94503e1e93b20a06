//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use skiff_core::lang::keywords::KeywordId;
use skiff_core::lang::operators::OperatorId;
use skiff_core::lang::punctuation::PunctId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punct_id(&self) -> Option<PunctId> {
        match self {
            TokenKind::Punct(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punct(&self, id: PunctId) -> bool {
        matches!(self, TokenKind::Punct(p) if *p == id)
    }

    /// Return `true` if this token separates statements (`;` or end of line).
    pub fn is_separator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Punct(PunctId::Semicolon))
    }

    /// A short human-readable description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(id) => format!("'{}'", skiff_core::lang::keywords::as_str(*id)),
            TokenKind::Operator(id) => format!("'{}'", skiff_core::lang::operators::as_str(*id)),
            TokenKind::Punct(id) => format!("'{}'", skiff_core::lang::punctuation::as_str(*id)),
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Int(v) => format!("number {}", v),
            TokenKind::Float(v) => format!("number {}", v),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::Char(_) => "char literal".to_string(),
            TokenKind::Newline => "end of line".to_string(),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punct_id()`.
    pub fn punct_id(&self) -> Option<PunctId> {
        self.kind.punct_id()
    }
}
