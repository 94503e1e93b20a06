//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the
//! lexer/parser: delimiters, separators, access markers, and the block terminator.
//!
//! ## Notes
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//! - Several punctuation tokens are deliberately **overloaded** by the grammar: `|...|`
//!   delimits both call arguments and function parameters; `{...}` is both the dict literal
//!   and the dict-index operator; `$` closes every multi-line block. The parser disambiguates
//!   purely by context — there is exactly one token kind per spelling.
//! - `<` and `>` are *not* listed here: they lex as comparison operators and the parser
//!   re-reads them as object-literal delimiters where the dialect allows.
//!
//! ## Examples
//! ```rust
//! use skiff_core::lang::punctuation::{self, PunctId};
//!
//! assert_eq!(punctuation::from_str("::"), Some(PunctId::ColonColon));
//! assert_eq!(punctuation::as_str(PunctId::Terminator), "$");
//! ```

use super::registry::{Revision, Stability};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctCategory {
    /// Brackets, braces, pipes.
    Delimiter,
    /// Separators like `,`, `:`, `;`.
    Separator,
    /// Access markers like `.` and `::`.
    Access,
    /// Structural markers (`$`).
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctId {
    // Separators
    Comma,
    Colon,
    Semicolon,

    // Access / declaration marker
    Dot,
    ColonColon,

    // Delimiters
    Pipe,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Block terminator
    Terminator,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctInfo {
    pub id: PunctId,
    pub canonical: &'static str,
    pub category: PunctCategory,
    pub since: Revision,
    pub stability: Stability,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctInfo] = &[
    info(PunctId::Comma, ",", PunctCategory::Separator),
    info(PunctId::Colon, ":", PunctCategory::Separator),
    info(PunctId::Semicolon, ";", PunctCategory::Separator),
    info(PunctId::Dot, ".", PunctCategory::Access),
    info(PunctId::ColonColon, "::", PunctCategory::Access),
    info(PunctId::Pipe, "|", PunctCategory::Delimiter),
    info(PunctId::LParen, "(", PunctCategory::Delimiter),
    info(PunctId::RParen, ")", PunctCategory::Delimiter),
    info(PunctId::LBracket, "[", PunctCategory::Delimiter),
    info(PunctId::RBracket, "]", PunctCategory::Delimiter),
    info(PunctId::LBrace, "{", PunctCategory::Delimiter),
    info(PunctId::RBrace, "}", PunctCategory::Delimiter),
    info(PunctId::Terminator, "$", PunctCategory::Marker),
];

/// Canonical spelling.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn as_str(id: PunctId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctId) -> &'static PunctInfo {
    PUNCTUATION.iter().find(|p| p.id == id).expect("punctuation info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: PunctId, canonical: &'static str, category: PunctCategory) -> PunctInfo {
    PunctInfo {
        id,
        canonical,
        category,
        since: Revision::R1,
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_round_trips() {
        for p in PUNCTUATION {
            assert_eq!(from_str(p.canonical), Some(p.id));
            assert_eq!(as_str(p.id), p.canonical);
        }
    }
}
