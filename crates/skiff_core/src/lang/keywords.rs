//! Define the reserved keyword vocabulary for the Skiff language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories, and the grammar revision each word entered the language in.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//! - Some reserved words are also word operators (`and`, `or`, `is`, `not`). If you need
//!   operator precedence/fixity, use [`crate::lang::operators`].
//! - Keyword *respellings* in earlier grammar revisions are not stored here; they live in
//!   [`crate::lang::dialect`], which resolves spellings through this registry.
//!
//! ## Examples
//! ```rust
//! use skiff_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("anif"), Some(KeywordId::Anif));
//! assert_eq!(keywords::as_str(KeywordId::Anif), "anif");
//! assert_eq!(keywords::from_str("Anif"), None); // case-sensitive
//! ```

use super::registry::{Revision, Stability};

/// Stable identifier for every reserved keyword.
///
/// The canonical spelling is accessible via [`as_str`]; spelling lookup goes through
/// [`from_str`] (canonical grammar) or [`crate::lang::dialect::Dialect::keyword_id`]
/// (revision-aware).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Module structure
    Program,
    Import,

    // Declarations
    Struct,
    Type,
    Enum,

    // Control flow / statements
    Switch,
    On,
    Loop,
    To,
    From,
    Till,
    In,
    Do,
    When,
    Then,
    If,
    Anif,
    Else,
    Return,
    Halt,
    Next,

    // Word operators
    And,
    Or,
    Is,
    Not,

    // Literals
    True,
    False,

    // Builtin type names
    Int,
    Float,
    String,
    Bool,
    Dict,
    Vector2,
    Color,
}

/// High-level grouping for documentation and tooling.
///
/// Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Module,
    Declaration,
    ControlFlow,
    Operator,
    Literal,
    TypeName,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub since: Revision,
    pub stability: Stability,
}

/// Registry of all reserved keywords.
///
/// The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Module structure
    info(KeywordId::Program, "program", KeywordCategory::Module, Revision::R1),
    info(KeywordId::Import, "import", KeywordCategory::Module, Revision::R1),
    // Declarations
    info(KeywordId::Struct, "struct", KeywordCategory::Declaration, Revision::R1),
    info(KeywordId::Type, "type", KeywordCategory::Declaration, Revision::R1),
    info(KeywordId::Enum, "enum", KeywordCategory::Declaration, Revision::R1),
    // Control flow / statements
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::On, "on", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::Loop, "loop", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::To, "to", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::From, "from", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::Till, "till", KeywordCategory::ControlFlow, Revision::R2),
    info(KeywordId::In, "in", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::When, "when", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::Then, "then", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::Anif, "anif", KeywordCategory::ControlFlow, Revision::R2),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::Halt, "halt", KeywordCategory::ControlFlow, Revision::R1),
    info(KeywordId::Next, "next", KeywordCategory::ControlFlow, Revision::R1),
    // Word operators
    info(KeywordId::And, "and", KeywordCategory::Operator, Revision::R1),
    info(KeywordId::Or, "or", KeywordCategory::Operator, Revision::R1),
    info(KeywordId::Is, "is", KeywordCategory::Operator, Revision::R1),
    info(KeywordId::Not, "not", KeywordCategory::Operator, Revision::R1),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal, Revision::R1),
    info(KeywordId::False, "false", KeywordCategory::Literal, Revision::R1),
    // Builtin type names
    info(KeywordId::Int, "int", KeywordCategory::TypeName, Revision::R1),
    info(KeywordId::Float, "float", KeywordCategory::TypeName, Revision::R1),
    info(KeywordId::String, "string", KeywordCategory::TypeName, Revision::R1),
    info(KeywordId::Bool, "bool", KeywordCategory::TypeName, Revision::R1),
    info(KeywordId::Dict, "dict", KeywordCategory::TypeName, Revision::R2),
    info(KeywordId::Vector2, "vector2", KeywordCategory::TypeName, Revision::R3),
    info(KeywordId::Color, "color", KeywordCategory::TypeName, Revision::R3),
];

/// Canonical spelling.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by canonical spelling.
///
/// Matching is **case-sensitive**. Earlier-revision respellings are resolved by
/// [`crate::lang::dialect::Dialect::keyword_id`], not here.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return `true` if the keyword names a builtin type (`int`, `float`, ...).
pub fn is_type_name(id: KeywordId) -> bool {
    category(id) == KeywordCategory::TypeName
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    since: Revision,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        since,
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_round_trips() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id), "spelling {:?}", k.canonical);
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn spellings_are_unique() {
        for (i, a) in KEYWORDS.iter().enumerate() {
            for b in &KEYWORDS[i + 1..] {
                assert_ne!(a.canonical, b.canonical, "duplicate spelling {:?}", a.canonical);
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("loop"), Some(KeywordId::Loop));
        assert_eq!(from_str("Loop"), None);
        assert_eq!(from_str("LOOP"), None);
    }
}
