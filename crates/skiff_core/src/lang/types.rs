//! Builtin type-name vocabulary.
//!
//! Skiff reserves a small set of builtin type names (`int`, `float`, `string`, `bool`,
//! `dict`, `vector2`, `color`). They lex as keywords; this registry gives them stable IDs so
//! the parser can map keyword tokens into AST type nodes without stringly-typed checks.
//!
//! ## Notes
//! - This registry is vocabulary only: spellings + metadata, not type-system semantics.

use super::keywords::KeywordId;
use super::registry::{Revision, Stability};

/// Stable identifier for every builtin type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    Int,
    Float,
    Str,
    Bool,
    Dict,
    Vector2,
    Color,
}

/// Metadata for a builtin type name.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub id: TypeId,
    pub canonical: &'static str,
    pub keyword: KeywordId,
    pub since: Revision,
    pub stability: Stability,
}

/// Registry of all builtin type names.
pub const TYPES: &[TypeInfo] = &[
    info(TypeId::Int, "int", KeywordId::Int, Revision::R1),
    info(TypeId::Float, "float", KeywordId::Float, Revision::R1),
    info(TypeId::Str, "string", KeywordId::String, Revision::R1),
    info(TypeId::Bool, "bool", KeywordId::Bool, Revision::R1),
    info(TypeId::Dict, "dict", KeywordId::Dict, Revision::R2),
    info(TypeId::Vector2, "vector2", KeywordId::Vector2, Revision::R3),
    info(TypeId::Color, "color", KeywordId::Color, Revision::R3),
];

/// Canonical spelling.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn as_str(id: TypeId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: TypeId) -> &'static TypeInfo {
    TYPES.iter().find(|t| t.id == id).expect("type info missing")
}

/// Map a keyword token onto a builtin type id, if it names one.
pub fn from_keyword(kw: KeywordId) -> Option<TypeId> {
    TYPES.iter().find(|t| t.keyword == kw).map(|t| t.id)
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<TypeId> {
    TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: TypeId, canonical: &'static str, keyword: KeywordId, since: Revision) -> TypeInfo {
    TypeInfo {
        id,
        canonical,
        keyword,
        since,
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_name_is_a_keyword() {
        use super::super::keywords;
        for t in TYPES {
            assert_eq!(keywords::from_str(t.canonical), Some(t.keyword));
            assert_eq!(from_keyword(t.keyword), Some(t.id));
        }
    }
}
