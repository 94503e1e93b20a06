//! Shareable metadata for `skiff_core::lang` registries.
//!
//! The `skiff_core::lang` module is a set of **registry-first** vocabularies: keywords,
//! operators, punctuation, builtin types. This submodule provides the small, dependency-free
//! metadata types reused across all of them.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives
//!   in the lexer/parser.

/// Identify the grammar revision that introduced a vocabulary item.
///
/// Skiff's grammar exists in three progressively richer revisions. The frontend implements one
/// canonical grammar (the richest, [`Revision::R3`]) and expresses the earlier revisions as
/// configuration — see [`crate::lang::dialect`].
///
/// ## Examples
/// ```rust
/// use skiff_core::lang::registry::Revision;
///
/// assert!(Revision::R1 < Revision::R3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Revision {
    /// First public grammar: angle-bracket arrays, no object literals, single-line type bodies.
    R1,
    /// Renamed keyword set; otherwise R1-shaped.
    R2,
    /// Current grammar: square-bracket arrays, object/typed-object literals, multi-line
    /// struct/enum bodies. This is the canonical revision the parser targets.
    R3,
}

/// Describe the lifecycle status of a vocabulary item.
///
/// Intended for docs/tooling (e.g. to warn on deprecated spellings), not for feature-gating
/// by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}
