//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+`, word operators
//! like `and`, and the ternary opener `??`) along with precedence, associativity, and fixity
//! metadata.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Several symbol operators carry **word aliases** (`plus` for `+`, `greater_than` for `>`,
//!   ...). The lexer resolves those through [`word_alias`] so both spellings reach the parser
//!   as the same [`OperatorId`] and parse identically.
//! - Operators spelled with reserved words (`and`, `or`, `is`, `not`) have
//!   [`OperatorInfo::is_keyword_spelling`] set; the lexer emits those as keyword tokens (the
//!   keyword registry wins), and the parser maps them back to operator semantics. Use this
//!   module when you need precedence/fixity.
//!
//! ## Examples
//! ```rust
//! use skiff_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert_eq!(operators::word_alias("plus"), Some(OperatorId::Plus));
//! assert_eq!(operators::info_for(OperatorId::Plus).precedence, 50);
//! ```

use super::registry::{Revision, Stability};

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Comparison
    Gt,
    Lt,
    GtEq,
    LtEq,

    // Ternary opener (`cond ?? then : else`)
    Query,

    // Word operators (keyword spellings)
    And,
    Or,
    Is,
    Not,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spellings` may contain multiple accepted spellings for the same id; the first entry is
///   the canonical one, the rest are word aliases.
/// - `precedence` is a relative ordering where higher binds tighter. The absolute scale is an
///   implementation detail, but must be consistent across the parser.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
    pub is_keyword_spelling: bool,
    pub since: Revision,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Ternary opener: lowest-binding, right-associative
    op(OperatorId::Query, &["??"], 10, Associativity::Right, Fixity::Infix, false),
    // Logical
    op(OperatorId::Or, &["or"], 20, Associativity::Left, Fixity::Infix, true),
    op(OperatorId::And, &["and"], 30, Associativity::Left, Fixity::Infix, true),
    // Comparison
    op(OperatorId::Is, &["is"], 40, Associativity::Left, Fixity::Infix, true),
    op(OperatorId::Gt, &[">", "greater_than"], 40, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Lt, &["<", "less_than"], 40, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::GtEq, &[">="], 40, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::LtEq, &["<="], 40, Associativity::Left, Fixity::Infix, false),
    // Additive
    op(OperatorId::Plus, &["+", "plus"], 50, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Minus, &["-", "minus"], 50, Associativity::Left, Fixity::Infix, false),
    // Multiplicative
    op(OperatorId::Star, &["*", "times"], 60, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Slash, &["/", "div"], 60, Associativity::Left, Fixity::Infix, false),
    op(OperatorId::Percent, &["%", "mod"], 60, Associativity::Left, Fixity::Infix, false),
    // Prefix
    op(OperatorId::Not, &["not"], 70, Associativity::Right, Fixity::Prefix, true),
];

/// Canonical spelling.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spellings[0]
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Lookup by spelling (canonical or alias).
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| o.spellings.contains(&s))
        .map(|o| o.id)
}

/// Resolve an identifier-shaped spelling to a symbol operator.
///
/// This covers the word aliases (`plus`, `minus`, `times`, `div`, `mod`, `greater_than`,
/// `less_than`). Keyword-spelled operators (`and`, `or`, `is`, `not`) are excluded — those lex
/// as keywords and are handled by the parser directly.
pub fn word_alias(s: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .filter(|o| !o.is_keyword_spelling)
        .find(|o| o.spellings[1..].contains(&s))
        .map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spellings: &'static [&'static str],
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
    is_keyword_spelling: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        precedence,
        associativity,
        fixity,
        is_keyword_spelling,
        since: Revision::R1,
        stability: Stability::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_round_trips() {
        for o in OPERATORS {
            for sp in o.spellings {
                assert_eq!(from_str(sp), Some(o.id), "spelling {:?}", sp);
            }
        }
    }

    #[test]
    fn word_aliases_resolve_to_symbol_operators() {
        assert_eq!(word_alias("plus"), Some(OperatorId::Plus));
        assert_eq!(word_alias("minus"), Some(OperatorId::Minus));
        assert_eq!(word_alias("times"), Some(OperatorId::Star));
        assert_eq!(word_alias("div"), Some(OperatorId::Slash));
        assert_eq!(word_alias("mod"), Some(OperatorId::Percent));
        assert_eq!(word_alias("greater_than"), Some(OperatorId::Gt));
        assert_eq!(word_alias("less_than"), Some(OperatorId::Lt));
        // Keyword spellings are not word aliases.
        assert_eq!(word_alias("and"), None);
        assert_eq!(word_alias("not"), None);
    }

    #[test]
    fn precedence_ladder_is_ordered() {
        let prec = |id| info_for(id).precedence;
        assert!(prec(OperatorId::Query) < prec(OperatorId::Or));
        assert!(prec(OperatorId::Or) < prec(OperatorId::And));
        assert!(prec(OperatorId::And) < prec(OperatorId::Is));
        assert!(prec(OperatorId::Is) < prec(OperatorId::Plus));
        assert!(prec(OperatorId::Plus) < prec(OperatorId::Star));
        assert!(prec(OperatorId::Star) < prec(OperatorId::Not));
    }
}
