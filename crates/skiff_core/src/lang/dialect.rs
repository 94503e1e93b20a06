//! Dialect configuration: one grammar, three revisions.
//!
//! Skiff's grammar has gone through three revisions. Rather than forking the frontend per
//! revision, the lexer and parser consume a single [`Dialect`] record that captures everything
//! that actually differs between them:
//!
//! - which bracket pair spells the **array literal** (`<...>` in R1/R2, `[...]` in R3),
//! - whether **object / typed-object literals** exist (R3 only — `<...>` was freed up by the
//!   array-bracket change),
//! - whether **multi-line struct/enum bodies** exist (R3 only),
//! - keyword **respellings** relative to the canonical R3 set.
//!
//! Everything else — statement shapes, precedence, `$` terminators, pipes — is shared.
//!
//! ## Examples
//! ```rust
//! use skiff_core::lang::dialect::{Dialect, DelimPair};
//! use skiff_core::lang::keywords::KeywordId;
//!
//! let r3 = Dialect::canonical();
//! assert_eq!(r3.array_literal, DelimPair::Square);
//! assert_eq!(r3.keyword_id("till"), Some(KeywordId::Till));
//!
//! let r1 = &skiff_core::lang::dialect::R1;
//! assert_eq!(r1.array_literal, DelimPair::Angle);
//! assert_eq!(r1.keyword_id("until"), Some(KeywordId::Till));
//! assert_eq!(r1.keyword_id("till"), None); // respelled away in R1
//! ```

use super::keywords::{self, KeywordId};
use super::registry::Revision;

/// A bracket pair role assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimPair {
    /// `[` ... `]`
    Square,
    /// `<` ... `>`
    Angle,
    /// `{` ... `}`
    Brace,
}

/// Lexical/grammatical configuration for one grammar revision.
///
/// The parser core targets the richest revision; earlier revisions are expressed purely as
/// values of this type. Adding a fourth revision must not require touching the parser beyond
/// a new const here.
#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    pub revision: Revision,
    /// Bracket pair spelling array literals.
    pub array_literal: DelimPair,
    /// Bracket pair spelling dict literals (and the dict-index operator).
    pub dict_literal: DelimPair,
    /// Whether `<k: v>` object literals and `Name<k: v>` typed-object literals parse.
    pub object_literals: bool,
    /// Whether struct/enum bodies have `$`-terminated multi-line forms.
    pub multiline_type_bodies: bool,
    /// Keyword respellings relative to the canonical set: `(id, spelling-in-this-revision)`.
    /// An entry both introduces the respelling and retires the canonical spelling.
    pub keyword_respellings: &'static [(KeywordId, &'static str)],
}

/// First public revision: angle-bracket arrays, `until`/`elsif` spellings, single-line type
/// bodies only.
pub const R1: Dialect = Dialect {
    revision: Revision::R1,
    array_literal: DelimPair::Angle,
    dict_literal: DelimPair::Brace,
    object_literals: false,
    multiline_type_bodies: false,
    keyword_respellings: &[(KeywordId::Till, "until"), (KeywordId::Anif, "elsif")],
};

/// Second revision: canonical keyword set, still angle-bracket arrays and single-line type
/// bodies.
pub const R2: Dialect = Dialect {
    revision: Revision::R2,
    array_literal: DelimPair::Angle,
    dict_literal: DelimPair::Brace,
    object_literals: false,
    multiline_type_bodies: false,
    keyword_respellings: &[],
};

/// Current revision: square-bracket arrays, object literals, multi-line struct/enum bodies.
pub const R3: Dialect = Dialect {
    revision: Revision::R3,
    array_literal: DelimPair::Square,
    dict_literal: DelimPair::Brace,
    object_literals: true,
    multiline_type_bodies: true,
    keyword_respellings: &[],
};

impl Dialect {
    /// The canonical dialect the parser core is specified against (R3).
    pub fn canonical() -> &'static Dialect {
        &R3
    }

    /// Resolve an identifier-shaped spelling to a keyword id under this dialect.
    ///
    /// Respellings take priority; a canonical spelling that this dialect respells away is
    /// *not* a keyword here (it lexes as a plain identifier).
    pub fn keyword_id(&self, s: &str) -> Option<KeywordId> {
        if let Some(&(id, _)) = self.keyword_respellings.iter().find(|(_, sp)| *sp == s) {
            return Some(id);
        }
        let id = keywords::from_str(s)?;
        if self.keyword_respellings.iter().any(|(respelled, _)| *respelled == id) {
            return None;
        }
        Some(id)
    }

    /// The spelling of `id` under this dialect.
    pub fn keyword_str(&self, id: KeywordId) -> &'static str {
        self.keyword_respellings
            .iter()
            .find(|(respelled, _)| *respelled == id)
            .map(|(_, sp)| *sp)
            .unwrap_or_else(|| keywords::as_str(id))
    }
}

impl Default for Dialect {
    fn default() -> Self {
        R3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_dialect_is_r3() {
        let d = Dialect::canonical();
        assert_eq!(d.revision, Revision::R3);
        assert!(d.object_literals);
        assert!(d.multiline_type_bodies);
    }

    #[test]
    fn respellings_shadow_canonical_spellings() {
        assert_eq!(R1.keyword_id("until"), Some(KeywordId::Till));
        assert_eq!(R1.keyword_id("till"), None);
        assert_eq!(R1.keyword_id("elsif"), Some(KeywordId::Anif));
        assert_eq!(R1.keyword_id("anif"), None);
        // Untouched keywords resolve normally.
        assert_eq!(R1.keyword_id("loop"), Some(KeywordId::Loop));
    }

    #[test]
    fn keyword_str_follows_the_dialect() {
        assert_eq!(R1.keyword_str(KeywordId::Till), "until");
        assert_eq!(R2.keyword_str(KeywordId::Till), "till");
        assert_eq!(R3.keyword_str(KeywordId::Anif), "anif");
    }
}
