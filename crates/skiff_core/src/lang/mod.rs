//! Skiff language vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: reserved keywords, operators,
//! punctuation, and builtin type names, plus the dialect configuration that selects between
//! grammar revisions.
//!
//! The design goal is to avoid stringly-typed checks scattered across the frontend. Callers
//! work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via
//! registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use
//!   (diagnostics, docs, highlighting).
//!
//! ## Examples
//! ```rust
//! use skiff_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("loop"), Some(KeywordId::Loop));
//! assert_eq!(keywords::as_str(KeywordId::Loop), "loop");
//! ```

pub mod dialect;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
pub mod types;
