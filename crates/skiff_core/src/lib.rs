//! Provide the canonical language vocabulary for the Skiff frontend.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that define
//! what Skiff's surface syntax *is* — reserved keywords, operators, punctuation, builtin type
//! names — plus the dialect table that maps the three grammar revisions onto one shared core.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no AST types, no tokenization. The lexer and parser
//!   live in `skiff_syntax` and consume these registries.
//! - Callers work with stable IDs (`KeywordId`, `OperatorId`, `PunctId`, `TypeId`) rather than
//!   string spellings; spellings are resolved through the registry tables (and, for keywords,
//!   through the active [`lang::dialect::Dialect`]).

pub mod lang;
