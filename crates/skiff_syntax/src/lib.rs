//! Syntax frontend for the Skiff language: lexer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse across an interpreter, compiler, and
//! future tooling.
//!
//! ## Notes
//! - This crate is intentionally “syntax-only”: it does not evaluate, lower, or typecheck.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `skiff_core::lang`
//!   registries; grammar-revision differences come from `skiff_core::lang::dialect`.
//! - Parsing a source unit is a pure, single-threaded computation with no shared state;
//!   independent units can be parsed in parallel with zero coordination.
//!
//! ## Examples
//! ```rust,no_run
//! use skiff_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("x: 1\n").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! ## See also
//! - `skiff_core::lang` for registry-backed language vocabulary.

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
