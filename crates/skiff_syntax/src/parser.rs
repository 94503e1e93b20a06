//! Parser for the Skiff language.
//!
//! Converts a token stream into a [`Program`] AST. The statement/declaration grammar is
//! recursive descent; the expression grammar is a precedence ladder. Grammar-revision
//! differences (bracket roles, keyword spellings, multi-line type bodies) come in through the
//! active [`Dialect`] — one parser core serves all three revisions.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use skiff_syntax::{lexer, parser};
//!
//! let source = "greet :: |name:string| :\n  print|name|\n$\n";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::{ParseError, SyntaxError};
use crate::lexer::{Token, TokenKind};
use skiff_core::lang::dialect::{Dialect, DelimPair};
use skiff_core::lang::keywords::KeywordId;
use skiff_core::lang::operators::OperatorId;
use skiff_core::lang::punctuation::{self, PunctId};
use skiff_core::lang::types;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
