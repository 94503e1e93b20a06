//! Property-based tests for the Skiff syntax frontend.
//!
//! These tests use proptest to verify invariants across many generated inputs, catching edge
//! cases that hand-written tests might miss, plus a fixed kitchen-sink program exercising
//! every statement form at once.

use proptest::prelude::*;
use skiff_syntax::parser;
use skiff_syntax::lexer;

// =============================================================================
// Fixed corpus
// =============================================================================

const KITCHEN_SINK: &str = r#"program adventure

import "std/io"

MAX_HP :: 100

struct Player:
  name:string
  100 hp:int
  type position:
    x:int
    y:int
$

enum Mood: 0 calm; 1 angry

damage :: |target:string, amount:int| int :
  hp: MAX_HP - amount
  if hp < 0: hp.clamp|0| $
  return hp
$

main :: || :
  p: Player<name: "Ana", hp: 100>
  loop i:0 to 3 do
    print|i|
  $
  switch p.hp on
    0: die||
    _: live||
  $
  when verbose then
    log|"finished"|
  $
$
"#;

#[test]
fn kitchen_sink_program_parses() {
    let program = parser::parse_source(KITCHEN_SINK).expect("kitchen sink should parse");
    assert_eq!(program.name.as_deref(), Some("adventure"));
    assert_eq!(program.statements.len(), 6);
}

/// Property: re-parsing identical text yields a structurally identical tree.
#[test]
fn reparsing_is_idempotent_on_the_corpus() {
    let first = parser::parse_source(KITCHEN_SINK).unwrap();
    let second = parser::parse_source(KITCHEN_SINK).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Generated inputs
// =============================================================================

proptest! {
    /// The lexer classifies or rejects; it never panics, whatever the input.
    #[test]
    fn lexer_never_panics(input in "\\PC*") {
        let _ = lexer::lex(&input);
    }

    /// Any non-reserved identifier works as a variable-declaration target, and parsing is
    /// deterministic.
    #[test]
    fn variable_declarations_parse_idempotently(
        name in "[a-z][a-z0-9_]{0,8}",
        value in 0i64..1_000_000,
    ) {
        prop_assume!(skiff_core::lang::keywords::from_str(&name).is_none());
        prop_assume!(skiff_core::lang::operators::word_alias(&name).is_none());

        let source = format!("{}: {}\n", name, value);
        let first = parser::parse_source(&source).unwrap();
        let second = parser::parse_source(&source).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Multiplicative operators bind tighter than additive ones for arbitrary operands.
    #[test]
    fn precedence_holds_for_arbitrary_operands(a in 0i64..1000, b in 0i64..1000, c in 0i64..1000) {
        use skiff_syntax::ast::{BinaryOp, Expr, Statement};

        let source = format!("x: {} + {} * {}\n", a, b, c);
        let program = parser::parse_source(&source).unwrap();
        let Statement::Variable(decl) = &program.statements[0].node else {
            panic!("expected variable declaration");
        };
        let Expr::Binary(_, op, right) = &decl.value.node else {
            panic!("expected binary expression");
        };
        prop_assert_eq!(*op, BinaryOp::Add);
        prop_assert!(matches!(right.node, Expr::Binary(_, BinaryOp::Mul, _)));
    }

    /// Counted-range loops round-trip their bounds for arbitrary literals.
    #[test]
    fn counted_loops_carry_their_bounds(start in 0i64..1000, end in 0i64..1000) {
        use skiff_syntax::ast::{Expr, Literal, LoopHeader, Statement};

        let source = format!("loop i:{} to {} do print|i|\n", start, end);
        let program = parser::parse_source(&source).unwrap();
        let Statement::Loop(l) = &program.statements[0].node else {
            panic!("expected loop");
        };
        let LoopHeader::Range { variable, start: s, end: e } = &l.header else {
            panic!("expected counted range, got {:?}", l.header);
        };
        prop_assert_eq!(variable.as_str(), "i");
        prop_assert!(matches!(s.node, Expr::Literal(Literal::Int(n)) if n == start));
        prop_assert!(matches!(e.node, Expr::Literal(Literal::Int(n)) if n == end));
    }
}
