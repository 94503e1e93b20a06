#[cfg(test)]
/// Parser unit tests.
///
/// These tests pin down the grammar's disambiguation rules: single-line vs multi-line forms,
/// loop shape selection, pipe-delimiter nesting, typed-object vs comparison, and the
/// fail-fast error behavior.
mod tests {
    use super::*;
    use crate::lexer;

    fn parse_str(source: &str) -> Result<Program, SyntaxError> {
        let tokens = lexer::lex(source).expect("lexing should succeed");
        parse(&tokens)
    }

    fn parse_ok(source: &str) -> Program {
        parse_str(source).unwrap_or_else(|e| panic!("parse of {:?} failed: {} ({}:{})", source, e, e.line, e.column))
    }

    fn only_stmt(program: &Program) -> &Statement {
        assert_eq!(program.statements.len(), 1, "expected one statement, got {:?}", program.statements);
        &program.statements[0].node
    }

    fn value_of(program: &Program) -> &Expr {
        match only_stmt(program) {
            Statement::Variable(v) => &v.value.node,
            other => panic!("expected variable declaration, got {:?}", other),
        }
    }

    fn as_int(expr: &Expr) -> i64 {
        match expr {
            Expr::Literal(Literal::Int(n)) => *n,
            other => panic!("expected int literal, got {:?}", other),
        }
    }

    // ========================================================================
    // Program structure
    // ========================================================================

    #[test]
    fn test_program_header() {
        let program = parse_ok("program demo\nx: 1\n");
        assert_eq!(program.name.as_deref(), Some("demo"));
        assert_eq!(program.statements.len(), 1);
    }

    #[test]
    fn test_statements_separated_by_semicolons_or_newlines() {
        let program = parse_ok("x: 1; y: 2\nz: 3");
        assert_eq!(program.statements.len(), 3);
    }

    #[test]
    fn test_missing_separator_is_an_error() {
        let err = parse_str("x: 1 y: 2").unwrap_err();
        assert!(err.message.contains("Expected end of statement"), "{}", err.message);
    }

    #[test]
    fn test_import() {
        let program = parse_ok("import \"math\"");
        match only_stmt(&program) {
            Statement::Import(i) => assert_eq!(i.path, "math"),
            other => panic!("expected import, got {:?}", other),
        }
    }

    #[test]
    fn test_comments_are_invisible() {
        let program = parse_ok("x: 1 ? trailing comment\n? whole-line comment\ny: 2\n");
        assert_eq!(program.statements.len(), 2);
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    #[test]
    fn test_constant_vs_function_after_double_colon() {
        let program = parse_ok("PI :: 3");
        assert!(matches!(only_stmt(&program), Statement::Constant(c) if c.name == "PI"));

        let program = parse_ok("add :: |a:int, b:int| int :\n  return a + b\n$\n");
        match only_stmt(&program) {
            Statement::Function(f) => {
                assert_eq!(f.name, "add");
                assert_eq!(f.params.len(), 2);
                assert_eq!(f.params[0].node.name, "a");
                assert!(matches!(
                    f.params[0].node.ty.node,
                    Type::Builtin(skiff_core::lang::types::TypeId::Int)
                ));
                assert_eq!(f.return_types.len(), 1);
                assert_eq!(f.body.len(), 1);
                assert!(matches!(f.body[0].node, Statement::Return(_)));
            }
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_function_with_multiple_return_types() {
        let program = parse_ok("divmod :: |a:int, b:int| int, int :\n  return a / b, a % b\n$\n");
        match only_stmt(&program) {
            Statement::Function(f) => {
                assert_eq!(f.return_types.len(), 2);
                match &f.body[0].node {
                    Statement::Return(r) => assert_eq!(r.values.len(), 2),
                    other => panic!("expected return, got {:?}", other),
                }
            }
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_function_body_on_one_line() {
        let program = parse_ok("main :: || : greet|| $");
        match only_stmt(&program) {
            Statement::Function(f) => assert_eq!(f.body.len(), 1),
            other => panic!("expected function, got {:?}", other),
        }
    }

    #[test]
    fn test_struct_oneline() {
        let program = parse_ok("struct Point: x:int; y:int");
        match only_stmt(&program) {
            Statement::Struct(s) => {
                assert_eq!(s.name.as_deref(), Some("Point"));
                assert_eq!(s.fields.len(), 2);
            }
            other => panic!("expected struct, got {:?}", other),
        }
    }

    #[test]
    fn test_struct_oneline_nested_group_is_greedy() {
        // Everything after `type Q:` belongs to Q, to the end of the line.
        let program = parse_ok("struct P: x:int; type Q: y:int; z:int");
        match only_stmt(&program) {
            Statement::Struct(s) => {
                assert_eq!(s.fields.len(), 2);
                match &s.fields[1].node {
                    StructField::Nested(n) => {
                        assert_eq!(n.name, "Q");
                        assert_eq!(n.fields.len(), 2);
                    }
                    other => panic!("expected nested struct, got {:?}", other),
                }
            }
            other => panic!("expected struct, got {:?}", other),
        }
    }

    #[test]
    fn test_struct_multiline_with_default_and_nesting() {
        let source = "struct Sprite:\n  x:int\n  10 scale:int\n  type inner:\n    w:int\n$\n";
        let program = parse_ok(source);
        match only_stmt(&program) {
            Statement::Struct(s) => {
                assert_eq!(s.fields.len(), 3);
                match &s.fields[1].node {
                    StructField::Field(f) => {
                        assert_eq!(f.name, "scale");
                        assert_eq!(as_int(&f.default.as_ref().unwrap().node), 10);
                    }
                    other => panic!("expected plain field, got {:?}", other),
                }
                match &s.fields[2].node {
                    StructField::Nested(n) => {
                        assert_eq!(n.name, "inner");
                        assert_eq!(n.fields.len(), 1);
                        assert!(matches!(&n.fields[0].node, StructField::Field(f) if f.name == "w"));
                    }
                    other => panic!("expected nested struct, got {:?}", other),
                }
            }
            other => panic!("expected struct, got {:?}", other),
        }
    }

    #[test]
    fn test_anonymous_struct() {
        let program = parse_ok("struct : x:int");
        assert!(matches!(only_stmt(&program), Statement::Struct(s) if s.name.is_none()));
    }

    #[test]
    fn test_duplicate_field_names_are_not_a_parse_error() {
        // Name uniqueness is a validation concern, not a grammar rule.
        assert!(parse_str("struct D: x:int; x:int").is_ok());
    }

    #[test]
    fn test_enum_oneline_with_values() {
        let program = parse_ok("enum Num: 10 ten; 20 twenty; thirty");
        match only_stmt(&program) {
            Statement::Enum(e) => {
                assert_eq!(e.name, "Num");
                assert_eq!(e.members.len(), 3);
                assert_eq!(e.members[0].node.value, Some(10));
                assert_eq!(e.members[0].node.name, "ten");
                assert_eq!(e.members[2].node.value, None);
            }
            other => panic!("expected enum, got {:?}", other),
        }
    }

    #[test]
    fn test_enum_multiline() {
        let program = parse_ok("enum Color:\n  red\n  green\n  blue\n$\n");
        match only_stmt(&program) {
            Statement::Enum(e) => assert_eq!(e.members.len(), 3),
            other => panic!("expected enum, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_enum_values_are_not_a_parse_error() {
        assert!(parse_str("enum E: 1 a; 1 b").is_ok());
    }

    // ========================================================================
    // Assignments
    // ========================================================================

    #[test]
    fn test_tuple_assignment() {
        let program = parse_ok("a, b : 1, 2");
        match only_stmt(&program) {
            Statement::TupleAssign(t) => {
                assert_eq!(t.targets.len(), 2);
                assert_eq!(t.values.len(), 2);
            }
            other => panic!("expected tuple assignment, got {:?}", other),
        }
        // Arity mismatch is deferred to validation; the grammar accepts it.
        assert!(parse_str("a, b : 1, 2, 3").is_ok());
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    #[test]
    fn test_binary_precedence() {
        // 1 + 2 * 3 == 1 + (2 * 3)
        match value_of(&parse_ok("x: 1 + 2 * 3")) {
            Expr::Binary(left, BinaryOp::Add, right) => {
                assert_eq!(as_int(&left.node), 1);
                match &right.node {
                    Expr::Binary(l, BinaryOp::Mul, r) => {
                        assert_eq!(as_int(&l.node), 2);
                        assert_eq!(as_int(&r.node), 3);
                    }
                    other => panic!("expected multiplication, got {:?}", other),
                }
            }
            other => panic!("expected addition, got {:?}", other),
        }
    }

    #[test]
    fn test_not_binds_tighter_than_and() {
        // not true and false == (not true) and false
        match value_of(&parse_ok("x: not true and false")) {
            Expr::Binary(left, BinaryOp::And, right) => {
                assert!(matches!(&left.node, Expr::Unary(UnaryOp::Not, operand)
                    if matches!(operand.node, Expr::Literal(Literal::Bool(true)))));
                assert!(matches!(right.node, Expr::Literal(Literal::Bool(false))));
            }
            other => panic!("expected conjunction, got {:?}", other),
        }
    }

    #[test]
    fn test_word_aliases_parse_identically_to_symbols() {
        // Spans differ (spellings have different widths); the shapes must not.
        fn assert_add_of_mul(expr: &Expr) {
            match expr {
                Expr::Binary(left, BinaryOp::Add, right) => {
                    assert_eq!(as_int(&left.node), 1);
                    match &right.node {
                        Expr::Binary(l, BinaryOp::Mul, r) => {
                            assert_eq!(as_int(&l.node), 2);
                            assert_eq!(as_int(&r.node), 3);
                        }
                        other => panic!("expected multiplication, got {:?}", other),
                    }
                }
                other => panic!("expected addition, got {:?}", other),
            }
        }
        assert_add_of_mul(value_of(&parse_ok("x: 1 plus 2 times 3")));
        assert_add_of_mul(value_of(&parse_ok("x: 1 + 2 * 3")));

        assert!(matches!(value_of(&parse_ok("x: a greater_than b")), Expr::Binary(_, BinaryOp::Gt, _)));
        assert!(matches!(value_of(&parse_ok("x: a mod b")), Expr::Binary(_, BinaryOp::Mod, _)));
    }

    #[test]
    fn test_ternary_is_right_associative_and_lowest() {
        match value_of(&parse_ok("x: c ?? 1 : 2")) {
            Expr::Ternary { condition, consequence, alternative } => {
                assert!(matches!(&condition.node, Expr::Ident(n) if n == "c"));
                assert_eq!(as_int(&consequence.node), 1);
                assert_eq!(as_int(&alternative.node), 2);
            }
            other => panic!("expected ternary, got {:?}", other),
        }
    }

    #[test]
    fn test_postfix_chain_applies_left_to_right() {
        // a.b|1|.c[0] => Index(Member(MethodCall(a, b, [1]), c), 0)
        match value_of(&parse_ok("x: a.b|1|.c[0]")) {
            Expr::Index(collection, key) => {
                assert_eq!(as_int(&key.node), 0);
                match &collection.node {
                    Expr::Member(object, member) => {
                        assert_eq!(member, "c");
                        match &object.node {
                            Expr::MethodCall(recv, method, args) => {
                                assert!(matches!(&recv.node, Expr::Ident(n) if n == "a"));
                                assert_eq!(method, "b");
                                assert_eq!(args.len(), 1);
                            }
                            other => panic!("expected method call, got {:?}", other),
                        }
                    }
                    other => panic!("expected member access, got {:?}", other),
                }
            }
            other => panic!("expected index, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_calls_share_the_pipe_delimiter() {
        // f|g|1|| == f(g(1))
        match value_of(&parse_ok("x: f|g|1||")) {
            Expr::Call(name, args) => {
                assert_eq!(name, "f");
                assert_eq!(args.len(), 1);
                match &args[0].node {
                    Expr::Call(inner, inner_args) => {
                        assert_eq!(inner, "g");
                        assert_eq!(as_int(&inner_args[0].node), 1);
                    }
                    other => panic!("expected nested call, got {:?}", other),
                }
            }
            other => panic!("expected call, got {:?}", other),
        }

        // f|a| == f(a): the second pipe closes the outer list.
        match value_of(&parse_ok("x: f|a|")) {
            Expr::Call(name, args) => {
                assert_eq!(name, "f");
                assert!(matches!(&args[0].node, Expr::Ident(n) if n == "a"));
            }
            other => panic!("expected call, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_argument_list() {
        assert!(matches!(value_of(&parse_ok("x: f||")), Expr::Call(name, args) if name == "f" && args.is_empty()));
    }

    #[test]
    fn test_array_literal_and_index() {
        assert!(matches!(value_of(&parse_ok("x: [1, 2, 3]")), Expr::Array(els) if els.len() == 3));
        assert!(matches!(value_of(&parse_ok("x: xs[0]")), Expr::Index(..)));
    }

    #[test]
    fn test_dict_literal_and_dict_index() {
        match value_of(&parse_ok("x: {\"a\": 1, \"b\": 2}")) {
            Expr::Dict(pairs) => {
                assert_eq!(pairs.len(), 2);
                assert_eq!(pairs[0].key, "a");
            }
            other => panic!("expected dict literal, got {:?}", other),
        }
        match value_of(&parse_ok("x: conf{\"port\"}")) {
            Expr::DictIndex(collection, key) => {
                assert!(matches!(&collection.node, Expr::Ident(n) if n == "conf"));
                assert_eq!(key, "port");
            }
            other => panic!("expected dict index, got {:?}", other),
        }
    }

    #[test]
    fn test_object_literal_and_typed_object_literal() {
        assert!(matches!(value_of(&parse_ok("x: <a: 1, b: 2>")), Expr::Object(pairs) if pairs.len() == 2));
        assert!(matches!(value_of(&parse_ok("x: <>")), Expr::Object(pairs) if pairs.is_empty()));
        match value_of(&parse_ok("x: rect<w: 1, h: 2>")) {
            Expr::TypedObject(name, pairs) => {
                assert_eq!(name, "rect");
                assert_eq!(pairs.len(), 2);
            }
            other => panic!("expected typed object, got {:?}", other),
        }
    }

    #[test]
    fn test_angle_literal_values_and_the_closing_bracket() {
        // A `<` inside an object value still compares; the bare `>` closes the literal.
        match value_of(&parse_ok("x: <a: 1 < 2>")) {
            Expr::Object(pairs) => {
                assert!(matches!(pairs[0].value.node, Expr::Binary(_, BinaryOp::Lt, _)));
            }
            other => panic!("expected object literal, got {:?}", other),
        }
        // Parentheses re-enable `>` as an operator inside the literal.
        match value_of(&parse_ok("x: <a: (1 > 2)>")) {
            Expr::Object(pairs) => {
                assert!(matches!(pairs[0].value.node, Expr::Binary(_, BinaryOp::Gt, _)));
            }
            other => panic!("expected object literal, got {:?}", other),
        }
    }

    #[test]
    fn test_typed_object_does_not_shadow_comparison() {
        assert!(matches!(value_of(&parse_ok("x: a < b")), Expr::Binary(_, BinaryOp::Lt, _)));
        // The literal trial must rewind when the `<` turns out to be a comparison inside a
        // ternary: `a < b` here, with the `:` belonging to the ternary.
        match value_of(&parse_ok("x: c ?? a < b : z")) {
            Expr::Ternary { consequence, .. } => {
                assert!(matches!(consequence.node, Expr::Binary(_, BinaryOp::Lt, _)));
            }
            other => panic!("expected ternary, got {:?}", other),
        }
    }

    #[test]
    fn test_parenthesized_expression() {
        // (1 + 2) * 3 groups explicitly against precedence.
        match value_of(&parse_ok("x: (1 + 2) * 3")) {
            Expr::Binary(left, BinaryOp::Mul, _) => {
                assert!(matches!(left.node, Expr::Binary(_, BinaryOp::Add, _)));
            }
            other => panic!("expected multiplication, got {:?}", other),
        }
    }

    #[test]
    fn test_char_and_string_literals() {
        assert!(matches!(value_of(&parse_ok("x: 'a'")), Expr::Literal(Literal::Char(c)) if c == "a"));
        assert!(matches!(value_of(&parse_ok("x: \"hi\\n\"")), Expr::Literal(Literal::Str(s)) if s == "hi\\n"));
    }

    // ========================================================================
    // Statement-position expressions
    // ========================================================================

    #[test]
    fn test_call_and_method_call_statements() {
        assert!(matches!(only_stmt(&parse_ok("greet|\"hi\"|")), Statement::Expr(e) if matches!(e.node, Expr::Call(..))));
        assert!(matches!(only_stmt(&parse_ok("list.push|1|")), Statement::Expr(e) if matches!(e.node, Expr::MethodCall(..))));
    }

    #[test]
    fn test_bare_member_access_is_not_a_statement() {
        let err = parse_str("a.b").unwrap_err();
        assert!(err.message.contains("call"), "{}", err.message);
    }

    // ========================================================================
    // If / anif / else
    // ========================================================================

    #[test]
    fn test_single_line_and_multi_line_if_are_interchangeable() {
        let oneline = parse_ok("if x then y||");
        let multiline = parse_ok("if x: y|| $");
        for program in [&oneline, &multiline] {
            match only_stmt(program) {
                Statement::If(i) => {
                    assert!(matches!(&i.condition.node, Expr::Ident(n) if n == "x"));
                    assert_eq!(i.consequence.len(), 1);
                    assert!(matches!(&i.consequence[0].node, Statement::Expr(e)
                        if matches!(&e.node, Expr::Call(name, args) if name == "y" && args.is_empty())));
                    assert!(i.alternatives.is_empty());
                }
                other => panic!("expected if, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_single_line_if_chain() {
        let program = parse_ok("if a then x|| anif b then y|| else z||");
        match only_stmt(&program) {
            Statement::If(i) => {
                assert_eq!(i.alternatives.len(), 2);
                assert!(i.alternatives[0].condition.is_some());
                assert!(i.alternatives[1].condition.is_none());
            }
            other => panic!("expected if, got {:?}", other),
        }
    }

    #[test]
    fn test_multi_line_if_chain() {
        let source = "if a:\n  x: 1\nanif b then\n  y: 2\nelse:\n  z: 3\n$\n";
        let program = parse_ok(source);
        match only_stmt(&program) {
            Statement::If(i) => {
                assert_eq!(i.consequence.len(), 1);
                assert_eq!(i.alternatives.len(), 2);
                assert!(i.alternatives[0].condition.is_some());
                assert_eq!(i.alternatives[0].body.len(), 1);
                assert!(i.alternatives[1].condition.is_none());
            }
            other => panic!("expected if, got {:?}", other),
        }
    }

    // ========================================================================
    // Switch / case
    // ========================================================================

    #[test]
    fn test_switch_with_single_line_case_bodies() {
        let source = "switch x on\n  1: one||\n  2, 3: few||\n  _: many||\n$\n";
        let program = parse_ok(source);
        match only_stmt(&program) {
            Statement::Switch(s) => {
                assert_eq!(s.cases.len(), 3);
                assert!(matches!(&s.cases[0].node.patterns, CasePatterns::Exprs(e) if e.len() == 1));
                assert!(matches!(&s.cases[1].node.patterns, CasePatterns::Exprs(e) if e.len() == 2));
                assert!(matches!(s.cases[2].node.patterns, CasePatterns::Wildcard));
            }
            other => panic!("expected switch, got {:?}", other),
        }
    }

    #[test]
    fn test_switch_with_block_case_bodies() {
        let source = "switch x:\n  1:\n    a: 5\n    print|a|\n  _: other||\n$\n";
        let program = parse_ok(source);
        match only_stmt(&program) {
            Statement::Switch(s) => {
                assert_eq!(s.cases.len(), 2);
                // `a: 5` stays a variable declaration of the first case's body; `_:` starts
                // the next case.
                assert_eq!(s.cases[0].node.body.len(), 2);
                assert!(matches!(s.cases[0].node.body[0].node, Statement::Variable(_)));
            }
            other => panic!("expected switch, got {:?}", other),
        }
    }

    // ========================================================================
    // Loops
    // ========================================================================

    #[test]
    fn test_loop_counted_range() {
        let program = parse_ok("loop i:0 to 10 do print|i|");
        match only_stmt(&program) {
            Statement::Loop(l) => match &l.header {
                LoopHeader::Range { variable, start, end } => {
                    assert_eq!(variable, "i");
                    assert_eq!(as_int(&start.node), 0);
                    assert_eq!(as_int(&end.node), 10);
                }
                other => panic!("expected counted range, got {:?}", other),
            },
            other => panic!("expected loop, got {:?}", other),
        }
    }

    #[test]
    fn test_loop_shapes_select_deterministically() {
        let header_of = |src: &str| match only_stmt(&parse_ok(src)) {
            Statement::Loop(l) => l.header.clone(),
            other => panic!("expected loop, got {:?}", other),
        };

        assert!(matches!(header_of("loop i to 10 do step||"), LoopHeader::RangeTo { .. }));
        assert!(matches!(header_of("loop x in items do print|x|"), LoopHeader::Each { element, .. } if element == "x"));
        assert!(matches!(header_of("loop k, v in table do print|k|"), LoopHeader::Entries { .. }));
        assert!(matches!(header_of("loop till stop|| do poll||"), LoopHeader::Till { .. }));
        assert!(matches!(
            header_of("loop i till i > 3 do step||"),
            LoopHeader::TillWith { start: None, .. }
        ));
        assert!(matches!(
            header_of("loop i:1 till i > 3 do step||"),
            LoopHeader::TillWith { start: Some(_), .. }
        ));
        assert!(matches!(header_of("loop do spin||"), LoopHeader::Forever { counter: None }));
        assert!(matches!(
            header_of("loop i:0 do tick||"),
            LoopHeader::Forever { counter: Some(_) }
        ));
    }

    #[test]
    fn test_loop_multi_line_body() {
        let program = parse_ok("loop i:0 to 3 do\n  print|i|\n  halt\n$\n");
        match only_stmt(&program) {
            Statement::Loop(l) => {
                assert_eq!(l.body.len(), 2);
                assert!(matches!(l.body[1].node, Statement::Halt));
            }
            other => panic!("expected loop, got {:?}", other),
        }
    }

    #[test]
    fn test_halt_and_next() {
        let program = parse_ok("loop do\n  next\n  halt\n$\n");
        match only_stmt(&program) {
            Statement::Loop(l) => {
                assert!(matches!(l.body[0].node, Statement::Next));
                assert!(matches!(l.body[1].node, Statement::Halt));
            }
            other => panic!("expected loop, got {:?}", other),
        }
    }

    // ========================================================================
    // When
    // ========================================================================

    #[test]
    fn test_when_records_structure_only() {
        let program = parse_ok("when debug then\n  log|1|\n$\n");
        match only_stmt(&program) {
            Statement::When(w) => {
                assert_eq!(w.condition_name, "debug");
                assert_eq!(w.body.len(), 1);
            }
            other => panic!("expected when, got {:?}", other),
        }
    }

    // ========================================================================
    // Return
    // ========================================================================

    #[test]
    fn test_return_arities() {
        let values = |src: &str| match only_stmt(&parse_ok(src)) {
            Statement::Return(r) => r.values.len(),
            other => panic!("expected return, got {:?}", other),
        };
        assert_eq!(values("return"), 0);
        assert_eq!(values("return 1"), 1);
        assert_eq!(values("return 1, 2, 3"), 3);
    }

    // ========================================================================
    // Dialects
    // ========================================================================

    #[test]
    fn test_r2_angle_bracket_array_literal() {
        use skiff_core::lang::dialect;

        let program = parse_source_with_dialect("x: <1, 2, 3>", &dialect::R2).unwrap();
        assert!(matches!(value_of(&program), Expr::Array(els) if els.len() == 3));
    }

    #[test]
    fn test_r1_keyword_respellings() {
        use skiff_core::lang::dialect;

        let program = parse_source_with_dialect("loop until done do poll||", &dialect::R1).unwrap();
        match only_stmt(&program) {
            Statement::Loop(l) => assert!(matches!(l.header, LoopHeader::Till { .. })),
            other => panic!("expected loop, got {:?}", other),
        }
    }

    // ========================================================================
    // Failure behavior
    // ========================================================================

    #[test]
    fn test_unterminated_function_body_reports_end_of_input() {
        let err = parse_str("f :: || :\n  x: 1\n").unwrap_err();
        assert!(err.message.contains("end of input"), "{}", err.message);
        assert!(err.expected.contains(&"$"));
        // The error points at EOF, not at the last valid token.
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_adjacent_infix_operators_are_rejected() {
        let err = parse_str("x: 1 + * 2").unwrap_err();
        assert!(err.message.contains("Expected expression"), "{}", err.message);
        assert_eq!((err.line, err.column), (1, 8));
    }

    #[test]
    fn test_expression_at_statement_position_is_rejected() {
        assert!(parse_str("1 + 2").is_err());
    }

    #[test]
    fn test_reparsing_is_structurally_idempotent() {
        let source = "program demo\nstruct Point: x:int; y:int\nmain :: || :\n  p: Point<x: 1, y: 2>\n  print|p.x|\n$\n";
        assert_eq!(parse_ok(source), parse_ok(source));
    }
}
