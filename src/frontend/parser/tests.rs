use super::*;
use crate::frontend::SexprPrinter;

fn expr_sexpr(source: &str) -> String {
    let mut parser = Parser::new(source);
    let expr = parser.parse_expression().unwrap();
    SexprPrinter::new(parser.interner()).expr(&expr)
}

fn module_sexpr(source: &str) -> String {
    let mut parser = Parser::new(source);
    let module = parser.parse_module().unwrap();
    SexprPrinter::new(parser.interner()).module(&module)
}

fn parse_module_err(source: &str) -> ParseError {
    Parser::new(source).parse_module().unwrap_err()
}

#[test]
fn parse_int_literal() {
    let mut parser = Parser::new("42");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Integer(lit) => {
            assert_eq!(lit.value, "42");
            assert_eq!(lit.suffix, None);
        }
        _ => panic!("expected int literal"),
    }
}

#[test]
fn parse_int_literal_with_suffix() {
    let mut parser = Parser::new("0xDEAD_BEEFU32");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Integer(lit) => {
            assert_eq!(lit.value, "0xDEADBEEF");
            assert_eq!(lit.suffix.as_deref(), Some("U32"));
        }
        _ => panic!("expected int literal"),
    }
}

#[test]
fn parse_float_literal() {
    let mut parser = Parser::new("3.14");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Float(lit) => assert_eq!(lit.value, "3.14"),
        _ => panic!("expected float literal"),
    }
}

#[test]
fn parse_float_specials_canonical() {
    let mut parser = Parser::new("NaN");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Float(lit) => {
            assert_eq!(lit.value, "nan");
            assert_eq!(lit.suffix, None);
        }
        _ => panic!("expected float literal"),
    }

    let mut parser = Parser::new("infF32");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Float(lit) => {
            assert_eq!(lit.value, "inf");
            assert_eq!(lit.suffix.as_deref(), Some("F32"));
        }
        _ => panic!("expected float literal"),
    }
}

#[test]
fn parse_bool_literals() {
    let mut parser = Parser::new("true");
    assert!(matches!(
        parser.parse_expression().unwrap().kind,
        ExprKind::Bool(true)
    ));
    let mut parser = Parser::new("false");
    assert!(matches!(
        parser.parse_expression().unwrap().kind,
        ExprKind::Bool(false)
    ));
}

#[test]
fn parse_string_literal_verbatim() {
    let mut parser = Parser::new("\"hello\\nworld\"");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        // Quotes and escapes are preserved; decoding is a later stage
        ExprKind::Str(lit) => assert_eq!(lit.text, "\"hello\\nworld\""),
        _ => panic!("expected string literal"),
    }
}

#[test]
fn parse_raw_string_verbatim() {
    let source = "r#\"{\"key\": \"value\"}\"#";
    let mut parser = Parser::new(source);
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Str(lit) => assert_eq!(lit.text, source),
        _ => panic!("expected raw string literal"),
    }
}

#[test]
fn parse_char_literal() {
    let mut parser = Parser::new("'\\x41'");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Char(lit) => assert_eq!(lit.text, "'\\x41'"),
        _ => panic!("expected char literal"),
    }
}

#[test]
fn parse_precedence_mul_over_add() {
    assert_eq!(expr_sexpr("1 + 2 * 3"), expr_sexpr("1 + (2 * 3)"));
}

#[test]
fn parse_precedence_ladder() {
    // shifts bind tighter than bitwise-and, which binds tighter than
    // xor, which binds tighter than or, which binds tighter than
    // comparison, equality, and the logical tiers
    assert_eq!(
        expr_sexpr("a == b | c ^ d & e << f"),
        expr_sexpr("a == (b | (c ^ (d & (e << f))))")
    );
    assert_eq!(
        expr_sexpr("a || b && c == d"),
        expr_sexpr("a || (b && (c == d))")
    );
}

#[test]
fn parse_associativity() {
    assert_eq!(expr_sexpr("a - b - c"), expr_sexpr("(a - b) - c"));
    assert_eq!(expr_sexpr("a / b / c"), expr_sexpr("(a / b) / c"));
}

#[test]
fn assignment_is_right_associative() {
    let mut parser = Parser::new("x = y = 42");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Assign(assign) => match assign.value.kind {
            ExprKind::Assign(inner) => match inner.value.kind {
                ExprKind::Integer(lit) => assert_eq!(lit.value, "42"),
                _ => panic!("expected int literal"),
            },
            _ => panic!("expected nested assignment"),
        },
        _ => panic!("expected assignment"),
    }
}

#[test]
fn assignment_target_is_validated_structurally() {
    let err = Parser::new("1 = 2").parse_expression().unwrap_err();
    assert!(matches!(
        err.error,
        crate::errors::ParserError::InvalidAssignmentTarget { .. }
    ));

    // Paths, field accesses, and index expressions are all fine
    for source in ["x = 1", "a.b.c = 1", "f().x = 1", "m[k] = 1"] {
        Parser::new(source).parse_expression().unwrap();
    }
}

#[test]
fn cast_binds_tighter_than_binary() {
    // x + (y as I64), never (x + y) as I64
    let mut parser = Parser::new("x + y as I64");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Binary(bin) => {
            assert_eq!(bin.op, BinaryOp::Add);
            assert!(matches!(bin.rhs.kind, ExprKind::Cast(_)));
        }
        _ => panic!("expected binary"),
    }
}

#[test]
fn cast_chains_left_associatively() {
    let mut parser = Parser::new("x as I32 as I64");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Cast(outer) => {
            assert!(matches!(outer.operand.kind, ExprKind::Cast(_)));
        }
        _ => panic!("expected cast"),
    }
}

#[test]
fn unary_binds_tighter_than_cast() {
    let mut parser = Parser::new("-x as I64");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Cast(cast) => assert!(matches!(cast.operand.kind, ExprKind::Unary(_))),
        _ => panic!("expected cast of unary"),
    }
}

#[test]
fn unary_is_right_associative() {
    let mut parser = Parser::new("!~x");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Unary(outer) => {
            assert_eq!(outer.op, UnaryOp::Not);
            assert!(matches!(outer.operand.kind, ExprKind::Unary(_)));
        }
        _ => panic!("expected unary"),
    }
}

#[test]
fn postfix_chain_interleaves() {
    // obj.get_items()[0].name
    let mut parser = Parser::new("obj.get_items()[0].name");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Field(fa) => {
            assert!(matches!(fa.object.kind, ExprKind::Index(_)));
        }
        _ => panic!("expected field access at the top"),
    }
}

#[test]
fn call_callee_is_a_path() {
    let mut parser = Parser::new("geo.point.distance(a, b)");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Call(call) => {
            assert_eq!(call.args.len(), 2);
            match &call.callee.kind {
                ExprKind::Path(path) => assert_eq!(path.segments.len(), 3),
                _ => panic!("expected path callee"),
            }
        }
        _ => panic!("expected call"),
    }
}

#[test]
fn templated_path_segments() {
    // Template parameters may sit on any segment, not only the last
    let mut parser = Parser::new("Container<I32>.Iterator<Forward>.next()");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Call(call) => match &call.callee.kind {
            ExprKind::Path(path) => {
                assert_eq!(path.segments.len(), 3);
                assert_eq!(path.segments[0].type_args.len(), 1);
                assert_eq!(path.segments[1].type_args.len(), 1);
                assert!(path.segments[2].type_args.is_empty());
            }
            _ => panic!("expected path callee"),
        },
        _ => panic!("expected call"),
    }
}

#[test]
fn less_than_is_not_template_args() {
    // a < b stays a comparison even though it could open template args
    let mut parser = Parser::new("a < b");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Binary(bin) => assert_eq!(bin.op, BinaryOp::Lt),
        _ => panic!("expected comparison"),
    }
}

#[test]
fn nested_template_args_split_shift_right() {
    let mut parser = Parser::new("make<Vec<Vec<I32>>>(x)");
    let expr = parser.parse_expression().unwrap();
    assert!(matches!(expr.kind, ExprKind::Call(_)));
}

#[test]
fn shift_right_still_works_as_operator() {
    let mut parser = Parser::new("a >> 2");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Binary(bin) => assert_eq!(bin.op, BinaryOp::Shr),
        _ => panic!("expected shift"),
    }
}

#[test]
fn grouping_is_transparent() {
    let mut parser = Parser::new("(1 + 2) * 3");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Binary(bin) => {
            assert_eq!(bin.op, BinaryOp::Mul);
            assert!(matches!(bin.lhs.kind, ExprKind::Binary(_)));
        }
        _ => panic!("expected binary"),
    }
}

#[test]
fn unit_and_tuple_literals() {
    let mut parser = Parser::new("()");
    assert!(matches!(parser.parse_expression().unwrap().kind, ExprKind::Unit));

    // Single element with trailing comma is a one-tuple
    let mut parser = Parser::new("(1,)");
    match parser.parse_expression().unwrap().kind {
        ExprKind::Tuple(elements) => assert_eq!(elements.len(), 1),
        _ => panic!("expected tuple"),
    }

    // Without the comma it is plain grouping
    let mut parser = Parser::new("(1)");
    assert!(matches!(
        parser.parse_expression().unwrap().kind,
        ExprKind::Integer(_)
    ));

    let mut parser = Parser::new("(1, 2, 3)");
    match parser.parse_expression().unwrap().kind {
        ExprKind::Tuple(elements) => assert_eq!(elements.len(), 3),
        _ => panic!("expected tuple"),
    }
}

#[test]
fn array_literal_with_trailing_comma() {
    let mut parser = Parser::new("[1, 2, 3,]");
    match parser.parse_expression().unwrap().kind {
        ExprKind::Array(elements) => assert_eq!(elements.len(), 3),
        _ => panic!("expected array"),
    }
}

#[test]
fn range_forms() {
    assert_eq!(expr_sexpr("0..10"), "(range (integer \"0\") (integer \"10\") false)");
    assert_eq!(expr_sexpr("0..=10"), "(range (integer \"0\") (integer \"10\") true)");
    assert_eq!(expr_sexpr(".."), "(range nil nil false)");
    assert_eq!(expr_sexpr("..5"), "(range nil (integer \"5\") false)");
    // Unbounded-end inclusive range parses; its validity is deferred to
    // semantic analysis.
    assert_eq!(expr_sexpr("a..="), "(range (path \"a\") nil true)");
}

#[test]
fn range_bounds_take_whole_binary_operands() {
    assert_eq!(expr_sexpr("a + 1..b * 2"), expr_sexpr("(a + 1)..(b * 2)"));
}

#[test]
fn if_expression_with_else_if_chain() {
    let mut parser = Parser::new("if a { 1; } else if b { 2; } else if c { 3; } else { 4; }");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::If(if_expr) => {
            assert_eq!(if_expr.else_ifs.len(), 2);
            assert!(if_expr.else_block.is_some());
        }
        _ => panic!("expected if"),
    }
}

#[test]
fn parenthesized_if_condition_is_rejected() {
    let err = Parser::new("if (x) { }").parse_expression().unwrap_err();
    assert!(matches!(
        err.error,
        crate::errors::ParserError::ParenthesizedCondition { .. }
    ));
}

#[test]
fn match_expression_arms() {
    let mut parser = Parser::new("match pair { (0, 0) => \"origin\", (x, y) => \"other\" }");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Match(m) => {
            assert_eq!(m.arms.len(), 2);
            match &m.arms[0].pattern.kind {
                PatternKind::Tuple { elements } => {
                    assert_eq!(elements.len(), 2);
                    assert!(matches!(elements[0].kind, PatternKind::Literal(_)));
                }
                _ => panic!("expected tuple pattern"),
            }
            match &m.arms[1].pattern.kind {
                PatternKind::Tuple { elements } => {
                    assert!(matches!(elements[0].kind, PatternKind::Simple { .. }));
                }
                _ => panic!("expected tuple pattern"),
            }
        }
        _ => panic!("expected match"),
    }
}

#[test]
fn match_arm_guard_and_trailing_comma() {
    let mut parser = Parser::new("match n { x if x > 0 => 1, _ => 0, }");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Match(m) => {
            assert_eq!(m.arms.len(), 2);
            assert!(m.arms[0].guard.is_some());
            assert!(matches!(m.arms[1].pattern.kind, PatternKind::Wildcard));
        }
        _ => panic!("expected match"),
    }
}

#[test]
fn match_scrutinee_brace_is_the_body() {
    // `pair` followed by `{` must not parse as a struct literal
    let mut parser = Parser::new("match pair { _ => 0 }");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Match(m) => assert!(matches!(m.scrutinee.kind, ExprKind::Path(_))),
        _ => panic!("expected match"),
    }
}

#[test]
fn struct_literal_requires_colon() {
    let mut parser = Parser::new("Point { x: 1, y: 2 }");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::StructLiteral(lit) => assert_eq!(lit.fields.len(), 2),
        _ => panic!("expected struct literal"),
    }

    // Shorthand is pattern-only; `Point { x }` reads as path-then-block
    // and fails as an expression statement.
    assert!(Parser::new("Point { x };").parse_module().is_err());
}

#[test]
fn struct_literal_with_template_args() {
    let mut parser = Parser::new("Pair<I32, I64> { first: 1, second: 2 }");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::StructLiteral(lit) => {
            assert_eq!(lit.type_name.segments[0].type_args.len(), 2);
        }
        _ => panic!("expected struct literal"),
    }
}

#[test]
fn interpolated_string_parts() {
    let mut parser = Parser::new("\"hello {name}!\"");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Interp(parts) => {
            assert_eq!(parts.len(), 3);
            assert!(matches!(&parts[0], StringPart::Literal(t) if t == "hello "));
            assert!(matches!(&parts[1], StringPart::Expr(_)));
            assert!(matches!(&parts[2], StringPart::Literal(t) if t == "!"));
        }
        _ => panic!("expected interpolated string"),
    }
}

#[test]
fn interpolation_literal_segments_stay_escaped() {
    let mut parser = Parser::new("\"a\\t{x}\\{b\\}\"");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Interp(parts) => {
            assert!(matches!(&parts[0], StringPart::Literal(t) if t == "a\\t"));
            assert!(matches!(&parts[2], StringPart::Literal(t) if t == "\\{b\\}"));
        }
        _ => panic!("expected interpolated string"),
    }
}

#[test]
fn interpolation_with_nested_expression_grammar() {
    let mut parser = Parser::new("\"v: {items[0].name as String}\"");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Interp(parts) => {
            assert!(matches!(&parts[1], StringPart::Expr(e) if matches!(e.kind, ExprKind::Cast(_))));
        }
        _ => panic!("expected interpolated string"),
    }
}

#[test]
fn or_pattern_collapses_when_single() {
    let mut parser = Parser::new("match n { 0 | 1 | 2 => 1, x => x }");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Match(m) => {
            match &m.arms[0].pattern.kind {
                PatternKind::Or { alternatives } => assert_eq!(alternatives.len(), 3),
                _ => panic!("expected or-pattern"),
            }
            assert!(matches!(m.arms[1].pattern.kind, PatternKind::Simple { .. }));
        }
        _ => panic!("expected match"),
    }
}

#[test]
fn struct_pattern_shorthand_and_rest() {
    let mut parser = Parser::new("let Point { x, y: py, .. } = p;");
    let stmt = parser.parse_statement().unwrap();
    match stmt {
        Stmt::Let(let_stmt) => match let_stmt.pattern.kind {
            PatternKind::Struct(sp) => {
                assert!(sp.has_rest);
                assert_eq!(sp.fields.len(), 2);
                assert!(sp.fields[0].pattern.is_none());
                assert!(sp.fields[1].pattern.is_some());
            }
            _ => panic!("expected struct pattern"),
        },
        _ => panic!("expected let"),
    }
}

#[test]
fn rest_pattern_must_be_last() {
    for source in [
        "let Point { .., debug } = p;",
        "let User { name, .., } = u;",
    ] {
        let mut parser = Parser::new(source);
        let err = parser.parse_statement().unwrap_err();
        assert!(
            matches!(
                err.error,
                crate::errors::ParserError::RestPatternNotLast { .. }
            ),
            "{source}"
        );
    }
}

#[test]
fn negated_literal_pattern() {
    let mut parser = Parser::new("match n { -5 => 1, _ => 0 }");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Match(m) => match &m.arms[0].pattern.kind {
            PatternKind::Literal(e) => assert!(matches!(e.kind, ExprKind::Unary(_))),
            _ => panic!("expected literal pattern"),
        },
        _ => panic!("expected match"),
    }
}

#[test]
fn unit_tuple_pattern() {
    let mut parser = Parser::new("match u { () => 1 }");
    let expr = parser.parse_expression().unwrap();
    match expr.kind {
        ExprKind::Match(m) => match &m.arms[0].pattern.kind {
            PatternKind::Tuple { elements } => assert!(elements.is_empty()),
            _ => panic!("expected unit pattern"),
        },
        _ => panic!("expected match"),
    }
}

#[test]
fn let_statement_with_type_annotation() {
    let mut parser = Parser::new("let x: I32 = 0xDEAD_BEEF;");
    let stmt = parser.parse_statement().unwrap();
    match stmt {
        Stmt::Let(let_stmt) => {
            assert!(!let_stmt.is_mut);
            assert!(matches!(let_stmt.pattern.kind, PatternKind::Simple { .. }));
            let ty = let_stmt.ty.expect("type annotation");
            assert_eq!(parser.interner().resolve(ty.segments[0].name), "I32");
            match let_stmt.value.kind {
                ExprKind::Integer(lit) => assert_eq!(lit.value, "0xDEADBEEF"),
                _ => panic!("expected int literal"),
            }
        }
        _ => panic!("expected let"),
    }
}

#[test]
fn let_mut_statement() {
    let mut parser = Parser::new("let mut count = 0;");
    match parser.parse_statement().unwrap() {
        Stmt::Let(let_stmt) => assert!(let_stmt.is_mut),
        _ => panic!("expected let"),
    }
}

#[test]
fn break_with_value() {
    let mut parser = Parser::new("while true { break 42; }");
    match parser.parse_statement().unwrap() {
        Stmt::While(w) => match &w.body.stmts[0] {
            Stmt::Break(b) => assert!(b.value.is_some()),
            _ => panic!("expected break"),
        },
        _ => panic!("expected while"),
    }
}

#[test]
fn for_statement_binds_a_pattern() {
    let mut parser = Parser::new("for (k, v) in entries { use_it(k, v); }");
    match parser.parse_statement().unwrap() {
        Stmt::For(f) => assert!(matches!(f.pattern.kind, PatternKind::Tuple { .. })),
        _ => panic!("expected for"),
    }
}

#[test]
fn for_over_open_range() {
    let mut parser = Parser::new("for i in 0.. { step(i); }");
    match parser.parse_statement().unwrap() {
        Stmt::For(f) => match f.iterable.kind {
            ExprKind::Range(range) => {
                assert!(range.start.is_some());
                assert!(range.end.is_none());
            }
            _ => panic!("expected range iterable"),
        },
        _ => panic!("expected for"),
    }
}

#[test]
fn nested_function_statement() {
    let mut parser = Parser::new("fn outer() { fn inner(): I32 { return 1; } return; }");
    match parser.parse_item().unwrap() {
        Item::Func(f) => assert!(matches!(f.body.stmts[0], Stmt::FuncDef(_))),
        _ => panic!("expected fn"),
    }
}

#[test]
fn expression_statement_requires_semicolon() {
    assert!(Parser::new("foo()").parse_module().is_err());
    assert!(Parser::new("foo();").parse_module().is_ok());
    // Brace-ended expressions may drop it
    assert!(Parser::new("if x { y(); }").parse_module().is_ok());
    assert!(Parser::new("match x { _ => 0 }").parse_module().is_ok());
}

#[test]
fn function_item_full_shape() {
    let mut parser = Parser::new("fn add<T: Numeric>(a: T, b: T): T { return a + b; }");
    match parser.parse_item().unwrap() {
        Item::Func(f) => {
            assert_eq!(parser.interner().resolve(f.decl.name), "add");
            assert_eq!(f.decl.type_params.len(), 1);
            assert_eq!(f.decl.type_params[0].bounds.len(), 1);
            assert_eq!(f.decl.params.len(), 2);
            assert!(f.decl.return_type.is_some());
        }
        _ => panic!("expected fn"),
    }
}

#[test]
fn self_parameter_needs_no_annotation() {
    let mut parser = Parser::new("impl Stack { fn len(self): I64 { return self.count; } }");
    match parser.parse_item().unwrap() {
        Item::Impl(block) => {
            let method = &block.methods[0];
            assert_eq!(parser.interner().resolve(method.decl.params[0].name), "self");
            assert!(method.decl.params[0].ty.is_none());
        }
        _ => panic!("expected impl"),
    }
}

#[test]
fn struct_item() {
    let mut parser = Parser::new("struct Pair<A, B> { first: A, second: B, }");
    match parser.parse_item().unwrap() {
        Item::Struct(def) => {
            assert_eq!(def.type_params.len(), 2);
            assert_eq!(def.fields.len(), 2);
        }
        _ => panic!("expected struct"),
    }
}

#[test]
fn enum_item_mixes_variant_shapes() {
    let mut parser =
        Parser::new("enum Shape { Empty, Circle(F64), Rect { width: F64, height: F64 } }");
    match parser.parse_item().unwrap() {
        Item::Enum(def) => {
            assert_eq!(def.variants.len(), 3);
            assert!(matches!(def.variants[0].kind, EnumVariantKind::Unit));
            assert!(matches!(def.variants[1].kind, EnumVariantKind::Tuple(_)));
            assert!(matches!(def.variants[2].kind, EnumVariantKind::Struct(_)));
        }
        _ => panic!("expected enum"),
    }
}

#[test]
fn trait_item_with_associated_type() {
    let mut parser = Parser::new(
        "trait Container<T> { type Iter: Iterator + Clone; fn get(self, i: I64): T; fn len(self): I64; }",
    );
    match parser.parse_item().unwrap() {
        Item::Trait(def) => {
            assert_eq!(def.associated_types.len(), 1);
            assert_eq!(def.associated_types[0].bounds.len(), 2);
            assert_eq!(def.methods.len(), 2);
        }
        _ => panic!("expected trait"),
    }
}

#[test]
fn trait_impl_with_binding() {
    let mut parser = Parser::new(
        "impl<T> Show for Wrapper<T> { type Output = String; fn show(self): String { return name(self); } }",
    );
    match parser.parse_item().unwrap() {
        Item::TraitImpl(block) => {
            assert_eq!(block.type_params.len(), 1);
            assert_eq!(block.associated_types.len(), 1);
            assert_eq!(block.methods.len(), 1);
            assert_eq!(
                parser.interner().resolve(block.trait_name.segments[0].name),
                "Show"
            );
        }
        _ => panic!("expected trait impl"),
    }
}

#[test]
fn type_alias_item() {
    let mut parser = Parser::new("type Pairs<T> = Vec<Pair<T, T>>;");
    match parser.parse_item().unwrap() {
        Item::TypeAlias(alias) => {
            assert_eq!(alias.type_params.len(), 1);
            assert_eq!(alias.aliased.segments[0].type_args.len(), 1);
        }
        _ => panic!("expected type alias"),
    }
}

#[test]
fn module_allows_top_level_statements() {
    let sexpr = module_sexpr("let x = 1; fn main() { use_it(x); }");
    assert!(sexpr.starts_with("(module (let "));
}

#[test]
fn module_requires_full_consumption() {
    // A valid prefix with trailing garbage fails at the module level
    let err = parse_module_err("fn main(): I32 { return 0; } garbage");
    assert!(err.span.start >= "fn main(): I32 { return 0; } ".len());

    // The same text without the garbage parses
    Parser::new("fn main(): I32 { return 0; }")
        .parse_module()
        .unwrap();
}

#[test]
fn sub_rule_entry_points_are_lenient() {
    let mut parser = Parser::new("1 + 2 trailing");
    parser.parse_expression().unwrap();
    assert!(!parser.at_end());
}

#[test]
fn trailing_comments_and_whitespace_are_fine() {
    Parser::new("fn main() { return; } // done\n/* end */\n")
        .parse_module()
        .unwrap();
}

#[test]
fn keyword_boundary_inside_statements() {
    // fn_hello and true_value are identifiers, not keyword-plus-leftover
    let mut parser = Parser::new("let fn_hello = true_value;");
    match parser.parse_statement().unwrap() {
        Stmt::Let(let_stmt) => match let_stmt.value.kind {
            ExprKind::Path(path) => {
                assert_eq!(parser.interner().resolve(path.segments[0].name), "true_value");
            }
            _ => panic!("expected path"),
        },
        _ => panic!("expected let"),
    }
}

#[test]
fn malformed_literal_surfaces_like_expected_token() {
    let err = Parser::new("let x = 0b12;").parse_module().unwrap_err();
    assert!(matches!(
        err.error,
        crate::errors::ParserError::InvalidLiteral { .. }
    ));
}

#[test]
fn deepest_failure_wins() {
    // The error points into the struct pattern, not at the statement head
    let err = parse_module_err("let Point { x, = p;");
    assert!(err.span.start > 4);
}

#[test]
fn error_spans_point_at_the_failure() {
    let err = parse_module_err("fn main( { }");
    // The parameter list is malformed; the error is at or after '('
    assert!(err.span.start >= 8);
}

#[test]
fn block_expression_as_value() {
    let mut parser = Parser::new("let x = { prepare(); };");
    match parser.parse_statement().unwrap() {
        Stmt::Let(let_stmt) => assert!(matches!(let_stmt.value.kind, ExprKind::Block(_))),
        _ => panic!("expected let"),
    }
}

#[test]
fn loops_as_expressions() {
    let mut parser = Parser::new("let w = while ready() { tick(); };");
    match parser.parse_statement().unwrap() {
        Stmt::Let(let_stmt) => assert!(matches!(let_stmt.value.kind, ExprKind::While(_))),
        _ => panic!("expected let"),
    }

    let mut parser = Parser::new("let f = for x in xs { consume(x); };");
    match parser.parse_statement().unwrap() {
        Stmt::Let(let_stmt) => assert!(matches!(let_stmt.value.kind, ExprKind::For(_))),
        _ => panic!("expected let"),
    }
}
