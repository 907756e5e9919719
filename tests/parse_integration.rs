// tests/parse_integration.rs
//
// Whole-program tests through the module-level entry point.

use miette::NamedSource;
use stoat::errors::render_to_string;
use stoat::frontend::{ExprKind, Item, Module, Parser, SexprPrinter, Stmt};
use stoat::module::ModuleRegistry;

fn parse(source: &str) -> Module {
    let mut parser = Parser::new(source);
    assert!(
        parser.lexer_errors().is_empty(),
        "unexpected lexer errors for {source:?}"
    );
    parser.parse_module().unwrap()
}

fn module_sexpr(source: &str) -> String {
    let mut parser = Parser::new(source);
    let module = parser.parse_module().unwrap();
    SexprPrinter::new(parser.interner()).module(&module)
}

const DEMO: &str = r##"
// A small but representative program.
type Grid = Vec<Vec<I32>>;

enum Shape {
    Empty,
    Circle(F64),
    Rect { width: F64, height: F64 },
}

trait Area {
    type Unit: Numeric;
    fn area(self): F64;
}

impl Area for Shape {
    type Unit = F64;
    fn area(self): F64 {
        return match self {
            Shape { .. } => 0.0,
            _ => 1.0,
        };
    }
}

struct Point<T> {
    x: T,
    y: T,
}

impl<T> Point<T> {
    fn magnitude(self): F64 {
        return sqrt((self.x * self.x + self.y * self.y) as F64);
    }
}

fn classify(n: I32): String {
    return match n {
        0 => "zero",
        1 | 2 | 3 => "small",
        x if x < 0 => "negative",
        _ => "large",
    };
}

fn main(): I32 {
    let origin = Point { x: 0, y: 0 };
    let mut total = 0;
    for i in 0..10 {
        if i % 2 == 0 {
            total = total + i;
        } else if i == 7 {
            continue;
        } else {
            total = total - 1;
        }
    }
    let mask = 0b1111_0000U8;
    let big = 0xDEAD_BEEF;
    let msg = "total: {total}, mask: {mask}";
    let raw = r#"{"key": "value"}"#;
    while total > 0 {
        total = total - 1;
        break;
    }
    return 0;
}
"##;

#[test]
fn demo_program_parses() {
    let module = parse(DEMO);
    assert_eq!(module.items.len(), 8);
    assert!(matches!(module.items[0], Item::TypeAlias(_)));
    assert!(matches!(module.items[1], Item::Enum(_)));
    assert!(matches!(module.items[2], Item::Trait(_)));
    assert!(matches!(module.items[3], Item::TraitImpl(_)));
    assert!(matches!(module.items[4], Item::Struct(_)));
    assert!(matches!(module.items[5], Item::Impl(_)));
    assert!(matches!(module.items[6], Item::Func(_)));
    assert!(matches!(module.items[7], Item::Func(_)));
}

#[test]
fn full_consumption_rejects_trailing_text() {
    // Scenario: a valid module followed by garbage must fail even though
    // the prefix alone succeeds.
    let good = "fn main(): I32 { return 0; }";
    Parser::new(good).parse_module().unwrap();

    let bad = "fn main(): I32 { return 0; } garbage";
    assert!(Parser::new(bad).parse_module().is_err());
}

#[test]
fn full_consumption_allows_trailing_trivia() {
    let source = "fn main(): I32 { return 0; }  /* trailing */ // comment\n\n";
    Parser::new(source).parse_module().unwrap();
}

#[test]
fn precedence_laws_via_projection() {
    assert_eq!(
        module_sexpr("let a = 1 + 2 * 3;"),
        module_sexpr("let a = 1 + (2 * 3);")
    );
    assert_eq!(
        module_sexpr("let a = x as I32 as I64;"),
        module_sexpr("let a = (x as I32) as I64;")
    );
    assert_eq!(
        module_sexpr("let a = x + y as I64;"),
        module_sexpr("let a = x + (y as I64);")
    );
}

#[test]
fn associativity_laws_via_projection() {
    assert_eq!(
        module_sexpr("let a = p - q - r;"),
        module_sexpr("let a = (p - q) - r;")
    );
}

#[test]
fn keyword_boundary_property() {
    // keyword + identifier-continuation is one identifier
    for (keyword, text) in [
        ("fn", "fn_hello"),
        ("true", "true_value"),
        ("return", "returnx"),
        ("match", "match3"),
        ("impl", "implx"),
        ("in", "inner"),
    ] {
        let source = format!("let {text} = 1;");
        let module = parse(&source);
        match &module.items[0] {
            Item::Statement(Stmt::Let(let_stmt)) => {
                assert!(
                    matches!(let_stmt.pattern.kind, stoat::frontend::PatternKind::Simple { .. }),
                    "{keyword}: {text} should bind as a plain name"
                );
            }
            _ => panic!("expected let"),
        }
    }
}

#[test]
fn raw_string_scenario_is_verbatim() {
    let source = "let raw = r#\"{\"key\": \"value\"}\"#;";
    let module = parse(source);
    match &module.items[0] {
        Item::Statement(Stmt::Let(let_stmt)) => match &let_stmt.value.kind {
            ExprKind::Str(lit) => assert_eq!(lit.text, "r#\"{\"key\": \"value\"}\"#"),
            _ => panic!("expected string"),
        },
        _ => panic!("expected let"),
    }
}

#[test]
fn binary_literal_scenario() {
    let module = parse("let bits = 0b1111_0000_1010_0101;");
    match &module.items[0] {
        Item::Statement(Stmt::Let(let_stmt)) => match &let_stmt.value.kind {
            ExprKind::Integer(lit) => {
                assert_eq!(lit.value, "0b1111000010100101");
                assert_eq!(lit.suffix, None);
            }
            _ => panic!("expected integer"),
        },
        _ => panic!("expected let"),
    }
}

#[test]
fn diagnostics_show_line_and_caret() {
    let source = "fn main() {\n    let x = ;\n}\n";
    let mut parser = Parser::new(source);
    let err = parser.parse_module().unwrap_err();
    let report = miette::Report::new(err.error)
        .with_source_code(NamedSource::new("demo.stoat", source.to_string()));
    let rendered = render_to_string(report.as_ref());

    // Failing line with a pointer at the offending column, plus the
    // expected-construct message.
    assert!(rendered.contains("let x = ;"), "{rendered}");
    assert!(rendered.contains('^'), "{rendered}");
    assert!(rendered.contains("expected expression"), "{rendered}");
}

#[test]
fn one_diagnostic_per_invocation() {
    // Two broken statements: the parser stops at the first failure.
    let mut parser = Parser::new("let a = ;\nlet b = ;");
    let err = parser.parse_module().unwrap_err();
    assert_eq!(err.span.line, 1);
}

#[test]
fn registry_orders_parsed_modules() {
    let core = parse("fn base(): I32 { return 1; }");
    let util = parse("fn helper(): I32 { return base() + 1; }");
    let app = parse("fn main(): I32 { return helper(); }");

    let mut registry = ModuleRegistry::new();
    registry.register("app", &app).unwrap();
    registry.register("lib.util", &util).unwrap();
    registry.register("lib.core", &core).unwrap();
    registry.add_dependency("app", "lib.util");
    registry.add_dependency("lib.util", "lib.core");

    let order = registry.topological_order().unwrap();
    assert_eq!(order, vec!["lib.core", "lib.util", "app"]);
}

#[test]
fn parses_are_independent() {
    // Two parsers over different buffers share nothing; run them
    // interleaved and on separate threads.
    let handle = std::thread::spawn(|| parse("fn a() { return; }"));
    let here = parse("fn b() { return; }");
    let there = handle.join().unwrap();
    assert_eq!(here.items.len(), 1);
    assert_eq!(there.items.len(), 1);
}

#[test]
fn interpolation_inside_program() {
    let module = parse("fn greet(name: String) { log(\"hello {name}, bye {name}\"); }");
    match &module.items[0] {
        Item::Func(f) => match &f.body.stmts[0] {
            Stmt::Expr(s) => match &s.expr.kind {
                ExprKind::Call(call) => {
                    assert!(matches!(call.args[0].kind, ExprKind::Interp(_)));
                }
                _ => panic!("expected call"),
            },
            _ => panic!("expected expression statement"),
        },
        _ => panic!("expected fn"),
    }
}

#[test]
fn stable_projection_for_identical_inputs() {
    let a = module_sexpr(DEMO);
    let b = module_sexpr(DEMO);
    assert_eq!(a, b);
}
