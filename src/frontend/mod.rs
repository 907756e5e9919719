// src/frontend/mod.rs
//! Stoat frontend: lexer, parser, AST, and textual projections.

pub mod ast;
pub mod intern;
pub mod json;
pub mod lexer;
mod parse_decl;
mod parse_expr;
mod parse_generic;
mod parse_pattern;
mod parse_stmt;
mod parse_string;
mod parse_type;
pub mod parser;
pub mod sexpr;
pub mod token;

pub use ast::{
    AssignExpr, AssociatedType, AssociatedTypeBinding, BinaryExpr, BinaryOp, Block, BreakStmt,
    CallExpr, CastExpr, CharLit, ElseIf, EnumDef, EnumVariant, EnumVariantKind, Expr, ExprKind,
    ExprStmt, FieldAccessExpr, FieldInit, FieldPattern, FloatLit, ForExpr, ForStmt, FuncDecl,
    FuncDef, FuncParam, IfExpr, ImplBlock, IndexExpr, IntegerLit, Item, LetStmt, MatchArm,
    MatchExpr, Module, NodeId, PathSegment, Pattern, PatternKind, RangeExpr, ReturnStmt, StrLit,
    StringPart, StructDef, StructField, StructLiteralExpr, StructPattern, Stmt, Symbol, TraitBound,
    TraitDef, TraitImpl, TypeAlias, TypeName, TypeParam, UnaryExpr, UnaryOp, VariableName,
    WhileExpr, WhileStmt,
};
pub use intern::Interner;
pub use json::JsonProjector;
pub use lexer::Lexer;
pub use parser::{ParseError, Parser};
pub use sexpr::SexprPrinter;
pub use token::{Span, Token, TokenType};
