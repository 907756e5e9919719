// src/frontend/json.rs
//! Structured tree-object projection of the AST.
//!
//! Every node becomes a JSON object with a `kind` tag and named fields.
//! Like the S-expression form it is total and stable; tests use either
//! interchangeably for golden-value comparison.

use serde_json::{json, Value};

use crate::frontend::ast::*;
use crate::frontend::Interner;

/// Builds `serde_json::Value` trees from AST nodes, resolving interned
/// symbols along the way.
pub struct JsonProjector<'a> {
    interner: &'a Interner,
}

impl<'a> JsonProjector<'a> {
    pub fn new(interner: &'a Interner) -> Self {
        Self { interner }
    }

    fn name(&self, sym: Symbol) -> Value {
        Value::String(self.interner.resolve(sym).to_string())
    }

    pub fn module(&self, module: &Module) -> Value {
        json!({
            "kind": "Module",
            "items": module.items.iter().map(|i| self.item(i)).collect::<Vec<_>>(),
        })
    }

    pub fn item(&self, item: &Item) -> Value {
        match item {
            Item::Func(f) => self.func_def(f),
            Item::Struct(s) => json!({
                "kind": "StructDef",
                "name": self.name(s.name),
                "type_params": self.type_params(&s.type_params),
                "fields": s.fields.iter().map(|f| self.struct_field(f)).collect::<Vec<_>>(),
            }),
            Item::Enum(e) => json!({
                "kind": "EnumDef",
                "name": self.name(e.name),
                "type_params": self.type_params(&e.type_params),
                "variants": e.variants.iter().map(|v| self.enum_variant(v)).collect::<Vec<_>>(),
            }),
            Item::Trait(t) => json!({
                "kind": "TraitDef",
                "name": self.name(t.name),
                "type_params": self.type_params(&t.type_params),
                "associated_types": t.associated_types.iter().map(|a| json!({
                    "name": self.name(a.name),
                    "bounds": self.bounds(&a.bounds),
                })).collect::<Vec<_>>(),
                "methods": t.methods.iter().map(|m| self.func_decl(m)).collect::<Vec<_>>(),
            }),
            Item::Impl(i) => json!({
                "kind": "ImplBlock",
                "type_params": self.type_params(&i.type_params),
                "self_type": self.type_name(&i.self_type),
                "methods": i.methods.iter().map(|m| self.func_def(m)).collect::<Vec<_>>(),
            }),
            Item::TraitImpl(i) => json!({
                "kind": "TraitImpl",
                "type_params": self.type_params(&i.type_params),
                "trait_name": self.type_name(&i.trait_name),
                "self_type": self.type_name(&i.self_type),
                "associated_types": i.associated_types.iter().map(|b| json!({
                    "name": self.name(b.name),
                    "type": self.type_name(&b.ty),
                })).collect::<Vec<_>>(),
                "methods": i.methods.iter().map(|m| self.func_def(m)).collect::<Vec<_>>(),
            }),
            Item::TypeAlias(a) => json!({
                "kind": "TypeAlias",
                "name": self.name(a.name),
                "type_params": self.type_params(&a.type_params),
                "aliased": self.type_name(&a.aliased),
            }),
            Item::Statement(s) => self.stmt(s),
        }
    }

    pub fn expr(&self, expr: &Expr) -> Value {
        match &expr.kind {
            ExprKind::Integer(lit) => json!({
                "kind": "Integer",
                "value": lit.value,
                "suffix": lit.suffix,
            }),
            ExprKind::Float(lit) => json!({
                "kind": "Float",
                "value": lit.value,
                "suffix": lit.suffix,
            }),
            ExprKind::Str(lit) => json!({ "kind": "String", "text": lit.text }),
            ExprKind::Char(lit) => json!({ "kind": "Char", "text": lit.text }),
            ExprKind::Bool(b) => json!({ "kind": "Bool", "value": b }),
            ExprKind::Unit => json!({ "kind": "Unit" }),
            ExprKind::Path(path) => json!({
                "kind": "Path",
                "segments": self.segments(&path.segments),
            }),
            ExprKind::Binary(bin) => json!({
                "kind": "Binary",
                "op": bin.op.as_str(),
                "lhs": self.expr(&bin.lhs),
                "rhs": self.expr(&bin.rhs),
            }),
            ExprKind::Unary(un) => json!({
                "kind": "Unary",
                "op": un.op.as_str(),
                "operand": self.expr(&un.operand),
            }),
            ExprKind::Assign(assign) => json!({
                "kind": "Assign",
                "target": self.expr(&assign.target),
                "value": self.expr(&assign.value),
            }),
            ExprKind::Cast(cast) => json!({
                "kind": "Cast",
                "operand": self.expr(&cast.operand),
                "target_type": self.type_name(&cast.target_type),
            }),
            ExprKind::Call(call) => json!({
                "kind": "Call",
                "callee": self.expr(&call.callee),
                "args": call.args.iter().map(|a| self.expr(a)).collect::<Vec<_>>(),
            }),
            ExprKind::Index(idx) => json!({
                "kind": "Index",
                "base": self.expr(&idx.base),
                "index": self.expr(&idx.index),
            }),
            ExprKind::Field(fa) => json!({
                "kind": "FieldAccess",
                "object": self.expr(&fa.object),
                "field": self.name(fa.field),
            }),
            ExprKind::Range(range) => json!({
                "kind": "Range",
                "start": range.start.as_ref().map(|e| self.expr(e)),
                "end": range.end.as_ref().map(|e| self.expr(e)),
                "inclusive": range.inclusive,
            }),
            ExprKind::If(if_expr) => json!({
                "kind": "If",
                "condition": self.expr(&if_expr.condition),
                "then_block": self.block(&if_expr.then_block),
                "else_ifs": if_expr.else_ifs.iter().map(|e| json!({
                    "condition": self.expr(&e.condition),
                    "block": self.block(&e.block),
                })).collect::<Vec<_>>(),
                "else_block": if_expr.else_block.as_ref().map(|b| self.block(b)),
            }),
            ExprKind::Match(m) => json!({
                "kind": "Match",
                "scrutinee": self.expr(&m.scrutinee),
                "arms": m.arms.iter().map(|arm| json!({
                    "pattern": self.pattern(&arm.pattern),
                    "guard": arm.guard.as_ref().map(|g| self.expr(g)),
                    "body": self.expr(&arm.body),
                })).collect::<Vec<_>>(),
            }),
            ExprKind::For(f) => json!({
                "kind": "For",
                "pattern": self.pattern(&f.pattern),
                "iterable": self.expr(&f.iterable),
                "body": self.block(&f.body),
            }),
            ExprKind::While(w) => json!({
                "kind": "While",
                "condition": self.expr(&w.condition),
                "body": self.block(&w.body),
            }),
            ExprKind::Array(elements) => json!({
                "kind": "Array",
                "elements": elements.iter().map(|e| self.expr(e)).collect::<Vec<_>>(),
            }),
            ExprKind::Tuple(elements) => json!({
                "kind": "Tuple",
                "elements": elements.iter().map(|e| self.expr(e)).collect::<Vec<_>>(),
            }),
            ExprKind::StructLiteral(lit) => json!({
                "kind": "StructLiteral",
                "type_name": self.type_name(&lit.type_name),
                "fields": lit.fields.iter().map(|f| json!({
                    "name": self.name(f.name),
                    "value": self.expr(&f.value),
                })).collect::<Vec<_>>(),
            }),
            ExprKind::Interp(parts) => json!({
                "kind": "StringInterp",
                "parts": parts.iter().map(|part| match part {
                    StringPart::Literal(text) => json!({ "kind": "Text", "text": text }),
                    StringPart::Expr(e) => self.expr(e),
                }).collect::<Vec<_>>(),
            }),
            ExprKind::Block(block) => self.block_expr(block),
        }
    }

    pub fn pattern(&self, pattern: &Pattern) -> Value {
        match &pattern.kind {
            PatternKind::Simple { name } => json!({
                "kind": "SimplePattern",
                "name": self.name(*name),
            }),
            PatternKind::Wildcard => json!({ "kind": "WildcardPattern" }),
            PatternKind::Literal(expr) => json!({
                "kind": "LiteralPattern",
                "literal": self.expr(expr),
            }),
            PatternKind::Tuple { elements } => json!({
                "kind": "TuplePattern",
                "elements": elements.iter().map(|p| self.pattern(p)).collect::<Vec<_>>(),
            }),
            PatternKind::Struct(sp) => json!({
                "kind": "StructPattern",
                "type_name": self.type_name(&sp.type_name),
                "fields": sp.fields.iter().map(|f| json!({
                    "name": self.name(f.name),
                    "pattern": f.pattern.as_ref().map(|p| self.pattern(p)),
                })).collect::<Vec<_>>(),
                "has_rest": sp.has_rest,
            }),
            PatternKind::Or { alternatives } => json!({
                "kind": "OrPattern",
                "alternatives": alternatives.iter().map(|p| self.pattern(p)).collect::<Vec<_>>(),
            }),
        }
    }

    pub fn stmt(&self, stmt: &Stmt) -> Value {
        match stmt {
            Stmt::Let(s) => json!({
                "kind": "LetStatement",
                "is_mut": s.is_mut,
                "pattern": self.pattern(&s.pattern),
                "type": s.ty.as_ref().map(|t| self.type_name(t)),
                "value": self.expr(&s.value),
            }),
            Stmt::Return(s) => json!({
                "kind": "ReturnStatement",
                "value": s.value.as_ref().map(|e| self.expr(e)),
            }),
            Stmt::Break(s) => json!({
                "kind": "BreakStatement",
                "value": s.value.as_ref().map(|e| self.expr(e)),
            }),
            Stmt::Continue(_) => json!({ "kind": "ContinueStatement" }),
            Stmt::Expr(s) => json!({
                "kind": "ExprStatement",
                "expr": self.expr(&s.expr),
            }),
            Stmt::While(s) => json!({
                "kind": "WhileStatement",
                "condition": self.expr(&s.condition),
                "body": self.block(&s.body),
            }),
            Stmt::For(s) => json!({
                "kind": "ForStatement",
                "pattern": self.pattern(&s.pattern),
                "iterable": self.expr(&s.iterable),
                "body": self.block(&s.body),
            }),
            Stmt::Block(b) => self.block_expr(b),
            Stmt::FuncDef(f) => self.func_def(f),
        }
    }

    fn block(&self, block: &Block) -> Value {
        Value::Array(block.stmts.iter().map(|s| self.stmt(s)).collect())
    }

    fn block_expr(&self, block: &Block) -> Value {
        json!({
            "kind": "Block",
            "stmts": self.block(block),
        })
    }

    pub fn type_name(&self, ty: &TypeName) -> Value {
        json!({
            "kind": "TypeName",
            "segments": self.segments(&ty.segments),
        })
    }

    fn segments(&self, segments: &[PathSegment]) -> Value {
        Value::Array(
            segments
                .iter()
                .map(|segment| {
                    json!({
                        "name": self.name(segment.name),
                        "type_args": segment.type_args.iter()
                            .map(|a| self.type_name(a))
                            .collect::<Vec<_>>(),
                    })
                })
                .collect(),
        )
    }

    fn type_params(&self, params: &[TypeParam]) -> Value {
        Value::Array(
            params
                .iter()
                .map(|param| {
                    json!({
                        "name": self.type_name(&param.name),
                        "bounds": self.bounds(&param.bounds),
                    })
                })
                .collect(),
        )
    }

    fn bounds(&self, bounds: &[TraitBound]) -> Value {
        Value::Array(bounds.iter().map(|b| self.type_name(&b.name)).collect())
    }

    fn struct_field(&self, field: &StructField) -> Value {
        json!({
            "name": self.name(field.name),
            "type": self.type_name(&field.ty),
        })
    }

    fn enum_variant(&self, variant: &EnumVariant) -> Value {
        match &variant.kind {
            EnumVariantKind::Unit => json!({
                "kind": "UnitVariant",
                "name": self.name(variant.name),
            }),
            EnumVariantKind::Tuple(types) => json!({
                "kind": "TupleVariant",
                "name": self.name(variant.name),
                "types": types.iter().map(|t| self.type_name(t)).collect::<Vec<_>>(),
            }),
            EnumVariantKind::Struct(fields) => json!({
                "kind": "StructVariant",
                "name": self.name(variant.name),
                "fields": fields.iter().map(|f| self.struct_field(f)).collect::<Vec<_>>(),
            }),
        }
    }

    fn func_decl(&self, decl: &FuncDecl) -> Value {
        json!({
            "kind": "FuncDecl",
            "name": self.name(decl.name),
            "type_params": self.type_params(&decl.type_params),
            "params": decl.params.iter().map(|p| json!({
                "name": self.name(p.name),
                "type": p.ty.as_ref().map(|t| self.type_name(t)),
            })).collect::<Vec<_>>(),
            "return_type": decl.return_type.as_ref().map(|t| self.type_name(t)),
        })
    }

    fn func_def(&self, func: &FuncDef) -> Value {
        json!({
            "kind": "FuncDef",
            "declaration": self.func_decl(&func.decl),
            "body": self.block(&func.body),
        })
    }
}
