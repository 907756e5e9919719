// src/frontend/sexpr.rs
//! Compact S-expression projection of the AST.
//!
//! Total and stable: every node kind has exactly one rendering and the
//! same tree always prints the same text, so golden-value tests can
//! compare trees by comparing strings.

use crate::frontend::ast::*;
use crate::frontend::Interner;

/// S-expression printer that resolves symbols via an Interner.
pub struct SexprPrinter<'a> {
    interner: &'a Interner,
}

impl<'a> SexprPrinter<'a> {
    pub fn new(interner: &'a Interner) -> Self {
        Self { interner }
    }

    pub fn module(&self, module: &Module) -> String {
        let mut out = String::from("(module");
        for item in &module.items {
            out.push(' ');
            out.push_str(&self.item(item));
        }
        out.push(')');
        out
    }

    pub fn item(&self, item: &Item) -> String {
        match item {
            Item::Func(f) => self.func_def(f),
            Item::Struct(s) => self.struct_def(s),
            Item::Enum(e) => self.enum_def(e),
            Item::Trait(t) => self.trait_def(t),
            Item::Impl(i) => self.impl_block(i),
            Item::TraitImpl(i) => self.trait_impl(i),
            Item::TypeAlias(a) => self.type_alias(a),
            Item::Statement(s) => self.stmt(s),
        }
    }

    pub fn expr(&self, expr: &Expr) -> String {
        match &expr.kind {
            ExprKind::Integer(lit) => match &lit.suffix {
                Some(suffix) => format!("(integer {} {})", quote(&lit.value), quote(suffix)),
                None => format!("(integer {})", quote(&lit.value)),
            },
            ExprKind::Float(lit) => match &lit.suffix {
                Some(suffix) => format!("(float {} {})", quote(&lit.value), quote(suffix)),
                None => format!("(float {})", quote(&lit.value)),
            },
            ExprKind::Str(lit) => format!("(string {})", quote(&lit.text)),
            ExprKind::Char(lit) => format!("(char {})", quote(&lit.text)),
            ExprKind::Bool(b) => format!("(bool {})", b),
            ExprKind::Unit => "(unit)".to_string(),
            ExprKind::Path(path) => format!("(path {})", quote(&segments_text(self.interner, &path.segments))),
            ExprKind::Binary(bin) => format!(
                "(binary {} {} {})",
                bin.op.as_str(),
                self.expr(&bin.lhs),
                self.expr(&bin.rhs)
            ),
            ExprKind::Unary(un) => {
                format!("(unary {} {})", un.op.as_str(), self.expr(&un.operand))
            }
            ExprKind::Assign(assign) => format!(
                "(assign {} {})",
                self.expr(&assign.target),
                self.expr(&assign.value)
            ),
            ExprKind::Cast(cast) => format!(
                "(cast {} {})",
                self.expr(&cast.operand),
                self.type_name(&cast.target_type)
            ),
            ExprKind::Call(call) => {
                let mut out = format!("(call {}", self.expr(&call.callee));
                for arg in &call.args {
                    out.push(' ');
                    out.push_str(&self.expr(arg));
                }
                out.push(')');
                out
            }
            ExprKind::Index(idx) => {
                format!("(index {} {})", self.expr(&idx.base), self.expr(&idx.index))
            }
            ExprKind::Field(fa) => format!(
                "(field {} {})",
                self.expr(&fa.object),
                quote(self.interner.resolve(fa.field))
            ),
            ExprKind::Range(range) => format!(
                "(range {} {} {})",
                self.opt_expr(range.start.as_ref()),
                self.opt_expr(range.end.as_ref()),
                range.inclusive
            ),
            ExprKind::If(if_expr) => {
                let mut out = format!(
                    "(if {} {}",
                    self.expr(&if_expr.condition),
                    self.block(&if_expr.then_block)
                );
                for elif in &if_expr.else_ifs {
                    out.push_str(&format!(
                        " (elif {} {})",
                        self.expr(&elif.condition),
                        self.block(&elif.block)
                    ));
                }
                match &if_expr.else_block {
                    Some(block) => out.push_str(&format!(" {}", self.block(block))),
                    None => out.push_str(" nil"),
                }
                out.push(')');
                out
            }
            ExprKind::Match(m) => {
                let mut out = format!("(match {}", self.expr(&m.scrutinee));
                for arm in &m.arms {
                    out.push_str(&format!(
                        " (arm {} {} {})",
                        self.pattern(&arm.pattern),
                        self.opt_expr(arm.guard.as_ref()),
                        self.expr(&arm.body)
                    ));
                }
                out.push(')');
                out
            }
            ExprKind::For(f) => format!(
                "(for {} {} {})",
                self.pattern(&f.pattern),
                self.expr(&f.iterable),
                self.block(&f.body)
            ),
            ExprKind::While(w) => {
                format!("(while {} {})", self.expr(&w.condition), self.block(&w.body))
            }
            ExprKind::Array(elements) => {
                let mut out = String::from("(array");
                for e in elements {
                    out.push(' ');
                    out.push_str(&self.expr(e));
                }
                out.push(')');
                out
            }
            ExprKind::Tuple(elements) => {
                let mut out = String::from("(tuple");
                for e in elements {
                    out.push(' ');
                    out.push_str(&self.expr(e));
                }
                out.push(')');
                out
            }
            ExprKind::StructLiteral(lit) => {
                let mut out = format!("(struct-literal {}", self.type_name(&lit.type_name));
                for field in &lit.fields {
                    out.push_str(&format!(
                        " (field-init {} {})",
                        quote(self.interner.resolve(field.name)),
                        self.expr(&field.value)
                    ));
                }
                out.push(')');
                out
            }
            ExprKind::Interp(parts) => {
                let mut out = String::from("(interp");
                for part in parts {
                    out.push(' ');
                    match part {
                        StringPart::Literal(text) => out.push_str(&format!("(text {})", quote(text))),
                        StringPart::Expr(e) => out.push_str(&self.expr(e)),
                    }
                }
                out.push(')');
                out
            }
            ExprKind::Block(block) => self.block(block),
        }
    }

    fn opt_expr(&self, expr: Option<&Expr>) -> String {
        match expr {
            Some(e) => self.expr(e),
            None => "nil".to_string(),
        }
    }

    pub fn pattern(&self, pattern: &Pattern) -> String {
        match &pattern.kind {
            PatternKind::Simple { name } => {
                format!("(pattern {})", quote(self.interner.resolve(*name)))
            }
            PatternKind::Wildcard => "(wildcard)".to_string(),
            PatternKind::Literal(expr) => format!("(literal {})", self.expr(expr)),
            PatternKind::Tuple { elements } => {
                let mut out = String::from("(tuple-pattern");
                for e in elements {
                    out.push(' ');
                    out.push_str(&self.pattern(e));
                }
                out.push(')');
                out
            }
            PatternKind::Struct(sp) => {
                let mut out = format!("(struct-pattern {}", self.type_name(&sp.type_name));
                for field in &sp.fields {
                    match &field.pattern {
                        Some(p) => out.push_str(&format!(
                            " (field {} {})",
                            quote(self.interner.resolve(field.name)),
                            self.pattern(p)
                        )),
                        None => out.push_str(&format!(
                            " (field {})",
                            quote(self.interner.resolve(field.name))
                        )),
                    }
                }
                if sp.has_rest {
                    out.push_str(" ..");
                }
                out.push(')');
                out
            }
            PatternKind::Or { alternatives } => {
                let mut out = String::from("(or-pattern");
                for p in alternatives {
                    out.push(' ');
                    out.push_str(&self.pattern(p));
                }
                out.push(')');
                out
            }
        }
    }

    pub fn stmt(&self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Let(s) => {
                let ty = match &s.ty {
                    Some(t) => self.type_name(t),
                    None => "nil".to_string(),
                };
                format!(
                    "(let {} {} {} {})",
                    s.is_mut,
                    self.pattern(&s.pattern),
                    ty,
                    self.expr(&s.value)
                )
            }
            Stmt::Return(s) => format!("(return {})", self.opt_expr(s.value.as_ref())),
            Stmt::Break(s) => format!("(break {})", self.opt_expr(s.value.as_ref())),
            Stmt::Continue(_) => "(continue)".to_string(),
            Stmt::Expr(s) => format!("(expr {})", self.expr(&s.expr)),
            Stmt::While(s) => {
                format!("(while {} {})", self.expr(&s.condition), self.block(&s.body))
            }
            Stmt::For(s) => format!(
                "(for {} {} {})",
                self.pattern(&s.pattern),
                self.expr(&s.iterable),
                self.block(&s.body)
            ),
            Stmt::Block(b) => self.block(b),
            Stmt::FuncDef(f) => self.func_def(f),
        }
    }

    pub fn block(&self, block: &Block) -> String {
        let mut out = String::from("(block");
        for stmt in &block.stmts {
            out.push(' ');
            out.push_str(&self.stmt(stmt));
        }
        out.push(')');
        out
    }

    pub fn type_name(&self, ty: &TypeName) -> String {
        format!("(type {})", quote(&segments_text(self.interner, &ty.segments)))
    }

    fn type_params(&self, params: &[TypeParam]) -> String {
        let mut out = String::from("(type-params");
        for param in params {
            out.push_str(&format!(
                " (type-param {}",
                quote(&segments_text(self.interner, &param.name.segments))
            ));
            for bound in &param.bounds {
                out.push_str(&format!(
                    " (bound {})",
                    quote(&segments_text(self.interner, &bound.name.segments))
                ));
            }
            out.push(')');
        }
        out.push(')');
        out
    }

    fn func_params(&self, params: &[FuncParam]) -> String {
        let mut out = String::from("(params");
        for param in params {
            let ty = match &param.ty {
                Some(t) => self.type_name(t),
                None => "nil".to_string(),
            };
            out.push_str(&format!(
                " (param {} {})",
                quote(self.interner.resolve(param.name)),
                ty
            ));
        }
        out.push(')');
        out
    }

    fn func_sig(&self, tag: &str, decl: &FuncDecl) -> String {
        let ret = match &decl.return_type {
            Some(t) => self.type_name(t),
            None => "nil".to_string(),
        };
        format!(
            "({} {} {} {} {}",
            tag,
            quote(self.interner.resolve(decl.name)),
            self.type_params(&decl.type_params),
            self.func_params(&decl.params),
            ret
        )
    }

    pub fn func_def(&self, func: &FuncDef) -> String {
        format!("{} {})", self.func_sig("fn", &func.decl), self.block(&func.body))
    }

    fn struct_def(&self, def: &StructDef) -> String {
        let mut out = format!(
            "(struct {} {}",
            quote(self.interner.resolve(def.name)),
            self.type_params(&def.type_params)
        );
        for field in &def.fields {
            out.push_str(&format!(
                " (field {} {})",
                quote(self.interner.resolve(field.name)),
                self.type_name(&field.ty)
            ));
        }
        out.push(')');
        out
    }

    fn enum_def(&self, def: &EnumDef) -> String {
        let mut out = format!(
            "(enum {} {}",
            quote(self.interner.resolve(def.name)),
            self.type_params(&def.type_params)
        );
        for variant in &def.variants {
            out.push_str(&format!(" (variant {}", quote(self.interner.resolve(variant.name))));
            match &variant.kind {
                EnumVariantKind::Unit => {}
                EnumVariantKind::Tuple(types) => {
                    out.push_str(" (types");
                    for ty in types {
                        out.push(' ');
                        out.push_str(&self.type_name(ty));
                    }
                    out.push(')');
                }
                EnumVariantKind::Struct(fields) => {
                    out.push_str(" (fields");
                    for field in fields {
                        out.push_str(&format!(
                            " (field {} {})",
                            quote(self.interner.resolve(field.name)),
                            self.type_name(&field.ty)
                        ));
                    }
                    out.push(')');
                }
            }
            out.push(')');
        }
        out.push(')');
        out
    }

    fn trait_def(&self, def: &TraitDef) -> String {
        let mut out = format!(
            "(trait {} {}",
            quote(self.interner.resolve(def.name)),
            self.type_params(&def.type_params)
        );
        for assoc in &def.associated_types {
            out.push_str(&format!(" (assoc-type {}", quote(self.interner.resolve(assoc.name))));
            for bound in &assoc.bounds {
                out.push_str(&format!(
                    " (bound {})",
                    quote(&segments_text(self.interner, &bound.name.segments))
                ));
            }
            out.push(')');
        }
        for sig in &def.methods {
            out.push_str(&format!(" {})", self.func_sig("fn-sig", sig)));
        }
        out.push(')');
        out
    }

    fn impl_block(&self, block: &ImplBlock) -> String {
        let mut out = format!(
            "(impl {} {}",
            self.type_params(&block.type_params),
            self.type_name(&block.self_type)
        );
        for method in &block.methods {
            out.push(' ');
            out.push_str(&self.func_def(method));
        }
        out.push(')');
        out
    }

    fn trait_impl(&self, block: &TraitImpl) -> String {
        let mut out = format!(
            "(impl-trait {} {} {}",
            self.type_params(&block.type_params),
            self.type_name(&block.trait_name),
            self.type_name(&block.self_type)
        );
        for binding in &block.associated_types {
            out.push_str(&format!(
                " (assoc-bind {} {})",
                quote(self.interner.resolve(binding.name)),
                self.type_name(&binding.ty)
            ));
        }
        for method in &block.methods {
            out.push(' ');
            out.push_str(&self.func_def(method));
        }
        out.push(')');
        out
    }

    fn type_alias(&self, alias: &TypeAlias) -> String {
        format!(
            "(type-alias {} {} {})",
            quote(self.interner.resolve(alias.name)),
            self.type_params(&alias.type_params),
            self.type_name(&alias.aliased)
        )
    }
}

/// Canonical one-line text of a path: segments joined with '.', template
/// arguments in angle brackets, recursively.
pub(crate) fn segments_text(interner: &Interner, segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(interner.resolve(segment.name));
        if !segment.type_args.is_empty() {
            out.push('<');
            for (j, arg) in segment.type_args.iter().enumerate() {
                if j > 0 {
                    out.push_str(", ");
                }
                out.push_str(&segments_text(interner, &arg.segments));
            }
            out.push('>');
        }
    }
    out
}

/// Quote a string for S-expression output, escaping embedded quotes and
/// backslashes so the projection stays unambiguous.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
