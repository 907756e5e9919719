// src/frontend/ast.rs
//
// The Stoat AST. Every node family is a closed sum type so later passes
// can match exhaustively. Nodes own their children outright; there are
// no back-references, and nothing is mutated after construction.

use crate::frontend::Span;

/// Unique identifier for symbols (interned strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Create a Symbol from a raw index. Only the interner should use this.
    pub(crate) fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the underlying index.
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Unique identifier for AST nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NodeId(u32);

impl NodeId {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// One segment of a dotted path: a name plus optional template parameters.
/// Any segment may carry parameters, not only the last
/// (`Container<I32>.Iterator<Forward>` is valid).
#[derive(Debug, Clone)]
pub struct PathSegment {
    pub name: Symbol,
    pub type_args: Vec<TypeName>,
    pub span: Span,
}

/// A dotted, optionally templated name in the type namespace.
///
/// A successfully parsed name always has at least one segment; an empty
/// segment list never denotes a valid value.
#[derive(Debug, Clone)]
pub struct TypeName {
    pub segments: Vec<PathSegment>,
    pub span: Span,
}

/// A dotted, optionally templated name in the value namespace. Same shape
/// as `TypeName`, kept distinct so semantic analysis can enforce
/// namespace rules syntactically.
#[derive(Debug, Clone)]
pub struct VariableName {
    pub segments: Vec<PathSegment>,
    pub span: Span,
}

impl VariableName {
    /// Reinterpret this value-namespace path as a type name (used when a
    /// parsed path turns out to head a struct literal).
    pub fn into_type_name(self) -> TypeName {
        TypeName {
            segments: self.segments,
            span: self.span,
        }
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Expr {
    pub id: NodeId,
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Integer literal: cleaned digits (underscores stripped, base prefix
    /// lowercased) plus the suffix exactly as written.
    Integer(IntegerLit),
    /// Float literal: cleaned text, or canonical "nan"/"inf".
    Float(FloatLit),
    /// String literal, source text verbatim including quotes/escapes and
    /// any raw-string delimiters. Decoding is deferred.
    Str(StrLit),
    /// Char literal, source text verbatim including quotes.
    Char(CharLit),
    Bool(bool),
    /// `()`
    Unit,
    /// Value-namespace path reference
    Path(VariableName),
    Binary(Box<BinaryExpr>),
    Unary(Box<UnaryExpr>),
    Assign(Box<AssignExpr>),
    Cast(Box<CastExpr>),
    Call(Box<CallExpr>),
    Index(Box<IndexExpr>),
    Field(Box<FieldAccessExpr>),
    Range(Box<RangeExpr>),
    If(Box<IfExpr>),
    Match(Box<MatchExpr>),
    For(Box<ForExpr>),
    While(Box<WhileExpr>),
    Array(Vec<Expr>),
    Tuple(Vec<Expr>),
    StructLiteral(Box<StructLiteralExpr>),
    /// Interpolated string: literal segments (still escaped) interleaved
    /// with embedded expressions.
    Interp(Vec<StringPart>),
    Block(Box<Block>),
}

#[derive(Debug, Clone)]
pub struct IntegerLit {
    pub value: String,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FloatLit {
    pub value: String,
    pub suffix: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StrLit {
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct CharLit {
    pub text: String,
}

#[derive(Debug, Clone)]
pub enum StringPart {
    Literal(String),
    Expr(Box<Expr>),
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub lhs: Expr,
    pub op: BinaryOp,
    pub rhs: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Expr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Pos,
    Not,
    BitNot,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Pos => "+",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }
}

/// Assignment. The target is an ordinary expression whose shape (path,
/// field access, or index) was validated structurally by the parser.
#[derive(Debug, Clone)]
pub struct AssignExpr {
    pub target: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone)]
pub struct CastExpr {
    pub operand: Expr,
    pub target_type: TypeName,
}

#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: Expr,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct IndexExpr {
    pub base: Expr,
    pub index: Expr,
}

#[derive(Debug, Clone)]
pub struct FieldAccessExpr {
    pub object: Expr,
    pub field: Symbol,
    pub field_span: Span,
}

/// Range with both bounds optional; `..` alone is valid.
#[derive(Debug, Clone)]
pub struct RangeExpr {
    pub start: Option<Expr>,
    pub end: Option<Expr>,
    pub inclusive: bool,
}

#[derive(Debug, Clone)]
pub struct IfExpr {
    pub condition: Expr,
    pub then_block: Block,
    pub else_ifs: Vec<ElseIf>,
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone)]
pub struct ElseIf {
    pub condition: Expr,
    pub block: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct MatchExpr {
    pub scrutinee: Expr,
    pub arms: Vec<MatchArm>,
}

#[derive(Debug, Clone)]
pub struct MatchArm {
    pub id: NodeId,
    pub pattern: Pattern,
    pub guard: Option<Expr>,
    pub body: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ForExpr {
    pub pattern: Pattern,
    pub iterable: Expr,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct WhileExpr {
    pub condition: Expr,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct StructLiteralExpr {
    pub type_name: TypeName,
    pub fields: Vec<FieldInit>,
}

/// Field initializer in a struct literal. There is no shorthand form at
/// the literal level; only patterns support shorthand.
#[derive(Debug, Clone)]
pub struct FieldInit {
    pub name: Symbol,
    pub value: Expr,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Pattern {
    pub id: NodeId,
    pub kind: PatternKind,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum PatternKind {
    /// Binding pattern: a bare name
    Simple { name: Symbol },
    /// `_`
    Wildcard,
    /// Literal pattern (possibly a negated numeric literal)
    Literal(Box<Expr>),
    /// `(a, b, ...)`; zero elements is the unit pattern
    Tuple { elements: Vec<Pattern> },
    /// `Type { field, field: pat, .. }`
    Struct(Box<StructPattern>),
    /// `a | b | ...`; collapses to the bare atom when only one
    Or { alternatives: Vec<Pattern> },
}

#[derive(Debug, Clone)]
pub struct StructPattern {
    pub type_name: TypeName,
    pub fields: Vec<FieldPattern>,
    /// True when `..` was the syntactically last element before `}`.
    pub has_rest: bool,
}

/// A field in a struct pattern. `pattern: None` is the shorthand form
/// binding the field name to itself.
#[derive(Debug, Clone)]
pub struct FieldPattern {
    pub name: Symbol,
    pub pattern: Option<Pattern>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Break(BreakStmt),
    Continue(Span),
    Expr(ExprStmt),
    While(WhileStmt),
    For(ForStmt),
    Block(Block),
    FuncDef(Box<FuncDef>),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Let(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Break(s) => s.span,
            Stmt::Continue(span) => *span,
            Stmt::Expr(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Block(b) => b.span,
            Stmt::FuncDef(f) => f.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LetStmt {
    pub is_mut: bool,
    pub pattern: Pattern,
    pub ty: Option<TypeName>,
    pub value: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BreakStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ForStmt {
    pub pattern: Pattern,
    pub iterable: Expr,
    pub body: Block,
    pub span: Span,
}

/// Block of statements
#[derive(Debug, Clone)]
pub struct Block {
    pub stmts: Vec<Stmt>,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FuncDef {
    pub decl: FuncDecl,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub name: Symbol,
    pub name_span: Span,
    pub type_params: Vec<TypeParam>,
    pub params: Vec<FuncParam>,
    pub return_type: Option<TypeName>,
    pub span: Span,
}

/// Function parameter. The type annotation is optional so a bare `self`
/// receiver can appear in impl-block methods.
#[derive(Debug, Clone)]
pub struct FuncParam {
    pub name: Symbol,
    pub ty: Option<TypeName>,
    pub span: Span,
}

/// Generic type parameter: `T` or `T: Bound + Bound`
#[derive(Debug, Clone)]
pub struct TypeParam {
    pub name: TypeName,
    pub bounds: Vec<TraitBound>,
    pub span: Span,
}

/// One trait bound: a possibly-qualified type name.
#[derive(Debug, Clone)]
pub struct TraitBound {
    pub name: TypeName,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct StructDef {
    pub name: Symbol,
    pub type_params: Vec<TypeParam>,
    pub fields: Vec<StructField>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct StructField {
    pub name: Symbol,
    pub ty: TypeName,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct EnumDef {
    pub name: Symbol,
    pub type_params: Vec<TypeParam>,
    pub variants: Vec<EnumVariant>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct EnumVariant {
    pub name: Symbol,
    pub kind: EnumVariantKind,
    pub span: Span,
}

/// Unit, tuple, and struct-shaped enum variants mix freely in one enum.
#[derive(Debug, Clone)]
pub enum EnumVariantKind {
    Unit,
    Tuple(Vec<TypeName>),
    Struct(Vec<StructField>),
}

#[derive(Debug, Clone)]
pub struct TraitDef {
    pub name: Symbol,
    pub type_params: Vec<TypeParam>,
    pub associated_types: Vec<AssociatedType>,
    pub methods: Vec<FuncDecl>,
    pub span: Span,
}

/// `type Name: Bound + Bound;` inside a trait
#[derive(Debug, Clone)]
pub struct AssociatedType {
    pub name: Symbol,
    pub bounds: Vec<TraitBound>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ImplBlock {
    pub type_params: Vec<TypeParam>,
    pub self_type: TypeName,
    pub methods: Vec<FuncDef>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TraitImpl {
    pub type_params: Vec<TypeParam>,
    pub trait_name: TypeName,
    pub self_type: TypeName,
    pub associated_types: Vec<AssociatedTypeBinding>,
    pub methods: Vec<FuncDef>,
    pub span: Span,
}

/// `type Name = Concrete;` inside a trait impl
#[derive(Debug, Clone)]
pub struct AssociatedTypeBinding {
    pub name: Symbol,
    pub ty: TypeName,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypeAlias {
    pub name: Symbol,
    pub type_params: Vec<TypeParam>,
    pub aliased: TypeName,
    pub span: Span,
}

// ---------------------------------------------------------------------------
// Module
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Item {
    Func(FuncDef),
    Struct(StructDef),
    Enum(EnumDef),
    Trait(TraitDef),
    Impl(ImplBlock),
    TraitImpl(TraitImpl),
    TypeAlias(TypeAlias),
    Statement(Stmt),
}

impl Item {
    pub fn span(&self) -> Span {
        match self {
            Item::Func(f) => f.span,
            Item::Struct(s) => s.span,
            Item::Enum(e) => e.span,
            Item::Trait(t) => t.span,
            Item::Impl(i) => i.span,
            Item::TraitImpl(i) => i.span,
            Item::TypeAlias(a) => a.span,
            Item::Statement(s) => s.span(),
        }
    }
}

/// A complete translation unit
#[derive(Debug, Clone)]
pub struct Module {
    pub items: Vec<Item>,
    pub span: Span,
}

// Compile-time Send + Sync assertions for key AST types: independent
// parses may run concurrently on separate threads.
#[allow(dead_code)]
const _: () = {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    fn check() {
        assert_send::<Module>();
        assert_send::<Item>();
        assert_send::<Expr>();
        assert_send::<Stmt>();
        assert_send::<Pattern>();
        assert_send::<TypeName>();
        assert_sync::<Module>();
        assert_sync::<Item>();
        assert_sync::<Expr>();
        assert_sync::<Stmt>();
        assert_sync::<Pattern>();
        assert_sync::<TypeName>();
    }
};
