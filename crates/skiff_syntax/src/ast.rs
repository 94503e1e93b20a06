//! Abstract Syntax Tree definitions for Skiff.
//!
//! This module defines all AST node types the parser produces. Nodes are built once during
//! parsing and never mutated; every node owns its children exclusively (a strict tree).

use skiff_core::lang::types::TypeId;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier (interned string index in practice, String for simplicity here)
pub type Ident = String;

/// One parsed compilation unit: an optional `program` header plus top-level statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: Option<Ident>,
    pub statements: Vec<Spanned<Statement>>,
}

// ============================================================================
// Statements and declarations
// ============================================================================

/// Statement-position constructs. Declarations and control statements share one level because
/// the grammar allows either anywhere a statement is expected (functions may nest).
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Import(ImportStmt),
    Function(FunctionDecl),
    Constant(ConstantDecl),
    Struct(StructDecl),
    Enum(EnumDecl),
    Variable(VariableDecl),
    TupleAssign(TupleAssign),
    If(IfStmt),
    Switch(SwitchStmt),
    Loop(LoopStmt),
    When(WhenStmt),
    Return(ReturnStmt),
    Halt,
    Next,
    /// A bare call or method-call chain in statement position.
    Expr(Spanned<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStmt {
    pub path: String,
}

/// `name :: |params| ret? : body $`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Ident,
    pub params: Vec<Spanned<Param>>,
    pub return_types: Vec<Spanned<Type>>,
    pub body: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Ident,
    pub ty: Spanned<Type>,
}

/// `name :: expr`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantDecl {
    pub name: Ident,
    pub value: Spanned<Expr>,
}

/// `struct Name? : fields` — the name is optional (anonymous structs are legal).
#[derive(Debug, Clone, PartialEq)]
pub struct StructDecl {
    pub name: Option<Ident>,
    pub fields: Vec<Spanned<StructField>>,
}

/// A struct body entry: a plain typed field or a nested struct. Nesting is unbounded; field
/// name uniqueness per level is a post-parse validation concern.
#[derive(Debug, Clone, PartialEq)]
pub enum StructField {
    Field(FieldDef),
    Nested(NestedStruct),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub name: Ident,
    pub ty: Spanned<Type>,
    /// Multi-line bodies allow a default expression written before the name: `10 x:int`.
    pub default: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NestedStruct {
    pub name: Ident,
    pub fields: Vec<Spanned<StructField>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: Ident,
    pub members: Vec<Spanned<EnumMember>>,
}

/// `name` or `<value> name` (the explicit value precedes the name). Value uniqueness is not a
/// parse concern.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: Ident,
    pub value: Option<i64>,
}

/// `name : expr`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub name: Ident,
    pub value: Spanned<Expr>,
}

/// `a, b : x, y` — arity equality between targets and values is a semantic check, not a
/// grammar rule.
#[derive(Debug, Clone, PartialEq)]
pub struct TupleAssign {
    pub targets: Vec<Spanned<Ident>>,
    pub values: Vec<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Spanned<Expr>,
    pub consequence: Vec<Spanned<Statement>>,
    /// `anif` clauses in order; a final clause with `condition: None` is the `else`.
    pub alternatives: Vec<IfClause>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Option<Spanned<Expr>>,
    pub body: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStmt {
    pub subject: Spanned<Expr>,
    pub cases: Vec<Spanned<CaseClause>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseClause {
    pub patterns: CasePatterns,
    pub body: Vec<Spanned<Statement>>,
}

/// Case selector: `_`, one expression, or several sharing one body. Matching semantics belong
/// to the downstream interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum CasePatterns {
    Wildcard,
    Exprs(Vec<Spanned<Expr>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoopStmt {
    pub header: LoopHeader,
    pub body: Vec<Spanned<Statement>>,
}

/// The seven loop header shapes. Each variant carries only the fields its shape needs; shape
/// selection is a fixed lookahead order in the parser (see DESIGN.md).
#[derive(Debug, Clone, PartialEq)]
pub enum LoopHeader {
    /// `loop i:0 to 10`
    Range {
        variable: Ident,
        start: Spanned<Expr>,
        end: Spanned<Expr>,
    },
    /// `loop i to 10` — start is implied by the downstream evaluator.
    RangeTo { variable: Ident, end: Spanned<Expr> },
    /// `loop i till c` / `loop i:0 till c`
    TillWith {
        variable: Ident,
        start: Option<Spanned<Expr>>,
        condition: Spanned<Expr>,
    },
    /// `loop till c`
    Till { condition: Spanned<Expr> },
    /// `loop` / `loop i:0` — forever, optionally with a running counter.
    Forever { counter: Option<(Ident, Spanned<Expr>)> },
    /// `loop x in items`
    Each { element: Ident, iterable: Spanned<Expr> },
    /// `loop k, v in table`
    Entries {
        key: Ident,
        value: Ident,
        iterable: Spanned<Expr>,
    },
}

/// `when flag then body $` — a build-time guard. The parser records structure only; condition
/// resolution happens in a later phase.
#[derive(Debug, Clone, PartialEq)]
pub struct WhenStmt {
    pub condition_name: Ident,
    pub body: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub values: Vec<Spanned<Expr>>,
}

// ============================================================================
// Types
// ============================================================================

/// A type annotation: a builtin type name or a user-defined (struct/enum) name.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    Builtin(TypeId),
    Named(Ident),
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `cond ?? then : else`
    Ternary {
        condition: Box<Spanned<Expr>>,
        consequence: Box<Spanned<Expr>>,
        alternative: Box<Spanned<Expr>>,
    },
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    Unary(UnaryOp, Box<Spanned<Expr>>),
    /// `name|args|`
    Call(Ident, Vec<Spanned<Expr>>),
    /// `recv.name|args|`
    MethodCall(Box<Spanned<Expr>>, Ident, Vec<Spanned<Expr>>),
    /// `coll[expr]` — array-style index.
    Index(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
    /// `coll{"key"}` — dict-style index; the key is restricted to a string literal.
    DictIndex(Box<Spanned<Expr>>, String),
    /// `obj.name`
    Member(Box<Spanned<Expr>>, Ident),
    Array(Vec<Spanned<Expr>>),
    Dict(Vec<DictPair>),
    Object(Vec<ObjectPair>),
    /// `Name<k: v, ...>`
    TypedObject(Ident, Vec<ObjectPair>),
    Ident(Ident),
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictPair {
    pub key: String,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPair {
    pub key: Ident,
    pub value: Spanned<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    /// Escape sequences are kept verbatim; interpretation is a later phase.
    Str(String),
    Char(String),
    Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Is,
    Gt,
    Lt,
    GtEq,
    LtEq,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}
