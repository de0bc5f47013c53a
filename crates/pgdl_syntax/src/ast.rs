//! Abstract Syntax Tree definitions for PGDL
//!
//! The tree mirrors the grammar productions one to one. Every node owns its children exclusively and records both
//! the byte span it covers and the half-open range of lexeme indices it was built from; the token classifier uses
//! the lexeme ranges to assign roles without copying any text.
//!
//! ## Notes
//! - A trailing `;` after a definition or field is consumed by the parser but is not part of the node, so
//!   `Foo struct {}` and `Foo struct {};` produce equal trees.
//! - [`Params`] is the only non-spanned node: both of its groups are optional and it may be empty.

use pgdl_core::lang::operators::{self, OperatorId, PrecedenceClass};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
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

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Half-open range of indices into the lexeme stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LexemeRange {
    pub start: usize,
    pub end: usize,
}

impl LexemeRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
    pub lexemes: LexemeRange,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span, lexemes: LexemeRange) -> Self {
        Self { node, span, lexemes }
    }
}

/// Identifier spelling.
pub type Ident = String;

// ============================================================================
// Definitions and types
// ============================================================================

/// A source unit is a sequence of root definitions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub definitions: Vec<Spanned<RootDef>>,
}

/// `[comment] Name AnyType [;]`
#[derive(Debug, Clone, PartialEq)]
pub struct RootDef {
    /// Raw `/* ... */` text, delimiters included.
    pub comment: Option<Spanned<String>>,
    pub name: Spanned<Ident>,
    pub ty: Spanned<AnyType>,
}

/// Every type form a definition, field, case or repeat can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyType {
    Variant(VariantType),
    Struct(StructType),
    /// Same field grammar as a struct; storage semantics are a downstream concern.
    Union(StructType),
    BitStruct(BitStructType),
    Switch(SwitchType),
    Repeat(RepeatType),
    Named(NamedRef),
    /// `&Name`
    ExplicitNamed(NamedRef),
}

/// `variant Params { AnyType+ }`
#[derive(Debug, Clone, PartialEq)]
pub struct VariantType {
    pub params: Params,
    pub children: Vec<Spanned<AnyType>>,
}

/// `struct Params { Field* }` and `union Params { Field* }`
#[derive(Debug, Clone, PartialEq)]
pub struct StructType {
    pub params: Params,
    pub fields: Vec<Spanned<Field>>,
}

/// `[comment] name AnyType [;]`
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub comment: Option<Spanned<String>>,
    pub name: Spanned<Ident>,
    pub ty: Spanned<AnyType>,
}

/// `bits Params { BitField* }`
#[derive(Debug, Clone, PartialEq)]
pub struct BitStructType {
    pub params: Params,
    pub fields: Vec<Spanned<BitField>>,
}

/// `name : width [;]`
#[derive(Debug, Clone, PartialEq)]
pub struct BitField {
    pub name: Spanned<Ident>,
    pub width: Spanned<NumberLit>,
}

/// `switch Expr Params { SwitchCase* }`
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchType {
    pub selector: Spanned<Expr>,
    pub params: Params,
    pub cases: Vec<Spanned<SwitchCase>>,
}

/// `case Expr : AnyType`
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub label: Spanned<Expr>,
    pub ty: Spanned<AnyType>,
}

/// `repeat Params AnyType`
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatType {
    pub params: Params,
    pub child: Box<Spanned<AnyType>>,
}

/// `Name Params`
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRef {
    pub name: Spanned<Ident>,
    pub params: Params,
}

/// `["[" Expr "]"] ["(" [KeyPair ("," KeyPair)*] ")"]`
///
/// `args` is `None` when the parenthesized group is absent and `Some(vec![])` for `()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Params {
    pub expr: Option<Spanned<Expr>>,
    pub args: Option<Vec<Spanned<KeyPair>>>,
}

impl Params {
    pub fn is_empty(&self) -> bool {
        self.expr.is_none() && self.args.is_none()
    }

    /// Look up an argument by key.
    pub fn arg(&self, key: &str) -> Option<&Spanned<Value>> {
        self.args
            .iter()
            .flatten()
            .find(|pair| pair.node.key.node == key)
            .map(|pair| &pair.node.value)
    }
}

/// `key = Value`
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPair {
    pub key: Spanned<Ident>,
    pub value: Spanned<Value>,
}

// ============================================================================
// Values
// ============================================================================

/// Literal value trees used as parameter arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Dict(Vec<Spanned<DictPair>>),
    List(Vec<Spanned<Value>>),
    String(StrLit),
    Number(NumberLit),
    Bool(bool),
    Null,
    Named(NamedRef),
    /// `( Expr )`; the node span includes the parentheses, the inner expression's does not.
    Expr(Box<Spanned<Expr>>),
}

/// `"key" : Value`
#[derive(Debug, Clone, PartialEq)]
pub struct DictPair {
    pub key: Spanned<StrLit>,
    pub value: Spanned<Value>,
}

/// Numeric literal as written; width and signedness are a downstream concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLit {
    pub raw: String,
    pub negative: bool,
    pub radix: Radix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
}

impl NumberLit {
    /// Interpret the literal spelling.
    pub fn from_raw(raw: &str) -> Self {
        let negative = raw.starts_with('-');
        let unsigned = raw.trim_start_matches('-');
        let radix = if unsigned.starts_with(pgdl_core::lang::lexical::HEX_PREFIX) {
            Radix::Hex
        } else {
            Radix::Decimal
        };
        Self {
            raw: raw.to_string(),
            negative,
            radix,
        }
    }

    /// Digits without sign and radix prefix.
    pub fn digits(&self) -> &str {
        let unsigned = self.raw.trim_start_matches('-');
        match self.radix {
            Radix::Hex => &unsigned[pgdl_core::lang::lexical::HEX_PREFIX.len()..],
            Radix::Decimal => unsigned,
        }
    }

    /// Numeric value, or `None` if it does not fit in an `i128`.
    pub fn to_i128(&self) -> Option<i128> {
        let radix = match self.radix {
            Radix::Hex => 16,
            Radix::Decimal => 10,
        };
        let magnitude = i128::from_str_radix(self.digits(), radix).ok()?;
        if self.negative { magnitude.checked_neg() } else { Some(magnitude) }
    }
}

/// String literal: raw quoted spelling plus the unescaped contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrLit {
    pub raw: String,
    pub value: String,
}

// ============================================================================
// Expressions
// ============================================================================

/// Expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Conjunction, term and factor operators.
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    /// Equality and comparison operators.
    Compare(Box<Spanned<Expr>>, CompareOp, Box<Spanned<Expr>>),
    /// `name(args)`
    Call(Spanned<Ident>, Vec<Spanned<Expr>>),
    Param(ParamRef),
    Literal(Literal),
    /// Bare field reference.
    Field(Ident),
    /// A run of hierarchy markers; `depth` is the number of markers.
    Hierarchy { depth: usize },
    Paren(Box<Spanned<Expr>>),
    /// `expr[index]`
    Index(Box<Spanned<Expr>>, Box<Spanned<Expr>>),
    /// `expr.name`
    Member(Box<Spanned<Expr>>, Spanned<Ident>),
}

/// `$name` or `${expr}`
#[derive(Debug, Clone, PartialEq)]
pub enum ParamRef {
    Name(Spanned<Ident>),
    Expr(Box<Spanned<Expr>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Bool(bool),
    Null,
    Number(NumberLit),
    String(StrLit),
}

/// Arithmetic, bitwise and logical operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Or,
    And,
    Add,
    Sub,
    BitAnd,
    BitOr,
    BitXor,
    Mul,
    Div,
    Shl,
    Shr,
}

/// Equality and ordering operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,
}

/// An operator after the parser has decided which node family it builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    Binary(BinaryOp),
    Compare(CompareOp),
}

impl InfixOp {
    pub fn from_operator(id: OperatorId) -> Self {
        match id {
            OperatorId::OrOr => InfixOp::Binary(BinaryOp::Or),
            OperatorId::AndAnd => InfixOp::Binary(BinaryOp::And),
            OperatorId::EqEq => InfixOp::Compare(CompareOp::Eq),
            OperatorId::NotEq => InfixOp::Compare(CompareOp::NotEq),
            OperatorId::Lt => InfixOp::Compare(CompareOp::Lt),
            OperatorId::Gt => InfixOp::Compare(CompareOp::Gt),
            OperatorId::LtEq => InfixOp::Compare(CompareOp::LtEq),
            OperatorId::GtEq => InfixOp::Compare(CompareOp::GtEq),
            OperatorId::Plus => InfixOp::Binary(BinaryOp::Add),
            OperatorId::Minus => InfixOp::Binary(BinaryOp::Sub),
            OperatorId::Amp => InfixOp::Binary(BinaryOp::BitAnd),
            OperatorId::Pipe => InfixOp::Binary(BinaryOp::BitOr),
            OperatorId::Caret => InfixOp::Binary(BinaryOp::BitXor),
            OperatorId::Star => InfixOp::Binary(BinaryOp::Mul),
            OperatorId::Slash => InfixOp::Binary(BinaryOp::Div),
            OperatorId::Shl => InfixOp::Binary(BinaryOp::Shl),
            OperatorId::Shr => InfixOp::Binary(BinaryOp::Shr),
        }
    }
}

impl BinaryOp {
    pub fn operator(self) -> OperatorId {
        match self {
            BinaryOp::Or => OperatorId::OrOr,
            BinaryOp::And => OperatorId::AndAnd,
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::BitAnd => OperatorId::Amp,
            BinaryOp::BitOr => OperatorId::Pipe,
            BinaryOp::BitXor => OperatorId::Caret,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Shl => OperatorId::Shl,
            BinaryOp::Shr => OperatorId::Shr,
        }
    }

    pub fn class(self) -> PrecedenceClass {
        operators::class_of(self.operator())
    }
}

impl CompareOp {
    pub fn operator(self) -> OperatorId {
        match self {
            CompareOp::Eq => OperatorId::EqEq,
            CompareOp::NotEq => OperatorId::NotEq,
            CompareOp::Lt => OperatorId::Lt,
            CompareOp::Gt => OperatorId::Gt,
            CompareOp::LtEq => OperatorId::LtEq,
            CompareOp::GtEq => OperatorId::GtEq,
        }
    }

    pub fn class(self) -> PrecedenceClass {
        operators::class_of(self.operator())
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(operators::as_str(self.operator()))
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(operators::as_str(self.operator()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_literal_values() {
        assert_eq!(NumberLit::from_raw("42").to_i128(), Some(42));
        assert_eq!(NumberLit::from_raw("-0x1F").to_i128(), Some(-31));
        assert_eq!(NumberLit::from_raw("0xff").radix, Radix::Hex);
        assert_eq!(NumberLit::from_raw("-7").digits(), "7");
    }

    #[test]
    fn test_infix_op_families() {
        assert_eq!(InfixOp::from_operator(OperatorId::NotEq), InfixOp::Compare(CompareOp::NotEq));
        assert_eq!(InfixOp::from_operator(OperatorId::Shr), InfixOp::Binary(BinaryOp::Shr));
        for op in [BinaryOp::Or, BinaryOp::Add, BinaryOp::Shl] {
            assert_eq!(InfixOp::from_operator(op.operator()), InfixOp::Binary(op));
        }
    }

    #[test]
    fn test_params_arg_lookup() {
        let params = Params::default();
        assert!(params.is_empty());
        assert!(params.arg("size").is_none());
    }
}
