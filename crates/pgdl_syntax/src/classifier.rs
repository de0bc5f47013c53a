//! Token classifier.
//!
//! Turns a scan plus the tree parsed from it into the final token sequence. Keywords, literals, operators,
//! punctuation and comments are classified by their lexeme kind alone; identifiers get a [`Role`] from their
//! position in the tree. Whitespace runs are re-emitted as their own tokens, so the output tiles the input:
//! concatenating the token texts reproduces the source byte for byte.
//!
//! ## Notes
//! - An identifier the tree walk never reached is emitted as [`TokenCategory::Generic`] and logged. That only
//!   happens when the grammar and this walk have drifted apart; it is not an error.
//! - Classification never fails and never reorders: one token per lexeme or whitespace run, in document order.

use crate::ast::*;
use crate::lexer::{LexemeKind, Scan};
use crate::parser::ParsedUnit;
use pgdl_core::lang::categories::TokenCategory;
use pgdl_core::lang::keywords;
use pgdl_core::lang::punctuation::{self, PunctuationCategory};

/// Grammatical role of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Name of a root definition.
    GlobalName,
    /// Name of a struct, union or bits field.
    FieldName,
    /// Field or parameter referenced from an expression.
    VarRef,
    /// Reference to a named type.
    TypeRef,
    /// Callee of a call.
    FunName,
    /// Key of a parameter pair.
    Key,
}

impl Role {
    pub fn category(self) -> TokenCategory {
        match self {
            Role::GlobalName => TokenCategory::NameClass,
            Role::FieldName => TokenCategory::NameProperty,
            Role::VarRef => TokenCategory::NameVariable,
            Role::TypeRef => TokenCategory::NameBuiltin,
            Role::FunName => TokenCategory::NameFunction,
            Role::Key => TokenCategory::NameAttribute,
        }
    }
}

/// A classified slice of the input, as delivered to highlighting hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub span: Span,
    pub text: String,
}

impl Token {
    /// Byte offset of the first byte.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte length.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Classify every lexeme and whitespace run of `scan`.
///
/// `unit` must have been parsed from `scan.lexemes`; its lexeme ranges index into that list.
#[tracing::instrument(skip_all, fields(lexeme_count = scan.lexemes.len()))]
pub fn classify_with(source: &str, scan: &Scan<'_>, unit: &ParsedUnit, warn_on_fallback: bool) -> Vec<Token> {
    let mut walker = RoleWalker {
        roles: vec![None; scan.lexemes.len()],
    };
    match unit {
        ParsedUnit::Program(program) => walker.program(program),
        ParsedUnit::AnyType(ty) => walker.any_type(ty),
        ParsedUnit::Expression(expr) => walker.expr(expr),
    }

    let mut sink = TokenSink {
        source,
        tokens: Vec::with_capacity(scan.lexemes.len() + scan.trivia.len()),
        cursor: 0,
    };
    let mut trivia = scan.trivia.iter().peekable();
    let mut fallbacks = 0usize;

    for (index, lexeme) in scan.lexemes.iter().enumerate() {
        while let Some(ws) = trivia.next_if(|ws| ws.start < lexeme.span.start) {
            sink.push(TokenCategory::Whitespace, *ws);
        }
        if lexeme.kind == LexemeKind::Eof {
            continue;
        }
        let category = match (lexeme.kind, walker.roles[index]) {
            (LexemeKind::Ident, Some(role)) => role.category(),
            (LexemeKind::Ident, None) => {
                fallbacks += 1;
                if warn_on_fallback {
                    tracing::warn!(offset = lexeme.span.start, text = lexeme.text, "identifier without a role");
                }
                TokenCategory::Generic
            }
            (kind, _) => intrinsic_category(kind),
        };
        sink.push(category, lexeme.span);
    }
    for ws in trivia {
        sink.push(TokenCategory::Whitespace, *ws);
    }
    sink.push(TokenCategory::Generic, Span::new(source.len(), source.len()));

    tracing::debug!(tokens = sink.tokens.len(), fallbacks, "classified");
    sink.tokens
}

/// Appends tokens in order, covering any bytes skipped between two pushes with a `Generic` token.
struct TokenSink<'s> {
    source: &'s str,
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenSink<'_> {
    fn push(&mut self, category: TokenCategory, span: Span) {
        if span.start > self.cursor {
            tracing::warn!(offset = self.cursor, len = span.start - self.cursor, "input not covered by any lexeme");
            self.emit(TokenCategory::Generic, Span::new(self.cursor, span.start));
        }
        if !span.is_empty() {
            self.emit(category, span);
        }
    }

    fn emit(&mut self, category: TokenCategory, span: Span) {
        self.tokens.push(Token {
            category,
            span,
            text: self.source[span.start..span.end].to_string(),
        });
        self.cursor = self.cursor.max(span.end);
    }
}

/// Category of a lexeme that does not depend on grammar position.
pub fn intrinsic_category(kind: LexemeKind) -> TokenCategory {
    match kind {
        LexemeKind::Keyword(id) if keywords::is_literal(id) => TokenCategory::KeywordConstant,
        LexemeKind::Keyword(_) => TokenCategory::Keyword,
        LexemeKind::Operator(_) | LexemeKind::Dots => TokenCategory::Operator,
        LexemeKind::Punctuation(id) => match punctuation::category(id) {
            PunctuationCategory::Delimiter | PunctuationCategory::Separator => TokenCategory::Punctuation,
            PunctuationCategory::Binding | PunctuationCategory::Access | PunctuationCategory::Sigil => {
                TokenCategory::Operator
            }
        },
        LexemeKind::Number => TokenCategory::Number,
        LexemeKind::String => TokenCategory::String,
        LexemeKind::Comment => TokenCategory::Comment,
        LexemeKind::Ident | LexemeKind::Eof => TokenCategory::Generic,
    }
}

// ============================================================================
// Role assignment
// ============================================================================

/// Walks a tree in document order and records the role of every identifier lexeme it owns.
struct RoleWalker {
    roles: Vec<Option<Role>>,
}

impl RoleWalker {
    fn mark(&mut self, range: LexemeRange, role: Role) {
        if let Some(slot) = self.roles.get_mut(range.start) {
            *slot = Some(role);
        }
    }

    fn program(&mut self, program: &Program) {
        for def in &program.definitions {
            self.mark(def.node.name.lexemes, Role::GlobalName);
            self.any_type(&def.node.ty);
        }
    }

    fn any_type(&mut self, ty: &Spanned<AnyType>) {
        match &ty.node {
            AnyType::Variant(v) => {
                self.params(&v.params);
                for child in &v.children {
                    self.any_type(child);
                }
            }
            AnyType::Struct(s) | AnyType::Union(s) => {
                self.params(&s.params);
                for field in &s.fields {
                    self.mark(field.node.name.lexemes, Role::FieldName);
                    self.any_type(&field.node.ty);
                }
            }
            AnyType::BitStruct(b) => {
                self.params(&b.params);
                for field in &b.fields {
                    self.mark(field.node.name.lexemes, Role::FieldName);
                }
            }
            AnyType::Switch(s) => {
                self.expr(&s.selector);
                self.params(&s.params);
                for case in &s.cases {
                    self.expr(&case.node.label);
                    self.any_type(&case.node.ty);
                }
            }
            AnyType::Repeat(r) => {
                self.params(&r.params);
                self.any_type(&r.child);
            }
            AnyType::Named(named) | AnyType::ExplicitNamed(named) => self.named_ref(named),
        }
    }

    fn named_ref(&mut self, named: &NamedRef) {
        self.mark(named.name.lexemes, Role::TypeRef);
        self.params(&named.params);
    }

    fn params(&mut self, params: &Params) {
        if let Some(expr) = &params.expr {
            self.expr(expr);
        }
        for pair in params.args.iter().flatten() {
            self.mark(pair.node.key.lexemes, Role::Key);
            self.value(&pair.node.value);
        }
    }

    fn value(&mut self, value: &Spanned<Value>) {
        match &value.node {
            Value::Dict(pairs) => {
                for pair in pairs {
                    self.value(&pair.node.value);
                }
            }
            Value::List(items) => {
                for item in items {
                    self.value(item);
                }
            }
            Value::Named(named) => self.named_ref(named),
            Value::Expr(expr) => self.expr(expr),
            Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
        }
    }

    fn expr(&mut self, expr: &Spanned<Expr>) {
        match &expr.node {
            Expr::Binary(left, _, right) | Expr::Compare(left, _, right) => {
                self.expr(left);
                self.expr(right);
            }
            Expr::Call(callee, args) => {
                self.mark(callee.lexemes, Role::FunName);
                for arg in args {
                    self.expr(arg);
                }
            }
            Expr::Param(ParamRef::Name(name)) => self.mark(name.lexemes, Role::VarRef),
            Expr::Param(ParamRef::Expr(inner)) | Expr::Paren(inner) => self.expr(inner),
            Expr::Field(_) => self.mark(expr.lexemes, Role::VarRef),
            Expr::Index(base, index) => {
                self.expr(base);
                self.expr(index);
            }
            Expr::Member(base, member) => {
                self.expr(base);
                self.mark(member.lexemes, Role::VarRef);
            }
            Expr::Literal(_) | Expr::Hierarchy { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{highlight, highlight_with, EntryPoint};
    use pgdl_core::lang::categories;

    /// `text:Category` per non-whitespace token.
    fn render(source: &str) -> String {
        highlight(source)
            .unwrap_or_else(|e| panic!("{:?}: {}", source, e))
            .iter()
            .filter(|t| t.category != TokenCategory::Whitespace)
            .map(|t| format!("{}:{}", t.text, categories::as_str(t.category)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn category_of(tokens: &[Token], text: &str) -> TokenCategory {
        tokens
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.category)
            .unwrap_or_else(|| panic!("no token {:?}", text))
    }

    #[test]
    fn test_role_reclassification() {
        let tokens = highlight("Foo struct(a=1) { bar TypeX; }").unwrap();
        assert_eq!(category_of(&tokens, "Foo"), TokenCategory::NameClass);
        assert_eq!(category_of(&tokens, "bar"), TokenCategory::NameProperty);
        assert_eq!(category_of(&tokens, "TypeX"), TokenCategory::NameBuiltin);
        assert_eq!(category_of(&tokens, "a"), TokenCategory::NameAttribute);
        assert_eq!(category_of(&tokens, "="), TokenCategory::Operator);
        assert_eq!(category_of(&tokens, ";"), TokenCategory::Punctuation);
    }

    #[test]
    fn test_expression_roles() {
        insta::assert_snapshot!(
            render("Def T[f(x.y, $p) + ´´.len[0]]"),
            @"Def:Name.Class T:Name.Builtin [:Punctuation f:Name.Function (:Punctuation x:Name.Variable.Instance .:Operator y:Name.Variable.Instance ,:Punctuation $:Operator p:Name.Variable.Instance ):Punctuation +:Operator ´´:Operator .:Operator len:Name.Variable.Instance [:Punctuation 0:Literal.Number ]:Punctuation ]:Punctuation"
        );
    }

    #[test]
    fn test_keywords_literals_and_comments() {
        insta::assert_snapshot!(
            render("/* c */ M switch k { case true: bits { f: 1 } case null: &N(o={\"k\": [1]}) }"),
            @r#"/* c */:Comment.Multiline M:Name.Class switch:Keyword k:Name.Variable.Instance {:Punctuation case:Keyword true:Keyword.Constant ::Operator bits:Keyword {:Punctuation f:Name.Property ::Operator 1:Literal.Number }:Punctuation case:Keyword null:Keyword.Constant ::Operator &:Operator N:Name.Builtin (:Punctuation o:Name.Attribute =:Operator {:Punctuation "k":Literal.String.Double ::Operator [:Punctuation 1:Literal.Number ]:Punctuation }:Punctuation ):Punctuation }:Punctuation"#
        );
    }

    #[test]
    fn test_tokens_tile_input() {
        let source = "  /* lead */\nFoo variant {\n\tA[${n} * 2]\r\n  B(x=-1) };\n\n";
        let tokens = highlight(source).unwrap();
        let mut pos = 0;
        for token in &tokens {
            assert_eq!(token.start(), pos);
            assert!(!token.is_empty());
            pos += token.len();
        }
        assert_eq!(pos, source.len());
        let text: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(text, source);
        assert_eq!(tokens[0].category, TokenCategory::Whitespace);
        assert!(tokens.iter().all(|t| t.category != TokenCategory::Generic));
    }

    #[test]
    fn test_empty_and_whitespace_only_input() {
        assert!(highlight("").unwrap().is_empty());
        let tokens = highlight(" \n ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].category, TokenCategory::Whitespace);
    }

    #[test]
    fn test_expression_entry_point() {
        let tokens = highlight_with("a + f(b)", EntryPoint::Expression).unwrap();
        assert_eq!(category_of(&tokens, "a"), TokenCategory::NameVariable);
        assert_eq!(category_of(&tokens, "f"), TokenCategory::NameFunction);
    }

    #[test]
    fn test_unreached_identifier_falls_back_to_generic() {
        let source = "A u8";
        let scan = crate::lexer::lex(source).unwrap();
        let tokens = classify_with(source, &scan, &ParsedUnit::Program(Program::default()), false);
        assert_eq!(category_of(&tokens, "A"), TokenCategory::Generic);
        assert_eq!(category_of(&tokens, "u8"), TokenCategory::Generic);
        let text: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(text, source);
    }

    #[test]
    fn test_intrinsic_categories() {
        use pgdl_core::lang::keywords::KeywordId;
        use pgdl_core::lang::punctuation::PunctuationId;

        assert_eq!(intrinsic_category(LexemeKind::Keyword(KeywordId::Repeat)), TokenCategory::Keyword);
        assert_eq!(
            intrinsic_category(LexemeKind::Keyword(KeywordId::False)),
            TokenCategory::KeywordConstant
        );
        assert_eq!(
            intrinsic_category(LexemeKind::Punctuation(PunctuationId::DollarBrace)),
            TokenCategory::Operator
        );
        assert_eq!(
            intrinsic_category(LexemeKind::Punctuation(PunctuationId::Comma)),
            TokenCategory::Punctuation
        );
        assert_eq!(intrinsic_category(LexemeKind::Dots), TokenCategory::Operator);
    }
}
