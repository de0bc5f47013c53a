//! Property-based tests for the PGDL frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use pgdl::ast::{Expr, Spanned};
use pgdl::{EntryPoint, Token, highlight, highlight_with, lexer, parser};
use pgdl_core::lang::categories::TokenCategory;
use pgdl_core::lang::keywords;
use pgdl_core::lang::operators::{self, OperatorId, PrecedenceClass};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_filter("identifier must not be a keyword", |s| keywords::from_str(s).is_none())
}

fn type_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,8}".prop_filter("identifier must not be a keyword", |s| keywords::from_str(s).is_none())
}

fn binary_operator_strategy() -> impl Strategy<Value = OperatorId> {
    prop::sample::select(operators::OPERATORS.iter().map(|op| op.id).collect::<Vec<_>>())
}

/// One struct definition, with or without `;` after every field and after the body.
fn struct_def_strategy() -> impl Strategy<Value = (String, Vec<(String, String)>)> {
    (
        type_name_strategy(),
        prop::collection::vec((ident_strategy(), type_name_strategy()), 0..6),
    )
}

fn render_struct(name: &str, fields: &[(String, String)], semicolons: bool) -> String {
    let semi = if semicolons { ";" } else { "" };
    let mut out = format!("{} struct {{\n", name);
    for (field, ty) in fields {
        out.push_str(&format!("    {} {}{}\n", field, ty, semi));
    }
    out.push('}');
    out.push_str(semi);
    out.push('\n');
    out
}

/// Fragments that hit every scanner branch when glued together in any order.
const FRAGMENTS: &[&str] = &[
    "Foo", "bar", "_x1", "struct", "union", "bits", "variant", "switch", "case", "repeat", "true", "null", "{", "}",
    "(", ")", "[", "]", ",", ";", "=", ":", ".", "$", "${", "&", "\u{b4}", "\u{b4}\u{b4}", "1", "-", "-7", "0x1F",
    "0x", "\"s\"", "\"\\n\"", "\"open", "/* c */", "/*", " ", "\n", "\t", "+", "*", "<<", "&&", "||", "==", "!=", "<=",
    "@", "é",
];

fn fragment_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..24).prop_map(|parts| parts.concat())
}

// =============================================================================
// Helpers
// =============================================================================

fn assert_tiles(source: &str, tokens: &[Token]) {
    let mut cursor = 0;
    for token in tokens {
        assert_eq!(token.start(), cursor, "gap or overlap before {:?}", token);
        assert!(!token.is_empty(), "empty token {:?}", token);
        assert_eq!(&source[token.span.start..token.span.end], token.text);
        cursor = token.span.end;
    }
    assert_eq!(cursor, source.len());
    let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, source);
}

/// Category and text of every token that is neither whitespace nor `;`.
fn significant(tokens: &[Token]) -> Vec<(TokenCategory, String)> {
    tokens
        .iter()
        .filter(|t| t.category != TokenCategory::Whitespace && t.text != ";")
        .map(|t| (t.category, t.text.clone()))
        .collect()
}

fn root_class(expr: &Spanned<Expr>) -> Option<PrecedenceClass> {
    match &expr.node {
        Expr::Binary(_, op, _) => Some(op.class()),
        Expr::Compare(_, op, _) => Some(op.class()),
        _ => None,
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: any input either fails with an in-bounds offset or tiles exactly, from every entry point
    #[test]
    fn arbitrary_input_errors_or_tiles(source in fragment_soup()) {
        for entry in [EntryPoint::Program, EntryPoint::AnyType, EntryPoint::Expression] {
            match highlight_with(&source, entry) {
                Ok(tokens) => assert_tiles(&source, &tokens),
                Err(err) => prop_assert!(err.offset() <= source.len()),
            }
        }
    }

    /// Property: unrestricted unicode input never panics
    #[test]
    fn unicode_input_never_panics(source in "\\PC{0,48}") {
        if let Ok(tokens) = highlight(&source) {
            assert_tiles(&source, &tokens);
        }
    }

    /// Property: generated definitions highlight, tile, and re-highlight identically
    #[test]
    fn generated_structs_round_trip((name, fields) in struct_def_strategy(), semicolons in any::<bool>()) {
        let source = render_struct(&name, &fields, semicolons);
        let tokens = highlight(&source).expect("generated struct should parse");
        assert_tiles(&source, &tokens);

        let joined: String = tokens.iter().map(|t| t.text.as_str()).collect();
        let again = highlight(&joined).expect("re-highlight failed");
        prop_assert_eq!(tokens, again);
    }

    /// Property: trailing semicolons never change the parsed shape
    #[test]
    fn semicolons_are_optional((name, fields) in struct_def_strategy()) {
        let with_src = render_struct(&name, &fields, true);
        let without_src = render_struct(&name, &fields, false);
        let with = highlight(&with_src).expect("with semicolons");
        let without = highlight(&without_src).expect("without semicolons");
        prop_assert_eq!(significant(&with), significant(&without));

        let scan_with = lexer::lex(&with_src).expect("lex");
        let program = parser::parse_program(&scan_with.lexemes).expect("parse");
        prop_assert_eq!(program.definitions.len(), 1);
    }

    /// Property: `a op1 b op2 c` is rooted at the looser operator, or at `op2` when both bind equally
    #[test]
    fn precedence_picks_the_loosest_root(
        a in ident_strategy(),
        b in ident_strategy(),
        c in ident_strategy(),
        op1 in binary_operator_strategy(),
        op2 in binary_operator_strategy(),
    ) {
        let source = format!("{} {} {} {} {}", a, operators::as_str(op1), b, operators::as_str(op2), c);
        let scan = lexer::lex(&source).expect("lex");
        let expr = parser::parse_expression(&scan.lexemes).expect("parse");

        let (class1, class2) = (operators::class_of(op1), operators::class_of(op2));
        let expected = if class2.binds_tighter_than(class1) { class1 } else { class2 };
        prop_assert_eq!(root_class(&expr), Some(expected));
        prop_assert_eq!(expr.span.start, 0);
        prop_assert_eq!(expr.span.end, source.len());
    }

    /// Property: identifiers survive scanning as a single lexeme
    #[test]
    fn identifiers_survive_lexing(ident in ident_strategy()) {
        let scan = lexer::lex(&ident).expect("lex");
        let significant = scan.significant();
        prop_assert_eq!(significant.len(), 1);
        prop_assert_eq!(significant[0].text, ident.as_str());
    }

    /// Property: decimal and hex numbers, signed or not, lex as one Number lexeme
    #[test]
    fn numbers_lex_as_one_lexeme(value in any::<u32>(), hex in any::<bool>(), negative in any::<bool>()) {
        let digits = if hex { format!("0x{:X}", value) } else { value.to_string() };
        let source = if negative { format!("-{}", digits) } else { digits };
        let scan = lexer::lex(&source).expect("lex");
        let significant = scan.significant();
        prop_assert_eq!(significant.len(), 1);
        prop_assert_eq!(significant[0].kind, lexer::LexemeKind::Number);
        prop_assert_eq!(significant[0].text, source.as_str());
    }
}
