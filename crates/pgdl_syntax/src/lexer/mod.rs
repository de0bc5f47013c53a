//! Lexical scanner for PGDL
//!
//! Handles tokenization including:
//! - Keywords (variant, struct, bits, union, switch, case, repeat, true, false, null)
//! - Identifiers, numbers (decimal, hex, optional sign) and double-quoted strings
//! - Operators and punctuation, longest match first (`<<` before `<`, `${` before `$`)
//! - Hierarchy-marker runs and `/* ... */` comments
//! - Whitespace runs, kept aside as trivia so the input can be reconstructed
//!
//! ## Module Structure
//!
//! - `tokens` - Lexeme types (LexemeKind, Lexeme, Scan)
//! - `table` - Shared scan table built from the vocabulary registries
//! - `strings` - String scanning and unescaping
//! - `numbers` - Numeric literal scanning
//!
//! ## Notes
//! - The scanner is grammar-agnostic: every identifier shape becomes `Ident`.
//! - The first invalid byte sequence aborts the scan; there is no recovery.

mod numbers;
pub mod strings;
pub mod table;
pub mod tokens;

pub use tokens::{Lexeme, LexemeKind, Scan};

use crate::ast::Span;
use crate::diagnostics::ParseError;
use crate::token_helpers;
use pgdl_core::lang::lexical::{self, COMMENT_CLOSE, COMMENT_OPEN, HIERARCHY_MARKER};
use pgdl_core::lang::operators::{self, OperatorId};
use table::{CharClass, ScanTable, Symbol};

/// Scanner over one source unit.
///
/// Positions are byte offsets into `source`; they always sit on a char boundary.
pub struct Lexer<'a> {
    source: &'a str,
    table: &'static ScanTable,
    pos: usize,
    lexemes: Vec<Lexeme<'a>>,
    trivia: Vec<Span>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            table: ScanTable::get(),
            pos: 0,
            lexemes: Vec::new(),
            trivia: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The lexeme list always ends with a zero-length `Eof` at the input length.
    pub fn tokenize(mut self) -> Result<Scan<'a>, ParseError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        let end = self.source.len();
        self.lexemes
            .push(Lexeme::new(LexemeKind::Eof, Span::new(end, end), &self.source[end..]));

        Ok(Scan {
            lexemes: self.lexemes,
            trivia: self.trivia,
        })
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn push(&mut self, kind: LexemeKind, start: usize) {
        let span = Span::new(start, self.pos);
        self.lexemes.push(Lexeme::new(kind, span, &self.source[start..self.pos]));
    }

    /// Whether the previous significant lexeme can end an operand (decides the role of a leading `-`).
    fn after_operand(&self) -> bool {
        self.lexemes
            .iter()
            .rev()
            .find(|l| l.kind != LexemeKind::Comment)
            .is_some_and(|l| token_helpers::ends_operand(&l.kind))
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return Ok(());
        };

        if c == HIERARCHY_MARKER {
            self.eat_while(|c| c == HIERARCHY_MARKER);
            self.push(LexemeKind::Dots, start);
            return Ok(());
        }

        match self.table.class(c) {
            CharClass::Whitespace => {
                self.eat_while(lexical::is_whitespace);
                self.trivia.push(Span::new(start, self.pos));
                Ok(())
            }
            CharClass::IdentStart => {
                self.scan_identifier(start);
                Ok(())
            }
            CharClass::Digit => self.scan_number(start),
            CharClass::Quote => {
                self.advance();
                self.scan_string(start)
            }
            CharClass::Symbol => self.scan_symbol(start),
            CharClass::Invalid => Err(self.unexpected(start, c)),
        }
    }

    fn scan_symbol(&mut self, start: usize) -> Result<(), ParseError> {
        let rest = &self.source[self.pos..];
        if rest.starts_with(COMMENT_OPEN) {
            return self.scan_comment(start);
        }
        if rest.starts_with(operators::as_str(OperatorId::Minus))
            && self.peek_next().is_some_and(|c| c.is_ascii_digit())
            && !self.after_operand()
        {
            self.advance();
            return self.scan_number(start);
        }

        match self.table.match_symbol(rest) {
            Some((spelling, symbol)) => {
                self.pos += spelling.len();
                let kind = match symbol {
                    Symbol::Operator(id) => LexemeKind::Operator(id),
                    Symbol::Punctuation(id) => LexemeKind::Punctuation(id),
                };
                self.push(kind, start);
                Ok(())
            }
            None => {
                let c = self.peek().unwrap_or_default();
                Err(self.unexpected(start, c))
            }
        }
    }

    fn scan_comment(&mut self, start: usize) -> Result<(), ParseError> {
        let body_start = self.pos + COMMENT_OPEN.len();
        match self.source[body_start..].find(COMMENT_CLOSE) {
            Some(rel) => {
                self.pos = body_start + rel + COMMENT_CLOSE.len();
                self.push(LexemeKind::Comment, start);
                Ok(())
            }
            None => Err(ParseError::lexical(
                "unterminated comment",
                Span::new(start, body_start),
            )
            .with_expected(format!("`{}`", COMMENT_CLOSE))),
        }
    }

    fn scan_identifier(&mut self, start: usize) {
        self.eat_while(lexical::is_ident_continue);
        let spelling = &self.source[start..self.pos];

        if let Some(id) = self.table.keyword(spelling) {
            self.push(LexemeKind::Keyword(id), start);
        } else {
            self.push(LexemeKind::Ident, start);
        }
    }

    fn unexpected(&self, start: usize, c: char) -> ParseError {
        ParseError::lexical(
            format!("unexpected character {:?}", c),
            Span::new(start, start + c.len_utf8()),
        )
    }
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Scan<'_>, ParseError> {
    let scan = Lexer::new(source).tokenize()?;
    tracing::debug!(lexemes = scan.lexemes.len(), trivia = scan.trivia.len(), "scanned");
    Ok(scan)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::ErrorKind;
    use pgdl_core::lang::keywords::{self, KeywordId};
    use pgdl_core::lang::punctuation::{self, PunctuationId};

    fn kinds(source: &str) -> Vec<LexemeKind> {
        lex(source)
            .unwrap_or_else(|err| panic!("lex({:?}) failed: {:?}", source, err))
            .significant()
            .iter()
            .map(|l| l.kind)
            .collect()
    }

    fn texts(source: &str) -> Vec<String> {
        lex(source)
            .unwrap()
            .significant()
            .iter()
            .map(|l| l.text.to_string())
            .collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            assert_eq!(kinds(k.canonical), vec![LexemeKind::Keyword(k.id)], "keyword {:?}", k.id);
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            assert_eq!(kinds(o.spelling), vec![LexemeKind::Operator(o.id)], "operator {:?}", o.id);
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            assert_eq!(
                kinds(p.canonical),
                vec![LexemeKind::Punctuation(p.id)],
                "punctuation {:?}",
                p.id
            );
        }
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(kinds("Struct"), vec![LexemeKind::Ident]);
        assert_eq!(kinds("structs"), vec![LexemeKind::Ident]);
        assert_eq!(kinds("struct"), vec![LexemeKind::Keyword(KeywordId::Struct)]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(kinds("42"), vec![LexemeKind::Number]);
        assert_eq!(kinds("-0x1F"), vec![LexemeKind::Number]);
        assert_eq!(texts("x = -3"), vec!["x", "=", "-3"]);
        assert_eq!(texts("a-1"), vec!["a", "-", "1"]);
        assert_eq!(texts("a - 1"), vec!["a", "-", "1"]);
        assert_eq!(texts("(-1)"), vec!["(", "-1", ")"]);
        assert_eq!(texts("f(a)-0x2"), vec!["f", "(", "a", ")", "-", "0x2"]);
        assert_eq!(texts("case -1"), vec!["case", "-1"]);
        assert_eq!(texts("true-1"), vec!["true", "-", "1"]);
    }

    #[test]
    fn test_number_errors() {
        for source in ["0x", "0xZZ", "12ab", "-0x"] {
            let err = lex(source).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Lexical, "{}", source);
            assert_eq!(err.span.start, 0, "{}", source);
        }
    }

    #[test]
    fn test_strings() {
        assert_eq!(kinds(r#""hello \"world\"""#), vec![LexemeKind::String]);
        assert_eq!(texts(r#"{"a": 1}"#), vec!["{", r#""a""#, ":", "1", "}"]);

        let err = lex("\"abc").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        let err = lex("\"ab\ncd\"").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        let err = lex(r#"  "a\qb""#).unwrap_err();
        assert_eq!(err.span, Span::new(4, 6));
    }

    #[test]
    fn test_comments() {
        assert_eq!(kinds("/* a * b */"), vec![LexemeKind::Comment]);
        assert_eq!(texts("/* a */ /* b */"), vec!["/* a */", "/* b */"]);
        assert_eq!(texts("/**/x"), vec!["/**/", "x"]);
        let err = lex("  /* never closed").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.offset(), 2);
    }

    #[test]
    fn test_hierarchy_markers() {
        assert_eq!(kinds("´"), vec![LexemeKind::Dots]);
        assert_eq!(texts("´´´.len"), vec!["´´´", ".", "len"]);
        assert_eq!(lex("´´").unwrap().lexemes[0].len(), 4);
    }

    #[test]
    fn test_sigils() {
        assert_eq!(
            kinds("$a ${a}"),
            vec![
                LexemeKind::Punctuation(PunctuationId::Dollar),
                LexemeKind::Ident,
                LexemeKind::Punctuation(PunctuationId::DollarBrace),
                LexemeKind::Ident,
                LexemeKind::Punctuation(PunctuationId::RBrace),
            ]
        );
    }

    #[test]
    fn test_invalid_characters() {
        for (source, offset) in [("a # b", 2), ("!x", 0), ("é", 0), ("x ~", 2)] {
            let err = lex(source).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Lexical, "{}", source);
            assert_eq!(err.offset(), offset, "{}", source);
        }
    }

    #[test]
    fn test_spans_and_trivia_tile_input() {
        let source = "Foo struct {\n\tbar  u8; /* c */\n}\r\n";
        let scan = lex(source).unwrap();
        let mut spans: Vec<Span> = scan.lexemes.iter().map(|l| l.span).chain(scan.trivia.iter().copied()).collect();
        spans.sort_by_key(|s| (s.start, s.end));
        let mut pos = 0;
        for span in spans.iter().filter(|s| !s.is_empty()) {
            assert_eq!(span.start, pos);
            pos = span.end;
        }
        assert_eq!(pos, source.len());
        assert_eq!(scan.lexemes.last().map(|l| l.kind), Some(LexemeKind::Eof));
    }

    #[test]
    fn test_empty_input() {
        let scan = lex("").unwrap();
        assert_eq!(scan.lexemes.len(), 1);
        assert!(scan.trivia.is_empty());
        assert!(scan.significant().is_empty());
    }
}
