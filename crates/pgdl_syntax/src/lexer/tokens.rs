//! Lexeme types for the PGDL scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for expression operators
//! - `Punctuation(PunctuationId)` for delimiters, separators, binding marks and sigils
//!
//! ## Notes
//! - Identifier shapes are uniform here; their role is decided by grammar position (see `crate::classifier`).
//! - Lexemes borrow their text from the source; they never own a copy.

use crate::ast::Span;
use pgdl_core::lang::keywords::KeywordId;
use pgdl_core::lang::operators::OperatorId;
use pgdl_core::lang::punctuation::PunctuationId;

/// Kind of lexeme produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Number,
    String,

    // ========== Special ==========
    /// `/* ... */`
    Comment,
    /// Run of hierarchy markers.
    Dots,
    /// Zero-length end marker.
    Eof,
}

/// A lexeme with its kind, source span and borrowed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'src> {
    pub kind: LexemeKind,
    pub span: Span,
    pub text: &'src str,
}

impl<'src> Lexeme<'src> {
    pub fn new(kind: LexemeKind, span: Span, text: &'src str) -> Self {
        Self { kind, span, text }
    }

    /// Byte length.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// Result of scanning one source unit.
///
/// `lexemes` always ends with a single [`LexemeKind::Eof`]. `trivia` holds the skipped whitespace runs in
/// document order; together with the lexeme spans they tile the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scan<'src> {
    pub lexemes: Vec<Lexeme<'src>>,
    pub trivia: Vec<Span>,
}

impl<'src> Scan<'src> {
    /// Lexemes without the trailing end marker.
    pub fn significant(&self) -> &[Lexeme<'src>] {
        match self.lexemes.split_last() {
            Some((last, rest)) if last.kind == LexemeKind::Eof => rest,
            _ => &self.lexemes,
        }
    }
}
