//! Diagnostics and error reporting for PGDL
//!
//! Every failure of the scanner or the parsers is a single [`ParseError`]. Errors are fatal for the call that
//! produced them: there is no recovery and no partial result.
//!
//! [`ParseError`] implements [`miette::Diagnostic`], so hosts can render it with source context; [`format_error`]
//! does exactly that for the command-line tool.

use crate::ast::Span;
use miette::{Diagnostic, LabeledSpan, NamedSource, Report, SourceSpan};
use std::fmt;

/// Which stage rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input matches no lexeme shape.
    Lexical,
    /// Malformed expression.
    Syntax,
    /// Missing keyword or punctuation of a definition-level production, or an empty required body.
    Structural,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "pgdl::lexical",
            ErrorKind::Syntax => "pgdl::syntax",
            ErrorKind::Structural => "pgdl::structural",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Structural => write!(f, "structural error"),
        }
    }
}

/// A scan or parse failure with location information
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub message: String,
    /// Offending byte range; zero-length at end of input.
    pub span: Span,
    /// What the parser was looking for, if it can say.
    pub expected: Option<String>,
    pub hints: Vec<String>,
}

impl ParseError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            expected: None,
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message, span)
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    pub fn structural(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Structural, message, span)
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Byte offset of the offending input.
    pub fn offset(&self) -> usize {
        self.span.start
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            return None;
        }
        Some(Box::new(self.hints.join("\n")))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = match &self.expected {
            Some(expected) => format!("expected {}", expected),
            None => "here".to_string(),
        };
        let span = SourceSpan::from(self.span.start..self.span.end);
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(Some(label), span))))
    }
}

/// 1-based line and column (in chars) of a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    let column = source
        .get(line_start..offset)
        .map_or(offset - line_start, |s| s.chars().count())
        + 1;
    (line, column)
}

/// Render an error with the offending source attached.
pub fn format_error(file_name: &str, source: &str, error: &ParseError) -> String {
    let (line, column) = line_col(source, error.offset());
    let report =
        Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    format!("{}:{}:{}: {}\n{:?}", file_name, line, column, error, report)
}
