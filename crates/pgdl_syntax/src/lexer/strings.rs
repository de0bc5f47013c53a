//! String literal scanning and unescaping.

use super::Lexer;
use super::tokens::LexemeKind;
use crate::ast::Span;
use crate::diagnostics::ParseError;
use pgdl_core::lang::lexical::STRING_QUOTE;

/// An invalid escape sequence, located relative to the start of the quoted spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeError {
    pub offset: usize,
    pub len: usize,
    pub message: String,
}

impl<'a> Lexer<'a> {
    /// Scan a double-quoted string; the opening quote has already been consumed.
    pub(super) fn scan_string(&mut self, start: usize) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(ParseError::lexical(
                        "unterminated string literal",
                        Span::new(start, self.pos),
                    )
                    .with_hint("string literals end with `\"` on the same line"));
                }
                Some('\\') => {
                    self.advance();
                    // The escape itself is validated by `unescape` below.
                    if matches!(self.peek(), Some(c) if c != '\n') {
                        self.advance();
                    }
                }
                Some(c) if c == STRING_QUOTE => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let raw = &self.source[start..self.pos];
        if let Err(err) = unescape(raw) {
            return Err(ParseError::lexical(
                err.message,
                Span::new(start + err.offset, start + err.offset + err.len),
            )
            .with_expected("one of \\\" \\\\ \\/ \\b \\f \\n \\r \\t \\uXXXX"));
        }
        self.push(LexemeKind::String, start);
        Ok(())
    }
}

/// Decode the contents of a quoted string spelling (quotes included).
pub fn unescape(raw: &str) -> Result<String, EscapeError> {
    let inner = raw
        .strip_prefix(STRING_QUOTE)
        .and_then(|s| s.strip_suffix(STRING_QUOTE))
        .unwrap_or(raw);
    let base = if inner.len() < raw.len() { STRING_QUOTE.len_utf8() } else { 0 };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, escape)) = chars.next() else {
            return Err(EscapeError {
                offset: base + i,
                len: 1,
                message: "dangling `\\` at end of string".to_string(),
            });
        };
        let decoded = match escape {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => {
                let digits = inner.get(i + 2..i + 6).filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()));
                let scalar = digits
                    .and_then(|d| u32::from_str_radix(d, 16).ok())
                    .and_then(char::from_u32);
                match scalar {
                    Some(ch) => {
                        for _ in 0..4 {
                            chars.next();
                        }
                        ch
                    }
                    None => {
                        let len = inner[i..].chars().take(6).map(char::len_utf8).sum();
                        return Err(EscapeError {
                            offset: base + i,
                            len,
                            message: "invalid unicode escape".to_string(),
                        });
                    }
                }
            }
            other => {
                return Err(EscapeError {
                    offset: base + i,
                    len: 1 + other.len_utf8(),
                    message: format!("invalid escape `\\{}`", other),
                });
            }
        };
        out.push(decoded);
    }
    Ok(out)
}
