//! Numeric literal scanning.
//!
//! A number is an optional `-`, then `0x` plus hex digits or a run of decimal digits. Whether a leading `-` belongs
//! to the number is decided by the caller; by the time we get here the sign (if any) is already consumed.

use super::Lexer;
use super::tokens::LexemeKind;
use crate::ast::Span;
use crate::diagnostics::ParseError;
use pgdl_core::lang::lexical::{self, HEX_PREFIX};

impl<'a> Lexer<'a> {
    pub(super) fn scan_number(&mut self, start: usize) -> Result<(), ParseError> {
        if self.source[self.pos..].starts_with(HEX_PREFIX) {
            self.pos += HEX_PREFIX.len();
            let digits_start = self.pos;
            self.eat_while(|c| c.is_ascii_hexdigit());
            if self.pos == digits_start {
                return Err(ParseError::lexical(
                    "hexadecimal literal has no digits",
                    Span::new(start, self.pos),
                )
                .with_expected("hex digit"));
            }
        } else {
            self.eat_while(|c| c.is_ascii_digit());
        }

        if let Some(c) = self.peek().filter(|c| lexical::is_ident_continue(*c)) {
            let bad_end = self.pos + c.len_utf8();
            return Err(ParseError::lexical(
                format!("invalid character `{}` in numeric literal", c),
                Span::new(start, bad_end),
            )
            .with_hint("separate the number from the following name with whitespace or an operator"));
        }

        self.push(LexemeKind::Number, start);
        Ok(())
    }
}
