/// Miscellaneous parser utilities.
///
/// This chunk contains small shared parsing helpers that don’t cleanly fit into
/// “types”, “values”, or “expr” (identifiers, numbers, strings and leading comments).
impl<'a> Parser<'a> {
    // ========================================================================
    // Utilities
    // ========================================================================

    fn identifier(&mut self, kind: ErrorKind, expected: &str) -> Result<Spanned<Ident>, ParseError> {
        let start = self.pos;
        let lexeme = self.peek();
        if lexeme.kind != LexemeKind::Ident {
            return Err(self.unexpected(kind, expected));
        }
        self.advance();
        Ok(self.spanned(start, lexeme.text.to_string()))
    }

    fn number_lit(&mut self, kind: ErrorKind, expected: &str) -> Result<Spanned<NumberLit>, ParseError> {
        let start = self.pos;
        let lexeme = self.peek();
        if lexeme.kind != LexemeKind::Number {
            return Err(self.unexpected(kind, expected));
        }
        self.advance();
        Ok(self.spanned(start, NumberLit::from_raw(lexeme.text)))
    }

    /// Consume at most one comment.
    fn leading_comment(&mut self) -> Option<Spanned<String>> {
        let start = self.pos;
        let lexeme = self.peek();
        if lexeme.kind != LexemeKind::Comment {
            return None;
        }
        self.advance();
        Some(self.spanned(start, lexeme.text.to_string()))
    }
}

/// Build a string literal from its lexeme.
fn str_lit(lexeme: &Lexeme<'_>) -> Result<StrLit, ParseError> {
    let value = strings::unescape(lexeme.text).map_err(|err| {
        let start = lexeme.span.start + err.offset;
        ParseError::lexical(err.message, Span::new(start, start + err.len))
    })?;
    Ok(StrLit {
        raw: lexeme.text.to_string(),
        value,
    })
}
