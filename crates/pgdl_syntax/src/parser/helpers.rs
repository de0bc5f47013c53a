/// Lexeme-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming lexemes (`peek`, `peek_nth`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Building spanned nodes from the lexemes consumed since a start index
/// - Error construction and the nesting guard
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` once the current lexeme is [`LexemeKind::Eof`] or the slice is exhausted.
    fn is_at_end(&self) -> bool {
        self.peek().kind == LexemeKind::Eof
    }

    fn lexeme_at(&self, index: usize) -> Lexeme<'a> {
        self.lexemes.get(index).copied().unwrap_or(self.eof)
    }

    /// Return the current lexeme without consuming it.
    fn peek(&self) -> Lexeme<'a> {
        self.lexeme_at(self.pos)
    }

    /// Return the lexeme `n` positions ahead without consuming anything.
    fn peek_nth(&self, n: usize) -> Lexeme<'a> {
        self.lexeme_at(self.pos + n)
    }

    /// Consume the current lexeme and return it.
    fn advance(&mut self) -> Lexeme<'a> {
        let lexeme = self.peek();
        if lexeme.kind != LexemeKind::Eof {
            self.pos += 1;
        }
        lexeme
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the given punctuation or fail with an error of `kind`.
    fn expect_punct(&mut self, id: PunctuationId, kind: ErrorKind, expected: &str) -> Result<Lexeme<'a>, ParseError> {
        if self.check_punct(id) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind, expected))
        }
    }

    /// Wrap `node` with the span and lexeme range consumed since `start`.
    fn spanned<T>(&self, start: usize, node: T) -> Spanned<T> {
        let first = self.lexeme_at(start).span;
        let last = if self.pos > start {
            self.lexeme_at(self.pos - 1).span
        } else {
            first
        };
        Spanned::new(node, first.merge(last), LexemeRange::new(start, self.pos))
    }

    /// Error for the current lexeme, which is not what the production needs.
    ///
    /// A comment in any position other than before a definition or a field is reported as structural,
    /// regardless of `kind`.
    fn unexpected(&self, kind: ErrorKind, expected: &str) -> ParseError {
        let found = self.peek();
        if found.kind == LexemeKind::Comment {
            return ParseError::structural("comment is not allowed here", found.span)
                .with_expected(expected)
                .with_hint("comments may only precede a root definition or a struct/union field");
        }
        ParseError::new(
            kind,
            format!("expected {}, found {}", expected, describe(&found)),
            found.span,
        )
        .with_expected(expected)
    }

    fn enter(&mut self, kind: ErrorKind) -> Result<(), ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::new(
                kind,
                format!("nesting deeper than {} levels", MAX_NESTING),
                self.peek().span,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Human-readable description of a lexeme for error messages.
fn describe(lexeme: &Lexeme<'_>) -> String {
    match lexeme.kind {
        LexemeKind::Eof => "end of input".to_string(),
        LexemeKind::Comment => "comment".to_string(),
        _ => format!("`{}`", lexeme.text),
    }
}
