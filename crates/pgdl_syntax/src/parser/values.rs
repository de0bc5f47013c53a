/// Parameter list and value parsing.
///
/// This chunk parses `Params` (`[expr]` and `(key = value, ...)`, each optional) and the literal value
/// trees used as parameter arguments: dicts, lists, strings, numbers, `true`/`false`/`null`, named
/// references and parenthesized expressions.
impl<'a> Parser<'a> {
    // ========================================================================
    // Params
    // ========================================================================

    fn params(&mut self) -> Result<Params, ParseError> {
        let mut params = Params::default();

        if self.match_punct(PunctuationId::LBracket) {
            params.expr = Some(self.expression()?);
            self.expect_punct(PunctuationId::RBracket, ErrorKind::Structural, "`]`")?;
        }

        if self.match_punct(PunctuationId::LParen) {
            let mut args = Vec::new();
            if !self.check_punct(PunctuationId::RParen) {
                loop {
                    args.push(self.key_pair()?);
                    if !self.match_punct(PunctuationId::Comma) {
                        break;
                    }
                }
            }
            self.expect_punct(PunctuationId::RParen, ErrorKind::Structural, "`,` or `)`")?;
            params.args = Some(args);
        }

        Ok(params)
    }

    /// `key = Value`
    fn key_pair(&mut self) -> Result<Spanned<KeyPair>, ParseError> {
        let start = self.pos;
        let key = self.identifier(ErrorKind::Structural, "parameter name")?;
        self.expect_punct(PunctuationId::Eq, ErrorKind::Structural, "`=`")?;
        let value = self.value()?;
        Ok(self.spanned(start, KeyPair { key, value }))
    }

    // ========================================================================
    // Values
    // ========================================================================

    fn value(&mut self) -> Result<Spanned<Value>, ParseError> {
        self.enter(ErrorKind::Structural)?;
        let start = self.pos;
        let lexeme = self.peek();
        let node = match lexeme.kind {
            LexemeKind::Punctuation(PunctuationId::LBrace) => self.dict()?,
            LexemeKind::Punctuation(PunctuationId::LBracket) => self.list()?,
            LexemeKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let expr = self.expression()?;
                self.expect_punct(PunctuationId::RParen, ErrorKind::Structural, "`)`")?;
                Value::Expr(Box::new(expr))
            }
            LexemeKind::String => {
                self.advance();
                Value::String(str_lit(&lexeme)?)
            }
            LexemeKind::Number => {
                self.advance();
                Value::Number(NumberLit::from_raw(lexeme.text))
            }
            LexemeKind::Keyword(KeywordId::True) => {
                self.advance();
                Value::Bool(true)
            }
            LexemeKind::Keyword(KeywordId::False) => {
                self.advance();
                Value::Bool(false)
            }
            LexemeKind::Keyword(KeywordId::Null) => {
                self.advance();
                Value::Null
            }
            LexemeKind::Ident => Value::Named(self.named_ref()?),
            _ => return Err(self.unexpected(ErrorKind::Structural, "a value")),
        };
        self.leave();
        Ok(self.spanned(start, node))
    }

    /// `{ [ "key" : Value ("," "key" : Value)* ] }`
    fn dict(&mut self) -> Result<Value, ParseError> {
        self.advance();
        let mut pairs = Vec::new();
        if !self.check_punct(PunctuationId::RBrace) {
            loop {
                pairs.push(self.dict_pair()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RBrace, ErrorKind::Structural, "`,` or `}`")?;
        Ok(Value::Dict(pairs))
    }

    fn dict_pair(&mut self) -> Result<Spanned<DictPair>, ParseError> {
        let start = self.pos;
        let lexeme = self.peek();
        if lexeme.kind != LexemeKind::String {
            return Err(self.unexpected(ErrorKind::Structural, "string key"));
        }
        self.advance();
        let key = self.spanned(start, str_lit(&lexeme)?);
        self.expect_punct(PunctuationId::Colon, ErrorKind::Structural, "`:`")?;
        let value = self.value()?;
        Ok(self.spanned(start, DictPair { key, value }))
    }

    /// `[ [Value ("," Value)*] ]`
    fn list(&mut self) -> Result<Value, ParseError> {
        self.advance();
        let mut items = Vec::new();
        if !self.check_punct(PunctuationId::RBracket) {
            loop {
                items.push(self.value()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RBracket, ErrorKind::Structural, "`,` or `]`")?;
        Ok(Value::List(items))
    }
}
