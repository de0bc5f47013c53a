/// Expression parsing.
///
/// Precedence climbing over the five classes of `pgdl_core::lang::operators`, lowest first:
/// conjunction, equality, comparison, term, factor. Every class groups to the left. Postfix
/// indexing and member access bind tighter than any operator and chain left to right.
///
/// ## Notes
/// - `name(` starts a call unless it reads `name ( key =`, which can only be a parameter list.
/// - Errors raised inside an expression are syntax errors.
impl<'a> Parser<'a> {
    // ========================================================================
    // Binary operators
    // ========================================================================

    fn expression(&mut self) -> Result<Spanned<Expr>, ParseError> {
        self.enter(ErrorKind::Syntax)?;
        let expr = self.binary_expr(PrecedenceClass::Conjunction)?;
        self.leave();
        Ok(expr)
    }

    /// Parse a left-associative chain of operators of exactly `class`.
    fn binary_expr(&mut self, class: PrecedenceClass) -> Result<Spanned<Expr>, ParseError> {
        let start = self.pos;
        let mut left = self.operand(class)?;

        while let Some(id) = self
            .peek()
            .operator_id()
            .filter(|id| operators::class_of(*id) == class)
        {
            self.advance();
            let right = self.operand(class)?;
            let node = match InfixOp::from_operator(id) {
                InfixOp::Binary(op) => Expr::Binary(Box::new(left), op, Box::new(right)),
                InfixOp::Compare(op) => Expr::Compare(Box::new(left), op, Box::new(right)),
            };
            left = self.spanned(start, node);
        }

        Ok(left)
    }

    /// Operand of an operator of `class`: the next tighter class, or a postfix chain above `Factor`.
    fn operand(&mut self, class: PrecedenceClass) -> Result<Spanned<Expr>, ParseError> {
        match class.tighter() {
            Some(next) => self.binary_expr(next),
            None => self.postfix_expr(),
        }
    }

    // ========================================================================
    // Postfix and primary
    // ========================================================================

    fn postfix_expr(&mut self) -> Result<Spanned<Expr>, ParseError> {
        let start = self.pos;
        let mut expr = self.primary_expr()?;

        loop {
            if self.match_punct(PunctuationId::LBracket) {
                let index = self.expression()?;
                self.expect_punct(PunctuationId::RBracket, ErrorKind::Syntax, "`]`")?;
                expr = self.spanned(start, Expr::Index(Box::new(expr), Box::new(index)));
            } else if self.match_punct(PunctuationId::Dot) {
                let member = self.identifier(ErrorKind::Syntax, "member name")?;
                expr = self.spanned(start, Expr::Member(Box::new(expr), member));
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn primary_expr(&mut self) -> Result<Spanned<Expr>, ParseError> {
        let start = self.pos;
        let lexeme = self.peek();

        let node = match lexeme.kind {
            LexemeKind::Ident if self.starts_call() => self.call_expr()?,
            LexemeKind::Ident => {
                self.advance();
                Expr::Field(lexeme.text.to_string())
            }
            LexemeKind::Punctuation(PunctuationId::Dollar) => {
                self.advance();
                let name = self.identifier(ErrorKind::Syntax, "parameter name")?;
                Expr::Param(ParamRef::Name(name))
            }
            LexemeKind::Punctuation(PunctuationId::DollarBrace) => {
                self.advance();
                let inner = self.expression()?;
                self.expect_punct(PunctuationId::RBrace, ErrorKind::Syntax, "`}`")?;
                Expr::Param(ParamRef::Expr(Box::new(inner)))
            }
            LexemeKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                let inner = self.expression()?;
                self.expect_punct(PunctuationId::RParen, ErrorKind::Syntax, "`)`")?;
                Expr::Paren(Box::new(inner))
            }
            LexemeKind::Keyword(KeywordId::True) => {
                self.advance();
                Expr::Literal(Literal::Bool(true))
            }
            LexemeKind::Keyword(KeywordId::False) => {
                self.advance();
                Expr::Literal(Literal::Bool(false))
            }
            LexemeKind::Keyword(KeywordId::Null) => {
                self.advance();
                Expr::Literal(Literal::Null)
            }
            LexemeKind::Number => {
                self.advance();
                Expr::Literal(Literal::Number(NumberLit::from_raw(lexeme.text)))
            }
            LexemeKind::String => {
                self.advance();
                Expr::Literal(Literal::String(str_lit(&lexeme)?))
            }
            LexemeKind::Dots => {
                self.advance();
                let depth = lexeme.text.chars().filter(|c| *c == HIERARCHY_MARKER).count();
                Expr::Hierarchy { depth }
            }
            _ => return Err(self.unexpected(ErrorKind::Syntax, "an expression")),
        };

        Ok(self.spanned(start, node))
    }

    /// `name ( [Expr ("," Expr)*] )`
    fn call_expr(&mut self) -> Result<Expr, ParseError> {
        let callee = self.identifier(ErrorKind::Syntax, "function name")?;
        self.expect_punct(PunctuationId::LParen, ErrorKind::Syntax, "`(`")?;

        let mut args = Vec::new();
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.expect_punct(PunctuationId::RParen, ErrorKind::Syntax, "`,` or `)`")?;
        Ok(Expr::Call(callee, args))
    }

    /// Whether the identifier at the cursor is the callee of a call.
    fn starts_call(&self) -> bool {
        self.peek_nth(1).kind.is_punctuation(PunctuationId::LParen)
            && !(self.peek_nth(2).kind == LexemeKind::Ident
                && self.peek_nth(3).kind.is_punctuation(PunctuationId::Eq))
    }
}
