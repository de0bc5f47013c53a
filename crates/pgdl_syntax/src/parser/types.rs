/// Definition and type parsing.
///
/// This chunk parses root definitions and every `AnyType` form: `variant`, `struct`, `union`, `bits`,
/// `switch`, `repeat`, named references and explicit (`&`) named references.
///
/// ## Notes
/// - A trailing `;` is consumed after definitions, fields and bit fields but is left out of their spans.
/// - Variant children and switch cases take no `;`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Definitions
    // ========================================================================

    /// `[comment] Name AnyType [;]`
    fn root_def(&mut self) -> Result<Spanned<RootDef>, ParseError> {
        let start = self.pos;
        let comment = self.leading_comment();
        let name = self.identifier(ErrorKind::Structural, "definition name")?;
        let ty = self.any_type()?;
        let def = self.spanned(start, RootDef { comment, name, ty });
        self.match_punct(PunctuationId::Semicolon);
        Ok(def)
    }

    /// Dispatch on the lookahead to one of the type forms.
    fn any_type(&mut self) -> Result<Spanned<AnyType>, ParseError> {
        self.enter(ErrorKind::Structural)?;
        let start = self.pos;
        let lexeme = self.peek();
        let node = match lexeme.kind {
            LexemeKind::Keyword(KeywordId::Variant) => AnyType::Variant(self.variant_type()?),
            LexemeKind::Keyword(KeywordId::Struct) => AnyType::Struct(self.struct_type()?),
            LexemeKind::Keyword(KeywordId::Union) => AnyType::Union(self.struct_type()?),
            LexemeKind::Keyword(KeywordId::Bits) => AnyType::BitStruct(self.bit_struct_type()?),
            LexemeKind::Keyword(KeywordId::Switch) => AnyType::Switch(self.switch_type()?),
            LexemeKind::Keyword(KeywordId::Repeat) => AnyType::Repeat(self.repeat_type()?),
            LexemeKind::Operator(OperatorId::Amp) => {
                self.advance();
                AnyType::ExplicitNamed(self.named_ref()?)
            }
            LexemeKind::Ident => AnyType::Named(self.named_ref()?),
            _ => return Err(self.unexpected(ErrorKind::Structural, "a type")),
        };
        self.leave();
        Ok(self.spanned(start, node))
    }

    // ========================================================================
    // Type forms
    // ========================================================================

    /// `variant Params { AnyType+ }`
    fn variant_type(&mut self) -> Result<VariantType, ParseError> {
        self.advance();
        let params = self.params()?;
        self.expect_punct(PunctuationId::LBrace, ErrorKind::Structural, "`{`")?;

        let mut children = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            children.push(self.any_type()?);
        }
        if children.is_empty() && self.check_punct(PunctuationId::RBrace) {
            return Err(
                ParseError::structural("variant needs at least one alternative", self.peek().span)
                    .with_expected("a type"),
            );
        }
        self.expect_punct(PunctuationId::RBrace, ErrorKind::Structural, "`}`")?;
        Ok(VariantType { params, children })
    }

    /// `struct Params { Field* }` or `union Params { Field* }`
    fn struct_type(&mut self) -> Result<StructType, ParseError> {
        self.advance();
        let params = self.params()?;
        self.expect_punct(PunctuationId::LBrace, ErrorKind::Structural, "`{`")?;

        let mut fields = Vec::new();
        while !self.check_punct(PunctuationId::RBrace) && !self.is_at_end() {
            fields.push(self.field()?);
        }
        self.expect_punct(PunctuationId::RBrace, ErrorKind::Structural, "field or `}`")?;
        Ok(StructType { params, fields })
    }

    /// `[comment] name AnyType [;]`
    fn field(&mut self) -> Result<Spanned<Field>, ParseError> {
        let start = self.pos;
        let comment = self.leading_comment();
        let name = self.identifier(ErrorKind::Structural, "field name")?;
        let ty = self.any_type()?;
        let field = self.spanned(start, Field { comment, name, ty });
        self.match_punct(PunctuationId::Semicolon);
        Ok(field)
    }

    /// `bits Params { BitField* }`
    fn bit_struct_type(&mut self) -> Result<BitStructType, ParseError> {
        self.advance();
        let params = self.params()?;
        self.expect_punct(PunctuationId::LBrace, ErrorKind::Structural, "`{`")?;

        let mut fields = Vec::new();
        while self.peek().kind == LexemeKind::Ident {
            fields.push(self.bit_field()?);
        }
        self.expect_punct(PunctuationId::RBrace, ErrorKind::Structural, "bit field or `}`")?;
        Ok(BitStructType { params, fields })
    }

    /// `name : width [;]`
    fn bit_field(&mut self) -> Result<Spanned<BitField>, ParseError> {
        let start = self.pos;
        let name = self.identifier(ErrorKind::Structural, "bit field name")?;
        self.expect_punct(PunctuationId::Colon, ErrorKind::Structural, "`:`")?;
        let width = self.number_lit(ErrorKind::Structural, "bit width")?;
        let field = self.spanned(start, BitField { name, width });
        self.match_punct(PunctuationId::Semicolon);
        Ok(field)
    }

    /// `switch Expr Params { SwitchCase* }`
    fn switch_type(&mut self) -> Result<SwitchType, ParseError> {
        self.advance();
        let selector = self.expression()?;
        let params = self.params()?;
        self.expect_punct(PunctuationId::LBrace, ErrorKind::Structural, "`{`")?;

        let mut cases = Vec::new();
        while self.check_keyword(KeywordId::Case) {
            cases.push(self.switch_case()?);
        }
        self.expect_punct(PunctuationId::RBrace, ErrorKind::Structural, "`case` or `}`")?;
        Ok(SwitchType {
            selector,
            params,
            cases,
        })
    }

    /// `case Expr : AnyType`
    fn switch_case(&mut self) -> Result<Spanned<SwitchCase>, ParseError> {
        let start = self.pos;
        self.advance();
        let label = self.expression()?;
        self.expect_punct(PunctuationId::Colon, ErrorKind::Structural, "`:`")?;
        let ty = self.any_type()?;
        Ok(self.spanned(start, SwitchCase { label, ty }))
    }

    /// `repeat Params AnyType`
    fn repeat_type(&mut self) -> Result<RepeatType, ParseError> {
        self.advance();
        let params = self.params()?;
        let child = Box::new(self.any_type()?);
        Ok(RepeatType { params, child })
    }

    /// `Name Params`
    fn named_ref(&mut self) -> Result<NamedRef, ParseError> {
        let name = self.identifier(ErrorKind::Structural, "type name")?;
        let params = self.params()?;
        Ok(NamedRef { name, params })
    }
}

