/// Parse a lexeme stream as a [`Program`] (zero or more root definitions).
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `lexemes`: Lexeme stream produced by `pgdl_syntax::lexer`.
///
/// ## Errors
/// Returns the first structural or syntax error.
#[tracing::instrument(skip_all, fields(lexeme_count = lexemes.len()))]
pub fn parse_program<'a>(lexemes: &'a [Lexeme<'a>]) -> Result<Program, ParseError> {
    let program = Parser::new(lexemes).parse_program()?;
    tracing::debug!(definitions = program.definitions.len(), "parsed program");
    Ok(program)
}

/// Parse a lexeme stream as exactly one type.
#[tracing::instrument(skip_all, fields(lexeme_count = lexemes.len()))]
pub fn parse_any_type<'a>(lexemes: &'a [Lexeme<'a>]) -> Result<Spanned<AnyType>, ParseError> {
    Parser::new(lexemes).parse_any_type()
}

/// Parse a lexeme stream as exactly one expression; trailing lexemes are an error.
#[tracing::instrument(skip_all, fields(lexeme_count = lexemes.len()))]
pub fn parse_expression<'a>(lexemes: &'a [Lexeme<'a>]) -> Result<Spanned<Expr>, ParseError> {
    Parser::new(lexemes).parse_expression()
}

/// Parse one expression from the front of `lexemes`.
///
/// Returns the expression and the number of lexemes it consumed; whatever follows is left alone.
pub fn parse_expression_prefix<'a>(lexemes: &'a [Lexeme<'a>]) -> Result<(Spanned<Expr>, usize), ParseError> {
    Parser::new(lexemes).parse_expression_prefix()
}

/// Parse from the given start production.
pub fn parse_entry<'a>(lexemes: &'a [Lexeme<'a>], entry: EntryPoint) -> Result<ParsedUnit, ParseError> {
    match entry {
        EntryPoint::Program => parse_program(lexemes).map(ParsedUnit::Program),
        EntryPoint::AnyType => parse_any_type(lexemes).map(ParsedUnit::AnyType),
        EntryPoint::Expression => parse_expression(lexemes).map(ParsedUnit::Expression),
    }
}
