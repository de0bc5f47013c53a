/// Parser core types.
///
/// This chunk defines the [`Parser`] type, the start productions it can be driven from, and the result
/// type that carries whichever tree the chosen start production built.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Maximum nesting of types, values and expressions before the parser gives up.
const MAX_NESTING: usize = 256;

/// Start production to parse an input from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryPoint {
    /// Zero or more root definitions.
    #[default]
    Program,
    /// Exactly one type.
    AnyType,
    /// Exactly one expression.
    Expression,
}

impl std::fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryPoint::Program => write!(f, "program"),
            EntryPoint::AnyType => write!(f, "type"),
            EntryPoint::Expression => write!(f, "expression"),
        }
    }
}

/// Tree produced by [`parse_entry`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedUnit {
    Program(Program),
    AnyType(Spanned<AnyType>),
    Expression(Spanned<Expr>),
}

/// Parser state.
///
/// ## Notes
/// - The parser stops at the first error; there is no recovery and no partial tree.
/// - Lexeme indices recorded in the tree are indices into the slice handed to [`Parser::new`].
/// - The slice may or may not end with `Eof`; running past its end behaves as if it did.
pub struct Parser<'a> {
    lexemes: &'a [Lexeme<'a>],
    pos: usize,
    depth: usize,
    eof: Lexeme<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a lexeme stream.
    ///
    /// ## Parameters
    /// - `lexemes`: Lexeme stream produced by `pgdl_syntax::lexer`.
    pub fn new(lexemes: &'a [Lexeme<'a>]) -> Self {
        let end = lexemes.last().map_or(0, |l| l.span.end);
        Self {
            lexemes,
            pos: 0,
            depth: 0,
            eof: Lexeme::new(LexemeKind::Eof, Span::new(end, end), ""),
        }
    }

    /// Parse the whole stream as zero or more root definitions.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut definitions = Vec::new();
        while !self.is_at_end() {
            definitions.push(self.root_def()?);
        }
        Ok(Program { definitions })
    }

    /// Parse the whole stream as exactly one type.
    pub fn parse_any_type(mut self) -> Result<Spanned<AnyType>, ParseError> {
        let ty = self.any_type()?;
        self.finish(ErrorKind::Structural)?;
        Ok(ty)
    }

    /// Parse the whole stream as exactly one expression.
    pub fn parse_expression(mut self) -> Result<Spanned<Expr>, ParseError> {
        let expr = self.expression()?;
        self.finish(ErrorKind::Syntax)?;
        Ok(expr)
    }

    /// Parse one expression from the front of the stream and report how many lexemes it used.
    pub fn parse_expression_prefix(mut self) -> Result<(Spanned<Expr>, usize), ParseError> {
        let expr = self.expression()?;
        Ok((expr, self.pos))
    }

    fn finish(&self, kind: ErrorKind) -> Result<(), ParseError> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected(kind, "end of input"))
        }
    }
}
