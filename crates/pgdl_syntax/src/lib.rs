//! Syntax frontend for the Protocol Grammar Description Language (PGDL): scanner, parser, AST, token classifier.
//!
//! The main entrypoint is [`highlight`], which turns source text into a gap-free sequence of classified tokens.
//! The intermediate stages are public for callers that need the AST itself.
//!
//! ## Notes
//! - This crate is "syntax-only": it does not resolve type names, evaluate field sizes, or detect cycles.
//! - Every call is independent; the only shared state is the immutable [`lexer::table::ScanTable`].
//! - Vocabulary identity (keywords/operators/punctuation/categories) comes from `pgdl_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use pgdl_syntax::{highlight, lexer, parser};
//!
//! let scan = lexer::lex("Foo struct { bar TypeX; }").unwrap();
//! let program = parser::parse_program(&scan.lexemes).unwrap();
//! assert_eq!(program.definitions.len(), 1);
//!
//! let tokens = highlight("Foo struct {}").unwrap();
//! let text: String = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(text, "Foo struct {}");
//! ```

pub mod ast;
pub mod classifier;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

pub use classifier::{Role, Token};
pub use diagnostics::{ErrorKind, ParseError};
pub use parser::EntryPoint;

/// Highlight a whole source unit parsed as a program (zero or more root definitions).
///
/// ## Errors
/// Returns the first lexical, syntax or structural error; no partial token sequence is produced.
pub fn highlight(source: &str) -> Result<Vec<Token>, ParseError> {
    highlight_with(source, EntryPoint::Program)
}

/// Highlight a source unit parsed from the given start production.
///
/// ## Errors
/// Returns the first lexical, syntax or structural error; no partial token sequence is produced.
pub fn highlight_with(source: &str, entry: EntryPoint) -> Result<Vec<Token>, ParseError> {
    highlight_configured(source, entry, true)
}

/// Scan, parse and classify `source`.
///
/// `warn_on_fallback` controls whether identifiers left without a role are logged at warn level.
///
/// ## Errors
/// Returns the first lexical, syntax or structural error; no partial token sequence is produced.
#[tracing::instrument(skip_all, fields(source_len = source.len(), entry = ?entry))]
pub fn highlight_configured(source: &str, entry: EntryPoint, warn_on_fallback: bool) -> Result<Vec<Token>, ParseError> {
    let scan = lexer::lex(source)?;
    let unit = parser::parse_entry(&scan.lexemes, entry)?;
    Ok(classifier::classify_with(source, &scan, &unit, warn_on_fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_flag_does_not_change_tokens() {
        let source = "a + f(b)";
        let loud = highlight_configured(source, EntryPoint::Expression, true).unwrap();
        let quiet = highlight_configured(source, EntryPoint::Expression, false).unwrap();
        assert_eq!(loud, quiet);
        assert_eq!(loud, highlight_with(source, EntryPoint::Expression).unwrap());
    }

    #[test]
    fn test_configured_entry_is_honoured() {
        assert!(highlight_configured("A B", EntryPoint::AnyType, false).is_ok());
        let err = highlight_configured("A B C", EntryPoint::AnyType, false).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Structural);
    }
}
