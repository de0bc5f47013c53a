//! Small helper APIs for working with `Lexeme` / `LexemeKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based lexemes.

use crate::lexer::{Lexeme, LexemeKind};
use pgdl_core::lang::keywords::{self, KeywordId};
use pgdl_core::lang::operators::OperatorId;
use pgdl_core::lang::punctuation::{self, PunctuationId};

impl LexemeKind {
    /// Return the keyword id, if this is a keyword lexeme.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            LexemeKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, LexemeKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator lexeme.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            LexemeKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, LexemeKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation lexeme.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            LexemeKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, LexemeKind::Punctuation(p) if *p == id)
    }
}

impl Lexeme<'_> {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }
}

/// Whether a lexeme of this kind can be the last lexeme of an operand.
///
/// A `-` directly after such a lexeme is the subtraction operator; anywhere else it may start a negative number.
pub fn ends_operand(kind: &LexemeKind) -> bool {
    match kind {
        LexemeKind::Ident | LexemeKind::Number | LexemeKind::String | LexemeKind::Dots => true,
        LexemeKind::Keyword(id) => keywords::is_literal(*id),
        LexemeKind::Punctuation(id) => punctuation::is_closing(*id),
        LexemeKind::Operator(_) | LexemeKind::Comment | LexemeKind::Eof => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_operand() {
        assert!(ends_operand(&LexemeKind::Ident));
        assert!(ends_operand(&LexemeKind::Keyword(KeywordId::Null)));
        assert!(ends_operand(&LexemeKind::Punctuation(PunctuationId::RBracket)));
        assert!(!ends_operand(&LexemeKind::Keyword(KeywordId::Case)));
        assert!(!ends_operand(&LexemeKind::Punctuation(PunctuationId::Eq)));
        assert!(!ends_operand(&LexemeKind::Operator(OperatorId::Plus)));
        assert!(!ends_operand(&LexemeKind::Comment));
    }
}
