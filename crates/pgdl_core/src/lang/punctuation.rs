//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser: delimiters,
//! separators, binding/access markers, and the parameter-reference sigils.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use pgdl_core::lang::punctuation::{self, PunctuationCategory, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("${"), Some(PunctuationId::DollarBrace));
//! assert_eq!(punctuation::category(PunctuationId::Eq), PunctuationCategory::Binding);
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// `,` and `;`.
    Separator,
    /// `=` in key pairs and `:` in cases, bit fields and dict pairs.
    Binding,
    /// `.` member access.
    Access,
    /// `$` and `${` parameter references.
    Sigil,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,

    // Binding / access
    Eq,
    Colon,
    Dot,

    // Sigils
    Dollar,
    DollarBrace,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    // Binding / access
    info(PunctuationId::Eq, "=", PunctuationCategory::Binding),
    info(PunctuationId::Colon, ":", PunctuationCategory::Binding),
    info(PunctuationId::Dot, ".", PunctuationCategory::Access),
    // Sigils
    info(PunctuationId::Dollar, "$", PunctuationCategory::Sigil),
    info(PunctuationId::DollarBrace, "${", PunctuationCategory::Sigil),
    // Delimiters
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Return `true` for the closing delimiters `)`, `]` and `}`.
pub fn is_closing(id: PunctuationId) -> bool {
    matches!(id, PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace)
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
