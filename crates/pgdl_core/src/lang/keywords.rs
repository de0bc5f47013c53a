//! Define the reserved keyword vocabulary for PGDL.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Reserved words never match as identifiers: `struct` can not name a field or a type.
//!
//! ## Examples
//! ```rust
//! use pgdl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("repeat"), Some(KeywordId::Repeat));
//! assert_eq!(keywords::from_str("Repeat"), None);
//! assert!(keywords::is_literal(KeywordId::Null));
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Type constructors
    Variant,
    Struct,
    Bits,
    Union,
    Switch,
    Repeat,

    // Clauses
    Case,

    // Literals
    True,
    False,
    Null,
}

/// High-level grouping for documentation and highlighting.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
/// - `Literal` keywords are highlighted as keyword constants, everything else as plain keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces a type form (`struct`, `variant`, ...).
    TypeConstructor,
    /// Introduces a clause inside a type form (`case`).
    Clause,
    /// Constant literal value (`true`, `false`, `null`).
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Type constructors
    info(KeywordId::Variant, "variant", KeywordCategory::TypeConstructor),
    info(KeywordId::Struct, "struct", KeywordCategory::TypeConstructor),
    info(KeywordId::Bits, "bits", KeywordCategory::TypeConstructor),
    info(KeywordId::Union, "union", KeywordCategory::TypeConstructor),
    info(KeywordId::Switch, "switch", KeywordCategory::TypeConstructor),
    info(KeywordId::Repeat, "repeat", KeywordCategory::TypeConstructor),
    // Clauses
    info(KeywordId::Case, "case", KeywordCategory::Clause),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
    info(KeywordId::Null, "null", KeywordCategory::Literal),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` for `true`, `false` and `null`.
pub fn is_literal(id: KeywordId) -> bool {
    category(id) == KeywordCategory::Literal
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
