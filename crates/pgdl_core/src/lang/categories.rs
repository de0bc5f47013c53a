//! Output token categories.
//!
//! Every token delivered to a highlighting host carries exactly one [`TokenCategory`]. The category set is a
//! contract: hosts map categories to styles, so entries are only ever added.
//!
//! ## Notes
//! - [`as_str`] returns the dotted name used by the common highlighting-host convention (`Name.Class`, ...).
//! - [`TokenCategory::Generic`] is the fallback for a lexeme that reached the output without a mapped role. It is
//!   tolerated, but it signals that the grammar and the classifier have drifted apart.
//!
//! ## Examples
//! ```rust
//! use pgdl_core::lang::categories::{self, TokenCategory};
//!
//! assert_eq!(categories::as_str(TokenCategory::NameProperty), "Name.Property");
//! assert_eq!(categories::from_str("Keyword.Constant"), Some(TokenCategory::KeywordConstant));
//! ```

/// Stable identifier for every output category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Punctuation,
    String,
    Number,
    Operator,

    // Identifier roles
    NameClass,
    NameProperty,
    NameVariable,
    NameBuiltin,
    NameFunction,
    NameAttribute,

    Keyword,
    KeywordConstant,
    Comment,
    Whitespace,

    /// Fallback for unmapped lexemes.
    Generic,
}

/// Metadata for a category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: TokenCategory,
    pub name: &'static str,
    pub description: &'static str,
}

/// Registry of all output categories.
pub const CATEGORIES: &[CategoryInfo] = &[
    info(TokenCategory::Punctuation, "Punctuation", "Braces, brackets, parentheses, commas, semicolons."),
    info(TokenCategory::String, "Literal.String.Double", "Quoted string literal."),
    info(TokenCategory::Number, "Literal.Number", "Decimal or hexadecimal number."),
    info(TokenCategory::Operator, "Operator", "Expression operators, `= : .`, sigils and hierarchy markers."),
    info(TokenCategory::NameClass, "Name.Class", "Name of a root definition."),
    info(TokenCategory::NameProperty, "Name.Property", "Name of a struct, union or bits field."),
    info(TokenCategory::NameVariable, "Name.Variable.Instance", "Field or parameter referenced from an expression."),
    info(TokenCategory::NameBuiltin, "Name.Builtin", "Reference to a named type."),
    info(TokenCategory::NameFunction, "Name.Function", "Callee of a function call."),
    info(TokenCategory::NameAttribute, "Name.Attribute", "Key of a parameter pair."),
    info(TokenCategory::Keyword, "Keyword", "Type constructors and `case`."),
    info(TokenCategory::KeywordConstant, "Keyword.Constant", "`true`, `false`, `null`."),
    info(TokenCategory::Comment, "Comment.Multiline", "`/* ... */` comment."),
    info(TokenCategory::Whitespace, "Text.Whitespace", "Run of insignificant whitespace."),
    info(TokenCategory::Generic, "Generic", "Lexeme without a mapped role."),
];

/// Dotted category name.
pub fn as_str(id: TokenCategory) -> &'static str {
    info_for(id).name
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: TokenCategory) -> &'static CategoryInfo {
    CATEGORIES.iter().find(|c| c.id == id).expect("category info missing")
}

/// Resolve a dotted category name.
pub fn from_str(name: &str) -> Option<TokenCategory> {
    CATEGORIES.iter().find(|c| c.name == name).map(|c| c.id)
}

impl std::fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}

const fn info(id: TokenCategory, name: &'static str, description: &'static str) -> CategoryInfo {
    CategoryInfo { id, name, description }
}
