//! Lexical markers that are neither keywords, operators nor punctuation.
//!
//! ## Notes
//! - The hierarchy marker is a non-ASCII character; a run of one or more of them forms a single lexeme whose
//!   length (in markers) is the parent-scope navigation depth.
//! - Whitespace is always insignificant to structure but is preserved by the scanner as trivia.

/// Marker character of a hierarchy reference (`´`, U+00B4 ACUTE ACCENT).
pub const HIERARCHY_MARKER: char = '\u{00B4}';

/// Opening delimiter of a multi-line comment.
pub const COMMENT_OPEN: &str = "/*";

/// Closing delimiter of a multi-line comment.
pub const COMMENT_CLOSE: &str = "*/";

/// Quote character of string literals.
pub const STRING_QUOTE: char = '"';

/// Prefix of hexadecimal number literals.
pub const HEX_PREFIX: &str = "0x";

/// Return `true` for the insignificant whitespace characters (space, tab, CR, LF, form feed).
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{000C}')
}

/// Check if a character can start an identifier (ASCII-only).
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
