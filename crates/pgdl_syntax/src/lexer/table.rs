//! Shared, immutable scan table.
//!
//! Built once per process from the `pgdl_core` registries and then only read, so concurrent scans share it without
//! locking.

use std::collections::HashMap;
use std::sync::OnceLock;

use pgdl_core::lang::keywords::{self, KeywordId};
use pgdl_core::lang::lexical;
use pgdl_core::lang::operators::{self, OperatorId};
use pgdl_core::lang::punctuation::{self, PunctuationId};

/// Coarse class of an ASCII byte, used to dispatch the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    IdentStart,
    Digit,
    Quote,
    /// First byte of at least one operator or punctuation spelling.
    Symbol,
    Invalid,
}

/// Fixed spelling recognised by longest match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Operator(OperatorId),
    Punctuation(PunctuationId),
}

#[derive(Debug)]
pub struct ScanTable {
    classes: [CharClass; 128],
    keywords: HashMap<&'static str, KeywordId>,
    /// Spellings keyed by first byte, longest first.
    symbols: HashMap<u8, Vec<(&'static str, Symbol)>>,
}

static TABLE: OnceLock<ScanTable> = OnceLock::new();

impl ScanTable {
    /// The process-wide table, built on first use.
    pub fn get() -> &'static ScanTable {
        TABLE.get_or_init(ScanTable::build)
    }

    fn build() -> ScanTable {
        let mut symbols: HashMap<u8, Vec<(&'static str, Symbol)>> = HashMap::new();
        let spellings = operators::OPERATORS
            .iter()
            .map(|o| (o.spelling, Symbol::Operator(o.id)))
            .chain(
                punctuation::PUNCTUATION
                    .iter()
                    .map(|p| (p.canonical, Symbol::Punctuation(p.id))),
            );
        for (spelling, symbol) in spellings {
            if let Some(&first) = spelling.as_bytes().first() {
                symbols.entry(first).or_default().push((spelling, symbol));
            }
        }
        for candidates in symbols.values_mut() {
            candidates.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }

        let mut classes = [CharClass::Invalid; 128];
        for (byte, class) in classes.iter_mut().enumerate() {
            let c = char::from(byte as u8);
            *class = if lexical::is_whitespace(c) {
                CharClass::Whitespace
            } else if lexical::is_ident_start(c) {
                CharClass::IdentStart
            } else if c.is_ascii_digit() {
                CharClass::Digit
            } else if c == lexical::STRING_QUOTE {
                CharClass::Quote
            } else if symbols.contains_key(&(byte as u8)) {
                CharClass::Symbol
            } else {
                CharClass::Invalid
            };
        }

        let keywords = keywords::KEYWORDS.iter().map(|k| (k.canonical, k.id)).collect();

        tracing::debug!(symbol_heads = symbols.len(), "built scan table");
        ScanTable {
            classes,
            keywords,
            symbols,
        }
    }

    /// Class of a character; every non-ASCII character is `Invalid` here (the marker is checked separately).
    pub fn class(&self, c: char) -> CharClass {
        if c.is_ascii() {
            self.classes[c as usize]
        } else {
            CharClass::Invalid
        }
    }

    pub fn keyword(&self, spelling: &str) -> Option<KeywordId> {
        self.keywords.get(spelling).copied()
    }

    /// Longest operator or punctuation spelling that prefixes `rest`.
    pub fn match_symbol(&self, rest: &str) -> Option<(&'static str, Symbol)> {
        let first = rest.as_bytes().first()?;
        self.symbols
            .get(first)?
            .iter()
            .find(|(spelling, _)| rest.starts_with(spelling))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_match_wins() {
        let table = ScanTable::get();
        assert_eq!(table.match_symbol("<<x"), Some(("<<", Symbol::Operator(OperatorId::Shl))));
        assert_eq!(table.match_symbol("<=1"), Some(("<=", Symbol::Operator(OperatorId::LtEq))));
        assert_eq!(table.match_symbol("&&"), Some(("&&", Symbol::Operator(OperatorId::AndAnd))));
        assert_eq!(
            table.match_symbol("${a}"),
            Some(("${", Symbol::Punctuation(PunctuationId::DollarBrace)))
        );
        assert_eq!(table.match_symbol("!x"), None);
    }

    #[test]
    fn test_char_classes() {
        let table = ScanTable::get();
        assert_eq!(table.class('\u{000C}'), CharClass::Whitespace);
        assert_eq!(table.class('_'), CharClass::IdentStart);
        assert_eq!(table.class('7'), CharClass::Digit);
        assert_eq!(table.class('"'), CharClass::Quote);
        assert_eq!(table.class('!'), CharClass::Symbol);
        assert_eq!(table.class('#'), CharClass::Invalid);
        assert_eq!(table.class(lexical::HIERARCHY_MARKER), CharClass::Invalid);
    }

    #[test]
    fn test_table_is_shared() {
        assert!(std::ptr::eq(ScanTable::get(), ScanTable::get()));
        assert_eq!(ScanTable::get().keyword("switch"), Some(KeywordId::Switch));
        assert_eq!(ScanTable::get().keyword("Switch"), None);
    }
}
