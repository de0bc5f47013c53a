//! Operator vocabulary.
//!
//! This module defines the binary operators of the PGDL expression language together with their precedence
//! class. There are no prefix operators and no right-associative operators: every operator is infix and groups to
//! the left within its class.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; the scanner is responsible for longest-match.
//! - `&` doubles as the explicit-named-type marker in type position; the parser decides which role applies.
//!
//! ## Examples
//! ```rust
//! use pgdl_core::lang::operators::{self, OperatorId, PrecedenceClass};
//!
//! assert_eq!(operators::from_str("<<"), Some(OperatorId::Shl));
//! assert_eq!(operators::class_of(OperatorId::Shl), PrecedenceClass::Factor);
//! assert!(PrecedenceClass::Factor.binds_tighter_than(PrecedenceClass::Term));
//! ```

/// The five precedence classes, lowest binding first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrecedenceClass {
    /// `||`, `&&`
    Conjunction,
    /// `==`, `!=`
    Equality,
    /// `<`, `>`, `<=`, `>=`
    Comparison,
    /// `+`, `-`, `&`, `|`, `^`
    Term,
    /// `*`, `/`, `<<`, `>>`
    Factor,
}

impl PrecedenceClass {
    /// All classes, lowest binding first.
    pub const LADDER: [PrecedenceClass; 5] = [
        PrecedenceClass::Conjunction,
        PrecedenceClass::Equality,
        PrecedenceClass::Comparison,
        PrecedenceClass::Term,
        PrecedenceClass::Factor,
    ];

    /// The next tighter-binding class, or `None` above `Factor` (primary expressions).
    pub fn tighter(self) -> Option<PrecedenceClass> {
        match self {
            PrecedenceClass::Conjunction => Some(PrecedenceClass::Equality),
            PrecedenceClass::Equality => Some(PrecedenceClass::Comparison),
            PrecedenceClass::Comparison => Some(PrecedenceClass::Term),
            PrecedenceClass::Term => Some(PrecedenceClass::Factor),
            PrecedenceClass::Factor => None,
        }
    }

    pub fn binds_tighter_than(self, other: PrecedenceClass) -> bool {
        self > other
    }

    /// Whether operators of this class produce a comparison rather than arithmetic/logic.
    pub fn is_comparison(self) -> bool {
        matches!(self, PrecedenceClass::Equality | PrecedenceClass::Comparison)
    }
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Conjunction
    OrOr,
    AndAnd,

    // Equality
    EqEq,
    NotEq,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Term
    Plus,
    Minus,
    Amp,
    Pipe,
    Caret,

    // Factor
    Star,
    Slash,
    Shl,
    Shr,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub class: PrecedenceClass,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Conjunction
    op(OperatorId::OrOr, "||", PrecedenceClass::Conjunction),
    op(OperatorId::AndAnd, "&&", PrecedenceClass::Conjunction),
    // Equality
    op(OperatorId::EqEq, "==", PrecedenceClass::Equality),
    op(OperatorId::NotEq, "!=", PrecedenceClass::Equality),
    // Comparison
    op(OperatorId::Lt, "<", PrecedenceClass::Comparison),
    op(OperatorId::Gt, ">", PrecedenceClass::Comparison),
    op(OperatorId::LtEq, "<=", PrecedenceClass::Comparison),
    op(OperatorId::GtEq, ">=", PrecedenceClass::Comparison),
    // Term
    op(OperatorId::Plus, "+", PrecedenceClass::Term),
    op(OperatorId::Minus, "-", PrecedenceClass::Term),
    op(OperatorId::Amp, "&", PrecedenceClass::Term),
    op(OperatorId::Pipe, "|", PrecedenceClass::Term),
    op(OperatorId::Caret, "^", PrecedenceClass::Term),
    // Factor
    op(OperatorId::Star, "*", PrecedenceClass::Factor),
    op(OperatorId::Slash, "/", PrecedenceClass::Factor),
    op(OperatorId::Shl, "<<", PrecedenceClass::Factor),
    op(OperatorId::Shr, ">>", PrecedenceClass::Factor),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Precedence class of an operator.
pub fn class_of(id: OperatorId) -> PrecedenceClass {
    info_for(id).class
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, class: PrecedenceClass) -> OperatorInfo {
    OperatorInfo { id, spelling, class }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ladder_is_ordered() {
        for pair in PrecedenceClass::LADDER.windows(2) {
            assert!(pair[1].binds_tighter_than(pair[0]));
            assert_eq!(pair[0].tighter(), Some(pair[1]));
        }
        assert_eq!(PrecedenceClass::Factor.tighter(), None);
    }

    #[test]
    fn test_spellings_are_unique() {
        for (i, a) in OPERATORS.iter().enumerate() {
            for b in &OPERATORS[i + 1..] {
                assert_ne!(a.spelling, b.spelling);
            }
        }
    }

    #[test]
    fn test_comparison_classes() {
        assert!(class_of(OperatorId::EqEq).is_comparison());
        assert!(class_of(OperatorId::GtEq).is_comparison());
        assert!(!class_of(OperatorId::AndAnd).is_comparison());
        assert!(!class_of(OperatorId::Caret).is_comparison());
    }
}
