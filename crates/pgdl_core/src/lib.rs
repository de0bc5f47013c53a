//! Provide the canonical vocabulary of the Protocol Grammar Description Language (PGDL).
//!
//! This crate is intentionally small and dependency-free. It holds the registries that the scanner, parser and
//! token classifier agree on: reserved words, operators with their precedence classes, punctuation, the lexical
//! markers that are not ordinary punctuation, and the fixed set of output token categories.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no AST types.
//! - Syntax rules are enforced by `pgdl_syntax`; the registries only provide spellings and metadata.

pub mod lang;
