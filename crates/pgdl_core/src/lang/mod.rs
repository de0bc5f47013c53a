//! PGDL vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators, punctuation,
//! lexical markers, and the token categories handed to highlighting hosts.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry
//! tables instead of comparing strings at call sites.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   highlighting, docs).
//!
//! ## Examples
//! ```rust
//! use pgdl_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("struct"), Some(KeywordId::Struct));
//! assert_eq!(keywords::as_str(KeywordId::Struct), "struct");
//! ```

pub mod categories;
pub mod keywords;
pub mod lexical;
pub mod operators;
pub mod punctuation;
