//! Parser for PGDL
//!
//! A hand-written recursive-descent parser for definitions, types, parameter lists and values, with a
//! precedence-climbing expression parser for the embedded expression language. The two are mutually recursive:
//! types embed expressions (`[len]`, switch selectors, case labels) and expressions never embed types.
//!
//! ## Examples
//!
//! ```rust
//! use pgdl_syntax::{lexer, parser};
//!
//! let scan = lexer::lex("Frame struct(endian=\"big\") { len u16; body bytes[len] }").unwrap();
//! let program = parser::parse_program(&scan.lexemes).unwrap();
//! assert_eq!(program.definitions[0].node.name.node, "Frame");
//! ```

use crate::ast::*;
use crate::diagnostics::{ErrorKind, ParseError};
use crate::lexer::strings;
use crate::lexer::{Lexeme, LexemeKind};
use pgdl_core::lang::keywords::KeywordId;
use pgdl_core::lang::lexical::HIERARCHY_MARKER;
use pgdl_core::lang::operators::{self, OperatorId, PrecedenceClass};
use pgdl_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/types.rs");
include!("parser/values.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
