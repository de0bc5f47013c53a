#![forbid(unsafe_code)]
//! Protocol Grammar Description Language (PGDL) toolchain
//!
//! PGDL describes binary and text wire formats as a tree of types. This crate bundles the syntax frontend
//! (`pgdl_syntax`), the shared vocabulary (`pgdl_core`), highlighting configuration, token rendering and the `pgdl`
//! command-line tool.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups that can only fail on a missing table entry use `.expect(..)` with a
//!   clear message.
//!
//! ## Examples
//! ```rust
//! use pgdl::{EntryPoint, HighlightConfig, highlight_with_config};
//!
//! let config = HighlightConfig::new().with_entry(EntryPoint::Expression);
//! let tokens = highlight_with_config("a + 1", &config).unwrap();
//! assert_eq!(tokens.len(), 5);
//! ```

pub mod cli;
pub mod config;
pub mod render;
pub mod version;

pub use pgdl_syntax::ast;
pub use pgdl_syntax::diagnostics;
pub use pgdl_syntax::lexer;
pub use pgdl_syntax::parser;

pub use config::HighlightConfig;
pub use pgdl_syntax::{EntryPoint, ErrorKind, ParseError, Role, Token, highlight, highlight_configured, highlight_with};

/// Highlight a source unit according to `config`.
///
/// ## Errors
/// Returns the first lexical, syntax or structural error.
pub fn highlight_with_config(source: &str, config: &HighlightConfig) -> Result<Vec<Token>, ParseError> {
    pgdl_syntax::highlight_configured(source, config.entry, config.warn_on_fallback)
}
