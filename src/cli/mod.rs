//! CLI module for the PGDL toolchain
//!
//! This module provides the `pgdl` command-line interface.
//!
//! ## Commands
//!
//! - `tokens <file|->` - Print the classified token stream
//! - `parse <file|->` - Print the syntax tree
//! - `check <file|->` - Parse and report the first error, if any
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use pgdl_syntax::EntryPoint;

use crate::config::HighlightConfig;
use crate::version::PGDL_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error with a custom exit code.
    pub fn with_code(message: impl Into<String>, code: i32) -> Self {
        Self::new(message, ExitCode(code))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Exit code used when the input was read but rejected by the parser.
pub const INVALID_INPUT: i32 = 2;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Parser and token classifier for PGDL grammars
#[derive(Parser, Debug)]
#[command(name = "pgdl")]
#[command(version = PGDL_VERSION)]
#[command(about = "Parser and token classifier for PGDL grammars", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the classified token stream
    Tokens {
        /// Source file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Start production to parse the input as
        #[arg(long, value_enum, default_value_t = EntryArg::Program)]
        entry: EntryArg,
        /// Output shape
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Do not log identifiers that fell back to `Generic`
        #[arg(long)]
        quiet_fallbacks: bool,
    },

    /// Print the syntax tree
    Parse {
        /// Source file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Start production to parse the input as
        #[arg(long, value_enum, default_value_t = EntryArg::Program)]
        entry: EntryArg,
    },

    /// Parse and report the first error, if any
    Check {
        /// Source file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Start production to parse the input as
        #[arg(long, value_enum, default_value_t = EntryArg::Program)]
        entry: EntryArg,
    },
}

/// Start production as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryArg {
    Program,
    Type,
    Expr,
}

impl From<EntryArg> for EntryPoint {
    fn from(arg: EntryArg) -> Self {
        match arg {
            EntryArg::Program => EntryPoint::Program,
            EntryArg::Type => EntryPoint::AnyType,
            EntryArg::Expr => EntryPoint::Expression,
        }
    }
}

/// Token output shape.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Tokens {
            file,
            entry,
            format,
            quiet_fallbacks,
        } => {
            let config = HighlightConfig::new()
                .with_entry(entry.into())
                .with_fallback_warnings(!quiet_fallbacks);
            commands::print_tokens(&file, &config, format)
        }
        Command::Parse { file, entry } => commands::parse_file(&file, entry.into()),
        Command::Check { file, entry } => commands::check_file(&file, entry.into()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens_defaults() {
        let cli = Cli::try_parse_from(["pgdl", "tokens", "proto.pgdl"]).unwrap();
        if let Command::Tokens {
            file,
            entry,
            format,
            quiet_fallbacks,
        } = cli.command
        {
            assert_eq!(file, PathBuf::from("proto.pgdl"));
            assert_eq!(entry, EntryArg::Program);
            assert_eq!(format, OutputFormat::Text);
            assert!(!quiet_fallbacks);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_json_expr() {
        let cli = Cli::try_parse_from(["pgdl", "tokens", "-", "--entry", "expr", "--format", "json"]).unwrap();
        if let Command::Tokens { file, entry, format, .. } = cli.command {
            assert_eq!(file, PathBuf::from("-"));
            assert_eq!(entry, EntryArg::Expr);
            assert_eq!(format, OutputFormat::Json);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_parse_type_entry() {
        let cli = Cli::try_parse_from(["pgdl", "parse", "t.pgdl", "--entry", "type"]).unwrap();
        assert!(matches!(cli.command, Command::Parse { entry: EntryArg::Type, .. }));
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::try_parse_from(["pgdl", "check", "t.pgdl"]).unwrap();
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn test_cli_rejects_unknown_entry() {
        assert!(Cli::try_parse_from(["pgdl", "tokens", "t.pgdl", "--entry", "module"]).is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["pgdl"]).is_err());
    }

    #[test]
    fn test_entry_arg_conversion() {
        assert_eq!(EntryPoint::from(EntryArg::Program), EntryPoint::Program);
        assert_eq!(EntryPoint::from(EntryArg::Type), EntryPoint::AnyType);
        assert_eq!(EntryPoint::from(EntryArg::Expr), EntryPoint::Expression);
    }

    #[test]
    fn test_cli_error_codes() {
        assert_eq!(CliError::failure("x").exit_code, ExitCode::FAILURE);
        assert_eq!(CliError::with_code("x", INVALID_INPUT).exit_code, ExitCode(2));
        assert_eq!(CliError::failure("boom").to_string(), "boom");
    }
}
