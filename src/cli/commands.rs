//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use pgdl_syntax::{EntryPoint, ParseError, diagnostics, lexer, parser};

use super::{CliError, CliResult, ExitCode, INVALID_INPUT, OutputFormat};
use crate::config::HighlightConfig;
use crate::render;

/// Maximum source size accepted by the CLI (16 MB).
///
/// Grammar files are small; anything larger is almost certainly the wrong input.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Path spelling that selects stdin.
const STDIN_PATH: &str = "-";

/// Name used for stdin in diagnostics.
const STDIN_NAME: &str = "<stdin>";

// ============================================================================
// Input
// ============================================================================

/// Read source from a file path, or from stdin when the path is `-`.
///
/// ## Errors
///
/// Returns an error if:
/// - The input cannot be read (I/O error, invalid UTF-8)
/// - The input exceeds `MAX_SOURCE_SIZE`
pub fn read_source(path: &Path) -> CliResult<String> {
    if path == Path::new(STDIN_PATH) {
        return read_stdin();
    }

    let shown = path.display();
    let metadata = fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", shown, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            shown,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    let source =
        fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", shown, e)))?;
    tracing::debug!(path = %shown, bytes = source.len(), "read source");
    Ok(source)
}

fn read_stdin() -> CliResult<String> {
    let mut source = String::new();
    io::stdin()
        .take(MAX_SOURCE_SIZE + 1)
        .read_to_string(&mut source)
        .map_err(|e| CliError::failure(format!("Error reading stdin: {}", e)))?;
    if source.len() as u64 > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Input on stdin is too large (max {} bytes)",
            MAX_SOURCE_SIZE
        )));
    }
    Ok(source)
}

/// Name shown in diagnostics for `path`.
fn display_name(path: &Path) -> String {
    if path == Path::new(STDIN_PATH) {
        STDIN_NAME.to_string()
    } else {
        path.display().to_string()
    }
}

fn invalid_input(name: &str, source: &str, err: &ParseError) -> CliError {
    let msg = diagnostics::format_error(name, source, err);
    CliError::with_code(msg.trim_end(), INVALID_INPUT)
}

// ============================================================================
// Commands
// ============================================================================

/// Render the classified token stream of `source`.
pub fn render_tokens(name: &str, source: &str, config: &HighlightConfig, format: OutputFormat) -> CliResult<String> {
    let tokens = crate::highlight_with_config(source, config).map_err(|e| invalid_input(name, source, &e))?;
    match format {
        OutputFormat::Text => Ok(render::render_text(&tokens)),
        OutputFormat::Json => render::render_json(&tokens)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| CliError::failure(format!("Error serializing tokens: {}", e))),
    }
}

/// Print the classified token stream of a file.
pub fn print_tokens(path: &Path, config: &HighlightConfig, format: OutputFormat) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let out = render_tokens(&display_name(path), &source, config, format)?;
    print!("{}", out);
    Ok(ExitCode::SUCCESS)
}

/// Render the syntax tree of `source`.
pub fn render_tree(name: &str, source: &str, entry: EntryPoint) -> CliResult<String> {
    let scan = lexer::lex(source).map_err(|e| invalid_input(name, source, &e))?;
    let unit = parser::parse_entry(&scan.lexemes, entry).map_err(|e| invalid_input(name, source, &e))?;
    Ok(format!("{:#?}", unit))
}

/// Parse and display the syntax tree.
pub fn parse_file(path: &Path, entry: EntryPoint) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    println!("{}", render_tree(&display_name(path), &source, entry)?);
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and report `ok` or the first error.
pub fn check_file(path: &Path, entry: EntryPoint) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    render_tree(&display_name(path), &source, entry)?;
    println!("ok");
    Ok(ExitCode::SUCCESS)
}
