//! Token stream rendering for the command-line tool.
//!
//! Two shapes are supported:
//! - text: one token per line, `offset  len  Category  "text"`
//! - json: an array of `{kind, start, len, text}` objects
//!
//! Both render every token, whitespace included, so the output accounts for every input byte.

use pgdl_core::lang::categories;
use pgdl_syntax::Token;
use serde_json::{Value, json};

/// Render tokens as aligned text lines.
pub fn render_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{:>6}  {:>4}  {:<22}  {:?}\n",
            token.start(),
            token.len(),
            categories::as_str(token.category),
            token.text
        ));
    }
    out
}

/// Render tokens as a JSON array value.
pub fn tokens_to_json(tokens: &[Token]) -> Value {
    Value::Array(
        tokens
            .iter()
            .map(|token| {
                json!({
                    "kind": categories::as_str(token.category),
                    "start": token.start(),
                    "len": token.len(),
                    "text": token.text,
                })
            })
            .collect(),
    )
}

/// Render tokens as pretty-printed JSON.
///
/// ## Errors
/// Propagates `serde_json` serialization failures.
pub fn render_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&tokens_to_json(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        pgdl_syntax::highlight(source).unwrap()
    }

    #[test]
    fn test_render_text_one_line_per_token() {
        let toks = tokens("Foo struct {}");
        let text = render_text(&toks);
        assert_eq!(text.lines().count(), toks.len());
    }

    #[test]
    fn test_render_text_columns() {
        let text = render_text(&tokens("Foo struct {}"));
        let first = text.lines().next().unwrap();
        let cols: Vec<&str> = first.split_whitespace().collect();
        assert_eq!(cols, vec!["0", "3", "Name.Class", "\"Foo\""]);
    }

    #[test]
    fn test_render_text_escapes_newlines() {
        let text = render_text(&tokens("A B\n"));
        assert!(text.contains("\"\\n\""));
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn test_tokens_to_json_fields() {
        let value = tokens_to_json(&tokens("A B"));
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["kind"], "Name.Class");
        assert_eq!(items[0]["start"], 0);
        assert_eq!(items[0]["len"], 1);
        assert_eq!(items[1]["kind"], "Text.Whitespace");
        assert_eq!(items[2]["kind"], "Name.Builtin");
        assert_eq!(items[2]["text"], "B");
    }

    #[test]
    fn test_render_json_parses_back() {
        let rendered = render_json(&tokens("A struct { b C; }")).unwrap();
        let value: Value = serde_json::from_str(&rendered).unwrap();
        let joined: String = value
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["text"].as_str().unwrap())
            .collect();
        assert_eq!(joined, "A struct { b C; }");
    }
}
