//! Layering guardrails to keep the frontend crates free of tool-level dependencies.
//!
//! `pgdl_core` is a vocabulary crate and must have no dependencies at all. `pgdl_syntax` may use error and
//! logging crates, but CLI parsing and output serialization belong to the root `pgdl` package.
//! These tests scan the member manifests' `[dependencies]` tables.

fn dependency_names(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut names = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some((name, _)) = line_no_comment.split_once('=') {
            names.push(name.trim().to_string());
        }
    }
    names
}

#[test]
fn core_has_no_dependencies() {
    let deps = dependency_names(include_str!("../crates/pgdl_core/Cargo.toml"));
    assert!(deps.is_empty(), "pgdl_core must stay dependency-free, found {:?}", deps);
}

#[test]
fn syntax_does_not_depend_on_tool_crates() {
    let deps = dependency_names(include_str!("../crates/pgdl_syntax/Cargo.toml"));
    for forbidden in ["clap", "serde_json", "tracing-subscriber"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{}` must not appear in pgdl_syntax [dependencies]",
            forbidden
        );
    }
    assert!(deps.iter().any(|d| d == "pgdl_core"));
}
