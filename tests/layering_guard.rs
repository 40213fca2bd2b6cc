//! Layering guardrails for the workspace crates.
//!
//! - `xbase_core` is the vocabulary leaf: it has no dependencies at all.
//! - `xbase_syntax` is reusable outside the CLI, so driver-only crates (`clap`, `tracing-subscriber`) and the root
//!   `xbase` crate must not appear in its `[dependencies]`.
//!
//! These tests scan the manifests and fail if a forbidden entry appears in `[dependencies]`.

/// Names listed in the `[dependencies]` table of `manifest`.
fn dependencies(manifest: &str) -> Vec<String> {
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
    let deps = dependencies(include_str!("../crates/xbase_core/Cargo.toml"));
    assert!(deps.is_empty(), "`xbase_core` must stay dependency-free, found {:?}", deps);
}

#[test]
fn syntax_does_not_depend_on_driver_crates() {
    let deps = dependencies(include_str!("../crates/xbase_syntax/Cargo.toml"));
    for forbidden in ["xbase", "clap", "tracing-subscriber"] {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{}` must not appear in xbase_syntax [dependencies]",
            forbidden
        );
    }
    assert!(deps.iter().any(|d| d == "xbase_core"));
}

#[test]
fn dependency_scanner_reads_only_the_dependencies_table() {
    let manifest = "[package]\nname = \"x\"\n\n[dependencies]\na = \"1\" # note\nb = { path = \"../b\" }\n\n[dev-dependencies]\nc = \"1\"\n";
    assert_eq!(dependencies(manifest), ["a", "b"]);
}
