use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use xbase_core::lang::builtins;
use xbase_core::lang::keywords;

/// Guardrail against reintroducing stringly-typed vocabulary checks.
///
/// This is intentionally a **coarse** safety net. It looks for suspicious patterns like `== "EndIf"` or
/// `match name.as_str() { "Len" => ... }` in Rust source files where we expect callers to go through
/// `xbase_core::lang` registries instead.
///
/// Notes:
/// - We allow occurrences in `crates/xbase_core/src/lang/**` (registries themselves) and in tests.
/// - This is not meant to be perfect; it’s meant to catch “oops I added a string match”.
#[test]
fn no_new_stringly_vocab_checks_in_rust_sources() {
    let root = repo_root();
    let spellings = vocabulary_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found potential stringly-typed vocabulary checks. Prefer xbase_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

#[test]
fn detector_flags_equality_and_match_arms() {
    let spellings = vec!["EndIf", "Len"];
    assert!(is_suspicious_line(r#"if word == "EndIf" {"#, &spellings));
    assert!(is_suspicious_line(r#"    "Len" => Some(1),"#, &spellings));
    assert!(is_suspicious_line(r#"name.eq_ignore_ascii_case("len")"#, &spellings));
    assert!(!is_suspicious_line(r#"// "EndIf" => documented"#, &spellings));
    assert!(!is_suspicious_line(r#"format!("expected 'EndIf'")"#, &spellings));
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Keyword spellings (with aliases) and runtime library function names.
fn vocabulary_spellings() -> Vec<&'static str> {
    let mut set: BTreeSet<&'static str> = BTreeSet::new();

    for k in keywords::KEYWORDS {
        set.insert(k.canonical);
        for &a in k.aliases {
            set.insert(a);
        }
    }

    for b in builtins::BUILTIN_FUNCTIONS {
        set.insert(b.canonical);
        for &a in b.aliases {
            set.insert(a);
        }
    }

    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/xbase_core/src/lang/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.contains("/tests/") || rel.ends_with("/tests.rs") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    // Only flag explicit equality checks, match arms or case-insensitive comparisons for known spellings.
    for s in spellings {
        let eq = format!("== \"{s}\"");
        let arm = format!("\"{s}\" =>");
        if line.contains(&eq) || line.contains(&arm) {
            return true;
        }
        let lowered = line.to_ascii_lowercase();
        if lowered.contains(&format!("eq_ignore_ascii_case(\"{}\")", s.to_ascii_lowercase())) {
            return true;
        }
    }

    false
}
