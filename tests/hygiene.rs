//! Hygiene: source-level rules checked at test time.
//!
//! Production files under `src/` (test files excluded) are scanned for
//! panicking calls, silently discarded results, and browser glue that would
//! break host builds. Every budget is zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// (pattern, why it is banned)
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics on failure"),
    (".expect(", "panics on failure"),
    ("panic!(", "panics"),
    ("unreachable!(", "panics"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "discards a result without inspecting it"),
    (".ok()", "discards an error without inspecting it"),
    ("#[allow(dead_code)]", "hides unused code"),
];

/// Browser-only APIs. Files using them must gate that use on the `csr` feature.
const BROWSER_ONLY: &[&str] = &["web_sys::", "wasm_bindgen::", "window()", "console_log::"];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, line)| format!("  {}:{}: {}", file.path, n + 1, line.trim()))
        })
        .collect()
}

#[test]
fn source_tree_is_scanned() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("lib.rs")),
        "hygiene scan found no sources; run from the crate root"
    );
}

#[test]
fn banned_patterns_are_absent() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, why) in BANNED {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            report.push(format!("{pattern} ({why}):\n{}", found.join("\n")));
        }
    }
    assert!(report.is_empty(), "banned patterns found:\n{}", report.join("\n"));
}

#[test]
fn browser_apis_are_feature_gated() {
    let ungated: Vec<_> = source_files()
        .into_iter()
        .filter(|file| BROWSER_ONLY.iter().any(|api| file.content.contains(api)))
        .filter(|file| !file.content.contains("#[cfg(feature = \"csr\")]"))
        .map(|file| file.path)
        .collect();
    assert!(
        ungated.is_empty(),
        "browser APIs used without a csr gate:\n  {}",
        ungated.join("\n  ")
    );
}

#[test]
fn route_patterns_live_only_in_the_table() {
    let stray: Vec<_> = source_files()
        .into_iter()
        .filter(|file| file.content.contains("\"/workout/:id\""))
        .map(|file| file.path)
        .filter(|path| !path.ends_with("table.rs"))
        .collect();
    assert!(stray.is_empty(), "route patterns outside table.rs: {stray:?}");
}
