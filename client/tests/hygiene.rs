//! Hygiene: scans the client source tree for calls that can crash the page.
//!
//! Each pattern has a budget of zero. Browser glue degrades to a no-op
//! instead of panicking, and these tests keep it that way.

use std::fs;
use std::path::Path;

/// `(pattern, what it is)` pairs that must not appear in production code.
const BANNED: [(&str, &str); 7] = [
    (".unwrap()", "unwrap"),
    (".expect(", "expect"),
    ("panic!(", "panic"),
    ("unreachable!(", "unreachable"),
    ("todo!(", "todo"),
    ("unimplemented!(", "unimplemented"),
    ("allow(dead_code)", "dead code allowance"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `client/src/`, skipping `*_test.rs`.
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
                .map(|(index, line)| format!("  {}:{}: {}", file.path, index + 1, line.trim()))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    assert!(!source_files().is_empty(), "run from the client crate root");
}

#[test]
fn no_panicking_calls_in_production_code() {
    let files = source_files();
    let mut report = Vec::new();
    for (pattern, name) in BANNED {
        let found = hits(&files, pattern);
        if !found.is_empty() {
            report.push(format!("{name} ({}):\n{}", found.len(), found.join("\n")));
        }
    }
    assert!(report.is_empty(), "banned calls found:\n{}", report.join("\n"));
}

#[test]
fn every_test_module_has_a_file() {
    let files = source_files();
    let missing: Vec<String> = files
        .iter()
        .flat_map(|file| {
            let dir = Path::new(&file.path).parent().map(Path::to_path_buf).unwrap_or_default();
            file.content
                .lines()
                .filter_map(|line| line.trim().strip_prefix("#[path = \""))
                .filter_map(|rest| rest.strip_suffix("\"]"))
                .filter(move |name| !dir.join(name).exists())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect();
    assert!(missing.is_empty(), "missing test files: {missing:?}");
}

#[test]
fn every_declared_module_has_a_file() {
    let files = source_files();
    let missing: Vec<String> = files
        .iter()
        .filter(|file| file.path.ends_with("mod.rs") || file.path.ends_with("lib.rs"))
        .flat_map(|file| {
            let dir = Path::new(&file.path).parent().map(Path::to_path_buf).unwrap_or_default();
            file.content
                .lines()
                .map(str::trim)
                .filter_map(|line| line.strip_prefix("pub mod ").or_else(|| line.strip_prefix("mod ")))
                .filter_map(|rest| rest.strip_suffix(';'))
                .filter(move |name| !dir.join(format!("{name}.rs")).exists() && !dir.join(name).join("mod.rs").exists())
                .map(|name| format!("{}: {name}", file.path))
                .collect::<Vec<_>>()
        })
        .collect();
    assert!(missing.is_empty(), "modules without a file: {missing:?}");
}
