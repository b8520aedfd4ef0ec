//! Production Code Enforcement
//!
//! Library and binary sources must propagate errors instead of unwrapping,
//! and must not silence dead code warnings. Everything after the first
//! `#[cfg(test)]` in a file is treated as test code.

use std::fs;
use std::path::{Path, PathBuf};

const FORBIDDEN: [&str; 3] = [".unwrap()", ".expect(", "#[allow(dead_code)]"];

#[derive(Debug)]
struct Violation {
    file_path: String,
    line_number: usize,
    context: String,
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".."))
}

/// Every `.rs` file under `marquee-*/src`.
fn production_sources() -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(workspace_root()).unwrap() {
        let path = entry.unwrap().path();
        let is_crate = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with("marquee-"));
        if is_crate && path.join("src").is_dir() {
            collect_rust_files(&path.join("src"), &mut files);
        }
    }
    files
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_rust_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<Violation>) {
    let content = fs::read_to_string(path).unwrap();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        if FORBIDDEN.iter().any(|pattern| trimmed.contains(pattern)) {
            violations.push(Violation {
                file_path: path.display().to_string(),
                line_number: index + 1,
                context: trimmed.to_string(),
            });
        }
    }
}

#[test]
fn test_no_panicking_shortcuts_in_production_code() {
    let files = production_sources();
    assert!(!files.is_empty(), "no workspace sources found");

    let mut violations = Vec::new();
    for file in &files {
        check_file(file, &mut violations);
    }

    if !violations.is_empty() {
        let report: Vec<String> = violations
            .iter()
            .map(|v| format!("  {}:{}: {}", v.file_path, v.line_number, v.context))
            .collect();
        panic!(
            "Found {} violation(s) in production code:\n{}",
            violations.len(),
            report.join("\n")
        );
    }
}
