//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - The sorting engine stays headless (no terminal or runtime crates)
//! - No sleep() calls in production code
//! - Pacing belongs to the UI, never to the engine
//!
//! These tests are designed to catch violations early in the development cycle.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Workspace root, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// A source file with its contents
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub contents: String,
}

impl SourceFile {
    /// Lines that are not inside a `#[cfg(test)]` module
    ///
    /// Everything from the first `#[cfg(test)]` onwards is treated as test
    /// code, which matches how modules in this workspace are laid out.
    pub fn production_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.contents
            .lines()
            .enumerate()
            .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
            .map(|(n, line)| (n + 1, line))
            .filter(|(_, line)| !line.trim_start().starts_with("//"))
    }
}

/// Collect every `.rs` file under `dir` (relative to the workspace root)
pub fn rust_sources(dir: &str) -> Vec<SourceFile> {
    let root = workspace_root().join(dir);
    WalkDir::new(&root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .filter_map(|entry| {
            let contents = fs::read_to_string(entry.path()).ok()?;
            Some(SourceFile {
                path: entry.into_path(),
                contents,
            })
        })
        .collect()
}

/// A pattern found where it must not be
#[derive(Debug)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub text: String,
}

/// Find production lines containing any of `patterns`
pub fn find_violations(files: &[SourceFile], patterns: &[&str]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for file in files {
        for (line, text) in file.production_lines() {
            if patterns.iter().any(|p| text.contains(p)) {
                violations.push(Violation {
                    path: file.path.clone(),
                    line,
                    text: text.trim().to_string(),
                });
            }
        }
    }
    violations
}

/// Render violations for an assertion message
pub fn report(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  {}:{}: {}", v.path.display(), v.line, v.text))
        .collect::<Vec<_>>()
        .join("\n")
}
