//! Workspace-wide structural checks

use architectural_enforcement::{find_violations, report, rust_sources, workspace_root};

#[test]
fn test_sources_are_found() {
    assert!(
        !rust_sources("sorter/core/src").is_empty(),
        "no sources under {}",
        workspace_root().display()
    );
    assert!(!rust_sources("tui/src").is_empty());
}

#[test]
fn test_engine_is_headless() {
    let files = rust_sources("sorter/core/src");
    let violations = find_violations(
        &files,
        &["ratatui", "crossterm", "tokio", "use futures", "std::io::stdout"],
    );
    assert!(
        violations.is_empty(),
        "sorting engine must not depend on terminal or runtime crates:\n{}",
        report(&violations)
    );
}

#[test]
fn test_engine_manifest_is_headless() {
    let manifest = std::fs::read_to_string(workspace_root().join("sorter/core/Cargo.toml"))
        .expect("read sorter/core/Cargo.toml");
    for forbidden in ["ratatui", "crossterm", "tokio"] {
        assert!(
            !manifest.contains(forbidden),
            "sorter-core must not depend on {forbidden}"
        );
    }
}

#[test]
fn test_no_sleep_in_production_code() {
    let mut files = rust_sources("sorter/core/src");
    files.extend(rust_sources("tui/src"));

    let violations = find_violations(&files, &["thread::sleep", "time::sleep("]);
    assert!(
        violations.is_empty(),
        "pacing must go through the UI timer, not sleep():\n{}",
        report(&violations)
    );
}

#[test]
fn test_engine_does_not_print() {
    let files = rust_sources("sorter/core/src");
    let violations = find_violations(&files, &["println!", "eprintln!", "dbg!"]);
    assert!(
        violations.is_empty(),
        "the engine logs through tracing:\n{}",
        report(&violations)
    );
}
