// tests/cli_output.rs
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn run_cli(args: &[&str]) -> (String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_filesift"))
        .args(args)
        .output()
        .expect("binary should run");
    (
        String::from_utf8(output.stdout).expect("stdout should be UTF-8"),
        output.status.success(),
    )
}

fn build_conflict_fixture(input: &Path, output: &Path) {
    fs::write(input.join("a.txt"), "alpha").unwrap();
    fs::write(input.join("b.txt"), "beta").unwrap();
    // pre-existing destination file forces a per-candidate conflict
    fs::write(output.join("a.txt"), "original").unwrap();
}

#[test]
fn test_conflict_warning_precedes_summary() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    build_conflict_fixture(input.path(), output.path());
    let (stdout, success) = run_cli(&[
        "cp",
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
    ]);
    assert!(success);
    assert!(stdout.contains("warning: target file already exists: a.txt"));
    assert!(stdout.ends_with("finished: 1 file(s)\n"));
    assert_eq!(
        fs::read_to_string(output.path().join("a.txt")).unwrap(),
        "original"
    );
}

#[test]
fn test_silent_mode_suppresses_warnings_but_not_summary() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    build_conflict_fixture(input.path(), output.path());
    let (stdout, success) = run_cli(&[
        "cp",
        input.path().to_str().unwrap(),
        output.path().to_str().unwrap(),
        "-s",
    ]);
    assert!(success);
    assert!(!stdout.contains("warning:"));
    assert_eq!(stdout, "finished: 1 file(s)\n");
}

#[test]
fn test_count_prints_bare_number() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "alpha").unwrap();
    fs::write(input.path().join("b.txt"), "beta").unwrap();
    let (stdout, success) = run_cli(&["count", input.path().to_str().unwrap()]);
    assert!(success);
    assert_eq!(stdout, "2\n");
}

#[test]
fn test_print_emits_names_and_no_summary() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "alpha").unwrap();
    let (stdout, success) = run_cli(&["print", input.path().to_str().unwrap()]);
    assert!(success);
    assert_eq!(stdout, "a.txt\n");
}

#[test]
fn test_missing_input_directory_reports_error_and_fails() {
    let input = TempDir::new().unwrap();
    let gone = input.path().join("nope");
    let (stdout, success) = run_cli(&["count", gone.to_str().unwrap()]);
    assert!(!success);
    assert_eq!(stdout, "error: input directory does not exist\n");
}
