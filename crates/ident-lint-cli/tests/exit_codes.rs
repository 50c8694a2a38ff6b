//! Exit-code contract for the ident-lint binary: 0 when the file is
//! clean, 1 when violations were found, 2 on usage, read, or parse errors.

use std::io::Write;
use std::process::{Command, Output};

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ident-lint"))
        .args(args)
        .output()
        .expect("run ident-lint")
}

#[test]
fn clean_file_exits_zero_with_empty_stdout() {
    let file = write_temp("fn main() {\n    let total = 0;\n    for i in 0..10 {}\n}\n");
    let output = run(&[&file.path().to_string_lossy()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn violations_exit_one_and_print_findings() {
    let file = write_temp("fn main() {\n    let x = 5;\n}\n");
    let output = run(&[&file.path().to_string_lossy()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Variable 'x' is too short at position 2\n"
    );
}

#[test]
fn parse_error_exits_two_without_diagnostics() {
    let file = write_temp("fn main() { let x = ;\n");
    let output = run(&[&file.path().to_string_lossy()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse file:"));
}

#[test]
fn unreadable_file_exits_two() {
    let output = run(&["/nonexistent/never/there.rs"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read file:"));
}

#[test]
fn missing_argument_exits_two() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
}
