//! Runs the compiled binary.

mod common;

use common::write_fixture;
use pretty_assertions::assert_eq;
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_treecsv2dot"))
}

#[test]
fn missing_argument_prints_usage_error() {
    let output = binary().output().expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "error: need an argument of input file.\n"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn writes_dot_to_stdout() {
    let fixture = write_fixture(b"Title\na,b\n");
    let output = binary().arg(&fixture.path).output().expect("run binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  id0000 -> id0001;\n"));
    assert!(stdout.ends_with("\n}\n"));
}

#[test]
fn log_file_receives_progress() {
    let fixture = write_fixture(b"Title\na,b\n");
    let log_path = fixture.path.with_extension("log");
    let output = binary()
        .arg(&fixture.path)
        .arg("--log-file")
        .arg(&log_path)
        .output()
        .expect("run binary");
    assert!(output.status.success());
    let log = std::fs::read_to_string(&log_path).expect("log written");
    assert!(log.contains("title: Title"));
    assert!(log.contains("2 node(s), 1 edge(s)"));
}

#[test]
fn missing_file_fails() {
    let output = binary()
        .arg("/no/such/tree.csv")
        .output()
        .expect("run binary");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error: Invalid file path"));
}
