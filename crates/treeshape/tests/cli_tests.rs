//! End-to-end tests for the `treeshape` binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_treeshape"))
        .args(args)
        .output()
        .expect("failed to run treeshape")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_renders_arguments() {
    let output = run(&["Binary(Factor(1), Factor(2))", "Factor(-5)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "B[1#2]\n-5\n");
}

#[test]
fn test_cli_bracket_syntax_with_depth() {
    let output = run(&["--syntax", "bracket", "--depth", "B[B[1#2]#3]"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "B[B[1#2]#3]\ndepth: 2\n");
}

#[test]
fn test_cli_depth_limit_failure() {
    let output = run(&["--max-depth", "1", "Binary(Binary(1, 2), 3)"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Depth limit exceeded"));
}

#[test]
fn test_cli_parse_failure_reports_location() {
    let output = run(&["Binary(Factor(1))"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error[Rust]"));
    assert!(stderr.contains("--> 1:1"));
}

#[test]
fn test_cli_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_treeshape"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn treeshape");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"Factor(1)\n\nBinary(Factor(0), Factor(-5))\n")
        .expect("failed to write stdin");
    let output = child.wait_with_output().expect("failed to wait");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\nB[0#-5]\n");
}

#[test]
fn test_cli_trace_overrides_quiet_rust_log() {
    let output = Command::new(env!("CARGO_BIN_EXE_treeshape"))
        .env("RUST_LOG", "warn")
        .args(["--trace", "Binary(Factor(1), Factor(2))"])
        .output()
        .expect("failed to run treeshape");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "B[1#2]\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("binary at depth 0"));
    assert!(stderr.contains("factor 2 at depth 1"));
}
