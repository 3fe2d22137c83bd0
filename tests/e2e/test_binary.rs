//! Integration tests for the lisp-syntax-view binary.
//!
//! These tests run the compiled binary on stdin input and check its output
//! and exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Run the binary with the given stdin input and extra CLI args.
fn run_binary(input: &str, extra_args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lisp-syntax-view"))
        .args(extra_args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            if let Some(ref mut stdin) = child.stdin {
                stdin.write_all(input.as_bytes()).ok();
            }
            child.wait_with_output()
        })
        .expect("Failed to run binary")
}

/// Run and require success. Returns stdout.
fn run_ok(input: &str, extra_args: &[&str]) -> String {
    let output = run_binary(input, extra_args);
    assert!(
        output.status.success(),
        "Binary exited with {:?}:\nstderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("Non-UTF8 output")
}

// ── Output formats ────────────────────────────────────────────────────────

#[test]
fn test_default_output_is_json() {
    let out = run_ok("(define x 1)(+ x x)", &[]);
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid JSON");
    assert_eq!(value["root"], 0);
    let nodes = value["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0]["childs"], serde_json::json!([1, 1]));
    assert_eq!(nodes[1]["depth"], 1);
}

#[test]
fn test_svg_output() {
    let out = run_ok("(f a b)", &["-f", "svg"]);
    assert!(out.starts_with("<svg"));
    assert_eq!(out.matches("<circle ").count(), 3);
    assert_eq!(out.matches("<path ").count(), 2);
}

#[test]
fn test_text_output_unicode() {
    let out = run_ok("(f a b)", &["--format", "ascii"]);
    assert_eq!(out, "  f\n┌─┴─┐\n│   │\n▼   ▼\na   b\n");
}

#[test]
fn test_text_output_plain_ascii() {
    let out = run_ok("(f a b)", &["-f", "ascii", "-a"]);
    assert_eq!(out, "  f\n+-+-+\n|   |\nv   v\na   b\n");
}

#[test]
fn test_reads_input_file_and_writes_output_file() {
    let dir = std::env::temp_dir().join(format!("lisp-syntax-view-e2e-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("program.lisp");
    let output = dir.join("layout.json");
    std::fs::write(&input, "(define sq (* n n)) (+ sq sq 1)").unwrap();

    let stdout = run_ok(
        "",
        &[input.to_str().unwrap(), "-o", output.to_str().unwrap()],
    );
    assert!(stdout.is_empty());
    let written = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["nodes"][0]["label"], "+");

    std::fs::remove_dir_all(&dir).ok();
}

// ── Failures ──────────────────────────────────────────────────────────────

#[test]
fn test_syntax_error_exits_with_status_1() {
    for input in ["", "(f a", "(define x)", ")"] {
        let output = run_binary(input, &[]);
        assert_eq!(output.status.code(), Some(1), "input {input:?}");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.starts_with("error: "), "stderr: {stderr}");
    }
}

#[test]
fn test_missing_input_file() {
    let output = run_binary("", &["/nonexistent/program.lisp"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read"));
}

#[test]
fn test_unknown_format_is_rejected() {
    let output = run_binary("x", &["-f", "png"]);
    assert!(!output.status.success());
}

#[test]
fn test_version_flag() {
    let out = run_ok("", &["--version"]);
    assert!(out.starts_with("lisp-syntax-view "));
}
