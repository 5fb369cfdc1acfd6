//! Binary tests.

#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_unwrap-images");

#[test]
fn test_cli_reads_stdin_fragment() {
    let mut child = Command::new(BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"<p><img src="a.png"></p><p>text</p>"#)
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        r#"<img src="a.png"><p>text</p>"#
    );
    assert_eq!(
        String::from_utf8(output.stderr).unwrap().trim(),
        "unwrapped 1 paragraph"
    );
}

#[test]
fn test_cli_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("post.md");
    let output = dir.path().join("post.html");
    fs::write(&input, "![a](a.png)\n\n![b](b.png)\n").unwrap();

    let status = Command::new(BIN)
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("-q")
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap().trim_end(),
        "<img src=\"a.png\" alt=\"a\">\n<img src=\"b.png\" alt=\"b\">"
    );
}

#[test]
fn test_cli_prints_tree() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("frag.txt");
    fs::write(&input, r#"<p><img alt="hi" src="there.png"></p>"#).unwrap();

    let output = Command::new(BIN)
        .arg(&input)
        .args(["--format", "html", "--tree", "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tree["type"], "root");
    assert_eq!(tree["children"][0]["type"], "element");
    assert_eq!(tree["children"][0]["tag"], "img");
    assert_eq!(tree["children"][0]["properties"]["src"], "there.png");
}

#[test]
fn test_cli_rejects_unknown_format() {
    let output = Command::new(BIN)
        .args(["--format", "pdf", "missing.pdf"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(
        String::from_utf8(output.stderr)
            .unwrap()
            .starts_with("error: Unsupported format: pdf")
    );
}

#[test]
fn test_cli_prints_tree_for_deep_input() {
    let depth = 20_000;
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("deep.html");
    let html = format!(
        r#"{}<p><img src="a.png"></p>{}"#,
        "<div>".repeat(depth),
        "</div>".repeat(depth)
    );
    fs::write(&input, html).unwrap();

    let output = Command::new(BIN)
        .arg(&input)
        .args(["--format", "html", "--tree", "--quiet"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = String::from_utf8(output.stdout).unwrap();
    assert!(json.starts_with(r#"{"type":"root","children":[{"type":"element","tag":"div""#));
    assert!(json.contains(
        r#"{"type":"element","tag":"img","properties":{"src":"a.png"},"children":[]}"#
    ));
    assert_eq!(json.matches(r#""tag":"div""#).count(), depth);
    assert!(!json.contains(r#""tag":"p""#));
}
