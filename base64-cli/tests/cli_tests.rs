// Integration tests driving the b64 binary

use std::io::Write;
use std::process::{Command, Output, Stdio};

const BINARY: &str = env!("CARGO_BIN_EXE_b64");

fn run_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(BINARY)
        .args(args)
        .env_remove("B64_OUTPUT")
        .env_remove("B64_NO_NEWLINE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn b64");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin)
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for b64")
}

#[test]
fn test_encode_stdin_to_stdout() {
    let output = run_with_stdin(&["encode"], b"foobar");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Zm9vYmFy\n");
}

#[test]
fn test_encode_no_newline() {
    let output = run_with_stdin(&["encode", "--no-newline"], b"fo");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"Zm8=");
}

#[test]
fn test_encode_empty_input() {
    let output = run_with_stdin(&["encode", "--no-newline"], b"");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_decode_stdin_strips_trailing_newline() {
    let output = run_with_stdin(&["decode"], b"Zm9vYmE=\n");
    assert!(output.status.success());
    assert_eq!(output.stdout, b"fooba");
}

#[test]
fn test_decode_invalid_input_fails() {
    let output = run_with_stdin(&["decode"], b"Zm9v Zm8=");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid input length 9"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_decode_rejects_embedded_newline() {
    let output = run_with_stdin(&["decode"], b"Zm9v\nZm8=\n");
    assert!(!output.status.success());
}

#[test]
fn test_file_roundtrip_across_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let original = dir.path().join("original.bin");
    let encoded = dir.path().join("encoded.txt");
    let decoded = dir.path().join("decoded.bin");

    // Larger than one encode block and not a multiple of 3
    let data: Vec<u8> = (0..200_001u32).map(|i| (i * 31 % 251) as u8).collect();
    std::fs::write(&original, &data).unwrap();

    let status = Command::new(BINARY)
        .args(["encode", original.to_str().unwrap(), "-o", encoded.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    let text = std::fs::read(&encoded).unwrap();
    let mut expected = base64_codec::encode_to_vec(&data);
    expected.push(b'\n');
    assert_eq!(text, expected);

    let status = Command::new(BINARY)
        .args(["decode", encoded.to_str().unwrap(), "-o", decoded.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read(&decoded).unwrap(), data);
}

#[test]
fn test_output_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.txt");

    let output = Command::new(BINARY)
        .arg("encode")
        .env("B64_OUTPUT", &out_path)
        .env("B64_NO_NEWLINE", "true")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(std::fs::read(&out_path).unwrap(), b"");
}

#[test]
fn test_failed_decode_does_not_create_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    let out_path = dir.path().join("out.bin");
    std::fs::write(&input, "Zg==Zm9v\n").unwrap();

    let output = Command::new(BINARY)
        .args(["decode", input.to_str().unwrap(), "-o", out_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid padding at offset 2"));
    assert!(!out_path.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bin");

    let output = Command::new(BINARY)
        .args(["encode", missing.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot open"));
}
