//! End-to-end tests for the flank binary.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn flank(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_flank"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("FLANK_LOG")
        .output()
        .expect("failed to run flank")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_search_found() {
    let out = flank(&["search", "3", "1", "2", "3", "4", "5"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2");
}

#[test]
fn test_search_not_found_prints_sentinel() {
    let out = flank(&["search", "6", "1", "2", "3", "4", "5"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "-1");
}

#[test]
fn test_search_negative_target() {
    let out = flank(&["search", "-1", "-3", "-1", "0", "4"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1");
}

#[test]
fn test_search_text() {
    let out = flank(&["search", "--kind", "text", "c", "a", "b", "c", "d", "e"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "2");
}

#[test]
fn test_search_classic() {
    let out = flank(&["search", "--algorithm", "classic", "9", "1", "3", "5", "7", "9"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "4");
}

#[test]
fn test_search_rejects_unsorted() {
    let out = flank(&["search", "2", "3", "1", "2"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not sorted"), "stderr: {}", stderr);
}

#[test]
fn test_search_unchecked_allows_unsorted() {
    let out = flank(&["search", "--unchecked", "2", "1", "3", "2"]);
    assert!(out.status.success());
    // Boundary check hits the last element
    assert_eq!(stdout(&out), "2");
}

#[test]
fn test_search_rejects_bad_integer() {
    let out = flank(&["search", "3", "1", "two", "3"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid value \"two\""));
}

#[test]
fn test_search_from_file_with_trace() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("values.txt");
    let values: Vec<String> = (0..10).map(|i| i.to_string()).collect();
    fs::write(&path, values.join("\n")).unwrap();

    let out = flank(&["search", "--trace", "--file", path.to_str().unwrap(), "7"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("[1..=8] mid=4"), "stdout: {}", text);
    assert!(text.contains("[6..=8] mid=7"), "stdout: {}", text);
    assert!(text.contains("found at 7"), "stdout: {}", text);
    assert_eq!(text.lines().last().unwrap().trim(), "7");
}

#[test]
fn test_compare_writes_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    let out = flank(&[
        "compare",
        "--max-exponent",
        "2",
        "--repetitions",
        "1",
        "--samples",
        "1",
        "--json",
        path.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout(&out).contains("all cases agree"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["config"]["maxExponent"], 2);
}

#[test]
fn test_compare_rejects_bad_exponent() {
    let out = flank(&["compare", "--max-exponent", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("maxExponent 0"));
}
