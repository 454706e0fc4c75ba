//! Integration tests for the trellis CLI
//!
//! These tests run the trellis binary end to end: parsing, analysis,
//! report rendering, JSON output and exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

/// Get a Command for trellis
fn trellis() -> Command {
    cargo_bin_cmd!("trellis")
}

const SAMPLE_GRAPH: &str = "\
; desc
sample
; isDirected
undirected
; vertices
4
; edge weights
4
0, 1, 1
1, 2, 2
0, 2, 10
2, 3, 1
; end
";

#[test]
fn test_help_flag() {
    trellis()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: trellis"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_version_flag() {
    trellis()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("trellis"));
}

#[test]
fn test_analyze_from_stdin() {
    trellis()
        .arg("analyze")
        .write_stdin(SAMPLE_GRAPH)
        .assert()
        .success()
        .stdout(predicate::str::contains("GRAPH REPORT: sample"))
        .stdout(predicate::str::contains("graph: 4 vertices, 4 weighted edges"))
        .stdout(predicate::str::contains("graph has no negative weight."))
        .stdout(predicate::str::contains("shortest path from 0 to 3: 0->1->2->3"))
        .stdout(predicate::str::contains("BFS traverse order: 0 1 2 3"));
}

#[test]
fn test_analyze_is_the_default_command() {
    trellis()
        .write_stdin(SAMPLE_GRAPH)
        .assert()
        .success()
        .stdout(predicate::str::contains("GRAPH REPORT"));
}

#[test]
fn test_analyze_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sample.graph");
    std::fs::write(&path, SAMPLE_GRAPH).unwrap();

    trellis()
        .arg("analyze")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("GRAPH REPORT: sample"));
}

#[test]
fn test_analyze_json_output() {
    let output = trellis()
        .args(["--format", "json", "analyze"])
        .write_stdin(SAMPLE_GRAPH)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["vertex_count"], 4);
    assert_eq!(summary["component_count"], 1);
    assert_eq!(summary["has_negative_weight"], false);
    assert_eq!(summary["shortest_path"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(summary["distances"]["0"][3], 4);
}

#[test]
fn test_missing_input_file_exit_code_3() {
    trellis()
        .args(["analyze", "/nonexistent/input.graph"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_malformed_description_exit_code_3() {
    trellis()
        .arg("analyze")
        .write_stdin("; vertices\ntwo\n; end\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_json_error_envelope() {
    let output = trellis()
        .args(["--format", "json", "analyze"])
        .write_stdin("; bogus\n")
        .assert()
        .code(3)
        .get_output()
        .stderr
        .clone();

    let envelope: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(envelope["error"]["code"], 3);
    assert_eq!(envelope["error"]["type"], "invalid_description");
}

#[test]
fn test_quiet_suppresses_error_text() {
    trellis()
        .args(["--quiet", "analyze"])
        .write_stdin("; bogus\n")
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_convert_plague_jr() {
    trellis()
        .args(["convert", "--puzzle", "plague-jr"])
        .write_stdin("2\n0 1\n1 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("; isDirected\nundirected"))
        .stdout(predicate::str::contains("; adjacency list"));
}

#[test]
fn test_convert_a_star_round_trips_into_analyze() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("converted.graph");

    let converted = trellis()
        .args(["convert", "--puzzle", "a-star"])
        .write_stdin("3 2 0 2\n2 1 0\n0 1 4\n1 2 4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("; edge weights"))
        .get_output()
        .stdout
        .clone();

    std::fs::write(&path, &converted).unwrap();

    trellis()
        .arg("analyze")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("shortest path from 0 to 2: 0->1->2"));
}

#[test]
fn test_convert_bender2() {
    trellis()
        .args(["convert", "--puzzle", "bender2"])
        .write_stdin("2\n0 10 1 E\n1 5 E E\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("; vertex weights\n10, 5, 0"))
        .stdout(predicate::str::contains("; isDirected\ndirected"));
}

#[test]
fn test_unknown_puzzle_exit_code_2() {
    trellis()
        .args(["convert", "--puzzle", "invalid"])
        .write_stdin("")
        .assert()
        .code(2);
}
