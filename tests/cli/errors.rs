use crate::cli::support::{waypath, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Exit code tests
// ============================================================================

#[test]
fn test_help_flag() {
    waypath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: waypath"))
        .stdout(predicate::str::contains("dijkstra"))
        .stdout(predicate::str::contains("labyrinth"));
}

#[test]
fn test_no_command_prints_version() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("waypath"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    waypath()
        .args(["--format", "yaml", "heapsort", "1"])
        .assert()
        .code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    let output = waypath()
        .args(["--format", "json", "bfs"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_duplicate_vertex_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", r#"{"vertices": ["A", "A"]}"#);

    waypath()
        .current_dir(dir.path())
        .args(["show", "-g"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("duplicate vertex"));
}

#[test]
fn test_dangling_edge_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "g.json",
        r#"{"vertices": ["A"], "relations": [["A", "B"]]}"#,
    );

    waypath()
        .current_dir(dir.path())
        .args(["dfs", "-g"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not in the graph"));
}

#[test]
fn test_missing_weight_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "g.json",
        r#"{"weighted": true, "vertices": ["A", "B"], "relations": [["A", "B"]]}"#,
    );

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "dijkstra", "-s", "A", "-g"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "missing_weight");
}

#[test]
fn test_malformed_graph_file_exit_code_1() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", "{ not json");

    waypath()
        .current_dir(dir.path())
        .args(["show", "-g"])
        .arg(&graph)
        .assert()
        .code(1);
}

#[test]
fn test_missing_graph_file_exit_code_1() {
    let dir = tempdir().unwrap();

    waypath()
        .current_dir(dir.path())
        .args(["show", "-g", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph file"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = tempdir().unwrap();

    waypath()
        .current_dir(dir.path())
        .args(["--quiet", "show", "-g", "missing.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}
