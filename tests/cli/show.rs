use crate::cli::support::{stdout_json, waypath, write_graph, DIAMOND, TRIANGLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Show command tests
// ============================================================================

#[test]
fn test_show_human() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    waypath()
        .current_dir(dir.path())
        .args(["show", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjacency matrix:"))
        .stdout(predicate::str::contains("Adjacency list:"))
        .stdout(predicate::str::contains("A -> B (1), C (4)"))
        .stdout(predicate::str::contains("E ->\n"));
}

#[test]
fn test_show_json_matrix() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "show", "-g"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["directed"], true);
    assert_eq!(json["weighted"], true);
    assert_eq!(json["matrix"][0], serde_json::json!([0, 1, 4, 0, 0]));
    assert_eq!(json["adjacency"][1]["vertex"], "B");
    assert_eq!(
        json["adjacency"][1]["neighbors"],
        serde_json::json!([{"vertex": "C", "weight": 1}, {"vertex": "D", "weight": 5}])
    );
}

#[test]
fn test_show_undirected_is_symmetric() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    waypath()
        .current_dir(dir.path())
        .args(["show", "-g"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("Y -> X, Z"))
        .stdout(predicate::str::contains("Z -> Y"));
}
