use crate::cli::support::{stdout_json, waypath, write_graph, DIAMOND};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// BFS
// ============================================================================

#[test]
fn test_bfs_reports_every_vertex() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    waypath()
        .current_dir(dir.path())
        .args(["bfs", "--source", "A", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs from A: 4 of 5 vertices reached"))
        .stdout(predicate::str::contains("D  distance=2  parent=B  path=A -> B -> D"))
        .stdout(predicate::str::contains("E  distance=inf  parent=-  path=unreachable"));
}

#[test]
fn test_bfs_target_counts_hops() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    waypath()
        .current_dir(dir.path())
        .args(["bfs", "-s", "A", "-t", "D", "-g"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("A -> B -> D\ndistance: 2\n");
}

// ============================================================================
// Dijkstra
// ============================================================================

#[test]
fn test_dijkstra_shortest_path() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    waypath()
        .current_dir(dir.path())
        .args(["dijkstra", "--source", "A", "--target", "D", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("A -> B -> C -> D\ndistance: 3\n");
}

#[test]
fn test_dijkstra_quiet_prints_path_only() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    waypath()
        .current_dir(dir.path())
        .args(["--quiet", "dijkstra", "-s", "A", "-t", "C", "-g"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("A -> B -> C\n");
}

#[test]
fn test_dijkstra_json_distances() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "dijkstra", "-s", "A", "-g"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["reached"], 4);
    let vertices = json["vertices"].as_array().unwrap();
    let distances: Vec<serde_json::Value> =
        vertices.iter().map(|v| v["distance"].clone()).collect();
    assert_eq!(
        distances,
        vec![
            serde_json::json!(0),
            serde_json::json!(1),
            serde_json::json!(2),
            serde_json::json!(3),
            serde_json::Value::Null,
        ]
    );
    assert_eq!(vertices[3]["path"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(vertices[3]["parent"], "C");
    assert_eq!(vertices[4]["color"], "black");
}

#[test]
fn test_dijkstra_same_result_through_matrix_view() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    waypath()
        .current_dir(dir.path())
        .args(["--view", "matrix", "dijkstra", "-s", "A", "-t", "D", "-g"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 3"));
}

#[test]
fn test_dijkstra_unreachable_target_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    waypath()
        .current_dir(dir.path())
        .args(["dijkstra", "-s", "A", "-t", "E", "-g"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unreachable"));
}

#[test]
fn test_dijkstra_reports_largest_path_weight() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "heavy.json",
        r#"{"weighted": true, "vertices": ["A", "B", "C"],
            "relations": [["A", "B", 18446744073709551614], ["B", "C", 1]]}"#,
    );

    waypath()
        .current_dir(dir.path())
        .args(["dijkstra", "-s", "A", "-t", "C", "-g"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("A -> B -> C\ndistance: 18446744073709551615\n");
}

#[test]
fn test_dijkstra_weight_overflow_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "heavy.json",
        r#"{"weighted": true, "vertices": ["A", "B", "C"],
            "relations": [["A", "B", 18446744073709551614], ["B", "C", 5]]}"#,
    );

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "dijkstra", "-s", "A", "-g"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "weight_overflow");
}

#[test]
fn test_dijkstra_unreachable_target_json_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "dijkstra", "-s", "A", "-t", "E", "-g"])
        .arg(&graph)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "unreachable");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_unknown_source_exit_code_3() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    waypath()
        .current_dir(dir.path())
        .args(["bfs", "-s", "Q", "-g"])
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex"));
}

// ============================================================================
// DFS
// ============================================================================

#[test]
fn test_dfs_times() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    waypath()
        .current_dir(dir.path())
        .args(["dfs", "-g"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("A  discovered=1  finished=8  parent=-"))
        .stdout(predicate::str::contains("D  discovered=4  finished=5  parent=C"))
        .stdout(predicate::str::contains("E  discovered=9  finished=10  parent=-"));
}

#[test]
fn test_dfs_json_finish_times() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);

    let output = waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "dfs", "-g"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dfs");
    assert_eq!(json["vertices"][0]["finish"], 8);
    assert_eq!(json["vertices"][1]["parent"], "A");
}
