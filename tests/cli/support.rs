use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for waypath
pub fn waypath() -> Command {
    cargo_bin_cmd!("waypath")
}

/// Directed weighted graph whose shortest A->D path is A, B, C, D (weight 3)
pub const DIAMOND: &str = r#"{
    "directed": true,
    "weighted": true,
    "vertices": ["A", "B", "C", "D", "E"],
    "relations": [["A", "B", 1], ["A", "C", 4], ["B", "C", 1], ["B", "D", 5], ["C", "D", 1]]
}"#;

/// Undirected unweighted graph
#[allow(dead_code)]
pub const TRIANGLE: &str = r#"{
    "directed": false,
    "vertices": ["X", "Y", "Z"],
    "relations": [["X", "Y"], ["Y", "Z"]]
}"#;

/// Write `content` as `name` inside `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout of a successful run as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
