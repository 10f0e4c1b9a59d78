use crate::cli::support::{waypath, write_graph, DIAMOND};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Configuration file tests
// ============================================================================

#[test]
fn test_config_discovered_in_working_directory() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("waypath.toml"),
        "[labyrinth]\nrows = 2\ncols = 3\nmax_value = 0\n",
    )
    .unwrap();

    waypath()
        .current_dir(dir.path())
        .args(["labyrinth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated labyrinth:\n0 0 0\n0 0 0\n\n"));
}

#[test]
fn test_explicit_config_with_heap_strategies() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DIAMOND);
    let config = dir.path().join("engine.toml");
    fs::write(
        &config,
        "[heap]\nupdate = \"replace\"\nrepair = \"rebuild\"\n\n[graph]\nview = \"matrix\"\n",
    )
    .unwrap();

    waypath()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["dijkstra", "-s", "A", "-t", "D", "-g"])
        .arg(&graph)
        .assert()
        .success()
        .stdout("A -> B -> C -> D\ndistance: 3\n");
}

#[test]
fn test_invalid_config_value_exit_code_2() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("waypath.toml"), "[labyrinth]\nrows = 0\n").unwrap();

    waypath()
        .current_dir(dir.path())
        .args(["heapsort", "1"])
        .assert()
        .code(2);
}

#[test]
fn test_malformed_config_exit_code_1() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("waypath.toml"), "[heap\nupdate = ").unwrap();

    waypath()
        .current_dir(dir.path())
        .args(["--format", "json", "heapsort", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("toml_error"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    waypath()
        .current_dir(dir.path())
        .args(["--config", "nope.toml", "heapsort", "1"])
        .assert()
        .code(1);
}
