use crate::cli::support::{stdout_json, waypath};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Labyrinth command tests
// ============================================================================

#[test]
fn test_labyrinth_seed_is_reproducible() {
    let dir = tempdir().unwrap();
    let run = || {
        waypath()
            .current_dir(dir.path())
            .args(["labyrinth", "--seed", "42"])
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).starts_with("Generated labyrinth:"));
}

#[test]
fn test_labyrinth_json_shape() {
    let dir = tempdir().unwrap();
    let output = waypath()
        .current_dir(dir.path())
        .args([
            "--format", "json", "labyrinth", "--rows", "4", "--cols", "6", "--seed", "7",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let rows = json["labyrinth"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.as_array().unwrap().len() == 6));
    assert_eq!(json["target_value"], 6);

    let open = rows
        .iter()
        .flat_map(|row| row.as_array().unwrap())
        .filter(|cell| cell.as_u64() != Some(0))
        .count();
    if json["start"].is_null() {
        assert!(json["bfs"].is_null());
    } else {
        assert_eq!(json["bfs"].as_array().unwrap().len(), open);
        assert_eq!(json["dfs"].as_array().unwrap().len(), open);
    }
}

#[test]
fn test_labyrinth_all_walls() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args(["labyrinth", "--max-value", "0", "--target-value", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 0 0 0 0"))
        .stdout(predicate::str::contains("No open cell holds 1"));
}

#[test]
fn test_labyrinth_wall_target_exit_code_2() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args(["labyrinth", "--target-value", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("walls"));
}

#[test]
fn test_labyrinth_zero_rows_exit_code_2() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args(["labyrinth", "--rows", "0"])
        .assert()
        .code(2);
}

#[test]
fn test_labyrinth_oversized_grid_exit_code_2() {
    let dir = tempdir().unwrap();
    waypath()
        .current_dir(dir.path())
        .args(["labyrinth", "--rows", "300", "--cols", "300", "--seed", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("labyrinth size"));
}
