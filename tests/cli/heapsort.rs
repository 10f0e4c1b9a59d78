use crate::cli::support::{stdout_json, waypath};

// ============================================================================
// Heapsort command tests
// ============================================================================

#[test]
fn test_heapsort_defaults_to_descending() {
    waypath()
        .args(["heapsort", "3", "9", "1", "9", "4"])
        .assert()
        .success()
        .stdout("9 9 4 3 1\n");
}

#[test]
fn test_heapsort_min_order_ascends() {
    waypath()
        .args(["heapsort", "--order", "min", "3", "-7", "1"])
        .assert()
        .success()
        .stdout("-7 1 3\n");
}

#[test]
fn test_heapsort_json() {
    let output = waypath()
        .args(["--format", "json", "heapsort", "--order", "min", "5", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["order"], "min");
    assert_eq!(json["sorted"], serde_json::json!([2, 5]));
}

#[test]
fn test_heapsort_requires_values() {
    waypath().args(["heapsort"]).assert().code(2);
}

#[test]
fn test_heapsort_invalid_order() {
    waypath()
        .args(["heapsort", "--order", "sideways", "1"])
        .assert()
        .code(2);
}
