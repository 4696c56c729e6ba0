use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_triadic")
}

#[test]
fn resolve_command_emits_json() {
    let output = Command::new(bin())
        .args(["resolve", "I V vi IV"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("resolve should emit json");
    assert_eq!(payload.as_array().map(Vec::len), Some(13));
    assert_eq!(payload[1]["chords"], serde_json::json!(["C", "G", "Am", "F"]));
}

#[test]
fn resolve_command_joins_separate_arguments() {
    let output = Command::new(bin())
        .args(["resolve", "1", "5", "6", "4", "--table"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("key\t1\t5\t6\t4"));
    assert_eq!(lines.next(), Some("C\tC\tG\tAm\tF"));
}

#[test]
fn resolve_command_writes_csv() {
    let output = Command::new(bin())
        .args(["resolve", "ii-V-I", "--csv"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("key,ii,V,I\nC,Dm,G,C\n"));
}

#[test]
fn resolve_command_fails_on_invalid_input() {
    let output = Command::new(bin())
        .args(["resolve", "3.50"])
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid progression"));
}

#[test]
fn resolve_command_returns_usage_without_progression() {
    let output = Command::new(bin())
        .arg("resolve")
        .output()
        .expect("resolve should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: triadic resolve"));
}

#[test]
fn keys_command_prints_table() {
    let output = Command::new(bin())
        .arg("keys")
        .output()
        .expect("keys should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 13);
    assert!(stdout.contains("B\tB\tC#m\tD#m\tE\tF#\tG#m\tA#dim"));
}

#[test]
fn unknown_command_prints_usage() {
    let output = Command::new(bin())
        .arg("simulate")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: triadic"));
}
