use assert_cmd::Command;
use predicates::prelude::*;

fn citypulse(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("citypulse").unwrap();
    cmd.arg("--config").arg(config_dir.path().join("config.yml"));
    cmd
}

#[test]
fn test_alerts_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    citypulse(&dir)
        .args(["alerts", "--category", "Health"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Air Quality Alert"))
        .stdout(predicate::str::contains("Vaccination Drive"))
        .stdout(predicate::str::contains("Thunderstorm").not());
}

#[test]
fn test_unknown_category() {
    let dir = tempfile::tempdir().unwrap();
    citypulse(&dir)
        .args(["alerts", "--category", "Sports"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown alert category"));
}

#[test]
fn test_validate_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    citypulse(&dir)
        .args(["validate", "--name", "Alice", "--email", "a@b.co", "--message", "This is long enough."])
        .assert()
        .success()
        .stdout("ok\n");

    citypulse(&dir)
        .arg("validate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("name: Name is required"))
        .stdout(predicate::str::contains("email: Email is required"))
        .stdout(predicate::str::contains("message: Message is required"));
}

#[test]
fn test_render_map_with_zone() {
    let dir = tempfile::tempdir().unwrap();
    citypulse(&dir)
        .args(["render", "--view", "/map", "--zone", "9", "--width", "110"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Municipal administration"));
}

#[test]
fn test_render_one_row() {
    let dir = tempfile::tempdir().unwrap();
    for view in ["/", "/alerts", "/map", "/feedback"] {
        citypulse(&dir)
            .args(["render", "--view", view, "--width", "40", "--height", "1"])
            .assert()
            .success();
    }
}

#[test]
fn test_render_unknown_zone_fails() {
    let dir = tempfile::tempdir().unwrap();
    citypulse(&dir)
        .args(["render", "--view", "map", "--zone", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no zone with id 99"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.yml"), "tick_ms: [oops").unwrap();
    citypulse(&dir)
        .arg("zones")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config"));
}

#[test]
fn test_zones_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = citypulse(&dir).args(["zones", "--json"]).output().unwrap();
    assert!(output.status.success());

    let zones: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(zones.as_array().unwrap().len(), 9);
    assert_eq!(zones[8]["name"], "City Hall");
    assert_eq!(zones[0]["bounds"]["width"], 25.0);
}
