use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn pitchgate_cmd() -> Command {
    Command::cargo_bin("pitchgate").unwrap()
}

#[test]
fn missing_config_validates_as_defaults() {
    pitchgate_cmd()
        .args(["--config", "does-not-exist.toml", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config OK"));
}

#[test]
fn broken_config_exits_2_and_lists_every_issue() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("pitchgate.toml");
    std::fs::write(
        &config_path,
        r#"
[catalog]
team = ["read", "read"]

[tiers]
gold = ["team:read"]

[access.injury]
physio = "full"
"#,
    )
    .expect("write config");

    pitchgate_cmd()
        .args(["--config", config_path.to_str().unwrap(), "validate"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("config INVALID"))
        .stdout(predicate::str::contains("duplicate_permission"))
        .stdout(predicate::str::contains("unknown_tier"))
        .stdout(predicate::str::contains("unknown_role"));
}

#[test]
fn unparseable_toml_is_a_hard_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("pitchgate.toml");
    std::fs::write(&config_path, "not [valid toml").expect("write config");

    pitchgate_cmd()
        .args(["--config", config_path.to_str().unwrap(), "validate"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse config"));
}
