use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn pitchgate_cmd() -> Command {
    Command::cargo_bin("pitchgate").unwrap()
}

#[test]
fn audit_with_defaults_emits_the_envelope() {
    pitchgate_cmd()
        .args(["--config", "does-not-exist.toml", "audit", "--role", "manager"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pitchgate.audit.v1"))
        .stdout(predicate::str::contains("\"role\": \"manager\""))
        .stdout(predicate::str::contains("player_list"));
}

#[test]
fn audit_rejects_unknown_roles() {
    pitchgate_cmd()
        .args(["--config", "does-not-exist.toml", "audit", "--role", "physio"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown role: physio"));
}

#[test]
fn audit_honors_a_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("pitchgate.toml");
    std::fs::write(
        &config_path,
        r#"
[access.finance]
manager = "manage"
"#,
    )
    .expect("write config");

    pitchgate_cmd()
        .args([
            "--config",
            config_path.to_str().unwrap(),
            "audit",
            "--role",
            "manager",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"finance\": \"manage\""));
}

#[test]
fn audit_writes_to_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out_path = dir.path().join("artifacts").join("audit.json");

    pitchgate_cmd()
        .args([
            "--config",
            "does-not-exist.toml",
            "audit",
            "--role",
            "player",
            "--out",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).expect("read output");
    assert!(written.contains("pitchgate.audit.v1"));
}

#[test]
fn summary_renders_markdown() {
    pitchgate_cmd()
        .args(["--config", "does-not-exist.toml", "summary", "--role", "coach"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Pitchgate permission audit"))
        .stdout(predicate::str::contains("## coach (level 60)"));
}

#[test]
fn audit_fails_on_invalid_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("pitchgate.toml");
    std::fs::write(&config_path, "[tiers]\ngold = [\"team:read\"]\n").expect("write config");

    pitchgate_cmd()
        .args(["--config", config_path.to_str().unwrap(), "audit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown_tier"));
}
