use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn pitchgate_cmd() -> Command {
    Command::cargo_bin("pitchgate").unwrap()
}

#[test]
fn explain_domain() {
    pitchgate_cmd()
        .args(["explain", "injury"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Injuries"))
        .stdout(predicate::str::contains("Typically held by"));
}

#[test]
fn explain_token() {
    pitchgate_cmd()
        .args(["explain", "analytics:export"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Analytics"));
}

#[test]
fn explain_unknown_lists_alternatives() {
    pitchgate_cmd()
        .args(["explain", "physio"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown domain or permission token"))
        .stderr(predicate::str::contains("  - injury"))
        .stderr(predicate::str::contains("  - manager"));
}
