use assert_cmd::Command;

/// Helper to get a Command for the pitchgate binary.
#[allow(deprecated)]
fn pitchgate_cmd() -> Command {
    Command::cargo_bin("pitchgate").unwrap()
}

#[test]
fn help_works() {
    pitchgate_cmd().arg("--help").assert().success();
}

#[test]
fn subcommand_help_works() {
    pitchgate_cmd().args(["audit", "--help"]).assert().success();
    pitchgate_cmd().args(["validate", "--help"]).assert().success();
}
