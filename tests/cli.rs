//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn rnet() -> Command {
    cargo_bin_cmd!("rnet")
}

#[test]
fn solve_with_explicit_values() {
    rnet()
        .args(["solve", "320", "--values", "100,220", "-t", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 (100.00 + 220.00) = 320.00 Ω"))
        .stdout(predicate::str::contains("SMD: 221"));
}

#[test]
fn solve_reports_no_match() {
    rnet()
        .args(["solve", "1000000000", "--values", "1,10,100", "-n", "2", "-t", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No network found"));
}

#[test]
fn solve_rejects_bad_target() {
    rnet()
        .args(["solve", "-5", "--values", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than 0"));
}

#[test]
fn solve_rejects_unknown_series() {
    rnet()
        .args(["solve", "100", "--series", "e7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown series"));
}

#[test]
fn solve_json() {
    let output = rnet()
        .args(["solve", "4.7K", "--series", "e12", "-n", "1", "-t", "0", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["entries"][0]["codes"][0]["four_band"], "Yellow-Violet-Red-Gold");
}

#[test]
fn codes_command() {
    rnet()
        .args(["codes", "4.7K", "4.7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "4700.00 Ω: 4-band: Yellow-Violet-Red-Gold | 5-band: Yellow-Violet-Black-Brown-Brown | SMD: 472",
        ))
        .stdout(predicate::str::contains("SMD: 4R7"));
}

#[test]
fn ladder_command() {
    rnet()
        .args(["ladder", "10K", "--bits", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LSB: 0.019531 V"))
        .stdout(predicate::str::contains("x 7"))
        .stdout(predicate::str::contains("x 9"));
}

#[test]
fn ladder_rejects_wide_ladders() {
    rnet()
        .args(["ladder", "10K", "--bits", "32"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 2 and 24 bits"));
}
