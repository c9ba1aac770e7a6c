//! Integration tests for the ATM CLI.
//!
//! These tests run the actual binary, feed the PIN and amount on stdin and
//! verify the screen and cash slot lines on stdout.

use assert_cmd::Command;
use predicates::prelude::*;

/// Run the binary with the given arguments and stdin, returning stdout
fn run_atm(args: &[&str], stdin: &str) -> String {
    let mut cmd = Command::cargo_bin("atm").unwrap();
    let assert = cmd.args(args).write_stdin(stdin).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

fn lines(output: &str) -> Vec<&str> {
    output.lines().map(str::trim_end).collect()
}

#[test]
fn test_default_strategy_is_chain() {
    let output = run_atm(&[], "1234\n186\n");

    assert_eq!(
        lines(&output),
        vec![
            "Please insert your PIN number.",
            "Insert the number of money your want to get out.",
            "Take your money.",
            "ATM money slot: 100, 50, 20, 5, 5, 5, 1",
        ]
    );
}

#[test]
fn test_greedy_strategy_flag() {
    let output = run_atm(&["--strategy", "greedy"], "1234\n186\n");
    assert!(output.ends_with("ATM money slot: 100, 50, 20, 10, 5, 1\n"));
}

#[test]
fn test_strategies_differ_on_thirty() {
    let chain = run_atm(&["--strategy=chain"], "1234\n30\n");
    let greedy = run_atm(&["--strategy=greedy"], "1234\n30\n");

    assert!(chain.ends_with("ATM money slot: 20, 5, 5\n"));
    assert!(greedy.ends_with("ATM money slot: 20, 10\n"));
}

#[test]
fn test_wrong_pin_shows_error_state() {
    let output = run_atm(&[], "9999\n");

    assert_eq!(
        lines(&output),
        vec![
            "Please insert your PIN number.",
            "There was an error with the PIN.",
        ]
    );
}

#[test]
fn test_zero_amount_reports_slot_error() {
    let output = run_atm(&[], "1234\n0\n");
    assert!(output.ends_with("Take your money.\nATM slot error!!!\n"));
}

#[test]
fn test_negative_amount_reports_slot_error() {
    let output = run_atm(&["--strategy", "greedy"], "1234\n-50\n");
    assert!(output.ends_with("ATM slot error!!!\n"));
}

#[test]
fn test_invalid_amount_error() {
    let mut cmd = Command::cargo_bin("atm").unwrap();
    cmd.write_stdin("1234\nlots\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_over_range_amount_error() {
    let mut cmd = Command::cargo_bin("atm").unwrap();
    cmd.write_stdin("1234\n9223372036854775807\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("ATM money slot").not())
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_missing_amount_error() {
    let mut cmd = Command::cargo_bin("atm").unwrap();
    cmd.write_stdin("1234\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing amount"));
}

#[test]
fn test_unknown_strategy_error() {
    let mut cmd = Command::cargo_bin("atm").unwrap();
    cmd.args(["--strategy", "random"])
        .write_stdin("1234\n10\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown strategy"));
}

#[test]
fn test_unknown_argument_error() {
    let mut cmd = Command::cargo_bin("atm").unwrap();
    cmd.arg("--fast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: atm"));
}
