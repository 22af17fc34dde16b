use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_operators_lists_symbols() {
    let mut cmd = Command::cargo_bin("rpn").unwrap();
    cmd.arg("operators");

    let mut output = cmd.assert().success();
    for symbol in ["×", "÷", "+", "−", "√", "sin", "cos", "±", "π"] {
        output = output.stdout(predicate::str::contains(symbol));
    }
    output
        .stdout(predicate::str::contains("precedence 1"))
        .stdout(predicate::str::contains("precedence 2"))
        .stdout(predicate::str::contains("constant"));
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("rpn").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("reverse Polish notation"));
}
