use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn rpn() -> Command {
    Command::cargo_bin("rpn").unwrap()
}

#[test]
fn test_eval_simple_expression() {
    rpn()
        .args(["eval", "1", "2", "+", "3", "×"])
        .assert()
        .success()
        .stdout("(1+2)×3 =\n9\n");
}

#[test]
fn test_eval_ascii_aliases() {
    rpn()
        .args(["eval", "1", "2", "+", "3", "4", "+", "/", "cos"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("cos((1+2)÷(3+4)) =\n"));
}

#[test]
fn test_eval_tokens_in_one_argument() {
    rpn()
        .args(["eval", "7 2 -"])
        .assert()
        .success()
        .stdout("7−2 =\n5\n");
}

#[test]
fn test_eval_negative_literal() {
    rpn()
        .args(["eval", "-3", "2", "×"])
        .assert()
        .success()
        .stdout("-3×2 =\n-6\n");
}

#[test]
fn test_eval_with_variable() {
    rpn()
        .args(["eval", "--var", "M=9", "7", "M", "+", "sqrt"])
        .assert()
        .success()
        .stdout("√(7+M) =\n4\n");
}

#[test]
fn test_eval_unset_variable_is_reported() {
    rpn()
        .args(["eval", "2", "X", "+"])
        .assert()
        .success()
        .stdout("2+X =\nVariable not set\n");
}

#[test]
fn test_eval_division_by_zero() {
    rpn()
        .args(["eval", "--raw", "7", "0", "÷"])
        .assert()
        .success()
        .stdout("Division by zero\n");
}

#[test]
fn test_eval_empty_stack() {
    rpn()
        .arg("eval")
        .assert()
        .success()
        .stdout("Empty stack\n");
}

#[test]
fn test_eval_multiple_expressions() {
    rpn()
        .args(["eval", "1", "2", "+", "√", "π", "cos"])
        .assert()
        .success()
        .stdout("√(1+2),cos(π) =\n-1\n");
}

#[test]
fn test_eval_store_and_reuse() {
    rpn()
        .args(["eval", "--raw", "4", "→M", "M", "M", "×"])
        .assert()
        .success()
        .stdout("16\n");
}

#[test]
fn test_eval_precision_and_grouping() {
    rpn()
        .args(["eval", "-p", "2", "-g", "_", "1234567.891", "1", "+"])
        .assert()
        .success()
        .stdout("1_234_567.89+1 =\n1_234_568.89\n");
}

#[test]
fn test_eval_json() {
    let output = rpn()
        .args(["eval", "--json", "--var", "M=2", "3", "M", "×"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["description"], "3×M");
    assert_eq!(json["finished"], true);
    assert_eq!(json["result"]["type"], "value");
    assert_eq!(json["result"]["value"], 6.0);
    assert_eq!(json["history"], serde_json::json!(["3", "M", "×"]));
}

#[test]
fn test_eval_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("sum.rpn");
    fs::write(&script, "1 2 +\n3 ×\n").unwrap();

    rpn()
        .arg("eval")
        .arg("--file")
        .arg(&script)
        .arg("4")
        .arg("+")
        .assert()
        .success()
        .stdout("(1+2)×3+4 =\n13\n");
}

#[test]
fn test_eval_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    rpn()
        .arg("eval")
        .arg("--file")
        .arg(temp_dir.path().join("missing.rpn"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_eval_unrecognized_token() {
    rpn()
        .args(["eval", "1", "2", "@", "+"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unrecognized token '@'"));
}

#[test]
fn test_eval_invalid_variable() {
    rpn()
        .args(["eval", "--var", "M", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=VALUE"));
}

#[test]
fn test_eval_long_operator_chain() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("chain.rpn");
    let mut input = String::from("1");
    for _ in 0..5_001 {
        input.push_str(" neg");
    }
    fs::write(&path, input).unwrap();

    rpn()
        .args(["eval", "--raw", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("-1\n");
}

#[test]
fn test_eval_rejects_ambiguous_grouping_separator() {
    for separator in [",", ".", "0"] {
        rpn()
            .args(["eval", "-g", separator, "1000", "2"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("ambiguous"));
    }

    rpn()
        .args(["eval", "-g", "'", "1000", "2"])
        .assert()
        .success()
        .stdout("1'000,2\n2\n");
}
