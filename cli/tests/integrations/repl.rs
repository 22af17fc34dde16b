use assert_cmd::Command;
use predicates::prelude::*;

fn repl(input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("rpn")
        .unwrap()
        .arg("repl")
        .write_stdin(input)
        .assert()
}

#[test]
fn test_repl_accumulates_lines() {
    repl("1 2\n+\n")
        .success()
        .stdout("1,2\n2\n1+2 =\n3\n");
}

#[test]
fn test_repl_undo_and_clear() {
    repl("6 3 /\nundo\nclear\n")
        .success()
        .stdout("6÷3 =\n2\n6,3\n3\nEmpty stack\n");
}

#[test]
fn test_repl_store_and_variables() {
    repl("5 →M\nclear\nvars\nM M ×\n")
        .success()
        .stdout(predicate::str::contains("Variable"))
        .stdout(predicate::str::ends_with("M×M =\n25\n"));
}

#[test]
fn test_repl_variable_change_reflected() {
    Command::cargo_bin("rpn")
        .unwrap()
        .args(["repl", "--var", "M=9"])
        .write_stdin("7 M + sqrt\n16 →M\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("√(7+M) =\n4\n"));
}

#[test]
fn test_repl_rejected_line_leaves_stack() {
    repl("1 2\n3 $ +\n+\n")
        .success()
        .stdout("1,2\n2\n1+2 =\n3\n")
        .stderr(predicate::str::contains("Unrecognized token '$'"));
}

#[test]
fn test_repl_quit() {
    repl("1\nquit\n2\n").success().stdout("1\n1\n");
}

#[test]
fn test_repl_stack_listing() {
    repl("1 2 +\nstack\n")
        .success()
        .stdout(predicate::str::contains("Entry"))
        .stdout(predicate::str::contains("+"));
}

#[test]
fn test_repl_failed_store_discards_line() {
    repl("1 2 +\n1 0 / >M\nstack\n")
        .success()
        .stdout(predicate::str::contains("+"))
        .stdout(predicate::str::contains("÷").not())
        .stderr(predicate::str::contains("Cannot store into M: Division by zero"));

    repl("1 2 +\n1 0 / >M\n1 +\n")
        .success()
        .stdout("1+2 =\n3\n1+2+1 =\n4\n");
}

#[test]
fn test_repl_command_word_shares_line_to_push_variable() {
    Command::cargo_bin("rpn")
        .unwrap()
        .args(["repl", "--var", "stack=4"])
        .write_stdin("stack 1 ×\n")
        .assert()
        .success()
        .stdout("stack×1 =\n4\n");
}
