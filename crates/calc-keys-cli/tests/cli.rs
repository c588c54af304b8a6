//! End-to-end tests for the calc-keys binary

#![allow(clippy::unwrap_used, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn calc_keys() -> Command {
    Command::cargo_bin("calc-keys").unwrap()
}

#[test]
fn list_prints_the_whole_vocabulary() {
    calc_keys()
        .args(["list", "--color", "never"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("MULTIPLY")
                .and(predicate::str::contains("×"))
                .and(predicate::str::contains("TOGGLE_SIGN"))
                .and(predicate::str::contains("±")),
        );
}

#[test]
fn list_json_is_valid() {
    let output = calc_keys()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 11);
}

#[test]
fn keypad_prints_the_grid() {
    calc_keys()
        .args(["keypad", "--color", "never"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[ CE ] [ C ] [ ⌫ ] [ ÷ ]")
                .and(predicate::str::contains("[ = ]")),
        );
}

#[test]
fn glyph_looks_up_names() {
    calc_keys()
        .args(["glyph", "PERCENTAGE", "BACKSPACE", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("%").and(predicate::str::contains("⌫")));
}

#[test]
fn glyph_fails_on_foreign_name() {
    calc_keys()
        .args(["glyph", "MODULO"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown operator name"));
}

#[test]
fn classify_tags_tokens() {
    calc_keys()
        .args(["classify", "×", "42", "abc", "--color", "never"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("operator (MULTIPLY)")
                .and(predicate::str::contains("number"))
                .and(predicate::str::contains("text")),
        );
}

#[test]
fn classify_json_round_trips_shapes() {
    let output = calc_keys()
        .args(["classify", "+", "3.5", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries[0]["kind"], "operator");
    assert_eq!(entries[0]["value"], "+");
    assert_eq!(entries[1]["kind"], "number");
    assert_eq!(entries[1]["value"], 3.5);
}

#[test]
fn quiet_suppresses_output() {
    calc_keys()
        .args(["list", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
