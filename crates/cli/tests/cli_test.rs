//! End-to-end tests driving the sheetcalc binary over stdin/stdout

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sheetcalc() -> Command {
    let mut cmd = Command::cargo_bin("sheetcalc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_triangle_area() {
    sheetcalc()
        .arg("triangle")
        .write_stdin("3\n4\n5\n")
        .assert()
        .success()
        .stdout("Enter the a value\nEnter the b value\nEnter the c value\nThe area is: 6\n");
}

#[test]
fn test_triangle_degenerate_prints_nan() {
    sheetcalc()
        .arg("triangle")
        .write_stdin("1 1 10")
        .assert()
        .success()
        .stdout(predicate::str::contains("The area is: ").and(predicate::str::contains("nan")));
}

#[test]
fn test_bmi_normal_weight() {
    sheetcalc()
        .arg("bmi")
        .write_stdin("180\n70\n")
        .assert()
        .success()
        .stdout("Enter your height (in cm)\nEnter your weight (in kg)\nNormal weight\n");
}

#[test]
fn test_bmi_obesity_class_three() {
    sheetcalc()
        .arg("bmi")
        .write_stdin("150 100")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Obesity class III\n"));
}

#[test]
fn test_sphere_volume_uses_fixed_pi() {
    sheetcalc()
        .arg("sphere")
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout("Enter the value of r \nthe volume is: 113.04\n");
}

#[test]
fn test_digit_max() {
    sheetcalc()
        .arg("digit-max")
        .write_stdin("5672\n4\n")
        .assert()
        .success()
        .stdout("Enter a number\nEnter the length\n5\n");
}

#[test]
fn test_digit_average_odd_and_even() {
    sheetcalc()
        .arg("digit-average")
        .write_stdin("12345\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "The average of the specified digits is: 3\n",
        ));

    sheetcalc()
        .arg("digit-average")
        .write_stdin("1234\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "The average of the specified digits is: 2.5\n",
        ));
}

#[test]
fn test_vowel() {
    sheetcalc()
        .arg("vowel")
        .write_stdin("A\n")
        .assert()
        .success()
        .stdout("Enter a character: a is a vowel.\n");

    sheetcalc()
        .arg("vowel")
        .write_stdin("b\n")
        .assert()
        .success()
        .stdout("Enter a character: b is not a vowel.\n");
}

#[test]
fn test_garbage_input_still_exits_zero() {
    sheetcalc()
        .arg("triangle")
        .write_stdin("abc\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("The area is: 0\n"));

    sheetcalc()
        .arg("digit-max")
        .write_stdin("")
        .assert()
        .success()
        .stdout("Enter a number\nEnter the length\n0\n");
}

#[test]
fn test_integer_overflow_exits_zero() {
    sheetcalc()
        .arg("digit-max")
        .write_stdin("99999999999\n4\n")
        .assert()
        .success()
        .stdout("Enter a number\nEnter the length\n2147483647\n");

    sheetcalc()
        .arg("digit-average")
        .write_stdin("99999999999\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The average of the specified digits is: 3.5"));
}

#[test]
fn test_non_utf8_input_exits_zero() {
    sheetcalc()
        .arg("vowel")
        .write_stdin(vec![0xE9u8, b'\n'])
        .assert()
        .success()
        .stdout(&b"Enter a character: \xE9 is not a vowel.\n"[..]);

    sheetcalc()
        .arg("triangle")
        .write_stdin(vec![0xE9u8, b'\n'])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("The area is: 0\n"));
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    sheetcalc()
        .arg("sphere")
        .env("RUST_LOG", "debug")
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout("Enter the value of r \nthe volume is: 113.04\n");
}

#[test]
fn test_bisection_session() {
    sheetcalc()
        .arg("bisection")
        .write_stdin("2\n1\n2\n-2\n0\n0\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Result] Approximated root: x = 1.4142141342"));
}

#[test]
fn test_bisection_rejects_zero_terms() {
    sheetcalc()
        .arg("bisection")
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn test_bisection_huge_term_count_fails_cleanly() {
    sheetcalc()
        .arg("bisection")
        .write_stdin("1000000000000000000\n")
        .assert()
        .failure()
        .code(1)
        .stderr(
            predicate::str::contains("Input ended")
                .and(predicate::str::contains("panicked").not()),
        );
}

#[test]
fn test_newton_session() {
    let temp_dir = TempDir::new().unwrap();
    sheetcalc()
        .arg("newton")
        .current_dir(temp_dir.path())
        .write_stdin("2\n1\n2\n-2\n0\n1\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("root: 1.414214"));
}

#[test]
fn test_newton_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".sheetcalc.json"),
        r#"{"newton": {"max_iterations": 1}}"#,
    )
    .unwrap();

    sheetcalc()
        .arg("newton")
        .current_dir(temp_dir.path())
        .write_stdin("2\n1\n2\n-2\n0\n1\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Info] Maximum number of iterations reached (1).",
        ));
}

#[test]
fn test_config_command_shows_defaults() {
    let temp_dir = TempDir::new().unwrap();
    sheetcalc()
        .arg("config")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"max_iterations\": 20"));
}

#[test]
fn test_config_command_with_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.json");
    fs::write(&path, r#"{"newton": {"derivative_floor": 0.001}}"#).unwrap();

    sheetcalc()
        .arg("config")
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"derivative_floor\": 0.001"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".sheetcalc.json"), "{ nope").unwrap();

    sheetcalc()
        .arg("config")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_bad_config_does_not_affect_calculators() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".sheetcalc.json"), "{ nope").unwrap();

    sheetcalc()
        .arg("vowel")
        .current_dir(temp_dir.path())
        .write_stdin("u")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("u is a vowel.\n"));
}
