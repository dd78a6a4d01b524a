use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the formcheck binary
#[allow(deprecated)]
fn formcheck() -> Command {
    Command::cargo_bin("formcheck").expect("Failed to find formcheck binary")
}

/// Runs `validate --format json` and parses stdout.
fn validate_json(args: &[&str]) -> serde_json::Value {
    let output = formcheck()
        .arg("validate")
        .args(args)
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run formcheck");
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_valid_email() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("valid_email.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"))
        .stdout(predicate::str::contains("Rules evaluated: 2"));
}

#[test]
fn test_validate_invalid_email_fails() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("invalid_email.yml"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains("email"))
        .stdout(predicate::str::contains("Invalid email"));
}

#[test]
fn test_validate_invalid_email_json() {
    let report = validate_json(&[&fixture_path("invalid_email.yml")]);

    assert_eq!(report["passed"], false);
    assert_eq!(report["failed_rule"], "email");
    assert_eq!(report["field"]["error"], "error");
    assert_eq!(report["field"]["errorMsg"], "Invalid email");
    assert_eq!(report["field"]["touched"], true);
    assert_eq!(report["summary"]["rules_evaluated"], 2);
}

#[test]
fn test_validate_untouched_skipped() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("untouched.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"))
        .stdout(predicate::str::contains("Rules evaluated: 0"));
}

#[test]
fn test_validate_ignore_touched() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("untouched.yml"))
        .arg("--ignore-touched")
        .assert()
        .failure()
        .stdout(predicate::str::contains("This field is required."));
}

#[test]
fn test_validate_ignore_touched_marks_field_touched() {
    let report = validate_json(&[&fixture_path("untouched.yml"), "--ignore-touched"]);

    assert_eq!(report["field"]["touched"], true);
    assert_eq!(report["failed_rule"], "required");
}

#[test]
fn test_validate_toml_field() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("field.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"))
        .stdout(predicate::str::contains("Rules evaluated: 3"));
}

#[test]
fn test_validate_json_field_non_zero() {
    let report = validate_json(&[&fixture_path("field.json")]);

    assert_eq!(report["passed"], false);
    assert_eq!(report["failed_rule"], "nonZero");
    assert_eq!(report["field"]["errorMsg"], "Must not be zero");
}

#[test]
fn test_validate_unknown_rule_warns() {
    let report = validate_json(&[&fixture_path("unknown_rule.yml")]);

    assert_eq!(report["passed"], true);
    assert_eq!(
        report["warnings"],
        serde_json::json!(["Validation 'notARule' not recognized"])
    );
    assert!(report["field"].get("error").is_none());
}

#[test]
fn test_validate_over18_with_reference_date() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("over18.yml"))
        .arg("--today")
        .arg("2030-01-01")
        .assert()
        .success();

    formcheck()
        .arg("validate")
        .arg(fixture_path("over18.yml"))
        .arg("--today")
        .arg("2015-01-01")
        .assert()
        .failure()
        .stdout(predicate::str::contains("You must be over 18"));
}

#[test]
fn test_validate_bad_reference_date() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("over18.yml"))
        .arg("--today")
        .arg("01/01/2030")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--today"));
}

#[test]
fn test_validate_invalid_field_file() {
    formcheck()
        .arg("validate")
        .arg(fixture_path("invalid_field.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse field file"));
}

#[test]
fn test_validate_missing_file() {
    formcheck()
        .arg("validate")
        .arg("nonexistent.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse field file"));
}

#[test]
fn test_validate_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("field.xml");
    fs::write(&path, "<value>x</value>").unwrap();

    formcheck()
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_validate_temp_field_rule_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("field.yml");
    fs::write(
        &path,
        "value: abc\ntouched: true\nvalidations:\n  max7chars: Too long\n  password: Too short\n  required: Required\n",
    )
    .unwrap();

    let report = validate_json(&[path.to_str().unwrap()]);

    assert_eq!(report["failed_rule"], "password");
    assert_eq!(report["field"]["errorMsg"], "Too short");
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_lists_rules() {
    formcheck()
        .arg("check")
        .arg(fixture_path("invalid_email.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Field definition is valid"))
        .stdout(predicate::str::contains("1. required [built-in]"))
        .stdout(predicate::str::contains("2. email [built-in] \"Invalid email\""));
}

#[test]
fn test_check_does_not_evaluate() {
    formcheck()
        .arg("check")
        .arg(fixture_path("untouched.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Touched: false"));
}

#[test]
fn test_check_unknown_and_disabled_rules() {
    formcheck()
        .arg("check")
        .arg(fixture_path("unknown_rule.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("notARule [unknown]"))
        .stdout(predicate::str::contains("max7chars [disabled]"))
        .stdout(predicate::str::contains("not recognized"));
}

#[test]
fn test_check_json_format() {
    let output = formcheck()
        .arg("check")
        .arg(fixture_path("field.toml"))
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["value"], "DEUTDEFF");
    assert_eq!(parsed["rules"][1]["name"], "bic");
    assert_eq!(parsed["rules"][1]["status"], "built-in");
    assert_eq!(parsed["rules"][1]["message"], "Invalid BIC");
    assert_eq!(parsed["rules"][0]["message"], serde_json::Value::Null);
}

#[test]
fn test_check_invalid_field_file() {
    formcheck()
        .arg("check")
        .arg(fixture_path("invalid_field.yml"))
        .assert()
        .failure();
}

// ============================================================================
// rules command tests
// ============================================================================

#[test]
fn test_rules_lists_builtins() {
    formcheck()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built-in rules (12):"))
        .stdout(predicate::str::contains("bankAccount"))
        .stdout(predicate::str::contains("nonZero"))
        .stdout(predicate::str::contains("over18"))
        .stdout(predicate::str::contains("max11chars"));
}

// ============================================================================
// General CLI tests
// ============================================================================

#[test]
fn test_help() {
    formcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Form field validation CLI"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("rules"));
}

#[test]
fn test_version() {
    formcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("formcheck"));
}

#[test]
fn test_no_command() {
    formcheck()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
