// lessonguard/tests/cli_integration_tests.rs
//! Command-line integration tests for the `lessonguard` binary.
//!
//! Each test spawns the binary through `assert_cmd`, feeds stdin or temporary
//! files, and checks stdout, stderr and the exit status. Output is passed
//! through `strip_ansi_escapes` before comparison.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

fn lessonguard() -> Command {
    let mut cmd = Command::cargo_bin("lessonguard").unwrap();
    cmd.env_remove("LESSONGUARD_RULES");
    cmd.env_remove("LESSONGUARD_ALLOW_DEBUG_PII");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn strip_ansi(bytes: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(bytes)).to_string()
}

fn rules_file(yaml: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml.as_bytes())?;
    Ok(file)
}

#[test]
fn test_clean_inline_text_with_summary() {
    let assert = lessonguard()
        .args(["clean", "Contact John Smith at john.smith@school.edu for damn good resources"])
        .assert()
        .success();
    let output = assert.get_output();
    assert_eq!(
        strip_ansi(&output.stdout),
        "[REDACTED] Smith at [REDACTED] for **** good resources\n"
    );

    let stderr = strip_ansi(&output.stderr);
    assert!(stderr.contains("--- Redaction Summary ---"), "stderr:\n{}", stderr);
    for category in ["profanity", "full_name", "email"] {
        assert!(stderr.contains(category), "missing {} in:\n{}", category, stderr);
    }
}

#[test]
fn test_clean_stdin_without_summary() {
    lessonguard()
        .args(["clean", "--no-redaction-summary"])
        .write_stdin("SSN 123-45-6789, card 4532-1234-5678-9012\n")
        .assert()
        .success()
        .stdout("SSN [REDACTED], card [REDACTED]\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_clean_leaves_clean_text_alone() {
    let input = "This is a perfectly clean educational sentence about photosynthesis\n";
    lessonguard()
        .args(["--quiet", "clean"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(input);
}

#[test]
fn test_clean_file_to_file() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    writeln!(input, "Call (555) 123-4567 today")?;
    let output = NamedTempFile::new()?;

    lessonguard()
        .args(["clean", "--no-redaction-summary", "-i"])
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(output.path())?, "Call [REDACTED] today\n");
    Ok(())
}

#[test]
fn test_custom_rules_from_flag_and_env() -> Result<()> {
    let rules = rules_file(
        r#"
rules:
  - name: room_number
    pattern: 'Room \d+'
    replace_with: "[ROOM]"
"#,
    )?;

    lessonguard()
        .args(["clean", "--no-redaction-summary", "--config"])
        .arg(rules.path())
        .arg("Meet in Room 101, email a@b.org")
        .assert()
        .success()
        .stdout("Meet in [ROOM], email [REDACTED]\n");

    lessonguard()
        .env("LESSONGUARD_RULES", rules.path())
        .args(["clean", "--no-redaction-summary", "Room 7"])
        .assert()
        .success()
        .stdout("[ROOM]\n");
    Ok(())
}

#[test]
fn test_disable_rule() {
    lessonguard()
        .args(["clean", "--no-redaction-summary", "-x", "phone", "Call 555-123-4567"])
        .assert()
        .success()
        .stdout("Call 555-123-4567\n");
}

#[test]
fn test_invalid_rules_file_fails() -> Result<()> {
    let rules = rules_file("rules:\n  - name: broken\n    pattern: '(unclosed'\n")?;
    lessonguard()
        .args(["clean", "--config"])
        .arg(rules.path())
        .arg("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to load rules from"))
        .stderr(predicate::str::contains("invalid regex pattern"));
    Ok(())
}

#[test]
fn test_sanitize_json_preserves_structure() {
    let input = json!({
        "title": "Bob Wilson's science lesson",
        "items": [1, 2, "Call (555) 111-2222"],
        "reviewer": null,
        "ratio": 0.5
    });
    let assert = lessonguard()
        .args(["sanitize", "--compact", "--no-redaction-summary"])
        .write_stdin(input.to_string())
        .assert()
        .success();

    let stdout = strip_ansi(&assert.get_output().stdout);
    assert_eq!(
        stdout,
        "{\"title\":\"[REDACTED]'s science lesson\",\"items\":[1,2,\"Call [REDACTED]\"],\"reviewer\":null,\"ratio\":0.5}\n"
    );
}

#[test]
fn test_sanitize_pretty_by_default() {
    let assert = lessonguard()
        .args(["sanitize"])
        .write_stdin(r#"{"a": ["x@y.org"]}"#)
        .assert()
        .success();
    let output = assert.get_output();
    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("\n  \"a\": ["));
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, json!({"a": ["[REDACTED]"]}));
    assert!(strip_ansi(&output.stderr).contains("email"));
}

#[test]
fn test_sanitize_rejects_invalid_json() {
    lessonguard()
        .args(["sanitize"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is not a valid JSON document"));
}

#[test]
fn test_scan_json_stdout() {
    let assert = lessonguard()
        .args(["scan", "--json-stdout"])
        .write_stdin("a@b.org c@d.org damn")
        .assert()
        .success();
    let parsed: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(
        parsed,
        json!([
            {"rule_name": "profanity", "occurrences": 1},
            {"rule_name": "email", "occurrences": 2}
        ])
    );
}

#[test]
fn test_scan_threshold() {
    lessonguard()
        .args(["scan", "--fail-over-threshold", "5"])
        .write_stdin("a@b.org")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 1"));

    lessonguard()
        .args(["scan", "--fail-over-threshold", "0"])
        .write_stdin("a@b.org")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeding the threshold of 0"));
}

#[test]
fn test_plan_json_only_is_sanitized() {
    let assert = lessonguard()
        .args(["plan", "--grade", "8th Grade", "--subject", "Environmental Science", "--json-only"])
        .assert()
        .success();
    let plan: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(plan["lesson_title"], json!("Introduction to [REDACTED]"));
    assert_eq!(plan["content_outline"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_plan_human_output_and_file() -> Result<()> {
    let output = NamedTempFile::new()?;
    let assert = lessonguard()
        .args(["plan", "--grade", "5th Grade", "--subject", "Math", "-o"])
        .arg(output.path())
        .assert()
        .success();
    let stdout = strip_ansi(&assert.get_output().stdout);
    assert!(stdout.contains("Learning Objectives"));
    assert!(stdout.contains("5th Grade"));
    assert!(strip_ansi(&assert.get_output().stderr).contains("offline demonstration plan"));

    let saved: Value = serde_json::from_str(&fs::read_to_string(output.path())?)?;
    assert_eq!(saved["suggested_assessments"][2], json!("Exit ticket with key vocabulary terms"));
    Ok(())
}

#[test]
fn test_debug_logs_hide_matched_text_by_default() {
    let assert = lessonguard()
        .env("RUST_LOG", "debug")
        .args(["clean", "--no-redaction-summary", "mail teacher@school.edu"])
        .assert()
        .success();
    let stderr = strip_ansi(&assert.get_output().stderr);
    assert!(stderr.contains("[INFO lessonguard] lessonguard started."), "stderr:\n{}", stderr);
    assert!(stderr.contains("Captured match for rule 'email'"));
    assert!(!stderr.contains("teacher@school.edu"));

    let assert = lessonguard()
        .env("RUST_LOG", "debug")
        .env("LESSONGUARD_ALLOW_DEBUG_PII", "true")
        .args(["clean", "--no-redaction-summary", "mail teacher@school.edu"])
        .assert()
        .success();
    let stderr = strip_ansi(&assert.get_output().stderr);
    assert!(stderr.contains("(original): 'teacher@school.edu'"));
}

#[test]
fn test_quiet_suppresses_logs_and_summary() {
    lessonguard()
        .env("RUST_LOG", "debug")
        .args(["--quiet", "clean", "a@b.org"])
        .assert()
        .success()
        .stdout("[REDACTED]\n")
        .stderr(predicate::str::is_empty());
}
