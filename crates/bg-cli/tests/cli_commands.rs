//! Integration tests for the `bg` CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Write a small table file and return its directory and path.
fn test_tables() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tables.json");
    fs::write(
        &path,
        r#"{
  "router": [
    { "min": 1, "max": 50, "text": "Craft" },
    { "min": 51, "max": 100, "text": "Lore" }
  ],
  "categories": {
    "Craft": [
      { "min": 1, "max": 60, "text": "Smith" },
      { "min": 61, "max": 76, "text": "Weaver" },
      { "min": 77, "max": 77, "text": "Apprentice — Pick a profession from any table" },
      { "min": 78, "max": 100, "text": "Potter" }
    ],
    "Lore": [
      { "min": 1, "max": 50, "text": "Scribe" },
      { "min": 51, "max": 100, "text": "Sage" }
    ]
  }
}
"#,
    )
    .unwrap();
    (dir, path)
}

fn write_tables(dir: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, json).unwrap();
    path
}

fn bg() -> Command {
    Command::cargo_bin("bg").unwrap()
}

// ---------------------------------------------------------------------------
// generate
// ---------------------------------------------------------------------------

#[test]
fn generate_with_forced_rolls() {
    let (_dir, tables) = test_tables();
    bg().args(["generate", "-t", tables.to_str().unwrap(), "--rolls", "30,12"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("30 → Craft").and(predicate::str::contains("12 → Smith")),
        );
}

#[test]
fn generate_branch_policy_adds_apprenticeship() {
    let (_dir, tables) = test_tables();
    bg().args([
        "generate",
        "-t",
        tables.to_str().unwrap(),
        "--policy",
        "branch",
        "--rolls",
        "30,77,64,12",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("77 → Apprentice — Pick a profession from any table")
            .and(predicate::str::contains("Apprenticeship (extra roll)"))
            .and(predicate::str::contains("64 → Lore"))
            .and(predicate::str::contains("12 → Scribe")),
    );
}

#[test]
fn generate_reroll_policy_discards_apprentice() {
    let (_dir, tables) = test_tables();
    bg().args(["generate", "-t", tables.to_str().unwrap(), "--rolls", "30,77,95"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("95 → Potter")
                .and(predicate::str::contains("Apprentice").not()),
        );
}

#[test]
fn generate_json_output() {
    let (_dir, tables) = test_tables();
    bg().args([
        "generate",
        "-t",
        tables.to_str().unwrap(),
        "--rolls",
        "60,70",
        "--json",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("\"primaryRoll\": 60")
            .and(predicate::str::contains("\"profession\": \"Sage\""))
            .and(predicate::str::contains("apprenticeship").not()),
    );
}

#[test]
fn generate_debug_output() {
    let (_dir, tables) = test_tables();
    bg().args([
        "generate",
        "-t",
        tables.to_str().unwrap(),
        "--rolls",
        "60,70",
        "--debug",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Debug").and(predicate::str::contains("\"secondaryRoll\": 70")));
}

#[test]
fn generate_count_with_seed_is_reproducible() {
    let run = || {
        bg().args(["generate", "-n", "5", "--seed", "7"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    let first = run();
    assert_eq!(first, run());
    assert_eq!(String::from_utf8(first).unwrap().matches("Result").count(), 5);
}

#[test]
fn generate_builtin_tables() {
    bg().args(["generate", "--seed", "1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Primary category (d100)")
                .and(predicate::str::contains("Secondary profession (d100)")),
        );
}

#[test]
fn generate_fails_when_rerolls_exhausted() {
    let dir = TempDir::new().unwrap();
    let tables = write_tables(
        &dir,
        "students.json",
        r#"{
  "router": [{ "min": 1, "max": 100, "text": "School" }],
  "categories": { "School": [{ "min": 1, "max": 100, "text": "Student" }] }
}"#,
    );
    bg().args(["generate", "-t", tables.to_str().unwrap(), "--seed", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeded reroll limit"));
}

#[test]
fn generate_fails_on_missing_category() {
    let dir = TempDir::new().unwrap();
    let tables = write_tables(
        &dir,
        "missing.json",
        r#"{ "router": [{ "min": 1, "max": 100, "text": "Sea" }] }"#,
    );
    bg().args(["generate", "-t", tables.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no category table 'Sea'"));
}

#[test]
fn generate_fails_on_missing_file() {
    bg().args(["generate", "-t", "/nonexistent/tables.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read tables"));
}

#[test]
fn generate_rejects_bad_rolls() {
    bg().args(["generate", "--rolls", "30,abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid roll 'abc'"));
}

#[test]
fn generate_rejects_unknown_policy() {
    bg().args(["generate", "--policy", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown policy"));
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn session_runs_triggers_from_stdin() {
    let (_dir, tables) = test_tables();
    bg().args(["session", "-t", tables.to_str().unwrap(), "--rolls", "30,12,90,60,5"])
        .write_stdin("generate\nreroll-secondary\nreroll-primary\ndebug\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("12 → Smith")
                .and(predicate::str::contains("90 → Potter"))
                .and(predicate::str::contains("60 → Lore"))
                .and(predicate::str::contains("5 → Scribe"))
                .and(predicate::str::contains("\"category\": \"Lore\"")),
        );
}

#[test]
fn session_keeps_result_after_failure() {
    let dir = TempDir::new().unwrap();
    let tables = write_tables(
        &dir,
        "mixed.json",
        r#"{
  "router": [
    { "min": 1, "max": 50, "text": "Craft" },
    { "min": 51, "max": 100, "text": "School" }
  ],
  "categories": {
    "Craft": [{ "min": 1, "max": 100, "text": "Smith" }],
    "School": [{ "min": 1, "max": 100, "text": "Teacher" }]
  }
}"#,
    );
    bg().args([
        "session",
        "-t",
        tables.to_str().unwrap(),
        "--max-attempts",
        "2",
        "--rolls",
        "10,20,80,1,1",
    ])
    .write_stdin("generate\ngenerate\nshow\n")
    .assert()
    .success()
    .stdout(
        predicate::str::contains("exceeded reroll limit")
            .and(predicate::str::contains("20 → Smith").count(2)),
    );
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_builtin_tables() {
    bg().arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed").and(predicate::str::contains("7 category tables")));
}

#[test]
fn check_reports_gaps() {
    let dir = TempDir::new().unwrap();
    let tables = write_tables(
        &dir,
        "gaps.json",
        r#"{
  "router": [{ "min": 1, "max": 90, "text": "Craft" }],
  "categories": { "Craft": [{ "min": 1, "max": 100, "text": "Smith" }] }
}"#,
    );
    bg().args(["check", "-t", tables.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("no entry for rolls 91-100")
                .and(predicate::str::contains("validation failed with 1 error")),
        );
}

#[test]
fn check_handles_huge_custom_die() {
    let dir = TempDir::new().unwrap();
    let tables = write_tables(
        &dir,
        "huge.json",
        r#"{
  "die": "d4294967295",
  "router": [{ "min": 1, "max": 4294967295, "text": "Craft" }],
  "categories": { "Craft": [{ "min": 1, "max": 100, "text": "Smith" }] }
}"#,
    );
    bg().args(["check", "-t", tables.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("no entry for rolls 101-4294967295")
                .and(predicate::str::contains("validation failed with 1 error")),
        );
}

#[test]
fn check_rejects_unknown_die() {
    let dir = TempDir::new().unwrap();
    let tables = write_tables(&dir, "coin.json", r#"{ "die": "coin", "router": [] }"#);
    bg().args(["check", "-t", tables.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown die 'coin'"));
}

#[test]
fn check_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    let tables = write_tables(&dir, "bad.json", "{ \"router\": 5 }");
    bg().args(["check", "-t", tables.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed table data"));
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

#[test]
fn show_router() {
    let (_dir, tables) = test_tables();
    bg().args(["show", "-t", tables.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("router")
                .and(predicate::str::contains("1-50"))
                .and(predicate::str::contains("Craft"))
                .and(predicate::str::contains("2 entries")),
        );
}

#[test]
fn show_category_case_insensitive() {
    let (_dir, tables) = test_tables();
    bg().args(["show", "craft", "-t", tables.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weaver").and(predicate::str::contains("4 entries")));
}

#[test]
fn show_unknown_category() {
    let (_dir, tables) = test_tables();
    bg().args(["show", "Sea", "-t", tables.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category not found").and(predicate::str::contains("Craft, Lore")));
}
