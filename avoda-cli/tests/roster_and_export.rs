//! End-to-end CLI tests: roster mutations and PDF export against a
//! TempDir-backed `$HOME`.

use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

use avoda_core::{store, WorkerName};

fn avoda_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("avoda"));
    cmd.env("HOME", home).env("USERPROFILE", home);
    cmd
}

fn page_count(pdf: &Path) -> usize {
    let bytes = fs::read(pdf).expect("read exported PDF");
    let doc = lopdf::Document::load_mem(&bytes).expect("exported PDF must parse");
    doc.get_pages().len()
}

#[test]
fn add_persists_worker_with_empty_program() {
    let home = TempDir::new().expect("home");

    avoda_cmd(home.path())
        .args(["add", "Dana"])
        .assert()
        .success()
        .stdout(contains("Added 'Dana'"));

    let roster = store::load_roster_at(home.path()).expect("load");
    assert_eq!(roster.program(&WorkerName::from("Dana")), Some(""));
}

#[test]
fn duplicate_add_warns_and_keeps_single_entry() {
    let home = TempDir::new().expect("home");

    avoda_cmd(home.path()).args(["add", "Ana"]).assert().success();
    avoda_cmd(home.path())
        .args(["add", "Ana"])
        .assert()
        .success()
        .stdout(contains("already on the roster"));

    let roster = store::load_roster_at(home.path()).expect("load");
    assert_eq!(roster.len(), 1);
}

#[test]
fn empty_name_is_rejected_with_a_warning() {
    let home = TempDir::new().expect("home");

    avoda_cmd(home.path())
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(contains("must not be empty"));

    assert!(store::load_roster_at(home.path()).expect("load").is_empty());
}

#[test]
fn remove_after_add_roundtrips_to_empty_roster() {
    let home = TempDir::new().expect("home");

    avoda_cmd(home.path()).args(["add", "X"]).assert().success();
    avoda_cmd(home.path())
        .args(["remove", "X"])
        .assert()
        .success()
        .stdout(contains("Removed 'X'"));

    assert!(store::load_roster_at(home.path()).expect("load").is_empty());
}

#[test]
fn list_shows_workers_and_hints_when_empty() {
    let home = TempDir::new().expect("home");

    avoda_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No workers on the roster"));

    avoda_cmd(home.path()).args(["add", "Ana"]).assert().success();
    avoda_cmd(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Ana"));
}

#[test]
fn list_json_is_machine_readable() {
    let home = TempDir::new().expect("home");
    avoda_cmd(home.path()).args(["add", "Ana"]).assert().success();

    let assert = avoda_cmd(home.path()).args(["list", "--json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed[0]["name"], "Ana");
    assert_eq!(parsed[0]["program_lines"], 0);
}

#[test]
fn program_set_and_show_roundtrip() {
    let home = TempDir::new().expect("home");
    avoda_cmd(home.path()).args(["add", "Dana"]).assert().success();

    avoda_cmd(home.path())
        .args(["program", "set", "Dana", "--text", "Line1\n\nLine2"])
        .assert()
        .success()
        .stdout(contains("2 line(s)"));

    avoda_cmd(home.path())
        .args(["program", "show", "Dana"])
        .assert()
        .success()
        .stdout(contains("Line1"))
        .stdout(contains("Line2"));

    let roster = store::load_roster_at(home.path()).expect("load");
    assert_eq!(
        roster.program(&WorkerName::from("Dana")),
        Some("Line1\n\nLine2")
    );
}

#[test]
fn program_set_on_empty_roster_warns_and_aborts() {
    let home = TempDir::new().expect("home");

    avoda_cmd(home.path())
        .args(["program", "set", "ghost", "--text", "x"])
        .assert()
        .success()
        .stdout(contains("No workers on the roster"));
}

#[test]
fn export_writes_one_page_per_worker() {
    let home = TempDir::new().expect("home");
    let out = home.path().join("programs.pdf");

    for name in ["Ana", "Ben"] {
        avoda_cmd(home.path()).args(["add", name]).assert().success();
    }
    avoda_cmd(home.path())
        .args(["export", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported 2 page(s)"));

    assert_eq!(page_count(&out), 2);
}

#[test]
fn export_on_empty_roster_warns_and_writes_nothing() {
    let home = TempDir::new().expect("home");
    let out = home.path().join("programs.pdf");

    avoda_cmd(home.path())
        .args(["export", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("nothing to export"));

    assert!(!out.exists());
}

#[test]
fn export_draft_overlays_without_persisting() {
    let home = TempDir::new().expect("home");
    let out = home.path().join("programs.pdf");
    let draft = home.path().join("draft.txt");
    fs::write(&draft, "unsaved line").expect("write draft");

    avoda_cmd(home.path()).args(["add", "Dana"]).assert().success();
    avoda_cmd(home.path())
        .args(["program", "set", "Dana", "--text", "saved line"])
        .assert()
        .success();

    avoda_cmd(home.path())
        .args(["export", "--out"])
        .arg(&out)
        .arg("--draft")
        .arg(format!("Dana={}", draft.display()))
        .assert()
        .success();
    assert_eq!(page_count(&out), 1);

    // The persisted roster must still hold the saved text.
    let roster = store::load_roster_at(home.path()).expect("load");
    assert_eq!(roster.program(&WorkerName::from("Dana")), Some("saved line"));
}

#[test]
fn export_with_missing_custom_font_fails() {
    let home = TempDir::new().expect("home");
    avoda_cmd(home.path()).args(["add", "Ana"]).assert().success();

    avoda_cmd(home.path())
        .args(["export", "--font", "/nonexistent/font.ttf"])
        .assert()
        .failure()
        .stderr(contains("font"));
}
