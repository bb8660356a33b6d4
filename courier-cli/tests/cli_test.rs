//! Integration tests for the courier binary

use assert_cmd::Command;
use predicates::prelude::*;

fn courier(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("courier").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("COURIER_WEBHOOK_URL")
        .env("NO_COLOR", "1")
        .arg("--no-color");
    cmd
}

#[test]
fn test_check_valid_message() {
    let dir = tempfile::tempdir().unwrap();
    courier(&dir)
        .args(["check", "--content", "Hello World!", "--title", "Greeting"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message is valid (1 embed(s), 0 file(s))"));
}

#[test]
fn test_check_reports_every_violation() {
    let dir = tempfile::tempdir().unwrap();
    let content = "a".repeat(2001);
    let title = "t".repeat(257);

    courier(&dir)
        .args(["check", "--content", &content, "--title", &title])
        .assert()
        .failure()
        .stdout(predicate::str::contains("2000 characters"))
        .stdout(predicate::str::contains("256 characters"))
        .stderr(predicate::str::contains("The message has 2 violation(s)"));
}

#[test]
fn test_check_with_attachment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "some notes").unwrap();

    courier(&dir)
        .args(["check", "--content", "see file", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s)"));
}

#[test]
fn test_check_rejects_bad_field_syntax() {
    let dir = tempfile::tempdir().unwrap();
    courier(&dir)
        .args(["check", "--field", "missing-separator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NAME=VALUE"));
}

#[test]
fn test_send_requires_a_webhook_url() {
    let dir = tempfile::tempdir().unwrap();
    courier(&dir)
        .args(["send", "--content", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("webhook_url"));
}
