//! Integration tests for the one-shot ticket commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory with an empty config file and a ticket file path
struct Desk {
    temp_dir: TempDir,
    config: PathBuf,
    file: PathBuf,
}

impl Desk {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("config.toml");
        std::fs::write(&config, "").unwrap();
        let file = temp_dir.path().join("tickets.csv");
        Self {
            temp_dir,
            config,
            file,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("ticket-desk").unwrap();
        cmd.env_remove("TICKET_DESK_FILE")
            .env_remove("RUST_LOG")
            .arg("--no-color")
            .arg("--config")
            .arg(&self.config)
            .arg("--file")
            .arg(&self.file);
        cmd
    }

    fn add(&self, id: &str, description: &str, priority: &str, status: &str) {
        self.cmd()
            .args(["add", id, description, "--priority", priority, "--status", status])
            .assert()
            .success();
    }

    fn contents(&self) -> String {
        std::fs::read_to_string(&self.file).unwrap()
    }

    fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

#[test]
#[allow(deprecated)]
fn test_help_lists_commands() {
    Command::cargo_bin("ticket-desk")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("count"));
}

#[test]
#[allow(deprecated)]
fn test_add_creates_file() {
    let desk = Desk::new();
    desk.add("T1001", "Printer not working", "high", "open");

    assert_eq!(
        desk.contents(),
        "id,description,priority,status\nT1001,Printer not working,High,Open\n"
    );
}

#[test]
#[allow(deprecated)]
fn test_printer_vpn_scenario() {
    let desk = Desk::new();
    desk.add("T1001", "Printer not working", "High", "Open");
    desk.add("T1002", "VPN issue", "Low", "Open");

    desk.cmd()
        .args(["close", "T1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ticket T1001 closed"));

    desk.cmd()
        .arg("count")
        .assert()
        .success()
        .stdout(predicate::str::contains("Open tickets: 1"));

    desk.cmd()
        .args(["show", "T1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Closed"));
}

#[test]
#[allow(deprecated)]
fn test_duplicate_add_fails() {
    let desk = Desk::new();
    desk.add("T1", "Printer", "low", "open");

    desk.cmd()
        .args(["add", "T1", "Another"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(desk.contents().lines().count(), 2);
}

#[test]
#[allow(deprecated)]
fn test_invalid_priority_is_rejected() {
    let desk = Desk::new();

    desk.cmd()
        .args(["add", "T1", "Printer", "--priority", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid priority"));

    assert!(!desk.file.exists());
}

#[test]
#[allow(deprecated)]
fn test_list_in_insertion_order_and_json() {
    let desk = Desk::new();
    desk.add("B", "second letter", "Medium", "In Progress");
    desk.add("A", "first letter", "Low", "Closed");

    let output = desk.cmd().arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let b = stdout.find("[B]").unwrap();
    let a = stdout.find("[A]").unwrap();
    assert!(b < a);
    assert!(stdout.contains("Status: In Progress"));

    let output = desk.cmd().args(["--json", "list"]).output().unwrap();
    let summaries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summaries[0]["id"], "B");
    assert_eq!(summaries[0]["status"], "In Progress");
    assert_eq!(summaries[1]["priority"], "Low");
}

#[test]
#[allow(deprecated)]
fn test_remove_and_reopen() {
    let desk = Desk::new();
    desk.add("T1", "Printer", "low", "closed");
    desk.add("T2", "VPN", "high", "open");

    desk.cmd().args(["reopen", "T1"]).assert().success();
    desk.cmd().args(["remove", "T2"]).assert().success();
    desk.cmd()
        .args(["remove", "T2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ticket T2 not found"));

    assert_eq!(
        desk.contents(),
        "id,description,priority,status\nT1,Printer,Low,Open\n"
    );
}

#[test]
#[allow(deprecated)]
fn test_padded_ids_match_across_commands() {
    let desk = Desk::new();
    desk.add(" T1 ", "Printer", "high", "open");
    assert_eq!(
        desk.contents(),
        "id,description,priority,status\nT1,Printer,High,Open\n"
    );

    desk.cmd().args(["close", " T1 "]).assert().success();
    desk.cmd()
        .args(["show", " T1 "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status:      Closed"));
    desk.cmd().args(["reopen", "T1 "]).assert().success();
    desk.cmd().args(["remove", " T1"]).assert().success();

    assert_eq!(desk.contents(), "id,description,priority,status\n");
}

#[test]
#[allow(deprecated)]
fn test_bad_file_is_left_alone() {
    let desk = Desk::new();
    let broken = "id,description,priority,status\nT1,Printer,Critical,Open\n";
    std::fs::write(&desk.file, broken).unwrap();

    desk.cmd()
        .args(["close", "T1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));

    assert_eq!(desk.contents(), broken);
}

#[test]
#[allow(deprecated)]
fn test_missing_file_for_list() {
    let desk = Desk::new();

    desk.cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
#[allow(deprecated)]
fn test_default_file_from_config() {
    let desk = Desk::new();
    let configured = desk.dir().join("configured.csv");
    std::fs::write(
        &desk.config,
        format!("[storage]\ndefault_file = {:?}\n", configured.display().to_string()),
    )
    .unwrap();

    Command::cargo_bin("ticket-desk")
        .unwrap()
        .env_remove("TICKET_DESK_FILE")
        .arg("--config")
        .arg(&desk.config)
        .args(["add", "T9", "Keyboard"])
        .assert()
        .success();

    assert!(configured.exists());
}
