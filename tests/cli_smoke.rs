use assert_cmd::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn init_git_repo(dir: &Path) {
    assert!(Command::new("git")
        .args(["init"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "core.autocrlf", "false"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.email", "you@example.com"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["config", "user.name", "Your Name"])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

fn commit_as(dir: &Path, name: &str, email: &str, file: &str, content: &str) {
    let path = dir.join(file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
    assert!(Command::new("git")
        .args(["add", "."])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args([
            "-c",
            &format!("user.name={name}"),
            "-c",
            &format!("user.email={email}"),
            "commit",
            "-m",
            &format!("add {file}"),
        ])
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

// Alice touches three lines, Bob one; Alice must rank first.
fn fixture_repo(dir: &Path) {
    init_git_repo(dir);
    commit_as(dir, "Alice", "a@x.com", "src/a.rs", "fn a(){}\nfn b(){}\nfn c(){}\n");
    commit_as(dir, "Bob", "b@x.com", "src/b.rs", "fn d(){}\n");
}

#[test]
fn table_ranks_authors_by_total_churn() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    fixture_repo(dir.path());

    let mut cmd = Command::cargo_bin("gittally").unwrap();
    cmd.arg(dir.path());
    let out = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(out).unwrap();

    assert!(stdout.contains("Name"));
    assert!(stdout.contains("a@x.com"));
    assert!(stdout.contains("b@x.com"));
    let alice = stdout.find("Alice").unwrap();
    let bob = stdout.find("Bob").unwrap();
    assert!(alice < bob, "Alice (3 lines) must rank above Bob (1 line)");
}

#[test]
fn email_only_lists_emails_and_asc_reverses() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    fixture_repo(dir.path());

    let mut cmd = Command::cargo_bin("gittally").unwrap();
    cmd.arg(dir.path()).arg("--email-only");
    let out = cmd.assert().success().get_output().stdout.clone();
    let lines: Vec<String> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(lines, ["a@x.com", "b@x.com"]);

    let mut cmd = Command::cargo_bin("gittally").unwrap();
    cmd.arg(dir.path()).arg("--email-only").arg("--asc");
    let out = cmd.assert().success().get_output().stdout.clone();
    let lines: Vec<String> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    assert_eq!(lines, ["b@x.com", "a@x.com"]);
}

#[test]
fn csv_output_writes_identity_rows() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    fixture_repo(dir.path());
    let csv_path = dir.path().join("authors.csv");

    let mut cmd = Command::cargo_bin("gittally").unwrap();
    cmd.arg(dir.path())
        .arg("--csv-output")
        .arg(&csv_path);
    let out = cmd.assert().success().get_output().stdout.clone();
    assert!(String::from_utf8(out).unwrap().contains("csv saved to"));

    let written = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "name,email");
    assert_eq!(lines[1], "Alice,a@x.com");
    assert_eq!(lines[2], "Bob,b@x.com");
}

#[test]
fn json_emits_full_stats() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    fixture_repo(dir.path());

    let mut cmd = Command::cargo_bin("gittally").unwrap();
    cmd.arg(dir.path()).arg("--json");
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: serde_json::Value = serde_json::from_slice(&out).unwrap();

    let authors = v.as_array().unwrap();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0]["name"], "Alice");
    assert_eq!(authors[0]["added"], 3);
    assert_eq!(authors[0]["removed"], 0);
    assert!(authors[0]["latest_commit"].as_i64().unwrap() > 0);
}

#[test]
fn fails_outside_a_repository() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("gittally").unwrap();
    cmd.arg(dir.path());
    cmd.assert().failure();
}

#[test]
fn fails_when_the_repo_has_no_commits() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    init_git_repo(dir.path());

    let mut cmd = Command::cargo_bin("gittally").unwrap();
    cmd.arg(dir.path());
    cmd.assert().failure();
}
