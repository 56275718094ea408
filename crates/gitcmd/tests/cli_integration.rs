//! End-to-end CLI integration tests.
//!
//! These tests run the `gitcmd` binary against scratch repositories and the
//! system `git`.

use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a `gitcmd` invocation rooted at `dir`, isolated from any config
/// file above the temp directory.
fn gitcmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gitcmd").expect("gitcmd binary should build");
    cmd.current_dir(dir).env("RUST_LOG", "off").env_remove("GITCMD_CONFIG");
    cmd
}

fn git_raw(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to run git")
        .status;
    assert!(status.success(), "git {args:?} failed");
}

/// Creates a repository via `gitcmd init` with a committer identity.
fn setup_git_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let dir = temp_dir.path();

    gitcmd(dir).arg("init").assert().success();
    git_raw(dir, &["config", "user.email", "test@example.com"]);
    git_raw(dir, &["config", "user.name", "Test User"]);
    git_raw(dir, &["config", "commit.gpgsign", "false"]);

    temp_dir
}

#[test]
fn test_init_creates_repository() {
    let temp_dir = setup_git_repo();
    assert!(temp_dir.path().join(".git").is_dir());
}

#[test]
fn test_status_prints_porcelain_output() {
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();
    fs::write(dir.join("README.md"), "hello\n").unwrap();

    gitcmd(dir)
        .arg("status")
        .assert()
        .success()
        .stdout("?? README.md\n");
}

#[test]
fn test_add_commit_then_clean_status() {
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();
    fs::write(dir.join("README.md"), "hello\n").unwrap();

    gitcmd(dir).args(["add", "README.md"]).assert().success();
    gitcmd(dir)
        .args(["commit", "-m", "Initial commit"])
        .assert()
        .success();
    gitcmd(dir).arg("status").assert().success().stdout("");
}

#[test]
fn test_dir_flag_targets_other_directory() {
    let temp_dir = setup_git_repo();
    let elsewhere = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "a\n").unwrap();

    gitcmd(elsewhere.path())
        .args(["status", "-C"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout("?? a.txt\n");
}

#[test]
fn test_checkout_branch_and_paths() {
    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();
    fs::write(dir.join("a.txt"), "a\n").unwrap();
    gitcmd(dir).args(["add", "a.txt"]).assert().success();
    gitcmd(dir).args(["commit", "-m", "Add a"]).assert().success();

    gitcmd(dir)
        .args(["checkout-branch", "--create", "dev"])
        .assert()
        .success();
    fs::write(dir.join("a.txt"), "dev\n").unwrap();
    gitcmd(dir).args(["add", "a.txt"]).assert().success();
    gitcmd(dir).args(["commit", "-m", "Change a"]).assert().success();

    fs::write(dir.join("a.txt"), "scratch\n").unwrap();
    gitcmd(dir).args(["checkout-path", "a.txt"]).assert().success();
    assert_eq!(fs::read_to_string(dir.join("a.txt")).unwrap(), "dev\n");

    gitcmd(dir)
        .args(["checkout-branch", "-b", "other"])
        .assert()
        .success();
    gitcmd(dir)
        .args(["checkout-path-from-branch", "HEAD~1", "a.txt"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(dir.join("a.txt")).unwrap(), "a\n");
}

#[test]
fn test_failure_reports_error_code() {
    let temp_dir = setup_git_repo();

    gitcmd(temp_dir.path())
        .args(["commit", "-m", "nothing staged"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[COMMIT_FAILED]: git command failed"))
        .stderr(predicate::str::contains("command: git commit -m nothing staged"));
}

#[test]
fn test_failure_reports_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = gitcmd(temp_dir.path())
        .args(["--json", "status"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    let report: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(report["code"], "STATUS_FAILED");
    assert_eq!(report["error"], "git command failed");
    assert_eq!(report["metadata"]["program"], "git");
    assert_eq!(
        report["metadata"]["args"],
        serde_json::json!(["status", "--porcelain"])
    );
    assert!(report["cause"].as_str().unwrap().contains("not a git repository"));
}

#[test]
fn test_push_uses_configured_remote_url() {
    let remote = TempDir::new().unwrap();
    git_raw(remote.path(), &["init", "--bare"]);

    let temp_dir = setup_git_repo();
    let dir = temp_dir.path();
    git_raw(dir, &["remote", "add", "origin", "https://invalid.example/repo.git"]);
    fs::write(dir.join("a.txt"), "a\n").unwrap();
    gitcmd(dir).args(["add", "a.txt"]).assert().success();
    gitcmd(dir).args(["commit", "-m", "Add a"]).assert().success();

    let config_path = temp_dir.path().join("custom.toml");
    fs::write(
        &config_path,
        format!(
            "[push]\nremote_url = {:?}\n",
            remote.path().to_str().unwrap()
        ),
    )
    .unwrap();

    gitcmd(dir)
        .arg("--config")
        .arg(&config_path)
        .arg("push")
        .assert()
        .success();

    let output = StdCommand::new("git")
        .args(["remote", "get-url", "origin"])
        .current_dir(dir)
        .output()
        .unwrap();
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        remote.path().to_str().unwrap()
    );
}

#[test]
fn test_push_without_origin_fails_at_remote_remove() {
    let temp_dir = setup_git_repo();

    gitcmd(temp_dir.path())
        .args(["push", "--remote-url", "https://invalid.example/repo.git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("REMOTE_REMOVE_FAILED"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = setup_git_repo();
    fs::write(temp_dir.path().join("gitcmd.toml"), "[git]\nprogram = \"\"\n").unwrap();

    gitcmd(temp_dir.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn test_configured_program_is_used() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("gitcmd.toml"),
        "[git]\nprogram = \"gitcmd-definitely-not-installed\"\n",
    )
    .unwrap();

    gitcmd(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[INIT_FAILED]"))
        .stderr(predicate::str::contains("gitcmd-definitely-not-installed init"));
}

#[test]
fn test_config_in_parent_directory_is_discovered() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("gitcmd.toml"),
        "[git]\nprogram = \"gitcmd-definitely-not-installed\"\n",
    )
    .unwrap();
    let sub_dir = temp_dir.path().join("sub");
    fs::create_dir(&sub_dir).unwrap();

    gitcmd(&sub_dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[INIT_FAILED]"))
        .stderr(predicate::str::contains("gitcmd-definitely-not-installed init"));
}
