//! End-to-end runs of the `git-pitch` binary with piped stdin.

use crate::integration::test_utils::init_repo;
use git_pitch::apply::DEFAULT_CONFIG;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run(home: &Path, cwd: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_git-pitch"))
        .args(args)
        .current_dir(cwd)
        .env("HOME", home)
        .env_remove("GIT_PITCH_DEBUG")
        .env_remove("GIT_PITCH_LOG__LEVEL")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_apply_creates_file() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());

    let output = run(temp.path(), &repo, &["apply"], "");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Configuration file created at"));
    assert_eq!(
        std::fs::read_to_string(repo.join(".git/git-pitch-config.yaml")).unwrap(),
        DEFAULT_CONFIG
    );
}

#[test]
fn test_apply_declined_keeps_file() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    let path = repo.join(".git/git-pitch-config.yaml");
    std::fs::write(&path, "custom: true\n").unwrap();

    let output = run(temp.path(), &repo, &["apply"], "n\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Operation cancelled."));
    assert!(stderr(&output).contains("[y/N]"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "custom: true\n");
}

#[test]
fn test_apply_confirmed_overwrites() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    let path = repo.join(".git/git-pitch-config.yaml");
    std::fs::write(&path, "custom: true\n").unwrap();

    let output = run(temp.path(), &repo, &["apply"], "yes\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("Configuration file created at"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
}

#[test]
fn test_apply_force_with_workspace_flag() {
    let temp = TempDir::new().unwrap();
    let repo = init_repo(temp.path());
    let path = repo.join(".git/git-pitch-config.yaml");
    std::fs::write(&path, "custom: true\n").unwrap();
    let workspace = repo.to_string_lossy().into_owned();

    let output = run(
        temp.path(),
        temp.path(),
        &["apply", "--force", "--workspace", &workspace],
        "",
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!stderr(&output).contains("[y/N]"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
}

#[test]
fn test_apply_outside_repository() {
    let temp = TempDir::new().unwrap();
    let work = temp.path().join("plain");
    std::fs::create_dir_all(&work).unwrap();

    let output = run(temp.path(), &work, &["apply"], "");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: not a git repository"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_version_output() {
    let temp = TempDir::new().unwrap();

    let output = run(temp.path(), temp.path(), &["--version"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}
