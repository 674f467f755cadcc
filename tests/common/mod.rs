// Shared test helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_rbgithook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the binary in `dir` with the given args.
/// Returns (stdout, stderr, exit_code).
pub fn run_in(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// A fresh git repository in a temp dir, or `None` when git is not installed.
pub fn git_repo() -> Option<TempDir> {
    if !git_available() {
        eprintln!("git not found on PATH, skipping");
        return None;
    }
    let tmp = TempDir::new().expect("failed to create temp dir");
    let status = Command::new("git")
        .args(["init", "--quiet"])
        .current_dir(tmp.path())
        .status()
        .expect("failed to run git init");
    assert!(status.success(), "git init failed");
    Some(tmp)
}

/// Reads `core.hooksPath` from the repository-local git config.
pub fn hooks_path_of(repo: &Path) -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--local", "--get", "core.hooksPath"])
        .current_dir(repo)
        .output()
        .expect("failed to run git config");
    output
        .status
        .success()
        .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// A temp dir with an existing `.rbgithook` directory (no git needed).
pub fn prepared_dir() -> TempDir {
    let tmp = TempDir::new().expect("failed to create temp dir");
    std::fs::create_dir(tmp.path().join(".rbgithook")).expect("failed to create hooks dir");
    tmp
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path).unwrap().permissions().mode() & 0o100 != 0
}

#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}
