//! End-to-end tests running the `hubfetch` binary.
//!
//! All tests except the ignored one avoid the network: they either fail
//! during argument validation or run in offline mode against a temp cache.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const COMMIT: &str = "0123456789abcdef0123456789abcdef01234567";

/// Run the binary in `workdir` with a scrubbed Hub environment.
fn hubfetch(workdir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hubfetch"))
        .args(args)
        .current_dir(workdir)
        .env_remove("HF_HUB_OFFLINE")
        .env_remove("HF_ENDPOINT")
        .env_remove("HF_TOKEN")
        .env_remove("HUBFETCH_CACHE_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn hubfetch")
}

fn seed_default_artifact(cache: &Path) -> PathBuf {
    let repo_dir = cache.join("models--a8nova--gemma-2b-it-gpu-int8");
    fs::create_dir_all(repo_dir.join("refs")).unwrap();
    fs::write(repo_dir.join("refs/main"), COMMIT).unwrap();

    let snapshot = repo_dir.join("snapshots").join(COMMIT);
    fs::create_dir_all(&snapshot).unwrap();
    let file = snapshot.join("gemma-2b-it-gpu-int8.bin");
    fs::write(&file, b"weights").unwrap();
    file
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn invalid_repo_id_fails_without_result_line() {
    let dir = tempfile::tempdir().unwrap();
    let output = hubfetch(dir.path(), &["--repo", "not a/valid/repo"]);

    assert!(!output.status.success());
    assert!(!stdout_of(&output).contains("Downloaded to:"));
}

#[test]
fn escaping_filename_exits_with_usage_code() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("hub");
    let output = hubfetch(
        dir.path(),
        &["--filename", "../escape.bin", "--cache-dir", cache.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn offline_cache_miss_exits_noinput() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("hub");
    let output = hubfetch(
        dir.path(),
        &["--offline", "--cache-dir", cache.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(66));
    assert!(!stdout_of(&output).contains("Downloaded to:"));
}

#[test]
fn offline_cache_hit_prints_single_line() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("hub");
    let expected = seed_default_artifact(&cache);

    let output = hubfetch(
        dir.path(),
        &["--offline", "--cache-dir", cache.to_str().unwrap()],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_of(&output),
        format!("Downloaded to: {}\n", expected.display())
    );
}

#[test]
fn verbose_logs_stay_off_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("hub");
    let expected = seed_default_artifact(&cache);

    let output = hubfetch(
        dir.path(),
        &["--offline", "-v", "--cache-dir", cache.to_str().unwrap()],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!("Downloaded to: {}\n", expected.display())
    );
    assert!(!output.stderr.is_empty(), "debug logs should go to stderr");
}

#[test]
fn offline_flag_can_come_from_env() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("hub");
    let expected = seed_default_artifact(&cache);

    let output = Command::new(env!("CARGO_BIN_EXE_hubfetch"))
        .current_dir(dir.path())
        .env("HF_HUB_OFFLINE", "1")
        .env("HUBFETCH_CACHE_DIR", &cache)
        .env_remove("HF_ENDPOINT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!("Downloaded to: {}\n", expected.display())
    );
}

#[test]
fn dotenv_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("hub");
    let expected = seed_default_artifact(&cache);
    fs::write(
        dir.path().join(".env"),
        format!("HUBFETCH_CACHE_DIR={}\nHF_HUB_OFFLINE=true\n", cache.display()),
    )
    .unwrap();

    let output = hubfetch(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!("Downloaded to: {}\n", expected.display())
    );
}

#[test]
fn help_mentions_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let output = hubfetch(dir.path(), &["--help"]);

    assert!(output.status.success());
    let help = stdout_of(&output);
    assert!(help.contains("a8nova/gemma-2b-it-gpu-int8"));
    assert!(help.contains("gemma-2b-it-gpu-int8.bin"));
}

/// Default invocation against the real Hub.
#[test]
#[ignore = "requires network access to huggingface.co"]
fn default_invocation_downloads_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("hub");
    let output = hubfetch(dir.path(), &["--cache-dir", cache.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    let path = lines[0]
        .strip_prefix("Downloaded to: ")
        .expect("result line prefix");
    assert!(!path.is_empty());
    assert!(Path::new(path).exists());
}
