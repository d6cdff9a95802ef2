mod common;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn vf_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("vf");
    path
}

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("vf.toml");
    fs::write(&config_path, content).unwrap();
    (tmp, config_path)
}

/// Config whose services refuse every connection.
fn unreachable_config() -> (TempDir, PathBuf) {
    write_config(
        r#"[verses]
base_url = "http://127.0.0.1:1/api/read"

[synonyms]
url = "http://127.0.0.1:1/"
"#,
    )
}

fn run_vf(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = vf_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run vf binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn test_search_unreachable_services_is_no_results() {
    let (_tmp, config_path) = unreachable_config();

    let (stdout, stderr, success) = run_vf(&config_path, &["search", "xyz123"]);
    assert!(success, "search failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("No results."));
    assert!(stderr.contains("verse lookup failed"));
}

#[test]
fn test_search_garbage_threshold_is_accepted() {
    let (_tmp, config_path) = unreachable_config();

    let (stdout, stderr, success) =
        run_vf(&config_path, &["search", "amor", "--threshold", "abc"]);
    assert!(success, "search failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("No results."));
}

#[test]
fn test_search_empty_paragraph() {
    let (_tmp, config_path) = unreachable_config();

    let (stdout, _, success) = run_vf(&config_path, &["search", "  "]);
    assert!(success);
    assert!(stdout.contains("No results."));
}

#[test]
fn test_invalid_config_fails() {
    let (_tmp, config_path) = write_config("[synonyms]\nurl = \"localhost\"\n");

    let (_, stderr, success) = run_vf(&config_path, &["search", "amor"]);
    assert!(!success);
    assert!(stderr.contains("synonyms.url"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_search_ranks_stub_verses() {
    let addr = common::spawn_upstream().await;
    let (_tmp, config_path) = write_config(&common::config_for(addr));

    let (stdout, stderr, success) = tokio::task::spawn_blocking(move || {
        run_vf(&config_path, &["search", "amor", "--threshold", "0.0"])
    })
    .await
    .unwrap();

    assert!(success, "search failed: stdout={}, stderr={}", stdout, stderr);
    let first = stdout.lines().next().unwrap_or_default();
    assert!(first.starts_with("1. "), "unexpected output: {}", stdout);
    assert!(first.contains("1 Corintios 13:4"), "unexpected output: {}", stdout);
    assert!(stdout.contains("4. "));
    assert!(!stdout.contains("5. "));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_synonyms_command() {
    let addr = common::spawn_upstream().await;
    let (_tmp, config_path) = write_config(&common::config_for(addr));

    let (stdout, _, success) =
        tokio::task::spawn_blocking(move || run_vf(&config_path, &["synonyms", "paz"]))
            .await
            .unwrap();

    assert!(success);
    assert_eq!(stdout.trim(), "calma");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_lookup_command() {
    let addr = common::spawn_upstream().await;
    let (_tmp, config_path) = write_config(&common::config_for(addr));

    let (stdout, _, success) =
        tokio::task::spawn_blocking(move || run_vf(&config_path, &["lookup", "amor"]))
            .await
            .unwrap();

    assert!(success);
    assert!(stdout.contains("Juan 1:1 (id 102)"));
    assert!(stdout.contains("3 verses"));
}
