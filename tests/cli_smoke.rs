use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::Value;
use tempfile::TempDir;

/// Runs the binary in `cwd` with a clean credential environment.
fn run(cwd: &Path, api_key: Option<&str>, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quillrs"));
    cmd.args(args)
        .current_dir(cwd)
        .env_remove("API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("MODEL")
        .env_remove("GEMINI_BASE_URL")
        .env_remove("QUILLRS_MACHINE_LOG")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null());
    if let Some(key) = api_key {
        cmd.env("API_KEY", key);
    }
    cmd.output().unwrap()
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| panic!("bad json {stdout:?}: {e}"))
}

#[test]
fn scripted_run_without_key_exits_nonzero_with_configuration_json() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), None, &["-t", "Rust", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["kind"], "configuration");
    assert_eq!(
        json["error"],
        "API Key for Gemini is not configured. Please set the API_KEY environment variable."
    );
}

#[test]
fn interactive_run_without_key_exits_before_form() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), None, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("API Key for Gemini is not configured"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Topic >"));
}

#[test]
fn scripted_run_with_blank_topic_fails_without_network() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), Some("test-key"), &["-t", "   ", "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["kind"], "invalid_request");
    assert_eq!(json["error"], "Please enter a topic for your blog post.");
}

#[test]
fn list_presets_and_help_exit_zero() {
    let tmp = TempDir::new().unwrap();

    let output = run(tmp.path(), None, &["--list-presets"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("TECH_GURU"));

    let output = run(tmp.path(), None, &["-h"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--json"));
}
