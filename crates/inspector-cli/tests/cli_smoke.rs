use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "inspector-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_inspector<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_inspector");
    Command::new(bin)
        .args(args)
        .env_remove("INSPECTOR_LOG")
        .output()
        .expect("inspector command should execute")
}

fn run_inspector_with_stdin<I, S>(args: I, stdin: &str) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_inspector");
    let mut child = Command::new(bin)
        .args(args)
        .env_remove("INSPECTOR_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("inspector command should spawn");
    // The child may exit before reading stdin (e.g. on a config error), so a
    // broken pipe here is not a test failure.
    if let Err(err) = child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
    {
        assert_eq!(
            err.kind(),
            std::io::ErrorKind::BrokenPipe,
            "stdin should accept input: {err}"
        );
    }
    child
        .wait_with_output()
        .expect("inspector command should finish")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_exit_code(output: &Output, code: i32) {
    if output.status.code() != Some(code) {
        panic!(
            "expected exit code {code}, got {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn write_file(dir: &TempDirGuard, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("fixture file should be written");
    path
}

#[test]
fn show_renders_a_json_file() {
    let tmp = TempDirGuard::new("show-file");
    let input = write_file(&tmp, "doc.json", r#"{"a": [1, 2], "b": {}}"#);

    let output = run_inspector([OsStr::new("show"), input.as_os_str()]);
    assert_success(&output);
    assert_eq!(
        stdout_text(&output),
        "{\n    \"a\": [1, 2],\n    \"b\": {}\n}\n"
    );
}

#[test]
fn show_reads_stdin_by_default() {
    let output = run_inspector_with_stdin(["show"], r#"[1, "x", null]"#);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "[1, \"x\", null]\n");
}

#[test]
fn show_respects_the_indent_flag() {
    let output = run_inspector_with_stdin(["show", "--indent", "1"], r#"{"k": true}"#);
    assert_success(&output);
    assert_eq!(stdout_text(&output), "{\n        \"k\": true\n    }\n");
}

#[test]
fn show_json_reports_the_winning_kind() {
    let output = run_inspector_with_stdin(["show", "--json"], "[1]");
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["universe"], "intrinsic");
    assert_eq!(payload["kind"], "Array");
    assert_eq!(payload["text"], "[1]");
}

#[test]
fn show_applies_config_and_flags() {
    let tmp = TempDirGuard::new("show-config");
    let config = write_file(&tmp, "inspector.toml", "indent-width = 2\n");

    let output = run_inspector_with_stdin(
        [
            OsStr::new("show"),
            OsStr::new("--config"),
            config.as_os_str(),
            OsStr::new("--escape-strings"),
        ],
        r#"{"q": "say \"hi\""}"#,
    );
    assert_success(&output);
    assert_eq!(stdout_text(&output), "{\n  \"q\": \"say \\\"hi\\\"\"\n}\n");
}

#[test]
fn show_rejects_negative_indent() {
    let output = run_inspector_with_stdin(["show", "--indent", "-1"], "1");
    assert_exit_code(&output, 2);
    assert!(stderr_text(&output).contains("indent must be a non-negative integer"));
}

#[test]
fn show_rejects_invalid_json() {
    let output = run_inspector_with_stdin(["show"], "{not json");
    assert_exit_code(&output, 2);
    assert!(stderr_text(&output).contains("invalid json"));
}

#[test]
fn show_rejects_unknown_config_keys() {
    let tmp = TempDirGuard::new("bad-config");
    let config = write_file(&tmp, "inspector.toml", "colour = true\n");

    let output = run_inspector_with_stdin(
        [OsStr::new("show"), OsStr::new("--config"), config.as_os_str()],
        "1",
    );
    assert_exit_code(&output, 2);
    assert!(stderr_text(&output).contains("invalid toml"));
}

#[test]
fn show_fails_past_the_depth_limit() {
    let output = run_inspector_with_stdin(["show", "--max-depth", "1"], "[[1]]");
    assert_exit_code(&output, 1);
    assert!(stderr_text(&output).contains("nesting depth exceeded the limit of 1"));
}

#[test]
fn kinds_lists_platform_registry_in_order() {
    let output = run_inspector(["kinds", "--universe", "platform"]);
    assert_success(&output);
    let text = stdout_text(&output);
    let first = text.lines().next().expect("at least one kind");
    assert!(first.starts_with("platform"), "got: {first}");
    assert!(first.ends_with("Attr"), "got: {first}");
    assert!(!text.contains("intrinsic"));
}

#[test]
fn kinds_json_covers_both_registries() {
    let output = run_inspector(["kinds", "--json"]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    let entries = payload.as_array().expect("kinds json should be an array");

    let first_intrinsic = entries
        .iter()
        .find(|entry| entry["universe"] == "intrinsic")
        .expect("intrinsic kinds are listed");
    assert_eq!(first_intrinsic["position"], 0);
    assert_eq!(first_intrinsic["name"], "Array");
    assert!(entries.iter().any(|entry| entry["name"] == "Window"));
}
