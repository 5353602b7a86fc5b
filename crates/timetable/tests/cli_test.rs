//! Integration tests for the `timetable` CLI binary.
//!
//! Most tests read the payload from a fixture file via `--file`; the
//! server-facing cases run against a wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/timetable.json");

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `timetable` binary with env isolation.
///
/// Clears all `TIMETABLE_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn timetable_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("timetable");
    cmd.env("HOME", "/tmp/timetable-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/timetable-cli-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("TIMETABLE_PROFILE")
        .env_remove("TIMETABLE_SERVER")
        .env_remove("TIMETABLE_OUTPUT")
        .env_remove("TIMETABLE_INSECURE")
        .env_remove("TIMETABLE_TIMEOUT");
    cmd
}

/// Same, but with config rooted in `dir`.
fn timetable_cmd_in(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = timetable_cmd();
    cmd.env("HOME", dir).env("XDG_CONFIG_HOME", dir);
    cmd
}

fn stdout_json(args: &[&str]) -> Value {
    let output = timetable_cmd().args(args).output().unwrap();
    assert!(output.status.success(), "{output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

fn stdout_text(args: &[&str]) -> String {
    let output = timetable_cmd().args(args).output().unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = timetable_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = String::from_utf8_lossy(&output.stderr);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    timetable_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("timetable")
            .and(predicate::str::contains("show"))
            .and(predicate::str::contains("sessions"))
            .and(predicate::str::contains("export")),
    );
}

#[test]
fn test_completions_zsh() {
    timetable_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Grid ────────────────────────────────────────────────────────────

#[test]
fn test_show_json_has_full_shape_and_ordered_cells() {
    let vm = stdout_json(&["show", "--file", FIXTURE, "-o", "json"]);

    assert_eq!(vm["days"], serde_json::json!(["Mon", "Tue", "Wed"]));
    assert_eq!(vm["slots"], serde_json::json!([1, 2, 3]));
    assert_eq!(vm["grid"]["Tue"]["1"], serde_json::json!([]));

    let codes: Vec<&str> = vm["grid"]["Mon"]["1"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["MAT-1", "PHY-1"]);
    assert_eq!(vm["metrics"]["total_sessions"], 4);
    assert_eq!(vm["options"]["teachers"], serde_json::json!([null, "Sanya", "Usha"]));
}

#[test]
fn test_show_table_has_summary_and_days() {
    timetable_cmd()
        .args(["show", "--file", FIXTURE])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Sessions: 4/4")
                .and(predicate::str::contains("Wed"))
                .and(predicate::str::contains("MAT-1 Math (Sanya)")),
        );
}

#[test]
fn test_unknown_student_empties_the_grid() {
    let vm = stdout_json(&["show", "--file", FIXTURE, "--student", "Nobody", "-o", "json"]);
    assert_eq!(vm["metrics"]["visible_sessions"], 0);
    for day in ["Mon", "Tue", "Wed"] {
        for slot in ["1", "2", "3"] {
            assert_eq!(vm["grid"][day][slot], serde_json::json!([]), "{day}.{slot}");
        }
    }
}

// ── Sessions / names / stats ────────────────────────────────────────

#[test]
fn test_sessions_plain_follow_reading_order() {
    let text = stdout_text(&["sessions", "--file", FIXTURE, "-o", "plain"]);
    assert_eq!(text, "MAT-1\nPHY-1\nMAT-2\nCHE-1\n");
}

#[test]
fn test_sessions_teacher_filter() {
    let text = stdout_text(&["sessions", "--file", FIXTURE, "--teacher", "Sanya", "-o", "plain"]);
    assert_eq!(text, "MAT-1\nMAT-2\n");
}

#[test]
fn test_filters_are_conjunctive() {
    let text = stdout_text(&[
        "sessions", "--file", FIXTURE, "--teacher", "Usha", "--student", "Ravi", "-o", "plain",
    ]);
    assert_eq!(text, "CHE-1\n");
}

#[test]
fn test_students_keep_payload_order() {
    let text = stdout_text(&["students", "--file", FIXTURE, "-o", "plain"]);
    assert_eq!(text, "Asmi\nParth\nRavi\nMeera\n");
}

#[test]
fn test_stats_json() {
    let stats = stdout_json(&["stats", "--file", FIXTURE, "--teacher", "Usha", "-o", "json"]);
    assert_eq!(stats["total_sessions"], 4);
    assert_eq!(stats["teacher_count"], 2);
    assert_eq!(stats["student_count"], 4);
    assert_eq!(stats["visible_sessions"], 2);
    assert_eq!(stats["selection"]["teacher"], "Usha");
}

// ── Export ──────────────────────────────────────────────────────────

#[test]
fn test_export_csv_to_stdout() {
    let text = stdout_text(&["export", "--file", FIXTURE, "--teacher", "Usha"]);
    assert_eq!(
        text,
        "Day,Slot,Track,Teacher,Code,Subject,Students\n\
         Mon,1,2,Usha,PHY-1,Physics,\"Asmi, Parth\"\n\
         Wed,3,1,Usha,CHE-1,Chemistry,Ravi\n"
    );
}

#[test]
fn test_export_csv_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sessions.csv");

    timetable_cmd()
        .args(["export", "--file", FIXTURE, "--out"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 4 sessions"));

    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(csv.lines().count(), 5);
}

// ── Failures ────────────────────────────────────────────────────────

#[test]
fn test_missing_file_exits_not_found() {
    timetable_cmd()
        .args(["show", "--file", "/nonexistent/timetable.json"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Cannot read timetable file"));
}

#[test]
fn test_malformed_file_uses_fallback_message() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{ not json").unwrap();

    timetable_cmd()
        .args(["show", "--file"])
        .arg(&bad)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unable to load timetable."));
}

#[test]
fn test_unreachable_server_exits_connection() {
    timetable_cmd()
        .args(["show", "--server", "http://127.0.0.1:1", "--timeout", "5"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Unable to load timetable."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_error_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/timetable"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        timetable_cmd().args(["show", "--server", uri.as_str()]).output().unwrap()
    })
    .await
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("500"), "stderr:\n{stderr}");
    assert!(output.stdout.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_payload_is_rendered() {
    let server = MockServer::start().await;
    let body: Value = serde_json::from_str(&std::fs::read_to_string(FIXTURE).unwrap()).unwrap();
    Mock::given(method("GET"))
        .and(path("/api/timetable"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = tokio::task::spawn_blocking(move || {
        timetable_cmd()
            .args(["sessions", "--server", uri.as_str(), "-o", "plain"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success(), "{output:?}");
    assert_eq!(String::from_utf8_lossy(&output.stdout), "MAT-1\nPHY-1\nMAT-2\nCHE-1\n");
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();

    timetable_cmd_in(dir.path())
        .args(["config", "init", "--name", "school", "--url", "http://10.1.2.3:8000"])
        .assert()
        .success();

    timetable_cmd_in(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("default_profile = \"school\"")
                .and(predicate::str::contains("http://10.1.2.3:8000")),
        );

    // A second init refuses to overwrite.
    timetable_cmd_in(dir.path())
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_init_rejects_bad_url() {
    let dir = tempfile::tempdir().unwrap();
    timetable_cmd_in(dir.path())
        .args(["config", "init", "--url", "not a url"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_profile_is_a_usage_error() {
    timetable_cmd()
        .args(["show", "--profile", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Profile 'nope' not found"));
}
