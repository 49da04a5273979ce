mod common;
use common::{SAMPLE_JSON, temp_out, vb, write_data};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_gantt_json_descriptors() {
    let data = write_data("gantt_json", SAMPLE_JSON);

    vb("gantt_json")
        .args([
            "--data", &data, "gantt", "--range", "2024", "--today", "2024-06-10", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"backgroundColor\": \"rgba(231, 76, 60, 0.9)\"",
        ))
        .stdout(predicate::str::contains("\"label\": \"bob - archived\""))
        .stdout(predicate::str::contains("\"min\": \"2024-01-01\""))
        .stdout(predicate::str::contains("carol").not());
}

#[test]
fn test_gantt_terminal_chart() {
    let data = write_data("gantt_terminal", SAMPLE_JSON);

    vb("gantt_terminal")
        .args([
            "--data",
            &data,
            "gantt",
            "--from",
            "01/06/2024",
            "--to",
            "31/08/2024",
            "--today",
            "10/06/2024",
            "--no-color",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Period 01/06/2024 → 31/08/2024"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("Seaside"));
}

#[test]
fn test_gantt_inverted_window_fails() {
    let data = write_data("gantt_inverted", SAMPLE_JSON);

    vb("gantt_inverted")
        .args([
            "--data",
            &data,
            "gantt",
            "--from",
            "31/12/2024",
            "--to",
            "01/01/2024",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid display window"));
}

#[test]
fn test_gantt_invalid_date_fails() {
    vb("gantt_bad_date")
        .args(["gantt", "--from", "32/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_gantt_missing_data_renders_nothing() {
    vb("gantt_missing")
        .args([
            "--data",
            "/nonexistent/vacboard/vacations.json",
            "gantt",
            "--range",
            "2024",
            "--no-color",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Error loading vacation data"))
        .stdout(predicate::str::contains("No vacations in this period."));
}

#[test]
fn test_gantt_reads_stdin() {
    vb("gantt_stdin")
        .args(["--data", "-", "gantt", "--range", "2024-07", "--json"])
        .write_stdin(SAMPLE_JSON)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"label\": \"bob - done\""))
        .stdout(predicate::str::contains("alice - todo").not());
}

#[test]
fn test_board_json_highlight() {
    let data = write_data("board_json", SAMPLE_JSON);

    vb("board_json")
        .args([
            "--data", &data, "board", "--user", "alice", "--today", "2024-06-10", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"highlight\": true"))
        .stdout(predicate::str::contains("\"date_range\": \"12.06.2024 - 20.06.2024\""))
        .stdout(predicate::str::contains("bob").not());
}

#[test]
fn test_board_text_output() {
    let data = write_data("board_text", SAMPLE_JSON);

    vb("board_text")
        .args(["--data", &data, "board", "--today", "2024-06-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in_progress (1)"))
        .stdout(predicate::str::contains("#4 carol  20.12.2023 - 31.12.2023"));
}

#[test]
fn test_view_backlog_controls() {
    vb("view_backlog")
        .args(["view", "--view", "backlog", "--user", "alice", "--options", "all,alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add task form:    hidden"))
        .stdout(predicate::str::contains("user management:  hidden"));
}

#[test]
fn test_view_default_is_users() {
    vb("view_default")
        .args(["view", "--user", "all", "--options", "all,alice,bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("view:             users"))
        .stdout(predicate::str::contains("selected user:    alice"));
}

#[test]
fn test_sidebar_task() {
    vb("sidebar_task")
        .args([
            "sidebar",
            "--task",
            r#"{"id": 5, "title": "Plan", "deadline": "-", "status_date": "2024-06-01"}"#,
            "--column",
            "in_progress",
            "--view",
            "pro",
            "--today",
            "2024-06-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"deadline\": \"\""))
        .stdout(predicate::str::contains("\"view\": \"pro\""))
        .stdout(predicate::str::contains("\"days_in_status\": 2"));
}

#[test]
fn test_sidebar_requires_payload() {
    vb("sidebar_none").args(["sidebar"]).assert().failure();
}

#[test]
fn test_export_csv() {
    let data = write_data("export_csv", SAMPLE_JSON);
    let out = temp_out("export_csv", "csv");

    vb("export_csv")
        .args([
            "--data", &data, "export", "--format", "csv", "--file", &out, "--range", "2024",
            "--today", "2024-06-10", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,lane,status,start_date,end_date,days"));
    assert!(content.contains("2024-06-12"));
    assert!(!content.contains("carol"));
}

#[test]
fn test_export_json() {
    let data = write_data("export_json", SAMPLE_JSON);
    let out = temp_out("export_json", "json");

    vb("export_json")
        .args([
            "--data", &data, "export", "--format", "json", "--file", &out, "--range",
            "2023-12", "--force",
        ])
        .assert()
        .success();

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read exported json")).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["lane"], "carol");
    assert_eq!(rows[0]["days"], 12);
}

#[test]
fn test_init_test_mode_and_config_check() {
    vb("init_test")
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test mode"));

    vb("init_test")
        .args(["config", "--check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No configuration file"));
}

#[test]
fn test_init_writes_config() {
    vb("init_write").args(["init"]).assert().success();

    vb("init_write")
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is complete"));

    vb("init_write")
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("urgent_days: 7"));
}
