#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use vacboard::models::{VacationRecord, VacationStatus};

/// vacboard binary with HOME pointed at a per-test directory, so no real
/// configuration file is ever read.
pub fn vb(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_vacboard_home", name));
    fs::create_dir_all(&home).expect("create test home");

    let mut cmd = cargo_bin_cmd!("vacboard");
    cmd.env("HOME", &home);
    cmd
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `json` as the vacation data file of a test and return its path.
pub fn write_data(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_vacations.json", name));
    fs::write(&path, json).expect("write test data");
    path.to_string_lossy().to_string()
}

/// Small dataset shaped like the `/get_vacations_data` payload.
pub const SAMPLE_JSON: &str = r#"[
  {"id": 1, "username": "alice", "start_date": "2024-06-12", "end_date": "2024-06-20", "status": "todo", "comment": "Seaside"},
  {"id": 2, "username": "bob", "start_date": "2024-07-01", "end_date": "2024-07-14", "status": "done", "comment": null},
  {"id": 3, "username": "alice", "start_date": "2024-08-05", "end_date": "2024-08-09", "status": "waiting", "comment": ""},
  {"id": 4, "username": "carol", "start_date": "2023-12-20", "end_date": "2023-12-31", "status": "in_progress", "comment": "Last year"},
  {"id": 5, "username": "bob", "start_date": "2024-09-02", "end_date": "2024-09-03", "status": "archived"}
]"#;

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn rec(id: i64, user: &str, status: &str, start: &str, end: &str) -> VacationRecord {
    VacationRecord {
        id,
        username: user.to_string(),
        status: VacationStatus::from_wire(status),
        start_date: start.to_string(),
        end_date: end.to_string(),
        comment: None,
    }
}
