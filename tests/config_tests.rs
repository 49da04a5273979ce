use std::env;
use std::fs;
use vacboard::config::Config;
use vacboard::models::Rgba;
use vacboard::utils::range::parse_range;

fn temp_conf(name: &str, body: &str) -> std::path::PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_vacboard.conf", name));
    fs::write(&path, body).expect("write conf");
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let mut path = env::temp_dir();
    path.push("vacboard_no_such_config.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.urgent_days, 7);
    assert_eq!(cfg.border_darken, 30);
    assert_eq!(cfg.chart_width, 60);
}

#[test]
fn test_partial_config_and_palette_override() {
    let path = temp_conf(
        "partial",
        "urgent_days: 3\npalette:\n  done: \"rgb(0, 128, 0)\"\n",
    );
    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.urgent_days, 3);
    assert_eq!(cfg.palette.done, Rgba::new(0, 128, 0, 1.0));
    assert_eq!(cfg.palette.waiting, Rgba::new(241, 196, 15, 0.9));

    let missing = Config::missing_keys(&path).unwrap();
    assert_eq!(missing, vec!["data_file", "border_darken", "chart_width"]);
}

#[test]
fn test_bad_palette_color_is_rejected() {
    let path = temp_conf("bad_color", "palette:\n  todo: \"#ccc\"\n");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_too_narrow_chart_is_rejected() {
    let path = temp_conf("narrow", "chart_width: 3\n");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_parse_range_forms() {
    let d = |s: &str| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();

    assert_eq!(parse_range("2024").unwrap(), (d("2024-01-01"), d("2024-12-31")));
    assert_eq!(parse_range("2024-02").unwrap(), (d("2024-02-01"), d("2024-02-29")));
    assert_eq!(parse_range("2024-12").unwrap(), (d("2024-12-01"), d("2024-12-31")));
    assert_eq!(
        parse_range("2024-03-05").unwrap(),
        (d("2024-03-05"), d("2024-03-05"))
    );
    assert_eq!(
        parse_range("2024-11:2025-01").unwrap(),
        (d("2024-11-01"), d("2025-01-31"))
    );
    assert!(parse_range("2024:2025-01").is_err());
    assert!(parse_range("24").is_err());
}
