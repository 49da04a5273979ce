mod common;
use common::{d, rec};
use vacboard::core::chart::{ChartEngine, ChartHandle, render_gantt};
use vacboard::core::timeline::{DisplayWindow, Projector};
use vacboard::errors::AppError;
use vacboard::models::Rgba;
use vacboard::render::{DatasetEngine, TerminalEngine};
use vacboard::utils::colors::{BLUE, GREEN, RED, nearest_ansi};

fn sample() -> Vec<vacboard::models::VacationRecord> {
    let mut first = rec(1, "alice", "todo", "2024-06-12", "2024-06-20");
    first.comment = Some("Seaside".into());
    vec![
        first,
        rec(2, "bob", "done", "2024-07-01", "2024-07-14"),
        rec(3, "alice", "waiting", "2024-08-05", "2024-08-09"),
    ]
}

#[test]
fn test_dataset_engine_descriptors() {
    let mut engine = DatasetEngine::new();
    let window = DisplayWindow::new(d("2024-06-01"), d("2024-12-31")).unwrap();
    let handle = render_gantt(
        &mut engine,
        &Projector::default(),
        &sample(),
        window,
        d("2024-06-10"),
        None,
    )
    .unwrap();

    let chart = engine.chart(handle).expect("live chart");
    assert_eq!(chart.kind, "bar");
    assert_eq!(chart.index_axis, "y");
    assert_eq!(chart.datasets.len(), 3);
    assert_eq!(chart.scales.x.min, "2024-06-01");
    assert_eq!(chart.scales.x.max, "2024-12-31");
    assert_eq!(chart.scales.y.labels, vec!["alice", "bob"]);

    let first = &chart.datasets[0];
    assert_eq!(first.label, "alice - todo");
    assert_eq!(first.data[0].x, ["2024-06-12".to_string(), "2024-06-20".to_string()]);
    assert_eq!(first.data[0].y, "alice");
    assert_eq!(first.background_color, "rgba(231, 76, 60, 0.9)");
    assert_eq!(first.border_color, "rgba(201, 46, 30, 0.9)");
    assert_eq!(first.border_width, 2);

    let json: serde_json::Value = serde_json::from_str(&engine.to_json(handle).unwrap()).unwrap();
    assert_eq!(json["datasets"][2]["backgroundColor"], "rgba(46, 204, 113, 0.9)");
    assert_eq!(json["scales"]["x"]["type"], "time");
    assert_eq!(json["tooltips"][0]["lines"][2], "Comment: Seaside");
}

#[test]
fn test_previous_handle_is_disposed() {
    let mut engine = DatasetEngine::new();
    let window = DisplayWindow::new(d("2024-06-01"), d("2024-12-31")).unwrap();
    let p = Projector::default();

    let first = render_gantt(&mut engine, &p, &sample(), window, d("2024-06-10"), None).unwrap();
    let second =
        render_gantt(&mut engine, &p, &sample(), window, d("2024-06-10"), Some(first)).unwrap();

    assert_ne!(first, second);
    assert_eq!(engine.live_charts(), 1);
    assert!(engine.chart(first).is_none());

    let err = engine.destroy(first).unwrap_err();
    assert!(matches!(err, AppError::UnknownChart(_)));
    engine.destroy(second).unwrap();
    assert_eq!(engine.live_charts(), 0);
}

#[test]
fn test_unknown_previous_handle_fails_render() {
    let mut engine = TerminalEngine::new(40).without_color();
    let window = DisplayWindow::new(d("2024-06-01"), d("2024-12-31")).unwrap();
    let res = render_gantt(
        &mut engine,
        &Projector::default(),
        &sample(),
        window,
        d("2024-06-10"),
        Some(ChartHandle::new(99)),
    );
    assert!(matches!(res, Err(AppError::UnknownChart(99))));
}

#[test]
fn test_terminal_engine_draws_lanes() {
    let mut engine = TerminalEngine::new(30).without_color();
    let window = DisplayWindow::new(d("2024-06-01"), d("2024-08-31")).unwrap();
    let handle = render_gantt(
        &mut engine,
        &Projector::default(),
        &sample(),
        window,
        d("2024-06-10"),
        None,
    )
    .unwrap();

    let out = engine.output(handle).unwrap();
    assert!(out.starts_with("Period 01/06/2024 → 31/08/2024"));
    let alice_row = out.lines().find(|l| l.starts_with("alice")).unwrap();
    assert!(alice_row.contains('█'));
    assert!(out.lines().any(|l| l.starts_with("bob")));
    assert!(out.contains("12/06/2024 - 20/06/2024"));
    assert!(out.contains("Seaside"));
}

#[test]
fn test_terminal_engine_empty_chart() {
    let mut engine = TerminalEngine::new(30).without_color();
    let window = DisplayWindow::new(d("2025-01-01"), d("2025-01-31")).unwrap();
    let handle = render_gantt(
        &mut engine,
        &Projector::default(),
        &sample(),
        window,
        d("2024-06-10"),
        None,
    )
    .unwrap();
    assert!(engine.output(handle).unwrap().contains("No vacations in this period."));
}

#[test]
fn test_rgba_parse_and_nearest_ansi() {
    assert_eq!(
        Rgba::parse("rgba(52, 152, 219, 0.9)").unwrap(),
        Rgba::new(52, 152, 219, 0.9)
    );
    assert_eq!(Rgba::parse("rgb(1,2,3)").unwrap(), Rgba::new(1, 2, 3, 1.0));
    assert!(Rgba::parse("rgba(300, 0, 0, 1)").is_err());
    assert!(Rgba::parse("#ff0000").is_err());

    assert_eq!(nearest_ansi(Rgba::new(231, 76, 60, 0.9)), RED);
    assert_eq!(nearest_ansi(Rgba::new(46, 204, 113, 0.9)), GREEN);
    assert_eq!(nearest_ansi(Rgba::new(52, 152, 219, 0.9)), BLUE);
}
