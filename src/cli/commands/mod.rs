pub mod board;
pub mod config;
pub mod export;
pub mod gantt;
pub mod init;
pub mod sidebar;
pub mod view;

use crate::core::source::{JsonFileSource, load_or_empty};
use crate::core::timeline::DisplayWindow;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::VacationRecord;
use crate::utils::{date, range};
use chrono::NaiveDate;

/// `--today` override, or the local date.
pub(crate) fn resolve_today(today: &Option<String>) -> AppResult<NaiveDate> {
    Ok(date::parse_optional_date(today.as_ref())?.unwrap_or_else(date::today))
}

/// Window from `--range`, or from `--from`/`--to` with the default window
/// filling whichever side is missing.
pub(crate) fn resolve_window(
    from: &Option<String>,
    to: &Option<String>,
    range_expr: &Option<String>,
    today: NaiveDate,
) -> AppResult<DisplayWindow> {
    if let Some(r) = range_expr {
        let (start, end) = range::parse_range(r)?;
        return DisplayWindow::new(start, end);
    }

    let from = date::parse_optional_date(from.as_ref())?;
    let to = date::parse_optional_date(to.as_ref())?;
    DisplayWindow::resolve(from, to, today)
}

/// Single fetch of the vacation list configured for this run.
pub(crate) fn load_records(cfg: &Config) -> Vec<VacationRecord> {
    load_or_empty(&JsonFileSource::new(cfg.data_path()))
}
