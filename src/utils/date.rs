use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// December 31 of the year `d` falls in.
pub fn end_of_year(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), 12, 31).unwrap_or(d)
}

/// `YYYY-MM-DD`, the form the backend and the chart engine exchange.
pub fn parse_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Dates typed by a person: `dd/mm/yyyy` first, then `yyyy-mm-dd`.
pub fn parse_custom_date(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    for fmt in ["%d/%m/%Y", "%Y-%m-%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    Err(AppError::InvalidDate(s.to_string()))
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    input.map(|s| parse_custom_date(s)).transpose()
}

pub fn to_iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// `dd/mm/yyyy`, as en-GB locales print dates.
pub fn to_en_gb(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}

/// `dd.mm.yyyy`, used on board cards.
pub fn to_dotted(d: NaiveDate) -> String {
    d.format("%d.%m.%Y").to_string()
}

/// Signed whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn add_days(d: NaiveDate, n: u64) -> NaiveDate {
    d.checked_add_days(Days::new(n)).unwrap_or(NaiveDate::MAX)
}
