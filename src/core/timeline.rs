//! Vacation timeline projection.
//!
//! Turns the flat vacation list into one bar per vacation that overlaps the
//! requested window, grouped by person, with a fill color derived from the
//! status and a ready-to-show tooltip. Nothing here keeps state: the same
//! inputs always give the same bars.

use crate::config::{Config, Palette};
use crate::errors::{AppError, AppResult};
use crate::models::{Rgba, VacationRecord, VacationStatus};
use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

/// Visible date range of the chart, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DisplayWindow {
    /// Inverted windows are rejected instead of silently matching nothing.
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidWindow {
                start: date::to_iso(start),
                end: date::to_iso(end),
            });
        }
        Ok(Self { start, end })
    }

    /// Today through December 31 of the current year.
    pub fn default_for(today: NaiveDate) -> Self {
        Self {
            start: today,
            end: date::end_of_year(today),
        }
    }

    /// Window from optional user-supplied bounds, defaulting each side.
    pub fn resolve(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let default = Self::default_for(today);
        Self::new(from.unwrap_or(default.start), to.unwrap_or(default.end))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end && end >= self.start
    }

    pub fn len_days(&self) -> i64 {
        date::days_between(self.start, self.end) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tooltip {
    pub title: String,
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn days(start: NaiveDate, end: NaiveDate) -> i64 {
        date::days_between(start, end) + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedBar {
    pub id: i64,
    pub lane: String,
    pub label: String,
    pub status: VacationStatus,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub fill: Rgba,
    pub border: Rgba,
    pub comment: Option<String>,
    pub tooltip: Tooltip,
}

/// One row of the chart and the indices of its bars in the projection output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    pub name: String,
    pub bars: Vec<usize>,
}

/// Coloring rules for the projection.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    pub palette: Palette,
    pub urgent_days: u32,
    pub border_darken: u8,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            urgent_days: 7,
            border_darken: 30,
        }
    }
}

impl From<&Config> for Projector {
    fn from(cfg: &Config) -> Self {
        Self {
            palette: cfg.palette,
            urgent_days: cfg.urgent_days,
            border_darken: cfg.border_darken,
        }
    }
}

impl Projector {
    /// A `todo` vacation is urgent when it starts between today and
    /// `urgent_days` from now, both ends included.
    pub fn is_urgent(&self, start: NaiveDate, today: NaiveDate) -> bool {
        let until = date::days_between(today, start);
        (0..=self.urgent_days as i64).contains(&until)
    }

    pub fn fill_color(&self, status: &VacationStatus, start: NaiveDate, today: NaiveDate) -> Rgba {
        let urgent = matches!(status, VacationStatus::Todo) && self.is_urgent(start, today);
        self.palette.fill(status, urgent)
    }

    pub fn border_color(&self, fill: Rgba) -> Rgba {
        fill.darker(self.border_darken)
    }

    pub fn project(
        &self,
        records: &[VacationRecord],
        window: &DisplayWindow,
        today: NaiveDate,
    ) -> Vec<RenderedBar> {
        let retained: Vec<(&VacationRecord, NaiveDate, NaiveDate)> = records
            .iter()
            .filter_map(|r| r.span().map(|(s, e)| (r, s, e)))
            .filter(|(_, s, e)| window.overlaps(*s, *e))
            .collect();

        group_by_lane(&retained, |(r, _, _)| r.username.as_str())
            .into_iter()
            .flatten()
            .map(|(r, start, end)| {
                let fill = self.fill_color(&r.status, start, today);
                RenderedBar {
                    id: r.id,
                    lane: r.username.clone(),
                    label: format!("{} - {}", r.username, r.status),
                    status: r.status.clone(),
                    start,
                    end,
                    fill,
                    border: self.border_color(fill),
                    comment: r.comment_text().map(str::to_string),
                    tooltip: tooltip_for(r, start, end),
                }
            })
            .collect()
    }
}

/// Project with the default palette and urgency horizon.
pub fn project(
    records: &[VacationRecord],
    window: &DisplayWindow,
    today: NaiveDate,
) -> Vec<RenderedBar> {
    Projector::default().project(records, window, today)
}

pub fn tooltip_for(record: &VacationRecord, start: NaiveDate, end: NaiveDate) -> Tooltip {
    Tooltip {
        title: format!("{} ({})", record.username, record.status),
        lines: vec![
            format!("{} - {}", date::to_en_gb(start), date::to_en_gb(end)),
            format!("Days: {}", Tooltip::days(start, end)),
            format!("Comment: {}", record.comment_text().unwrap_or("none")),
        ],
    }
}

/// Bucket items by key, buckets in first-seen key order, items in input order.
fn group_by_lane<T: Copy, F>(items: &[T], key: F) -> Vec<Vec<T>>
where
    F: Fn(&T) -> &str,
{
    let mut keys: Vec<&str> = Vec::new();
    let mut groups: Vec<Vec<T>> = Vec::new();

    for item in items {
        let k = key(item);
        match keys.iter().position(|existing| *existing == k) {
            Some(i) => groups[i].push(*item),
            None => {
                keys.push(k);
                groups.push(vec![*item]);
            }
        }
    }

    groups
}

/// Lanes of a projection, in the order they appear.
pub fn lanes(bars: &[RenderedBar]) -> Vec<Lane> {
    let mut out: Vec<Lane> = Vec::new();
    for (i, bar) in bars.iter().enumerate() {
        match out.iter_mut().find(|l| l.name == bar.lane) {
            Some(lane) => lane.bars.push(i),
            None => out.push(Lane {
                name: bar.lane.clone(),
                bars: vec![i],
            }),
        }
    }
    out
}
