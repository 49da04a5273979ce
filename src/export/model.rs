// src/export/model.rs

use crate::core::timeline::RenderedBar;
use crate::utils::date;
use serde::Serialize;

/// Flat row of the bar export: one line per vacation shown on the timeline.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BarExport {
    pub id: i64,
    pub lane: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub days: i64,
    pub fill_color: String,
    pub border_color: String,
    pub comment: String,
}

impl From<&RenderedBar> for BarExport {
    fn from(bar: &RenderedBar) -> Self {
        Self {
            id: bar.id,
            lane: bar.lane.clone(),
            status: bar.status.to_string(),
            start_date: date::to_iso(bar.start),
            end_date: date::to_iso(bar.end),
            days: date::days_between(bar.start, bar.end) + 1,
            fill_color: bar.fill.to_string(),
            border_color: bar.border.to_string(),
            comment: bar.comment.clone().unwrap_or_default(),
        }
    }
}
