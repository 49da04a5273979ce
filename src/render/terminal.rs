//! ANSI Gantt chart for the terminal, one row per lane at day resolution.

use crate::core::chart::{ChartEngine, ChartHandle, ChartSpec};
use crate::core::timeline::{DisplayWindow, Tooltip};
use crate::errors::{AppError, AppResult};
use crate::models::Rgba;
use crate::utils::colors::{GREY, RESET, paint};
use crate::utils::date;
use crate::utils::formatting::{bold, pad_right, truncate, wrap};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

const BAR: &str = "█";
const EMPTY: &str = "·";
const MAX_LANE_WIDTH: usize = 20;

pub struct TerminalEngine {
    width: usize,
    color: bool,
    next_id: u64,
    charts: BTreeMap<u64, String>,
}

impl TerminalEngine {
    /// `width` is the number of columns used for the time axis.
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(10),
            color: true,
            next_id: 0,
            charts: BTreeMap::new(),
        }
    }

    /// Plain output, e.g. when writing to a file or in tests.
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn output(&self, handle: ChartHandle) -> Option<&str> {
        self.charts.get(&handle.id()).map(String::as_str)
    }

    fn cell(&self, c: Rgba) -> String {
        if self.color {
            paint(BAR, c)
        } else {
            BAR.to_string()
        }
    }

    fn empty(&self) -> String {
        if self.color {
            format!("{GREY}{EMPTY}{RESET}")
        } else {
            EMPTY.to_string()
        }
    }

    fn render(&self, spec: &ChartSpec) -> String {
        let mut out = String::new();
        let days = column_days(&spec.window, self.width);

        let lane_width = spec
            .lanes
            .iter()
            .map(|l| UnicodeWidthStr::width(l.name.as_str()))
            .max()
            .unwrap_or(0)
            .clamp(spec.y_title.len(), MAX_LANE_WIDTH);

        let heading = format!(
            "{} {} → {}",
            spec.x_title,
            date::to_en_gb(spec.window.start()),
            date::to_en_gb(spec.window.end())
        );
        out.push_str(&if self.color { bold(&heading) } else { heading });
        out.push('\n');

        if spec.is_empty() {
            out.push_str("No vacations in this period.\n");
            return out;
        }

        out.push_str(&pad_right(spec.y_title, lane_width));
        out.push_str(" |\n");

        for lane in &spec.lanes {
            let mut cells: Vec<Option<Rgba>> = vec![None; days.len()];
            for &i in &lane.bars {
                let bar = &spec.bars[i];
                for (c, day) in days.iter().enumerate() {
                    if *day >= bar.start && *day <= bar.end {
                        cells[c] = Some(bar.fill);
                    }
                }
            }

            out.push_str(&pad_right(&truncate(&lane.name, lane_width), lane_width));
            out.push_str(" |");
            for c in cells {
                match c {
                    Some(color) => out.push_str(&self.cell(color)),
                    None => out.push_str(&self.empty()),
                }
            }
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&self.legend(spec));
        out
    }

    fn legend(&self, spec: &ChartSpec) -> String {
        let mut table = Table::new(vec![
            Column::new("ID", 6),
            Column::new("USER", MAX_LANE_WIDTH),
            Column::new("STATUS", 12),
            Column::new("PERIOD", 23),
            Column::new("DAYS", 5),
        ]);

        let mut comments = String::new();
        for bar in &spec.bars {
            table.add_row(vec![
                bar.id.to_string(),
                bar.lane.clone(),
                bar.status.to_string(),
                bar.tooltip.lines.first().cloned().unwrap_or_default(),
                Tooltip::days(bar.start, bar.end).to_string(),
            ]);

            if let Some(comment) = &bar.comment {
                comments.push_str(&format!("#{} {}\n", bar.id, bar.tooltip.title));
                for line in wrap(comment, 72) {
                    comments.push_str(&format!("    {}\n", line));
                }
            }
        }

        let mut out = table.render();
        if !comments.is_empty() {
            out.push('\n');
            out.push_str(&comments);
        }
        out
    }
}

/// Representative day of each chart column. Windows shorter than `width`
/// get one column per day.
fn column_days(window: &DisplayWindow, width: usize) -> Vec<NaiveDate> {
    let len = window.len_days().max(1) as u64;
    let cols = (width as u64).min(len);
    (0..cols)
        .map(|c| date::add_days(window.start(), c * len / cols))
        .collect()
}

impl ChartEngine for TerminalEngine {
    fn draw(&mut self, spec: &ChartSpec) -> AppResult<ChartHandle> {
        self.next_id += 1;
        let rendered = self.render(spec);
        self.charts.insert(self.next_id, rendered);
        Ok(ChartHandle::new(self.next_id))
    }

    fn destroy(&mut self, handle: ChartHandle) -> AppResult<()> {
        self.charts
            .remove(&handle.id())
            .map(|_| ())
            .ok_or(AppError::UnknownChart(handle.id()))
    }
}
