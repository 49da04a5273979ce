//! Chart-library dataset descriptors (horizontal time-scale bar chart).

use crate::core::chart::{ChartEngine, ChartHandle, ChartSpec};
use crate::core::timeline::RenderedBar;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    /// `[start, end]` as `YYYY-MM-DD`.
    pub x: [String; 2],
    pub y: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<BarPoint>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub border_skipped: bool,
    pub border_radius: u32,
    pub bar_percentage: f32,
    pub category_percentage: f32,
}

impl From<&RenderedBar> for Dataset {
    fn from(bar: &RenderedBar) -> Self {
        Self {
            label: bar.label.clone(),
            data: vec![BarPoint {
                x: [date::to_iso(bar.start), date::to_iso(bar.end)],
                y: bar.lane.clone(),
            }],
            background_color: bar.fill.to_string(),
            border_color: bar.border.to_string(),
            border_width: 2,
            border_skipped: false,
            border_radius: 5,
            bar_percentage: 0.7,
            category_percentage: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeAxis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub unit: &'static str,
    pub min: String,
    pub max: String,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAxis {
    pub labels: Vec<String>,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: TimeAxis,
    pub y: CategoryAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltips {
    pub title: String,
    pub lines: Vec<String>,
}

/// One chart as handed to the chart library, plus the tooltip text per
/// dataset (the library looks it up by dataset index).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub index_axis: &'static str,
    pub datasets: Vec<Dataset>,
    pub scales: Scales,
    pub tooltips: Vec<Tooltips>,
}

impl ChartConfig {
    pub fn from_spec(spec: &ChartSpec) -> Self {
        let title = |text: &str| AxisTitle {
            display: true,
            text: text.to_string(),
        };

        Self {
            kind: "bar",
            index_axis: "y",
            datasets: spec.bars.iter().map(Dataset::from).collect(),
            scales: Scales {
                x: TimeAxis {
                    kind: "time",
                    unit: "day",
                    min: date::to_iso(spec.window.start()),
                    max: date::to_iso(spec.window.end()),
                    title: title(spec.x_title),
                },
                y: CategoryAxis {
                    labels: spec.lanes.iter().map(|l| l.name.clone()).collect(),
                    title: title(spec.y_title),
                },
            },
            tooltips: spec
                .bars
                .iter()
                .map(|b| Tooltips {
                    title: b.tooltip.title.clone(),
                    lines: b.tooltip.lines.clone(),
                })
                .collect(),
        }
    }
}

/// Keeps every live chart as a `ChartConfig` until it is destroyed.
#[derive(Debug, Default)]
pub struct DatasetEngine {
    next_id: u64,
    charts: BTreeMap<u64, ChartConfig>,
}

impl DatasetEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chart(&self, handle: ChartHandle) -> Option<&ChartConfig> {
        self.charts.get(&handle.id())
    }

    pub fn live_charts(&self) -> usize {
        self.charts.len()
    }

    pub fn to_json(&self, handle: ChartHandle) -> AppResult<String> {
        let chart = self
            .chart(handle)
            .ok_or(AppError::UnknownChart(handle.id()))?;
        Ok(serde_json::to_string_pretty(chart)?)
    }
}

impl ChartEngine for DatasetEngine {
    fn draw(&mut self, spec: &ChartSpec) -> AppResult<ChartHandle> {
        self.next_id += 1;
        self.charts.insert(self.next_id, ChartConfig::from_spec(spec));
        Ok(ChartHandle::new(self.next_id))
    }

    fn destroy(&mut self, handle: ChartHandle) -> AppResult<()> {
        self.charts
            .remove(&handle.id())
            .map(|_| ())
            .ok_or(AppError::UnknownChart(handle.id()))
    }
}
