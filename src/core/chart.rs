//! Seam between the projection and whatever draws the chart.
//!
//! Engines hand out a `ChartHandle` for every chart they draw and the caller
//! passes it back to dispose of that chart before drawing the next one.

use crate::core::timeline::{self, DisplayWindow, Lane, Projector, RenderedBar};
use crate::errors::AppResult;
use crate::models::VacationRecord;
use chrono::NaiveDate;

pub const X_AXIS_TITLE: &str = "Period";
pub const Y_AXIS_TITLE: &str = "Users";

/// Opaque id of a chart drawn by an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Everything an engine needs to draw one Gantt chart.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub window: DisplayWindow,
    pub bars: Vec<RenderedBar>,
    pub lanes: Vec<Lane>,
    pub x_title: &'static str,
    pub y_title: &'static str,
}

impl ChartSpec {
    pub fn new(window: DisplayWindow, bars: Vec<RenderedBar>) -> Self {
        let lanes = timeline::lanes(&bars);
        Self {
            window,
            bars,
            lanes,
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

pub trait ChartEngine {
    fn draw(&mut self, spec: &ChartSpec) -> AppResult<ChartHandle>;

    /// Errors with `UnknownChart` for a handle this engine did not issue or
    /// already destroyed.
    fn destroy(&mut self, handle: ChartHandle) -> AppResult<()>;
}

/// Project `records`, dispose of `previous` and draw the new chart.
pub fn render_gantt<E: ChartEngine + ?Sized>(
    engine: &mut E,
    projector: &Projector,
    records: &[VacationRecord],
    window: DisplayWindow,
    today: NaiveDate,
    previous: Option<ChartHandle>,
) -> AppResult<ChartHandle> {
    if let Some(old) = previous {
        engine.destroy(old)?;
    }

    let bars = projector.project(records, &window, today);
    let spec = ChartSpec::new(window, bars);
    engine.draw(&spec)
}
