// src/export/logic.rs

use crate::core::timeline::{DisplayWindow, Projector};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::BarExport;
use crate::models::VacationRecord;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the timeline bars of `window` to `file`.
    ///
    /// Nothing is written when no vacation overlaps the window.
    pub fn export(
        projector: &Projector,
        records: &[VacationRecord],
        window: &DisplayWindow,
        today: NaiveDate,
        format: ExportFormat,
        file: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(file, force)?;

        let rows: Vec<BarExport> = projector
            .project(records, window, today)
            .iter()
            .map(BarExport::from)
            .collect();

        if rows.is_empty() {
            warning("No vacations found for selected range.");
            return Ok(0);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, file)?,
            ExportFormat::Json => export_json(&rows, file)?,
        }

        Ok(rows.len())
    }
}
