//! Where the vacation list comes from.

use crate::errors::AppResult;
use crate::models::VacationRecord;
use crate::ui::messages::error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

pub trait VacationSource {
    fn fetch(&self) -> AppResult<Vec<VacationRecord>>;
}

/// JSON array of vacation records, as served by `/get_vacations_data`,
/// read from a file or from stdin when the path is `-`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

impl VacationSource for JsonFileSource {
    fn fetch(&self) -> AppResult<Vec<VacationRecord>> {
        let raw = if self.is_stdin() {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(&self.path)?
        };

        Ok(parse_records(&raw)?)
    }
}

pub fn parse_records(raw: &str) -> serde_json::Result<Vec<VacationRecord>> {
    serde_json::from_str(raw)
}

/// Fetch once; a failure is only reported and yields an empty list.
pub fn load_or_empty<S: VacationSource + ?Sized>(source: &S) -> Vec<VacationRecord> {
    match source.fetch() {
        Ok(records) => records,
        Err(e) => {
            error(format!("Error loading vacation data: {}", e));
            Vec::new()
        }
    }
}
