use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Vacation status as stored by the board backend.
///
/// The four known statuses are closed; anything else the backend sends is
/// kept verbatim in `Other` so it can still be shown with the fallback color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VacationStatus {
    Todo,
    InProgress,
    Waiting,
    Done,
    Other(String),
}

impl VacationStatus {
    /// Board columns, in display order.
    pub const COLUMNS: [VacationStatus; 4] = [
        VacationStatus::Todo,
        VacationStatus::InProgress,
        VacationStatus::Waiting,
        VacationStatus::Done,
    ];

    pub fn from_wire(s: &str) -> Self {
        match s {
            "todo" => Self::Todo,
            "in_progress" => Self::InProgress,
            "waiting" => Self::Waiting,
            "done" => Self::Done,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_wire(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Waiting => "waiting",
            Self::Done => "done",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Serialize for VacationStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for VacationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}

/// One row of the `/get_vacations_data` payload.
///
/// Dates stay as the strings the backend sent; a record whose dates cannot be
/// parsed is simply never shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationRecord {
    pub id: i64,
    pub username: String,
    pub status: VacationStatus,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub comment: Option<String>,
}

impl VacationRecord {
    /// Parsed `(start, end)`, or `None` when either date is malformed.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = date::parse_iso(&self.start_date)?;
        let end = date::parse_iso(&self.end_date)?;
        Some((start, end))
    }

    /// Comment text, treating an empty string like a missing one.
    /// Whitespace-only comments are kept as written.
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref().filter(|c| !c.is_empty())
    }
}
